//! Host-independent ledger operations.
//!
//! Each operation validates its inputs and precomputes every new value
//! before touching the [`ValueTransfer`] collaborator, and only writes state
//! once the collaborator has succeeded. A failed call leaves the ledger and
//! the redemption record exactly as they were.

use anchor_lang::prelude::*;
use crate::error::MeatCoinError;
use crate::state::{LedgerState, RedemptionRecord};

/// Moves units of the issued asset between token accounts.
pub trait ValueTransfer {
    /// Current balance of a token account, `InvalidAccount` if it is unknown.
    fn balance(&self, account: &Pubkey) -> Result<u64>;

    /// Creates `amount` new units in `recipient`.
    fn issue(&mut self, amount: u64, recipient: &Pubkey) -> Result<()>;

    /// Moves `amount` units from `source` to `destination`.
    /// Fails with `InsufficientFunds` or `InvalidAccount` without moving anything.
    fn transfer(&mut self, amount: u64, source: &Pubkey, destination: &Pubkey) -> Result<()>;
}

/// Arguments of a redemption.
#[derive(Clone, Copy, Debug)]
pub struct RedeemRequest {
    /// Holder redeeming, and signer of the transfer
    pub user: Pubkey,
    /// Token account debited
    pub source: Pubkey,
    /// Owner recorded on the source token account
    pub source_owner: Pubkey,
    /// Token account credited, must be the ledger treasury
    pub treasury: Pubkey,
    pub amount: u64,
}

pub fn initialize(
    state: &mut LedgerState,
    admin: Pubkey,
    mint: Pubkey,
    treasury: Pubkey,
    bump: u8,
) -> Result<()> {
    require!(!state.is_initialized(), MeatCoinError::AlreadyInitialized);
    require_keys_neq!(mint, Pubkey::default(), MeatCoinError::InvalidAccount);
    require_keys_neq!(treasury, Pubkey::default(), MeatCoinError::InvalidAccount);

    *state = LedgerState {
        admin,
        minted: 0,
        redeemed: 0,
        mint,
        treasury,
        bump,
    };
    Ok(())
}

pub fn mint<T: ValueTransfer>(
    state: &mut LedgerState,
    authority: &Pubkey,
    mint: &Pubkey,
    recipient: &Pubkey,
    amount: u64,
    transfer: &mut T,
) -> Result<()> {
    state.authorize(authority)?;
    require_keys_eq!(*mint, state.mint, MeatCoinError::InvalidAccount);
    require!(amount > 0, MeatCoinError::InvalidAmount);
    let minted = state.checked_minted(amount)?;

    transfer.issue(amount, recipient)?;

    state.minted = minted;
    Ok(())
}

pub fn redeem<T: ValueTransfer>(
    state: &mut LedgerState,
    record: &mut RedemptionRecord,
    request: &RedeemRequest,
    now: i64,
    transfer: &mut T,
) -> Result<()> {
    require!(request.amount > 0, MeatCoinError::InvalidAmount);
    require_keys_eq!(request.treasury, state.treasury, MeatCoinError::InvalidAccount);
    require_keys_eq!(
        request.source_owner,
        request.user,
        MeatCoinError::InvalidTokenAccount
    );

    // A holder overdrawing their own account is reported before the supply bound
    require!(
        transfer.balance(&request.source)? >= request.amount,
        MeatCoinError::InsufficientFunds
    );
    let redeemed = state.checked_redeemed(request.amount)?;
    let updated = record.accumulated(&request.user, request.amount, now)?;

    transfer.transfer(request.amount, &request.source, &state.treasury)?;

    state.redeemed = redeemed;
    *record = updated;
    Ok(())
}

pub fn change_admin(state: &mut LedgerState, authority: &Pubkey, new_admin: Pubkey) -> Result<()> {
    state.authorize(authority)?;
    state.admin = new_admin;
    Ok(())
}
