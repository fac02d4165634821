use anchor_lang::prelude::*;
use crate::error::MeatCoinError;

/// Seed of the singleton ledger state PDA
pub const LEDGER_STATE_SEED: &[u8] = b"state";
/// Seed prefix of per-holder redemption record PDAs
pub const REDEMPTION_RECORD_SEED: &[u8] = b"redemption";

#[account]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LedgerState {
    /// The only identity allowed to mint or hand over the admin role
    pub admin: Pubkey,
    /// Total units ever minted
    pub minted: u64,
    /// Total units ever redeemed
    pub redeemed: u64,
    /// The issued SPL mint; no other mint can be issued through the ledger
    pub mint: Pubkey,
    /// Token account receiving redeemed units
    pub treasury: Pubkey,
    /// PDA bump, used when the state signs token CPIs
    pub bump: u8,
}

impl LedgerState {
    pub const SIZE: usize = 8 + // discriminator
        32 + // admin
        8 + // minted
        8 + // redeemed
        32 + // mint
        32 + // treasury
        1; // bump

    /// A live ledger always has a treasury; a freshly allocated one does not.
    pub fn is_initialized(&self) -> bool {
        self.treasury != Pubkey::default()
    }

    /// Authorization guard for privileged operations.
    pub fn authorize(&self, authority: &Pubkey) -> Result<()> {
        require_keys_eq!(*authority, self.admin, MeatCoinError::Unauthorized);
        Ok(())
    }

    /// Units minted and not yet redeemed.
    pub fn outstanding(&self) -> u64 {
        self.minted.saturating_sub(self.redeemed)
    }

    pub fn checked_minted(&self, amount: u64) -> Result<u64> {
        self.minted
            .checked_add(amount)
            .ok_or_else(|| error!(MeatCoinError::Overflow))
    }

    pub fn checked_redeemed(&self, amount: u64) -> Result<u64> {
        let redeemed = self
            .redeemed
            .checked_add(amount)
            .ok_or_else(|| error!(MeatCoinError::Overflow))?;
        require!(redeemed <= self.minted, MeatCoinError::RedemptionExceedsSupply);
        Ok(redeemed)
    }
}

/// Audit trail of one holder's redemptions.
#[account]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RedemptionRecord {
    pub user: Pubkey,
    /// Cumulative units redeemed by `user`
    pub amount: u64,
    /// Unix timestamp of the latest redemption
    pub last_redeemed_at: i64,
    pub redemption_count: u64,
}

impl RedemptionRecord {
    pub const SIZE: usize = 8 + // discriminator
        32 + // user
        8 + // amount
        8 + // last_redeemed_at
        8; // redemption_count

    /// `init_if_needed` hands out a zeroed record the first time around.
    pub fn is_new(&self) -> bool {
        self.user == Pubkey::default()
    }

    /// Returns the record as it will look after redeeming `amount` more units.
    /// The owner of a record never changes once set.
    pub fn accumulated(&self, user: &Pubkey, amount: u64, now: i64) -> Result<Self> {
        if !self.is_new() {
            require_keys_eq!(self.user, *user, MeatCoinError::InvalidAccount);
        }

        Ok(Self {
            user: *user,
            amount: self
                .amount
                .checked_add(amount)
                .ok_or_else(|| error!(MeatCoinError::Overflow))?,
            last_redeemed_at: now,
            redemption_count: self
                .redemption_count
                .checked_add(1)
                .ok_or_else(|| error!(MeatCoinError::Overflow))?,
        })
    }
}
