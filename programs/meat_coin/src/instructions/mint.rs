use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::error::MeatCoinError;
use crate::events::TokensMinted;
use crate::ledger;
use crate::state::{LedgerState, LEDGER_STATE_SEED};
use crate::utils::SplTokenTransfer;

#[derive(Accounts)]
pub struct MintTokens<'info> {
    #[account(
        mut,
        seeds = [LEDGER_STATE_SEED],
        bump = state.bump
    )]
    pub state: Account<'info, LedgerState>,

    /// Must be the ledger's mint
    #[account(
        mut,
        address = state.mint @ MeatCoinError::InvalidAccount
    )]
    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = recipient.mint == mint.key() @ MeatCoinError::InvalidAccount
    )]
    pub recipient: Account<'info, TokenAccount>,

    /// Claimed admin, checked against the ledger in the handler
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<MintTokens>, amount: u64) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let mint = ctx.accounts.mint.key();
    let recipient = ctx.accounts.recipient.key();

    let mut tokens = SplTokenTransfer::new(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.state.to_account_info(),
    )
    .signed_by_ledger(ctx.accounts.state.bump)
    .with_mint(ctx.accounts.mint.to_account_info())
    .with_token_account(&ctx.accounts.recipient);

    ledger::mint(&mut ctx.accounts.state, &admin, &mint, &recipient, amount, &mut tokens)?;

    msg!("Admin {} minted {} tokens to {}", admin, amount, recipient);

    emit!(TokensMinted {
        admin,
        recipient,
        amount,
        total_minted: ctx.accounts.state.minted,
    });

    Ok(())
}
