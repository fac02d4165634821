use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, spl_token::instruction::AuthorityType, Mint, SetAuthority, Token, TokenAccount};
use crate::events::LedgerInitialized;
use crate::ledger;
use crate::state::{LedgerState, LEDGER_STATE_SEED};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = admin,
        space = LedgerState::SIZE,
        seeds = [LEDGER_STATE_SEED],
        bump
    )]
    pub state: Account<'info, LedgerState>,

    /// Mint the admin currently holds mint authority over
    #[account(mut)]
    pub mint: Account<'info, Mint>,

    /// Treasury token account, the state PDA's associated token account
    #[account(
        init,
        payer = admin,
        associated_token::mint = mint,
        associated_token::authority = state,
    )]
    pub treasury: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let state_key = ctx.accounts.state.key();
    let admin = ctx.accounts.admin.key();
    let mint = ctx.accounts.mint.key();
    let treasury = ctx.accounts.treasury.key();

    ledger::initialize(&mut ctx.accounts.state, admin, mint, treasury, ctx.bumps.state)?;

    // From here on only the state PDA can mint
    let cpi_accounts = SetAuthority {
        current_authority: ctx.accounts.admin.to_account_info(),
        account_or_mint: ctx.accounts.mint.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    token::set_authority(
        CpiContext::new(cpi_program, cpi_accounts),
        AuthorityType::MintTokens,
        Some(state_key),
    )?;

    msg!("Initialized MeatCoin ledger");
    msg!("Admin: {}, Treasury: {}", admin, treasury);

    emit!(LedgerInitialized {
        state: state_key,
        admin,
        mint,
        treasury,
    });

    Ok(())
}
