use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::events::TokensRedeemed;
use crate::ledger::{self, RedeemRequest};
use crate::state::{LedgerState, RedemptionRecord, LEDGER_STATE_SEED, REDEMPTION_RECORD_SEED};
use crate::utils::SplTokenTransfer;

#[derive(Accounts)]
pub struct RedeemTokens<'info> {
    #[account(
        mut,
        seeds = [LEDGER_STATE_SEED],
        bump = state.bump
    )]
    pub state: Account<'info, LedgerState>,

    /// Holder's token account being debited
    #[account(mut)]
    pub from: Account<'info, TokenAccount>,

    #[account(mut)]
    pub treasury: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = user,
        space = RedemptionRecord::SIZE,
        seeds = [REDEMPTION_RECORD_SEED, user.key().as_ref()],
        bump
    )]
    pub redemption_record: Account<'info, RedemptionRecord>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<RedeemTokens>, amount: u64) -> Result<()> {
    let request = RedeemRequest {
        user: ctx.accounts.user.key(),
        source: ctx.accounts.from.key(),
        source_owner: ctx.accounts.from.owner,
        treasury: ctx.accounts.treasury.key(),
        amount,
    };
    let now = Clock::get()?.unix_timestamp;

    let mut tokens = SplTokenTransfer::new(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.user.to_account_info(),
    )
    .with_token_account(&ctx.accounts.from)
    .with_token_account(&ctx.accounts.treasury);

    ledger::redeem(
        &mut ctx.accounts.state,
        &mut ctx.accounts.redemption_record,
        &request,
        now,
        &mut tokens,
    )?;

    let record = &ctx.accounts.redemption_record;
    msg!(
        "User {} redeemed {} tokens (total: {}, count: {})",
        record.user,
        amount,
        record.amount,
        record.redemption_count
    );

    emit!(TokensRedeemed {
        user: record.user,
        from: request.source,
        treasury: request.treasury,
        amount,
        user_total: record.amount,
        redemption_count: record.redemption_count,
        total_redeemed: ctx.accounts.state.redeemed,
        timestamp: now,
    });

    Ok(())
}
