use anchor_lang::prelude::*;
use crate::events::AdminChanged;
use crate::ledger;
use crate::state::{LedgerState, LEDGER_STATE_SEED};

#[derive(Accounts)]
pub struct ChangeAdmin<'info> {
    #[account(
        mut,
        seeds = [LEDGER_STATE_SEED],
        bump = state.bump
    )]
    pub state: Account<'info, LedgerState>,

    pub current_admin: Signer<'info>,
}

pub fn handler(ctx: Context<ChangeAdmin>, new_admin: Pubkey) -> Result<()> {
    let old_admin = ctx.accounts.state.admin;

    ledger::change_admin(&mut ctx.accounts.state, &ctx.accounts.current_admin.key(), new_admin)?;

    msg!("Admin changed from {} to {}", old_admin, new_admin);
    emit!(AdminChanged { old_admin, new_admin });

    Ok(())
}
