//! MeatCoin - admin-gated issuance and redemption ledger
//!
//! A singleton ledger state tracks total minted and redeemed units of one
//! SPL mint. Only the admin may mint or hand the admin role over; any holder
//! may redeem into the treasury, leaving a per-holder redemption record.

use anchor_lang::prelude::*;

declare_id!("92vGubKf8dDMF99AnQ4eLbaByujKBSyCAQ6WwDgt7P6k");

pub mod error;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod state;
pub mod utils;

pub use error::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

#[program]
pub mod meat_coin {
    use super::*;

    /// Create the ledger state and treasury, and hand mint authority to the state PDA
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Mint tokens to a recipient. Admin only
    pub fn mint(ctx: Context<MintTokens>, amount: u64) -> Result<()> {
        instructions::mint::handler(ctx, amount)
    }

    /// Redeem tokens from the caller's account into the treasury
    pub fn redeem(ctx: Context<RedeemTokens>, amount: u64) -> Result<()> {
        instructions::redeem::handler(ctx, amount)
    }

    /// Hand the admin role to `new_admin`. Admin only
    pub fn change_admin(ctx: Context<ChangeAdmin>, new_admin: Pubkey) -> Result<()> {
        instructions::change_admin::handler(ctx, new_admin)
    }
}
