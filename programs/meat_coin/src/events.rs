use anchor_lang::prelude::*;

// ================================
// Ledger Events
// ================================

/// Emitted once, when the ledger state is created
#[event]
pub struct LedgerInitialized {
    pub state: Pubkey,
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub treasury: Pubkey,
}

#[event]
pub struct TokensMinted {
    pub admin: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub total_minted: u64,
}

/// Emitted on every redemption; `user_total` and `redemption_count`
/// mirror the holder's redemption record after the update
#[event]
pub struct TokensRedeemed {
    pub user: Pubkey,
    pub from: Pubkey,
    pub treasury: Pubkey,
    pub amount: u64,
    pub user_total: u64,
    pub redemption_count: u64,
    pub total_redeemed: u64,
    pub timestamp: i64,
}

#[event]
pub struct AdminChanged {
    pub old_admin: Pubkey,
    pub new_admin: Pubkey,
}
