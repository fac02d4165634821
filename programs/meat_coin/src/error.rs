use anchor_lang::prelude::*;

#[error_code]
pub enum MeatCoinError {
    #[msg("Unauthorized: only admin may perform this action")]
    Unauthorized,
    #[msg("Insufficient token balance for redemption")]
    InsufficientFunds,
    #[msg("Invalid treasury account")]
    InvalidAccount,
    #[msg("Invalid token account ownership")]
    InvalidTokenAccount,
    #[msg("Ledger state is already initialized")]
    AlreadyInitialized,
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    #[msg("Integer overflow")]
    Overflow,
    #[msg("Redemption would exceed total minted supply")]
    RedemptionExceedsSupply,
}
