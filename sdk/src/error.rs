//! Error types for the MeatCoin SDK

use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("RPC error: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Keypair error: {0}")]
    Keypair(String),

    #[error("Account not found: {0}")]
    AccountNotFound(Pubkey),

    #[error("Failed to decode account {address}: {reason}")]
    AccountDecode { address: Pubkey, reason: String },
}

pub type SdkResult<T> = std::result::Result<T, SdkError>;
