//! MeatCoin SDK - client-side interface to the MeatCoin ledger program
//!
//! This SDK provides thin wrappers for:
//! - Address derivation shared with the program
//! - Instruction building for initialize, mint, redeem and change-admin
//! - Decoding ledger and redemption-record accounts
//! - Configuration loading and an async RPC client

pub mod accounts;
pub mod client;
pub mod config;
pub mod error;
pub mod instructions;
pub mod logging;
pub mod pda;

// Re-export key types
pub use accounts::{LedgerSnapshot, LedgerState, RedemptionRecord};
pub use client::MeatCoinClient;
pub use config::SdkConfig;
pub use error::{SdkError, SdkResult};
pub use logging::init_tracing;
