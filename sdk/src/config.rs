//! SDK configuration

use serde::Deserialize;
use solana_sdk::{commitment_config::CommitmentConfig, pubkey::Pubkey};
use std::{fs, path::Path, str::FromStr};

use crate::error::{SdkError, SdkResult};

pub const ENV_RPC_URL: &str = "MEAT_COIN_RPC_URL";
pub const ENV_COMMITMENT: &str = "MEAT_COIN_COMMITMENT";
pub const ENV_PROGRAM_ID: &str = "MEAT_COIN_PROGRAM_ID";
pub const ENV_KEYPAIR: &str = "MEAT_COIN_KEYPAIR";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SdkConfig {
    /// Solana RPC URL
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,

    /// One of `processed`, `confirmed`, `finalized`
    #[serde(default = "default_commitment")]
    pub commitment: String,

    /// Deployed MeatCoin program
    #[serde(default = "default_program_id")]
    pub program_id: String,

    /// Keypair paying for and signing transactions
    #[serde(default = "default_keypair_path")]
    pub keypair_path: String,
}

fn default_rpc_url() -> String {
    "http://localhost:8899".to_string()
}

fn default_commitment() -> String {
    "confirmed".to_string()
}

fn default_program_id() -> String {
    meat_coin::ID.to_string()
}

fn default_keypair_path() -> String {
    "~/.config/solana/id.json".to_string()
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            commitment: default_commitment(),
            program_id: default_program_id(),
            keypair_path: default_keypair_path(),
        }
    }
}

impl SdkConfig {
    /// Load configuration from a TOML file, or from the environment when no path is given
    pub fn load(config_path: Option<&Path>) -> SdkResult<Self> {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!("No .env file loaded: {}", e);
        }

        let config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => Self::from_env(),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> SdkResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| SdkError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> SdkResult<Self> {
        toml::from_str(content).map_err(|e| SdkError::Config(format!("Invalid config: {}", e)))
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from a variable lookup; unset variables keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            rpc_url: lookup(ENV_RPC_URL).unwrap_or(defaults.rpc_url),
            commitment: lookup(ENV_COMMITMENT).unwrap_or(defaults.commitment),
            program_id: lookup(ENV_PROGRAM_ID).unwrap_or(defaults.program_id),
            keypair_path: lookup(ENV_KEYPAIR).unwrap_or(defaults.keypair_path),
        }
    }

    pub fn validate(&self) -> SdkResult<()> {
        if !self.rpc_url.starts_with("http://") && !self.rpc_url.starts_with("https://") {
            return Err(SdkError::Config(format!("RPC URL must be http(s): {}", self.rpc_url)));
        }
        self.commitment_config()?;
        self.program_id()?;
        if self.keypair_path.trim().is_empty() {
            return Err(SdkError::Config("Keypair path is empty".to_string()));
        }
        Ok(())
    }

    pub fn program_id(&self) -> SdkResult<Pubkey> {
        Pubkey::from_str(&self.program_id)
            .map_err(|e| SdkError::Config(format!("Invalid program id {}: {}", self.program_id, e)))
    }

    pub fn commitment_config(&self) -> SdkResult<CommitmentConfig> {
        match self.commitment.as_str() {
            "processed" => Ok(CommitmentConfig::processed()),
            "confirmed" => Ok(CommitmentConfig::confirmed()),
            "finalized" => Ok(CommitmentConfig::finalized()),
            other => Err(SdkError::Config(format!("Unknown commitment level: {}", other))),
        }
    }

    /// Keypair path with `~` expanded
    pub fn expanded_keypair_path(&self) -> String {
        shellexpand::tilde(&self.keypair_path).into_owned()
    }
}
