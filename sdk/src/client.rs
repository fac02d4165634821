//! RPC client for the MeatCoin program

use anchor_lang::solana_program::instruction::Instruction;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{read_keypair_file, Keypair, Signature, Signer},
    transaction::Transaction,
};
use tracing::{debug, info};

use crate::accounts::{self, LedgerSnapshot, LedgerState, RedemptionRecord};
use crate::config::SdkConfig;
use crate::error::{SdkError, SdkResult};
use crate::{instructions, pda};

/// Main client for interacting with a deployed MeatCoin ledger.
///
/// The payer keypair pays fees and acts as the admin for privileged calls.
pub struct MeatCoinClient {
    rpc: RpcClient,
    program_id: Pubkey,
    payer: Keypair,
}

impl MeatCoinClient {
    pub fn new(rpc: RpcClient, program_id: Pubkey, payer: Keypair) -> Self {
        Self {
            rpc,
            program_id,
            payer,
        }
    }

    pub fn from_config(config: &SdkConfig) -> SdkResult<Self> {
        config.validate()?;
        let keypair_path = config.expanded_keypair_path();
        let payer = read_keypair_file(&keypair_path)
            .map_err(|e| SdkError::Keypair(format!("{}: {}", keypair_path, e)))?;
        let rpc = RpcClient::new_with_commitment(config.rpc_url.clone(), config.commitment_config()?);

        info!(
            rpc_url = %config.rpc_url,
            program_id = %config.program_id,
            payer = %payer.pubkey(),
            "MeatCoin client ready"
        );
        Ok(Self::new(rpc, config.program_id()?, payer))
    }

    pub fn program_id(&self) -> Pubkey {
        self.program_id
    }

    pub fn payer(&self) -> Pubkey {
        self.payer.pubkey()
    }

    pub fn ledger_state_address(&self) -> Pubkey {
        pda::ledger_state_address(&self.program_id).0
    }

    pub async fn ledger_state(&self) -> SdkResult<LedgerState> {
        let address = self.ledger_state_address();
        let data = self
            .account_data(&address)
            .await?
            .ok_or(SdkError::AccountNotFound(address))?;
        accounts::decode_ledger_state(&address, &data)
    }

    pub async fn snapshot(&self) -> SdkResult<LedgerSnapshot> {
        let state = self.ledger_state().await?;
        Ok(LedgerSnapshot::new(&self.ledger_state_address(), &state))
    }

    /// `None` until `user` has redeemed at least once
    pub async fn redemption_record(&self, user: &Pubkey) -> SdkResult<Option<RedemptionRecord>> {
        let (address, _) = pda::redemption_record_address(&self.program_id, user);
        match self.account_data(&address).await? {
            Some(data) => accounts::decode_redemption_record(&address, &data).map(Some),
            None => Ok(None),
        }
    }

    /// Create the ledger with the payer as admin; the payer must hold mint authority over `mint`
    pub async fn initialize(&self, mint: &Pubkey) -> SdkResult<Signature> {
        let ix = instructions::initialize(&self.program_id, &self.payer.pubkey(), mint);
        let signature = self.send(&[ix], &[]).await?;
        info!(%mint, %signature, "Ledger initialized");
        Ok(signature)
    }

    pub async fn mint(&self, mint: &Pubkey, recipient: &Pubkey, amount: u64) -> SdkResult<Signature> {
        let ix = instructions::mint(&self.program_id, &self.payer.pubkey(), mint, recipient, amount);
        let signature = self.send(&[ix], &[]).await?;
        info!(%recipient, amount, %signature, "Minted");
        Ok(signature)
    }

    /// Redeem from `from`, a token account owned by `user`
    pub async fn redeem(
        &self,
        user: &Keypair,
        mint: &Pubkey,
        from: &Pubkey,
        amount: u64,
    ) -> SdkResult<Signature> {
        let ix = instructions::redeem(&self.program_id, &user.pubkey(), mint, from, amount);
        let signature = self.send(&[ix], &[user]).await?;
        info!(user = %user.pubkey(), amount, %signature, "Redeemed");
        Ok(signature)
    }

    pub async fn change_admin(&self, new_admin: &Pubkey) -> SdkResult<Signature> {
        let ix = instructions::change_admin(&self.program_id, &self.payer.pubkey(), new_admin);
        let signature = self.send(&[ix], &[]).await?;
        info!(%new_admin, %signature, "Admin changed");
        Ok(signature)
    }

    async fn account_data(&self, address: &Pubkey) -> SdkResult<Option<Vec<u8>>> {
        let response = self
            .rpc
            .get_account_with_commitment(address, self.rpc.commitment())
            .await?;
        Ok(response.value.map(|account| account.data))
    }

    async fn send(&self, ixs: &[Instruction], extra_signers: &[&Keypair]) -> SdkResult<Signature> {
        let signers = signer_set(&self.payer, extra_signers);
        let blockhash = self.rpc.get_latest_blockhash().await?;
        let tx = Transaction::new_signed_with_payer(ixs, Some(&self.payer.pubkey()), &signers, blockhash);

        debug!(instructions = ixs.len(), signers = signers.len(), "Sending transaction");
        Ok(self.rpc.send_and_confirm_transaction(&tx).await?)
    }
}

/// Payer first, then every other signer once
fn signer_set<'a>(payer: &'a Keypair, extra: &[&'a Keypair]) -> Vec<&'a Keypair> {
    let mut signers = vec![payer];
    for signer in extra {
        if !signers.iter().any(|s| s.pubkey() == signer.pubkey()) {
            signers.push(*signer);
        }
    }
    signers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signer_set_deduplicates() {
        let payer = Keypair::new();
        let user = Keypair::new();

        let signers = signer_set(&payer, &[&user, &payer, &user]);

        assert_eq!(signers.len(), 2);
        assert_eq!(signers[0].pubkey(), payer.pubkey());
        assert_eq!(signers[1].pubkey(), user.pubkey());
    }

    #[tokio::test]
    async fn test_unreachable_rpc_surfaces_rpc_error() {
        let rpc = RpcClient::new("http://127.0.0.1:1".to_string());
        let client = MeatCoinClient::new(rpc, meat_coin::ID, Keypair::new());

        assert!(matches!(client.ledger_state().await, Err(SdkError::Rpc(_))));
        assert!(matches!(
            client.redemption_record(&Pubkey::new_unique()).await,
            Err(SdkError::Rpc(_))
        ));
    }

    #[test]
    fn test_from_config_missing_keypair() {
        let config = SdkConfig {
            keypair_path: "/nonexistent/id.json".to_string(),
            ..SdkConfig::default()
        };

        match MeatCoinClient::from_config(&config) {
            Err(SdkError::Keypair(msg)) => assert!(msg.starts_with("/nonexistent/id.json")),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("client built without a keypair"),
        }
    }

    #[test]
    fn test_from_config_uses_program_id() {
        let dir = tempfile::tempdir().unwrap();
        let keypair_path = dir.path().join("payer.json");
        let payer = Keypair::new();
        solana_sdk::signature::write_keypair_file(&payer, &keypair_path).unwrap();
        let program_id = Pubkey::new_unique();

        let config = SdkConfig {
            program_id: program_id.to_string(),
            keypair_path: keypair_path.display().to_string(),
            ..SdkConfig::default()
        };
        let client = MeatCoinClient::from_config(&config).unwrap();

        assert_eq!(client.program_id(), program_id);
        assert_eq!(client.payer(), payer.pubkey());
        assert_eq!(
            client.ledger_state_address(),
            pda::ledger_state_address(&program_id).0
        );
    }
}
