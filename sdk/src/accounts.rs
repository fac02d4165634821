//! Decoding of on-chain MeatCoin accounts

use anchor_lang::prelude::Pubkey;
use anchor_lang::AccountDeserialize;
use serde::Serialize;

use crate::error::{SdkError, SdkResult};
pub use meat_coin::state::{LedgerState, RedemptionRecord};

pub fn decode_ledger_state(address: &Pubkey, data: &[u8]) -> SdkResult<LedgerState> {
    decode(address, data)
}

pub fn decode_redemption_record(address: &Pubkey, data: &[u8]) -> SdkResult<RedemptionRecord> {
    decode(address, data)
}

fn decode<T: AccountDeserialize>(address: &Pubkey, mut data: &[u8]) -> SdkResult<T> {
    T::try_deserialize(&mut data).map_err(|e| SdkError::AccountDecode {
        address: *address,
        reason: e.to_string(),
    })
}

/// Human-readable view of the ledger, for logs and JSON output
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LedgerSnapshot {
    pub address: String,
    pub admin: String,
    pub mint: String,
    pub treasury: String,
    pub minted: u64,
    pub redeemed: u64,
    pub outstanding: u64,
}

impl LedgerSnapshot {
    pub fn new(address: &Pubkey, state: &LedgerState) -> Self {
        Self {
            address: address.to_string(),
            admin: state.admin.to_string(),
            mint: state.mint.to_string(),
            treasury: state.treasury.to_string(),
            minted: state.minted,
            redeemed: state.redeemed,
            outstanding: state.outstanding(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::AccountSerialize;

    fn encode<T: AccountSerialize>(account: &T) -> Vec<u8> {
        let mut data = Vec::new();
        account.try_serialize(&mut data).unwrap();
        data
    }

    #[test]
    fn test_decode_ledger_state() {
        let state = LedgerState {
            admin: Pubkey::new_unique(),
            minted: 100,
            redeemed: 50,
            mint: Pubkey::new_unique(),
            treasury: Pubkey::new_unique(),
            bump: 253,
        };
        let data = encode(&state);
        assert_eq!(data.len(), LedgerState::SIZE);

        let decoded = decode_ledger_state(&Pubkey::new_unique(), &data).unwrap();
        assert_eq!(decoded, state);
    }

    #[test]
    fn test_decode_rejects_wrong_account_type() {
        let record = RedemptionRecord {
            user: Pubkey::new_unique(),
            amount: 50,
            last_redeemed_at: 1_700_000_000,
            redemption_count: 1,
        };
        let data = encode(&record);
        let address = Pubkey::new_unique();

        assert_eq!(decode_redemption_record(&address, &data).unwrap(), record);
        match decode_ledger_state(&address, &data) {
            Err(SdkError::AccountDecode { address: failed, .. }) => assert_eq!(failed, address),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_snapshot_json() {
        let state = LedgerState {
            admin: Pubkey::new_unique(),
            minted: 100,
            redeemed: 30,
            mint: Pubkey::new_unique(),
            treasury: Pubkey::new_unique(),
            bump: 255,
        };
        let address = Pubkey::new_unique();

        let snapshot = LedgerSnapshot::new(&address, &state);
        let json: serde_json::Value = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(json["admin"], state.admin.to_string());
        assert_eq!(json["mint"], state.mint.to_string());
        assert_eq!(json["minted"], 100);
        assert_eq!(json["outstanding"], 70);
    }
}
