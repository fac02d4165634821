//! Deterministic addresses shared with the on-chain program

use anchor_lang::prelude::Pubkey;
use anchor_spl::associated_token::get_associated_token_address;

pub use meat_coin::state::{LEDGER_STATE_SEED, REDEMPTION_RECORD_SEED};

/// The singleton ledger state PDA and its bump
pub fn ledger_state_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[LEDGER_STATE_SEED], program_id)
}

/// The redemption record PDA of `user`
pub fn redemption_record_address(program_id: &Pubkey, user: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[REDEMPTION_RECORD_SEED, user.as_ref()], program_id)
}

/// The treasury: the ledger state's associated token account for `mint`
pub fn treasury_address(program_id: &Pubkey, mint: &Pubkey) -> Pubkey {
    let (state, _) = ledger_state_address(program_id);
    get_associated_token_address(&state, mint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_state_address_is_stable() {
        let first = ledger_state_address(&meat_coin::ID);
        let second = ledger_state_address(&meat_coin::ID);
        assert_eq!(first, second);

        let (expected, _) = Pubkey::find_program_address(&[b"state"], &meat_coin::ID);
        assert_eq!(first.0, expected);
    }

    #[test]
    fn test_redemption_records_are_per_user() {
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();

        let (alice_record, _) = redemption_record_address(&meat_coin::ID, &alice);
        let (bob_record, _) = redemption_record_address(&meat_coin::ID, &bob);

        assert_ne!(alice_record, bob_record);
        assert_eq!(redemption_record_address(&meat_coin::ID, &alice).0, alice_record);
    }

    #[test]
    fn test_treasury_depends_on_program_and_mint() {
        let mint = Pubkey::new_unique();
        let other_program = Pubkey::new_unique();

        assert_eq!(
            treasury_address(&meat_coin::ID, &mint),
            treasury_address(&meat_coin::ID, &mint)
        );
        assert_ne!(
            treasury_address(&meat_coin::ID, &mint),
            treasury_address(&other_program, &mint)
        );
        assert_ne!(
            treasury_address(&meat_coin::ID, &mint),
            treasury_address(&meat_coin::ID, &Pubkey::new_unique())
        );
    }
}
