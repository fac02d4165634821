//! Instruction builders for the MeatCoin program

use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{system_program, InstructionData, ToAccountMetas};
use anchor_spl::{associated_token, token};

use crate::pda;

/// Create the ledger with `admin` as admin; `admin` must hold mint authority over `mint`
pub fn initialize(program_id: &Pubkey, admin: &Pubkey, mint: &Pubkey) -> Instruction {
    let (state, _) = pda::ledger_state_address(program_id);

    Instruction {
        program_id: *program_id,
        accounts: meat_coin::accounts::Initialize {
            state,
            mint: *mint,
            treasury: pda::treasury_address(program_id, mint),
            admin: *admin,
            token_program: token::ID,
            associated_token_program: associated_token::ID,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: meat_coin::instruction::Initialize {}.data(),
    }
}

pub fn mint(
    program_id: &Pubkey,
    admin: &Pubkey,
    mint: &Pubkey,
    recipient: &Pubkey,
    amount: u64,
) -> Instruction {
    let (state, _) = pda::ledger_state_address(program_id);

    Instruction {
        program_id: *program_id,
        accounts: meat_coin::accounts::MintTokens {
            state,
            mint: *mint,
            recipient: *recipient,
            admin: *admin,
            token_program: token::ID,
        }
        .to_account_metas(None),
        data: meat_coin::instruction::Mint { amount }.data(),
    }
}

/// Redeem `amount` from `from` (owned by `user`) into the treasury of `mint`
pub fn redeem(
    program_id: &Pubkey,
    user: &Pubkey,
    mint: &Pubkey,
    from: &Pubkey,
    amount: u64,
) -> Instruction {
    let (state, _) = pda::ledger_state_address(program_id);
    let (redemption_record, _) = pda::redemption_record_address(program_id, user);

    Instruction {
        program_id: *program_id,
        accounts: meat_coin::accounts::RedeemTokens {
            state,
            from: *from,
            treasury: pda::treasury_address(program_id, mint),
            redemption_record,
            user: *user,
            token_program: token::ID,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: meat_coin::instruction::Redeem { amount }.data(),
    }
}

pub fn change_admin(program_id: &Pubkey, current_admin: &Pubkey, new_admin: &Pubkey) -> Instruction {
    let (state, _) = pda::ledger_state_address(program_id);

    Instruction {
        program_id: *program_id,
        accounts: meat_coin::accounts::ChangeAdmin {
            state,
            current_admin: *current_admin,
        }
        .to_account_metas(None),
        data: meat_coin::instruction::ChangeAdmin {
            new_admin: *new_admin,
        }
        .data(),
    }
}
