use anchor_lang::prelude::*;
use anchor_spl::token::{self, MintTo, TokenAccount, Transfer};
use crate::error::MeatCoinError;
use crate::ledger::ValueTransfer;
use crate::state::LEDGER_STATE_SEED;

/// [`ValueTransfer`] backed by SPL Token CPIs over the accounts of one instruction.
///
/// Token accounts are looked up by address; an address that was not handed
/// to the instruction is rejected as `InvalidAccount`.
pub struct SplTokenTransfer<'info> {
    token_program: AccountInfo<'info>,
    authority: AccountInfo<'info>,
    ledger_bump: Option<u8>,
    mint: Option<AccountInfo<'info>>,
    token_accounts: Vec<(AccountInfo<'info>, u64)>,
}

impl<'info> SplTokenTransfer<'info> {
    pub fn new(token_program: AccountInfo<'info>, authority: AccountInfo<'info>) -> Self {
        Self {
            token_program,
            authority,
            ledger_bump: None,
            mint: None,
            token_accounts: Vec::new(),
        }
    }

    /// The authority is the ledger state PDA and signs with its seeds.
    pub fn signed_by_ledger(mut self, bump: u8) -> Self {
        self.ledger_bump = Some(bump);
        self
    }

    pub fn with_mint(mut self, mint: AccountInfo<'info>) -> Self {
        self.mint = Some(mint);
        self
    }

    pub fn with_token_account(mut self, account: &Account<'info, TokenAccount>) -> Self {
        self.token_accounts.push((account.to_account_info(), account.amount));
        self
    }

    fn position(&self, key: &Pubkey) -> Result<usize> {
        self.token_accounts
            .iter()
            .position(|(info, _)| info.key == key)
            .ok_or_else(|| error!(MeatCoinError::InvalidAccount))
    }
}

impl<'info> ValueTransfer for SplTokenTransfer<'info> {
    fn balance(&self, account: &Pubkey) -> Result<u64> {
        Ok(self.token_accounts[self.position(account)?].1)
    }

    fn issue(&mut self, amount: u64, recipient: &Pubkey) -> Result<()> {
        let mint = self
            .mint
            .clone()
            .ok_or_else(|| error!(MeatCoinError::InvalidAccount))?;
        let to = self.position(recipient)?;

        let cpi_accounts = MintTo {
            mint,
            to: self.token_accounts[to].0.clone(),
            authority: self.authority.clone(),
        };
        let cpi_program = self.token_program.clone();

        match self.ledger_bump {
            Some(bump) => {
                let bump = [bump];
                let seeds: &[&[u8]] = &[LEDGER_STATE_SEED, &bump];
                let signer = &[seeds];
                token::mint_to(CpiContext::new_with_signer(cpi_program, cpi_accounts, signer), amount)?;
            }
            None => token::mint_to(CpiContext::new(cpi_program, cpi_accounts), amount)?,
        }

        let balance = &mut self.token_accounts[to].1;
        *balance = balance.saturating_add(amount);
        Ok(())
    }

    #[allow(deprecated)]
    fn transfer(&mut self, amount: u64, source: &Pubkey, destination: &Pubkey) -> Result<()> {
        let from = self.position(source)?;
        let to = self.position(destination)?;
        require!(
            self.token_accounts[from].1 >= amount,
            MeatCoinError::InsufficientFunds
        );

        let cpi_accounts = Transfer {
            from: self.token_accounts[from].0.clone(),
            to: self.token_accounts[to].0.clone(),
            authority: self.authority.clone(),
        };
        let cpi_program = self.token_program.clone();

        match self.ledger_bump {
            Some(bump) => {
                let bump = [bump];
                let seeds: &[&[u8]] = &[LEDGER_STATE_SEED, &bump];
                let signer = &[seeds];
                token::transfer(CpiContext::new_with_signer(cpi_program, cpi_accounts, signer), amount)?;
            }
            None => token::transfer(CpiContext::new(cpi_program, cpi_accounts), amount)?,
        }

        self.token_accounts[from].1 -= amount;
        let balance = &mut self.token_accounts[to].1;
        *balance = balance.saturating_add(amount);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    #[test]
    fn test_unknown_account_is_rejected() {
        let program_key = anchor_spl::token::ID;
        let authority_key = Pubkey::new_unique();
        let (mut program_lamports, mut authority_lamports) = (1, 1);
        let (mut program_data, mut authority_data) = (Vec::<u8>::new(), Vec::<u8>::new());
        let owner = Pubkey::default();

        let token_program = AccountInfo::new(
            &program_key,
            false,
            false,
            &mut program_lamports,
            &mut program_data,
            &owner,
            true,
            0,
        );
        let authority = AccountInfo::new(
            &authority_key,
            true,
            false,
            &mut authority_lamports,
            &mut authority_data,
            &owner,
            false,
            0,
        );

        let mut tokens = SplTokenTransfer::new(token_program, authority);
        assert_eq!(
            tokens.balance(&Pubkey::new_unique()).unwrap_err(),
            Error::from(MeatCoinError::InvalidAccount)
        );
        assert_eq!(
            tokens
                .transfer(1, &Pubkey::new_unique(), &Pubkey::new_unique())
                .unwrap_err(),
            Error::from(MeatCoinError::InvalidAccount)
        );
        // no mint configured
        assert_eq!(
            tokens.issue(1, &Pubkey::new_unique()).unwrap_err(),
            Error::from(MeatCoinError::InvalidAccount)
        );
    }
}
