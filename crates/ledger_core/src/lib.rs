//! Ledger Core - boundary contract to the external asset-custody collaborator
//!
//! The accounting core never touches balances directly: it describes the
//! transfers, mints, and burns an operation requires as a batch of
//! [`LedgerOp`] intents and hands the batch to a [`TokenLedger`]. `apply` is
//! all-or-nothing - every op in the batch is validated against the state the
//! preceding ops would produce, and either the whole batch commits or nothing
//! does. This is what makes a failed deposit or swap leave no partial state
//! behind.
//!
//! # Design Principles
//! - Custody isolation: the core holds addresses, never balances
//! - Intent batches instead of mutating calls, for atomicity
//! - Authority rules mirror fungible-token semantics: the account owner
//!   signs transfers and burns, the mint authority signs mints
//!
//! [`MemoryLedger`] is the in-process reference implementation used by the
//! test harness; a production deployment would back the same trait with the
//! authoritative ledger.

use std::collections::BTreeMap;

use solana_program::pubkey::Pubkey;
use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

/// Errors surfaced by the custody boundary
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LedgerError {
    #[error("mint does not exist")]
    UnknownMint,

    #[error("mint already exists")]
    MintExists,

    #[error("token account does not exist")]
    UnknownAccount,

    #[error("token account already exists")]
    AccountExists,

    #[error("token accounts are for different mints")]
    MintMismatch,

    #[error("authority does not control the account or mint")]
    Unauthorized,

    #[error("balance too low for the requested debit")]
    InsufficientFunds,

    #[error("balance or supply arithmetic overflow")]
    Overflow,
}

// ============================================================================
// Records
// ============================================================================

/// Fungible mint record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mint {
    /// Identity allowed to mint new units
    pub authority: Pubkey,
    /// Total units in circulation
    pub supply: u64,
}

/// Token account record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenAccount {
    /// Mint this account holds
    pub mint: Pubkey,
    /// Identity allowed to move the balance
    pub owner: Pubkey,
    /// Current balance
    pub balance: u64,
}

// ============================================================================
// Operation intents
// ============================================================================

/// A single balance movement within an atomic batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerOp {
    /// Move `amount` between two accounts of the same mint
    Transfer {
        from: Pubkey,
        to: Pubkey,
        /// Must equal the owner of `from`
        authority: Pubkey,
        amount: u64,
    },
    /// Create `amount` new units of `mint` in `to`
    MintTo {
        mint: Pubkey,
        to: Pubkey,
        /// Must equal the mint authority
        authority: Pubkey,
        amount: u64,
    },
    /// Destroy `amount` units of `mint` held in `from`
    Burn {
        mint: Pubkey,
        from: Pubkey,
        /// Must equal the owner of `from`
        authority: Pubkey,
        amount: u64,
    },
}

// ============================================================================
// Ledger trait
// ============================================================================

/// Custody interface consumed by the accounting core
pub trait TokenLedger {
    /// Register a new mint controlled by `authority`
    fn create_mint(&mut self, mint: Pubkey, authority: Pubkey) -> Result<(), LedgerError>;

    /// Register a token account at an explicit address
    fn create_account(
        &mut self,
        address: Pubkey,
        mint: Pubkey,
        owner: Pubkey,
    ) -> Result<(), LedgerError>;

    /// Look up the associated account of `(mint, owner)`, if one exists
    fn token_account(&self, mint: &Pubkey, owner: &Pubkey) -> Option<Pubkey>;

    /// Look up or create the associated account of `(mint, owner)`
    fn ensure_account(&mut self, mint: &Pubkey, owner: &Pubkey) -> Result<Pubkey, LedgerError>;

    /// Whether a mint has been registered
    fn has_mint(&self, mint: &Pubkey) -> bool;

    /// Balance of an account, zero if the account does not exist
    fn balance(&self, address: &Pubkey) -> u64;

    /// Circulating supply of a mint, zero if the mint does not exist
    fn supply(&self, mint: &Pubkey) -> u64;

    /// Apply a batch of operations atomically
    ///
    /// Each op is validated against the state produced by the ops before it
    /// in the batch. On any error nothing is committed.
    fn apply(&mut self, ops: &[LedgerOp]) -> Result<(), LedgerError>;
}

// ============================================================================
// In-memory reference implementation
// ============================================================================

/// Marker id under which associated account addresses are derived
const MEMORY_LEDGER_ID: Pubkey = Pubkey::new_from_array([
    0x4c, 0x45, 0x44, 0x47, 0x45, 0x52, 0x5f, 0x43, 0x4f, 0x52, 0x45, 0x5f, 0x4d, 0x45, 0x4d,
    0x4f, 0x52, 0x59, 0x5f, 0x4c, 0x45, 0x44, 0x47, 0x45, 0x52, 0x5f, 0x56, 0x31, 0x00, 0x00,
    0x00, 0x00,
]);

/// In-memory ledger keyed by account address
#[derive(Debug, Default, Clone)]
pub struct MemoryLedger {
    mints: BTreeMap<Pubkey, Mint>,
    accounts: BTreeMap<Pubkey, TokenAccount>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deterministic associated-account address for `(mint, owner)`
    pub fn associated_address(mint: &Pubkey, owner: &Pubkey) -> Pubkey {
        Pubkey::find_program_address(&[owner.as_ref(), mint.as_ref()], &MEMORY_LEDGER_ID).0
    }

    /// Full account record, for harness assertions
    pub fn account(&self, address: &Pubkey) -> Option<&TokenAccount> {
        self.accounts.get(address)
    }

    fn apply_one(
        accounts: &mut BTreeMap<Pubkey, TokenAccount>,
        mints: &mut BTreeMap<Pubkey, Mint>,
        op: &LedgerOp,
    ) -> Result<(), LedgerError> {
        match *op {
            LedgerOp::Transfer {
                from,
                to,
                authority,
                amount,
            } => {
                let (from_mint, from_owner, from_balance) = {
                    let acc = accounts.get(&from).ok_or(LedgerError::UnknownAccount)?;
                    (acc.mint, acc.owner, acc.balance)
                };
                if from_owner != authority {
                    return Err(LedgerError::Unauthorized);
                }
                {
                    let to_acc = accounts.get(&to).ok_or(LedgerError::UnknownAccount)?;
                    if to_acc.mint != from_mint {
                        return Err(LedgerError::MintMismatch);
                    }
                }
                let new_from = from_balance
                    .checked_sub(amount)
                    .ok_or(LedgerError::InsufficientFunds)?;
                // Debit before credit so a self-transfer nets to zero
                accounts
                    .get_mut(&from)
                    .ok_or(LedgerError::UnknownAccount)?
                    .balance = new_from;
                let to_acc = accounts.get_mut(&to).ok_or(LedgerError::UnknownAccount)?;
                to_acc.balance = to_acc
                    .balance
                    .checked_add(amount)
                    .ok_or(LedgerError::Overflow)?;
                Ok(())
            }
            LedgerOp::MintTo {
                mint,
                to,
                authority,
                amount,
            } => {
                let mint_rec = mints.get_mut(&mint).ok_or(LedgerError::UnknownMint)?;
                if mint_rec.authority != authority {
                    return Err(LedgerError::Unauthorized);
                }
                let acc = accounts.get_mut(&to).ok_or(LedgerError::UnknownAccount)?;
                if acc.mint != mint {
                    return Err(LedgerError::MintMismatch);
                }
                mint_rec.supply = mint_rec
                    .supply
                    .checked_add(amount)
                    .ok_or(LedgerError::Overflow)?;
                acc.balance = acc.balance.checked_add(amount).ok_or(LedgerError::Overflow)?;
                Ok(())
            }
            LedgerOp::Burn {
                mint,
                from,
                authority,
                amount,
            } => {
                let mint_rec = mints.get_mut(&mint).ok_or(LedgerError::UnknownMint)?;
                let acc = accounts.get_mut(&from).ok_or(LedgerError::UnknownAccount)?;
                if acc.mint != mint {
                    return Err(LedgerError::MintMismatch);
                }
                if acc.owner != authority {
                    return Err(LedgerError::Unauthorized);
                }
                acc.balance = acc
                    .balance
                    .checked_sub(amount)
                    .ok_or(LedgerError::InsufficientFunds)?;
                mint_rec.supply = mint_rec
                    .supply
                    .checked_sub(amount)
                    .ok_or(LedgerError::InsufficientFunds)?;
                Ok(())
            }
        }
    }
}

impl TokenLedger for MemoryLedger {
    fn create_mint(&mut self, mint: Pubkey, authority: Pubkey) -> Result<(), LedgerError> {
        if self.mints.contains_key(&mint) {
            return Err(LedgerError::MintExists);
        }
        self.mints.insert(mint, Mint { authority, supply: 0 });
        Ok(())
    }

    fn create_account(
        &mut self,
        address: Pubkey,
        mint: Pubkey,
        owner: Pubkey,
    ) -> Result<(), LedgerError> {
        if !self.mints.contains_key(&mint) {
            return Err(LedgerError::UnknownMint);
        }
        if self.accounts.contains_key(&address) {
            return Err(LedgerError::AccountExists);
        }
        self.accounts.insert(
            address,
            TokenAccount {
                mint,
                owner,
                balance: 0,
            },
        );
        Ok(())
    }

    fn token_account(&self, mint: &Pubkey, owner: &Pubkey) -> Option<Pubkey> {
        let address = Self::associated_address(mint, owner);
        self.accounts.contains_key(&address).then_some(address)
    }

    fn ensure_account(&mut self, mint: &Pubkey, owner: &Pubkey) -> Result<Pubkey, LedgerError> {
        let address = Self::associated_address(mint, owner);
        if !self.accounts.contains_key(&address) {
            self.create_account(address, *mint, *owner)?;
        }
        Ok(address)
    }

    fn has_mint(&self, mint: &Pubkey) -> bool {
        self.mints.contains_key(mint)
    }

    fn balance(&self, address: &Pubkey) -> u64 {
        self.accounts.get(address).map_or(0, |acc| acc.balance)
    }

    fn supply(&self, mint: &Pubkey) -> u64 {
        self.mints.get(mint).map_or(0, |m| m.supply)
    }

    fn apply(&mut self, ops: &[LedgerOp]) -> Result<(), LedgerError> {
        // Stage the whole batch on copies; commit only a fully valid batch.
        let mut accounts = self.accounts.clone();
        let mut mints = self.mints.clone();

        for op in ops {
            if let Err(err) = Self::apply_one(&mut accounts, &mut mints, op) {
                log::debug!("ledger batch rejected: {err} on {op:?}");
                return Err(err);
            }
        }

        self.accounts = accounts;
        self.mints = mints;
        Ok(())
    }
}
