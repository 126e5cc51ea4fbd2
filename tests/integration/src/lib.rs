//! End-to-end test harness
//!
//! Plays the role of the external driver: generates wallet identities,
//! creates asset mints, funds holders, and issues operations against an
//! in-memory store and ledger. Default amounts match the reference
//! scenario: a (4M, 1M) first deposit against 100M of each asset minted to
//! the admin.

use amm_core::{process_initialize_amm, process_initialize_pool, MemoryStore};
use ledger_core::{LedgerOp, MemoryLedger, TokenLedger};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};

/// Fee used by the reference scenario (5%)
pub const FEE_BPS: u16 = 500;

/// Asset units minted to each funded holder
pub const DEFAULT_SUPPLY: u64 = 100_000_000;

/// Reference first-deposit amount of asset A
pub const DEPOSIT_AMOUNT_A: u64 = 4_000_000;

/// Reference first-deposit amount of asset B
pub const DEPOSIT_AMOUNT_B: u64 = 1_000_000;

/// One configured AMM with a canonical asset pair
pub struct TestBench {
    pub store: MemoryStore,
    pub ledger: MemoryLedger,
    pub config_id: Pubkey,
    pub admin: Pubkey,
    pub fee_bps: u16,
    pub mint_a: Pubkey,
    pub mint_b: Pubkey,
    /// Authority over the two asset mints (the harness, not the pool)
    pub mint_authority: Pubkey,
}

impl TestBench {
    /// Fresh bench with the reference fee
    pub fn new() -> Self {
        Self::with_fee(FEE_BPS)
    }

    /// Fresh bench with an explicit fee
    pub fn with_fee(fee_bps: u16) -> Self {
        let mut ledger = MemoryLedger::new();

        // Canonically ordered pair
        let (x, y) = (new_wallet(), new_wallet());
        let (mint_a, mint_b) = if x.to_bytes() < y.to_bytes() {
            (x, y)
        } else {
            (y, x)
        };

        let mint_authority = new_wallet();
        ledger.create_mint(mint_a, mint_authority).unwrap();
        ledger.create_mint(mint_b, mint_authority).unwrap();

        Self {
            store: MemoryStore::new(),
            ledger,
            config_id: new_wallet(),
            admin: new_wallet(),
            fee_bps,
            mint_a,
            mint_b,
            mint_authority,
        }
    }

    /// Issue create-config for this bench's id and fee
    pub fn create_config(&mut self) -> Pubkey {
        process_initialize_amm(&mut self.store, self.config_id, self.admin, self.fee_bps).unwrap()
    }

    /// Issue create-pool for the canonical pair
    pub fn create_pool(&mut self) -> Pubkey {
        process_initialize_pool(
            &mut self.store,
            &mut self.ledger,
            &self.config_id,
            self.mint_a,
            self.mint_b,
        )
        .unwrap()
    }

    /// Mint `DEFAULT_SUPPLY` of both assets to `holder`
    pub fn fund(&mut self, holder: &Pubkey) {
        self.fund_amount(holder, DEFAULT_SUPPLY);
    }

    /// Mint an explicit amount of both assets to `holder`
    pub fn fund_amount(&mut self, holder: &Pubkey, amount: u64) {
        let account_a = self.ledger.ensure_account(&self.mint_a, holder).unwrap();
        let account_b = self.ledger.ensure_account(&self.mint_b, holder).unwrap();
        self.ledger
            .apply(&[
                LedgerOp::MintTo {
                    mint: self.mint_a,
                    to: account_a,
                    authority: self.mint_authority,
                    amount,
                },
                LedgerOp::MintTo {
                    mint: self.mint_b,
                    to: account_b,
                    authority: self.mint_authority,
                    amount,
                },
            ])
            .unwrap();
    }

    /// Balance of `holder`'s associated account for `mint`
    pub fn balance_of(&self, mint: &Pubkey, holder: &Pubkey) -> u64 {
        self.ledger
            .token_account(mint, holder)
            .map_or(0, |account| self.ledger.balance(&account))
    }
}

impl Default for TestBench {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a wallet identity from a fresh keypair
pub fn new_wallet() -> Pubkey {
    Keypair::new().pubkey()
}
