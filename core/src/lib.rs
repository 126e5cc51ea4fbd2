//! Constant-product AMM accounting core
//!
//! State transitions over pooled-asset accounts: configuration and pool
//! records at deterministically derived addresses, liquidity-share
//! mint/burn accounting, and constant-product swaps with fee deduction and
//! slippage protection.
//!
//! The core is transport-agnostic and holds no state of its own. Records
//! live in an [`store::AccountStore`] and balances behind a
//! [`ledger_core::TokenLedger`], both owned by the external ledger
//! collaborator; each operation processor reads state, computes the full
//! outcome with the pure math in [`amm_model`], and commits one atomic
//! ledger batch. A processor holds `&mut` access to both for the duration
//! of an operation, so reserve reads and writes cannot interleave; callers
//! wanting cross-pool parallelism shard stores per pool.

pub mod error;
pub mod instructions;
pub mod pda;
pub mod state;
pub mod store;

pub use error::AmmError;
pub use instructions::{
    process_deposit_liquidity, process_initialize_amm, process_initialize_pool, process_swap,
    process_withdraw_liquidity, DepositOutcome, SwapDirection, SwapOutcome, WithdrawOutcome,
};
pub use pda::{derive_config_address, derive_pool_addresses, PoolAddresses};
pub use state::{AmmConfig, Pool};
pub use store::{AccountStore, MemoryStore};
