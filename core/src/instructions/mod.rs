//! Operation processors
//!
//! One module per operation, in the order a pool moves through its
//! lifecycle: configuration, pool creation, deposits, withdrawals, swaps.
//! Each processor validates everything it can against the store and ledger,
//! computes the full outcome, and only then submits a single atomic ledger
//! batch - a failed operation commits nothing.

mod deposit_liquidity;
mod initialize_amm;
mod initialize_pool;
mod swap;
mod withdraw_liquidity;

pub use deposit_liquidity::{process_deposit_liquidity, DepositOutcome};
pub use initialize_amm::process_initialize_amm;
pub use initialize_pool::process_initialize_pool;
pub use swap::{process_swap, SwapDirection, SwapOutcome};
pub use withdraw_liquidity::{process_withdraw_liquidity, WithdrawOutcome};
