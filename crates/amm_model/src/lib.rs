//! AMM Model - Pure constant product math (x·y=k)
//!
//! This crate contains the core pricing and share-accounting formulas for the
//! constant product AMM, kept free of any account or ledger plumbing so the
//! math can be tested (and property-checked) in isolation. The operation
//! processors in `amm-core` import these functions directly.

#![cfg_attr(not(test), no_std)]

pub mod math;

pub use math::{
    integer_sqrt, quote_deposit, quote_initial_deposit, quote_swap, quote_withdraw, DepositQuote,
    SwapQuote, WithdrawQuote,
};

/// Basis points scale (10,000 bps = 100%)
pub const BPS_SCALE: u64 = 10_000;

/// Liquidity shares permanently withheld from the first depositor.
///
/// Keeps total share supply strictly positive for the pool's lifetime so
/// share-price math never divides by zero.
pub const MIN_LIQUIDITY: u64 = 100;

/// Error types for AMM math
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// Invalid reserves or share supply (zero where nonzero is required)
    InvalidReserves,
    /// Invalid amount (zero, or fee at/above 100%)
    InvalidAmount,
    /// Pool cannot cover the requested output or share mint
    InsufficientLiquidity,
    /// Arithmetic overflow
    Overflow,
}
