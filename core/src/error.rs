//! Operation errors
//!
//! Every error is the terminal result of the attempted operation; the
//! processors hand the custody layer one atomic batch, so a failed operation
//! commits no partial state.

use ledger_core::LedgerError;
use thiserror::Error;

/// Errors returned by the accounting core's operation processors
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AmmError {
    #[error("fee must be below 10000 basis points")]
    InvalidFee,

    #[error("pool assets must be distinct")]
    DuplicateAsset,

    #[error("pool assets must be in canonical order")]
    InvalidAssetOrdering,

    #[error("no configuration exists at the derived address")]
    ConfigNotFound,

    #[error("a configuration already exists for this id")]
    ConfigAlreadyExists,

    #[error("no pool exists at the given address")]
    PoolNotFound,

    #[error("a pool already exists for this asset pair")]
    PoolAlreadyExists,

    #[error("initial deposit does not exceed the locked minimum liquidity")]
    InsufficientInitialLiquidity,

    #[error("result is worse than the caller's slippage bound")]
    SlippageExceeded,

    #[error("caller's balance cannot cover the debit leg")]
    InsufficientFunds,

    #[error("pool reserves cannot cover the requested output")]
    InsufficientReserves,

    #[error("pool cannot price the requested swap direction")]
    InvalidDirection,

    #[error("amount must be nonzero")]
    InvalidAmount,

    #[error("arithmetic overflow")]
    Overflow,

    #[error("ledger rejected the operation: {0}")]
    Ledger(#[from] LedgerError),
}

impl AmmError {
    /// Fold a ledger batch failure into the operation result, surfacing
    /// balance shortfalls as the operation-level variant.
    pub(crate) fn from_apply(err: LedgerError) -> Self {
        match err {
            LedgerError::InsufficientFunds => AmmError::InsufficientFunds,
            other => AmmError::Ledger(other),
        }
    }
}
