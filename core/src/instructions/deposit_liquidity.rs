//! Deposit operation - add liquidity against minted pool shares

use amm_model::{quote_deposit, quote_initial_deposit, DepositQuote, MathError};
use ledger_core::{LedgerOp, TokenLedger};
use solana_program::pubkey::Pubkey;

use crate::error::AmmError;
use crate::store::AccountStore;

/// Result of a completed deposit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositOutcome {
    /// Shares minted to the depositor
    pub shares: u64,
    /// Asset A actually taken
    pub amount_a: u64,
    /// Asset B actually taken
    pub amount_b: u64,
}

fn map_initial_error(err: MathError) -> AmmError {
    match err {
        MathError::InsufficientLiquidity => AmmError::InsufficientInitialLiquidity,
        MathError::InvalidAmount => AmmError::InvalidAmount,
        MathError::InvalidReserves => AmmError::InsufficientReserves,
        MathError::Overflow => AmmError::Overflow,
    }
}

fn map_deposit_error(err: MathError) -> AmmError {
    match err {
        // Shares would round to zero: the deposit is too small for the pool
        MathError::InsufficientLiquidity => AmmError::InvalidAmount,
        MathError::InvalidAmount => AmmError::InvalidAmount,
        MathError::InvalidReserves => AmmError::InsufficientReserves,
        MathError::Overflow => AmmError::Overflow,
    }
}

/// Deposit up to `(max_a, max_b)` into the pool at `pool_address`
///
/// An empty pool takes both maxima in full and mints
/// `floor(sqrt(max_a * max_b))` shares, the locked minimum going to the
/// pool's sink. A funded pool scales one leg down to the reserve ratio and
/// mints by the limiting asset. Transfers and mints land in one atomic
/// ledger batch; a depositor balance shortfall surfaces as
/// `InsufficientFunds` with nothing applied.
///
/// # Arguments
/// * `pool_address` - Derived pool address
/// * `depositor` - Identity paying the two legs and receiving shares
/// * `max_a` / `max_b` - Per-asset deposit maxima (slippage bound)
pub fn process_deposit_liquidity<S: AccountStore, L: TokenLedger>(
    store: &S,
    ledger: &mut L,
    pool_address: &Pubkey,
    depositor: &Pubkey,
    max_a: u64,
    max_b: u64,
) -> Result<DepositOutcome, AmmError> {
    let pool = store.pool(pool_address).ok_or(AmmError::PoolNotFound)?;

    let reserve_a = ledger.balance(&pool.vault_a);
    let reserve_b = ledger.balance(&pool.vault_b);
    let supply = ledger.supply(&pool.liquidity_mint);

    let quote: DepositQuote = if reserve_a == 0 && reserve_b == 0 {
        quote_initial_deposit(max_a, max_b).map_err(map_initial_error)?
    } else {
        quote_deposit(reserve_a, reserve_b, supply, max_a, max_b).map_err(map_deposit_error)?
    };

    let source_a = ledger
        .token_account(&pool.mint_a, depositor)
        .ok_or(AmmError::InsufficientFunds)?;
    let source_b = ledger
        .token_account(&pool.mint_b, depositor)
        .ok_or(AmmError::InsufficientFunds)?;
    let share_account = ledger.ensure_account(&pool.liquidity_mint, depositor)?;

    let mut ops = vec![
        LedgerOp::Transfer {
            from: source_a,
            to: pool.vault_a,
            authority: *depositor,
            amount: quote.amount_a,
        },
        LedgerOp::Transfer {
            from: source_b,
            to: pool.vault_b,
            authority: *depositor,
            amount: quote.amount_b,
        },
        LedgerOp::MintTo {
            mint: pool.liquidity_mint,
            to: share_account,
            authority: pool.pool_authority,
            amount: quote.shares,
        },
    ];
    if quote.locked > 0 {
        ops.push(LedgerOp::MintTo {
            mint: pool.liquidity_mint,
            to: pool.locked_sink,
            authority: pool.pool_authority,
            amount: quote.locked,
        });
    }

    ledger.apply(&ops).map_err(AmmError::from_apply)?;

    log::debug!(
        "deposit into {pool_address}: took ({}, {}), minted {} shares",
        quote.amount_a,
        quote.amount_b,
        quote.shares
    );

    Ok(DepositOutcome {
        shares: quote.shares,
        amount_a: quote.amount_a,
        amount_b: quote.amount_b,
    })
}
