//! Swap operation - constant product exchange with fee and slippage guard

use amm_model::{quote_swap, MathError};
use ledger_core::{LedgerOp, TokenLedger};
use solana_program::pubkey::Pubkey;

use crate::error::AmmError;
use crate::store::AccountStore;

/// Which asset the trader is paying in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapDirection {
    /// Pay asset A, receive asset B
    AtoB,
    /// Pay asset B, receive asset A
    BtoA,
}

/// Result of a completed swap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapOutcome {
    /// Gross input debited from the trader
    pub amount_in: u64,
    /// Fee withheld from the input (stays in the input vault)
    pub fee: u64,
    /// Output credited to the trader
    pub amount_out: u64,
}

fn map_swap_error(err: MathError) -> AmmError {
    match err {
        MathError::InvalidReserves => AmmError::InvalidDirection,
        MathError::InvalidAmount => AmmError::InvalidAmount,
        MathError::InsufficientLiquidity => AmmError::InsufficientReserves,
        MathError::Overflow => AmmError::Overflow,
    }
}

/// Swap `amount_in` through the pool at `pool_address`
///
/// The fee comes from the configuration the pool links back to. The output
/// is floored in the pool's favor, so the reserve product never decreases.
/// Both transfer legs go through one atomic ledger batch: a trader balance
/// shortfall is detected at transfer time and fails the whole swap as
/// `InsufficientFunds`, never debiting one leg alone.
///
/// # Arguments
/// * `direction` - Which asset the trader pays in
/// * `amount_in` - Gross input amount
/// * `min_amount_out` - Caller's slippage bound on the output
/// * `trader` - Identity paying the input and receiving the output
pub fn process_swap<S: AccountStore, L: TokenLedger>(
    store: &S,
    ledger: &mut L,
    pool_address: &Pubkey,
    direction: SwapDirection,
    amount_in: u64,
    min_amount_out: u64,
    trader: &Pubkey,
) -> Result<SwapOutcome, AmmError> {
    let pool = store.pool(pool_address).ok_or(AmmError::PoolNotFound)?;
    let config = store.config(&pool.config).ok_or(AmmError::ConfigNotFound)?;

    let (mint_in, mint_out, vault_in, vault_out) = match direction {
        SwapDirection::AtoB => (pool.mint_a, pool.mint_b, pool.vault_a, pool.vault_b),
        SwapDirection::BtoA => (pool.mint_b, pool.mint_a, pool.vault_b, pool.vault_a),
    };

    let reserve_in = ledger.balance(&vault_in);
    let reserve_out = ledger.balance(&vault_out);
    if reserve_in == 0 || reserve_out == 0 {
        // An unfunded pool prices no direction at all
        return Err(AmmError::InvalidDirection);
    }

    let quote =
        quote_swap(reserve_in, reserve_out, config.fee_bps, amount_in).map_err(map_swap_error)?;

    if quote.amount_out < min_amount_out {
        log::warn!(
            "swap on {pool_address} rejected: out {} below bound {min_amount_out}",
            quote.amount_out
        );
        return Err(AmmError::SlippageExceeded);
    }

    let trader_in = ledger
        .token_account(&mint_in, trader)
        .ok_or(AmmError::InsufficientFunds)?;
    let trader_out = ledger.ensure_account(&mint_out, trader)?;

    ledger
        .apply(&[
            LedgerOp::Transfer {
                from: trader_in,
                to: vault_in,
                authority: *trader,
                amount: amount_in,
            },
            LedgerOp::Transfer {
                from: vault_out,
                to: trader_out,
                authority: pool.pool_authority,
                amount: quote.amount_out,
            },
        ])
        .map_err(AmmError::from_apply)?;

    log::debug!(
        "swap on {pool_address}: {amount_in} in ({} after fee) for {} out",
        amount_in - quote.fee,
        quote.amount_out
    );

    Ok(SwapOutcome {
        amount_in,
        fee: quote.fee,
        amount_out: quote.amount_out,
    })
}
