//! Withdraw operation - burn shares for a proportional cut of both reserves

use amm_model::{quote_withdraw, MathError};
use ledger_core::{LedgerOp, TokenLedger};
use solana_program::pubkey::Pubkey;

use crate::error::AmmError;
use crate::store::AccountStore;

/// Result of a completed withdrawal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawOutcome {
    /// Asset A returned to the depositor
    pub amount_a: u64,
    /// Asset B returned to the depositor
    pub amount_b: u64,
}

fn map_withdraw_error(err: MathError) -> AmmError {
    match err {
        // More shares than exist anywhere cannot be the caller's
        MathError::InsufficientLiquidity => AmmError::InsufficientFunds,
        MathError::InvalidAmount => AmmError::InvalidAmount,
        MathError::InvalidReserves => AmmError::InsufficientReserves,
        MathError::Overflow => AmmError::Overflow,
    }
}

/// Burn `shares` of the pool's liquidity mint for both assets
///
/// Both legs floor (`shares * reserve / supply`), favoring the pool
/// symmetrically. The locked minimum-liquidity shares sit in the pool's own
/// sink, so depositors can never burn supply down to zero. Transfers and the
/// burn form one atomic batch; burning more shares than the depositor holds
/// fails the whole withdrawal with `InsufficientFunds`.
pub fn process_withdraw_liquidity<S: AccountStore, L: TokenLedger>(
    store: &S,
    ledger: &mut L,
    pool_address: &Pubkey,
    depositor: &Pubkey,
    shares: u64,
) -> Result<WithdrawOutcome, AmmError> {
    let pool = store.pool(pool_address).ok_or(AmmError::PoolNotFound)?;

    let reserve_a = ledger.balance(&pool.vault_a);
    let reserve_b = ledger.balance(&pool.vault_b);
    let supply = ledger.supply(&pool.liquidity_mint);

    let quote =
        quote_withdraw(reserve_a, reserve_b, supply, shares).map_err(map_withdraw_error)?;

    let share_account = ledger
        .token_account(&pool.liquidity_mint, depositor)
        .ok_or(AmmError::InsufficientFunds)?;
    let dest_a = ledger.ensure_account(&pool.mint_a, depositor)?;
    let dest_b = ledger.ensure_account(&pool.mint_b, depositor)?;

    ledger
        .apply(&[
            LedgerOp::Transfer {
                from: pool.vault_a,
                to: dest_a,
                authority: pool.pool_authority,
                amount: quote.amount_a,
            },
            LedgerOp::Transfer {
                from: pool.vault_b,
                to: dest_b,
                authority: pool.pool_authority,
                amount: quote.amount_b,
            },
            LedgerOp::Burn {
                mint: pool.liquidity_mint,
                from: share_account,
                authority: *depositor,
                amount: shares,
            },
        ])
        .map_err(AmmError::from_apply)?;

    log::debug!(
        "withdraw from {pool_address}: burned {shares} shares for ({}, {})",
        quote.amount_a,
        quote.amount_b
    );

    Ok(WithdrawOutcome {
        amount_a: quote.amount_a,
        amount_b: quote.amount_b,
    })
}
