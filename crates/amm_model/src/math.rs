//! Constant product AMM math (x·y=k)
//!
//! All amounts are u64 base units; intermediate products are computed in
//! u128 so u64×u64 terms cannot overflow. Every quote rounds the amount
//! leaving the pool down, so the reserve product never decreases across an
//! applied quote.

use crate::{MathError, BPS_SCALE, MIN_LIQUIDITY};

/// Swap quote: output amount plus the post-swap reserves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapQuote {
    /// Amount of the output asset owed to the trader
    pub amount_out: u64,

    /// Fee withheld from the input, in input-asset units (stays in the pool)
    pub fee: u64,

    /// Input-side reserve after the swap (includes the fee)
    pub new_reserve_in: u64,

    /// Output-side reserve after the swap
    pub new_reserve_out: u64,
}

/// Deposit quote: amounts actually taken and shares to mint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositQuote {
    /// Amount of asset A taken from the depositor
    pub amount_a: u64,

    /// Amount of asset B taken from the depositor
    pub amount_b: u64,

    /// Shares minted to the depositor
    pub shares: u64,

    /// Shares minted to the pool's locked sink (nonzero only on the first
    /// deposit)
    pub locked: u64,
}

/// Withdraw quote: amounts returned for burned shares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawQuote {
    /// Amount of asset A returned to the depositor
    pub amount_a: u64,

    /// Amount of asset B returned to the depositor
    pub amount_b: u64,
}

/// Floor of the square root of `x`
///
/// Newton's method over u128; converges in at most ~7 iterations from the
/// power-of-two initial guess.
pub fn integer_sqrt(x: u128) -> u128 {
    if x < 2 {
        return x;
    }

    // Initial guess: 2^ceil(bits/2) >= sqrt(x)
    let shift = (128 - x.leading_zeros()).div_ceil(2);
    let mut current = 1u128 << shift;
    let mut next = (current + x / current) / 2;

    while next < current {
        current = next;
        next = (current + x / current) / 2;
    }

    current
}

/// Calculate the output of a constant product swap with fee on input
///
/// - `fee = floor(amount_in * fee_bps / 10_000)` is withheld from the input
///   and stays in the input-side reserve.
/// - `amount_out = floor(effective_in * reserve_out / (reserve_in +
///   effective_in))`, i.e. x·y=k solved for the new output reserve with the
///   result truncated in the pool's favor.
///
/// # Arguments
/// * `reserve_in` - Current input-side reserve
/// * `reserve_out` - Current output-side reserve
/// * `fee_bps` - Fee in basis points, must be < 10_000
/// * `amount_in` - Gross input amount provided by the trader
///
/// # Returns
/// * `SwapQuote` with the output amount, fee, and new reserves
/// * `MathError` on empty reserves, zero input, or overflow
pub fn quote_swap(
    reserve_in: u64,
    reserve_out: u64,
    fee_bps: u16,
    amount_in: u64,
) -> Result<SwapQuote, MathError> {
    if reserve_in == 0 || reserve_out == 0 {
        return Err(MathError::InvalidReserves);
    }
    if amount_in == 0 || u64::from(fee_bps) >= BPS_SCALE {
        return Err(MathError::InvalidAmount);
    }

    let fee = (u128::from(amount_in) * u128::from(fee_bps) / u128::from(BPS_SCALE)) as u64;
    let effective_in = amount_in - fee;

    let r_in = u128::from(reserve_in);
    let r_out = u128::from(reserve_out);
    let e = u128::from(effective_in);

    // amount_out < reserve_out holds for any e because e / (r_in + e) < 1
    let amount_out = (e * r_out / (r_in + e)) as u64;
    if amount_out >= reserve_out {
        return Err(MathError::InsufficientLiquidity);
    }

    let new_reserve_in = reserve_in
        .checked_add(amount_in)
        .ok_or(MathError::Overflow)?;

    Ok(SwapQuote {
        amount_out,
        fee,
        new_reserve_in,
        new_reserve_out: reserve_out - amount_out,
    })
}

/// Calculate the first deposit into an empty pool
///
/// Total shares are `floor(sqrt(amount_a * amount_b))`; `MIN_LIQUIDITY` of
/// them are diverted to the pool's locked sink and the remainder goes to the
/// depositor. Both amounts are taken in full.
///
/// # Returns
/// * `DepositQuote` with `locked == MIN_LIQUIDITY`
/// * `MathError::InsufficientLiquidity` if total shares would not exceed the
///   locked minimum
pub fn quote_initial_deposit(amount_a: u64, amount_b: u64) -> Result<DepositQuote, MathError> {
    if amount_a == 0 || amount_b == 0 {
        return Err(MathError::InvalidAmount);
    }

    let total = integer_sqrt(u128::from(amount_a) * u128::from(amount_b)) as u64;
    if total <= MIN_LIQUIDITY {
        return Err(MathError::InsufficientLiquidity);
    }

    Ok(DepositQuote {
        amount_a,
        amount_b,
        shares: total - MIN_LIQUIDITY,
        locked: MIN_LIQUIDITY,
    })
}

/// Calculate a deposit into a pool with existing reserves
///
/// The deposit must preserve the reserve ratio: the B leg implied by
/// `max_a` is used when it fits under `max_b`, otherwise the A leg implied
/// by `max_b` is used. The implied leg is floored and reused as-is for the
/// transfer so the two legs cannot diverge by rounding.
///
/// Shares minted are `min(a_used * supply / reserve_a, b_used * supply /
/// reserve_b)` floored - the limiting asset determines the mint.
///
/// # Arguments
/// * `reserve_a` / `reserve_b` - Current reserves, both nonzero
/// * `supply` - Current total share supply, nonzero
/// * `max_a` / `max_b` - Caller's deposit maxima
pub fn quote_deposit(
    reserve_a: u64,
    reserve_b: u64,
    supply: u64,
    max_a: u64,
    max_b: u64,
) -> Result<DepositQuote, MathError> {
    if reserve_a == 0 || reserve_b == 0 || supply == 0 {
        return Err(MathError::InvalidReserves);
    }
    if max_a == 0 || max_b == 0 {
        return Err(MathError::InvalidAmount);
    }

    let r_a = u128::from(reserve_a);
    let r_b = u128::from(reserve_b);

    let b_implied = u128::from(max_a) * r_b / r_a;
    let (amount_a, amount_b) = if b_implied <= u128::from(max_b) {
        (u128::from(max_a), b_implied)
    } else {
        let a_implied = u128::from(max_b) * r_a / r_b;
        if a_implied > u128::from(max_a) {
            // Unreachable with floor math: b_implied > max_b implies
            // max_b * r_a / r_b < max_a
            return Err(MathError::InvalidAmount);
        }
        (a_implied, u128::from(max_b))
    };

    let shares_a = amount_a * u128::from(supply) / r_a;
    let shares_b = amount_b * u128::from(supply) / r_b;
    let shares = shares_a.min(shares_b);
    if shares == 0 {
        return Err(MathError::InsufficientLiquidity);
    }

    Ok(DepositQuote {
        amount_a: u64::try_from(amount_a).map_err(|_| MathError::Overflow)?,
        amount_b: u64::try_from(amount_b).map_err(|_| MathError::Overflow)?,
        shares: u64::try_from(shares).map_err(|_| MathError::Overflow)?,
        locked: 0,
    })
}

/// Calculate the amounts returned for burning `shares`
///
/// Both legs are `floor(shares * reserve / supply)`; rounding favors the
/// pool symmetrically.
pub fn quote_withdraw(
    reserve_a: u64,
    reserve_b: u64,
    supply: u64,
    shares: u64,
) -> Result<WithdrawQuote, MathError> {
    if supply == 0 {
        return Err(MathError::InvalidReserves);
    }
    if shares == 0 {
        return Err(MathError::InvalidAmount);
    }
    if shares > supply {
        return Err(MathError::InsufficientLiquidity);
    }

    let s = u128::from(shares);
    let amount_a = (s * u128::from(reserve_a) / u128::from(supply)) as u64;
    let amount_b = (s * u128::from(reserve_b) / u128::from(supply)) as u64;

    Ok(WithdrawQuote { amount_a, amount_b })
}
