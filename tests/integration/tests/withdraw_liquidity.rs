//! Withdraw scenarios

use amm_core::{
    process_deposit_liquidity, process_swap, process_withdraw_liquidity, AccountStore, AmmError,
    SwapDirection,
};
use amm_model::MIN_LIQUIDITY;
use integration_tests::{
    new_wallet, TestBench, DEFAULT_SUPPLY, DEPOSIT_AMOUNT_A, DEPOSIT_AMOUNT_B,
};
use ledger_core::TokenLedger;
use solana_sdk::pubkey::Pubkey;

fn funded_pool(bench: &mut TestBench) -> Pubkey {
    bench.create_config();
    let pool_address = bench.create_pool();
    bench.fund(&bench.admin.clone());
    process_deposit_liquidity(
        &bench.store,
        &mut bench.ledger,
        &pool_address,
        &bench.admin,
        DEPOSIT_AMOUNT_A,
        DEPOSIT_AMOUNT_B,
    )
    .unwrap();
    pool_address
}

#[test]
fn withdraw_all_shares_returns_proportional_cut() {
    let mut bench = TestBench::new();
    let pool_address = funded_pool(&mut bench);
    let pool = *bench.store.pool(&pool_address).unwrap();

    let shares = 2_000_000 - MIN_LIQUIDITY;
    let outcome = process_withdraw_liquidity(
        &bench.store,
        &mut bench.ledger,
        &pool_address,
        &bench.admin,
        shares,
    )
    .unwrap();

    // floor(1_999_900 * 4M / 2M) and floor(1_999_900 * 1M / 2M)
    assert_eq!(outcome.amount_a, 3_999_800);
    assert_eq!(outcome.amount_b, 999_950);

    assert_eq!(
        bench.balance_of(&bench.mint_a, &bench.admin),
        DEFAULT_SUPPLY - DEPOSIT_AMOUNT_A + 3_999_800
    );
    assert_eq!(
        bench.balance_of(&bench.mint_b, &bench.admin),
        DEFAULT_SUPPLY - DEPOSIT_AMOUNT_B + 999_950
    );

    // The locked shares and their backing reserves stay behind
    assert_eq!(bench.ledger.supply(&pool.liquidity_mint), MIN_LIQUIDITY);
    assert_eq!(bench.ledger.balance(&pool.locked_sink), MIN_LIQUIDITY);
    assert_eq!(bench.ledger.balance(&pool.vault_a), 200);
    assert_eq!(bench.ledger.balance(&pool.vault_b), 50);
}

#[test]
fn withdraw_after_swap_includes_fee_growth() {
    let mut bench = TestBench::new();
    let pool_address = funded_pool(&mut bench);

    let trader = new_wallet();
    bench.fund(&trader);
    process_swap(
        &bench.store,
        &mut bench.ledger,
        &pool_address,
        SwapDirection::AtoB,
        1_000_000,
        1,
        &trader,
    )
    .unwrap();

    // Reserves are now (5M, 808_081); the depositor's cut of A grew past
    // the original deposit because the fee stayed in the pool
    let shares = 2_000_000 - MIN_LIQUIDITY;
    let outcome = process_withdraw_liquidity(
        &bench.store,
        &mut bench.ledger,
        &pool_address,
        &bench.admin,
        shares,
    )
    .unwrap();

    assert_eq!(outcome.amount_a, 4_999_750);
    assert_eq!(outcome.amount_b, 808_040);
    assert!(outcome.amount_a > DEPOSIT_AMOUNT_A);
}

#[test]
fn withdraw_more_than_held_fails_atomically() {
    let mut bench = TestBench::new();
    let pool_address = funded_pool(&mut bench);
    let pool = *bench.store.pool(&pool_address).unwrap();

    // Supply is 2M but the depositor only holds 1_999_900
    let result = process_withdraw_liquidity(
        &bench.store,
        &mut bench.ledger,
        &pool_address,
        &bench.admin,
        2_000_000,
    );
    assert_eq!(result, Err(AmmError::InsufficientFunds));

    assert_eq!(bench.ledger.balance(&pool.vault_a), DEPOSIT_AMOUNT_A);
    assert_eq!(bench.ledger.balance(&pool.vault_b), DEPOSIT_AMOUNT_B);
    assert_eq!(bench.ledger.supply(&pool.liquidity_mint), 2_000_000);
}

#[test]
fn withdraw_more_than_supply_fails() {
    let mut bench = TestBench::new();
    let pool_address = funded_pool(&mut bench);

    let result = process_withdraw_liquidity(
        &bench.store,
        &mut bench.ledger,
        &pool_address,
        &bench.admin,
        2_000_001,
    );
    assert_eq!(result, Err(AmmError::InsufficientFunds));
}

#[test]
fn withdraw_without_shares_fails() {
    let mut bench = TestBench::new();
    let pool_address = funded_pool(&mut bench);

    let stranger = new_wallet();
    let result = process_withdraw_liquidity(
        &bench.store,
        &mut bench.ledger,
        &pool_address,
        &stranger,
        1,
    );
    assert_eq!(result, Err(AmmError::InsufficientFunds));
}

#[test]
fn withdraw_zero_shares_fails() {
    let mut bench = TestBench::new();
    let pool_address = funded_pool(&mut bench);

    let result = process_withdraw_liquidity(
        &bench.store,
        &mut bench.ledger,
        &pool_address,
        &bench.admin,
        0,
    );
    assert_eq!(result, Err(AmmError::InvalidAmount));
}
