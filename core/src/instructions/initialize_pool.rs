//! Create-pool operation - register the canonical pool for an asset pair

use ledger_core::TokenLedger;
use solana_program::pubkey::Pubkey;

use crate::error::AmmError;
use crate::pda::{derive_config_address, derive_pool_addresses};
use crate::state::Pool;
use crate::store::AccountStore;

/// Create the pool for `(config_id, mint_a, mint_b)`
///
/// Registers the pool record, the two empty vaults, the liquidity-share
/// mint, and the locked-share sink, all at addresses derived from the
/// configuration address and the pair. The pair must be distinct and in
/// canonical (byte-lexicographic) order; the swapped pair derives different
/// addresses and is rejected here rather than creating a shadow pool.
///
/// # Preconditions checked
/// - Configuration exists for `config_id`
/// - `mint_a != mint_b`, `mint_a < mint_b`
/// - Both asset mints are registered with the ledger
/// - No pool exists yet for the triple
///
/// # Returns
/// The derived pool address.
pub fn process_initialize_pool<S: AccountStore, L: TokenLedger>(
    store: &mut S,
    ledger: &mut L,
    config_id: &Pubkey,
    mint_a: Pubkey,
    mint_b: Pubkey,
) -> Result<Pubkey, AmmError> {
    let config_address = derive_config_address(config_id);
    if store.config(&config_address).is_none() {
        return Err(AmmError::ConfigNotFound);
    }

    Pool::validate_pair(&mint_a, &mint_b)?;

    if !ledger.has_mint(&mint_a) || !ledger.has_mint(&mint_b) {
        return Err(AmmError::Ledger(ledger_core::LedgerError::UnknownMint));
    }

    let addresses = derive_pool_addresses(&config_address, &mint_a, &mint_b);
    if store.pool(&addresses.pool).is_some() {
        return Err(AmmError::PoolAlreadyExists);
    }

    let pool = Pool::new(config_address, mint_a, mint_b, &addresses)?;

    // All validations passed; the creations below cannot fail against a
    // consistent ledger, so the record insert last keeps this all-or-nothing.
    ledger.create_mint(addresses.liquidity_mint, addresses.pool_authority)?;
    ledger.create_account(addresses.vault_a, mint_a, addresses.pool_authority)?;
    ledger.create_account(addresses.vault_b, mint_b, addresses.pool_authority)?;
    ledger.create_account(
        addresses.locked_sink,
        addresses.liquidity_mint,
        addresses.pool_authority,
    )?;

    store.insert_pool(addresses.pool, pool)?;

    log::debug!("pool {} created for pair ({mint_a}, {mint_b})", addresses.pool);
    Ok(addresses.pool)
}
