//! Create-config operation - register a new AMM configuration

use solana_program::pubkey::Pubkey;

use crate::error::AmmError;
use crate::pda::derive_config_address;
use crate::state::AmmConfig;
use crate::store::AccountStore;

/// Create the configuration record for `config_id`
///
/// The record is stored at the address derived from `config_id` and is
/// immutable afterwards; a second creation under the same id fails.
///
/// # Arguments
/// * `store` - Record store owned by the ledger collaborator
/// * `config_id` - Caller-supplied uniqueness identifier
/// * `admin` - Identity authorized for privileged operations
/// * `fee_bps` - Swap fee in basis points, must be below 10000
///
/// # Returns
/// The derived configuration address, or `InvalidFee` /
/// `ConfigAlreadyExists`.
pub fn process_initialize_amm<S: AccountStore>(
    store: &mut S,
    config_id: Pubkey,
    admin: Pubkey,
    fee_bps: u16,
) -> Result<Pubkey, AmmError> {
    let config = AmmConfig::new(config_id, admin, fee_bps)?;

    let address = derive_config_address(&config_id);
    store.insert_config(address, config)?;

    log::debug!("config {address} created (id {config_id}, fee {fee_bps} bps)");
    Ok(address)
}
