//! Deterministic address derivation
//!
//! Every piece of core state lives at an address any client can recompute
//! from the configuration id and the (canonically ordered) asset pair. Each
//! derived address carries its own trailing domain tag, so the addresses of
//! one pool never collide with each other or with those of unrelated pools.
//! A caller that supplies the asset pair in non-canonical order derives
//! addresses matching no stored record, which is how "invalid mint order" is
//! rejected downstream.

use solana_program::pubkey::Pubkey;

/// Namespace id for all core derivations
pub const AMM_CORE_ID: Pubkey = Pubkey::new_from_array([
    0x43, 0x50, 0x41, 0x4d, 0x4d, 0x5f, 0x43, 0x4f, 0x52, 0x45, 0x5f, 0x41, 0x44, 0x44, 0x52,
    0x45, 0x53, 0x53, 0x5f, 0x4e, 0x41, 0x4d, 0x45, 0x53, 0x50, 0x41, 0x43, 0x45, 0x5f, 0x56,
    0x31, 0x00,
]);

/// Domain tag for the pool authority address
pub const AUTHORITY_TAG: &[u8] = b"authority";

/// Domain tag for the liquidity-share mint address
pub const LIQUIDITY_TAG: &[u8] = b"liquidity";

/// Domain tag for the asset-A vault address
pub const VAULT_A_TAG: &[u8] = b"vault_a";

/// Domain tag for the asset-B vault address
pub const VAULT_B_TAG: &[u8] = b"vault_b";

/// Domain tag for the locked minimum-liquidity sink address
pub const LOCKED_TAG: &[u8] = b"locked";

/// The full address set of one pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolAddresses {
    /// Pool record address
    pub pool: Pubkey,
    /// Keyless controller of the vaults and the liquidity mint
    pub pool_authority: Pubkey,
    /// Liquidity-share mint address
    pub liquidity_mint: Pubkey,
    /// Reserve account for asset A
    pub vault_a: Pubkey,
    /// Reserve account for asset B
    pub vault_b: Pubkey,
    /// Sink holding the permanently locked minimum-liquidity shares
    pub locked_sink: Pubkey,
}

/// Derive the configuration record address for `config_id`
pub fn derive_config_address(config_id: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[config_id.as_ref()], &AMM_CORE_ID).0
}

/// Derive the address set of the pool for `(config, mint_a, mint_b)`
///
/// Pure and total: derivation succeeds for any inputs, including a
/// non-canonical pair - that pair simply maps to addresses no canonical pool
/// occupies.
pub fn derive_pool_addresses(config: &Pubkey, mint_a: &Pubkey, mint_b: &Pubkey) -> PoolAddresses {
    let base = [config.as_ref(), mint_a.as_ref(), mint_b.as_ref()];
    let derive = |tag: &[u8]| {
        Pubkey::find_program_address(&[base[0], base[1], base[2], tag], &AMM_CORE_ID).0
    };

    PoolAddresses {
        pool: Pubkey::find_program_address(&base, &AMM_CORE_ID).0,
        pool_authority: derive(AUTHORITY_TAG),
        liquidity_mint: derive(LIQUIDITY_TAG),
        vault_a: derive(VAULT_A_TAG),
        vault_b: derive(VAULT_B_TAG),
        locked_sink: derive(LOCKED_TAG),
    }
}
