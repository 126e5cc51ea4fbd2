//! Pool record

use solana_program::pubkey::Pubkey;

use crate::error::AmmError;
use crate::pda::PoolAddresses;

/// Per-asset-pair pool state
///
/// The vaults and the liquidity mint are controlled by the keyless
/// `pool_authority` for the pool's lifetime; reserves are the live balances
/// of the two vault accounts, read from the ledger at the start of every
/// operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pool {
    /// Address of the owning configuration record
    pub config: Pubkey,
    /// Asset A mint (canonically the byte-lexicographically smaller one)
    pub mint_a: Pubkey,
    /// Asset B mint
    pub mint_b: Pubkey,
    /// Keyless controller of vaults and the liquidity mint
    pub pool_authority: Pubkey,
    /// Liquidity-share mint
    pub liquidity_mint: Pubkey,
    /// Reserve account for asset A
    pub vault_a: Pubkey,
    /// Reserve account for asset B
    pub vault_b: Pubkey,
    /// Holder of the permanently locked minimum-liquidity shares
    pub locked_sink: Pubkey,
}

impl Pool {
    /// Reject identical or non-canonically ordered asset pairs
    pub fn validate_pair(mint_a: &Pubkey, mint_b: &Pubkey) -> Result<(), AmmError> {
        if mint_a == mint_b {
            return Err(AmmError::DuplicateAsset);
        }
        if mint_a.to_bytes() > mint_b.to_bytes() {
            return Err(AmmError::InvalidAssetOrdering);
        }
        Ok(())
    }

    /// Build the record from a validated pair and its derived addresses
    pub fn new(
        config: Pubkey,
        mint_a: Pubkey,
        mint_b: Pubkey,
        addresses: &PoolAddresses,
    ) -> Result<Self, AmmError> {
        Self::validate_pair(&mint_a, &mint_b)?;
        Ok(Self {
            config,
            mint_a,
            mint_b,
            pool_authority: addresses.pool_authority,
            liquidity_mint: addresses.liquidity_mint,
            vault_a: addresses.vault_a,
            vault_b: addresses.vault_b,
            locked_sink: addresses.locked_sink,
        })
    }
}
