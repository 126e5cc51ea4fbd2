//! AMM configuration record

use solana_program::pubkey::Pubkey;

use crate::error::AmmError;
use amm_model::BPS_SCALE;

/// Global AMM parameters, one record per `config_id`
///
/// Immutable after creation; pools link back to it through their `config`
/// field and read the fee from here on every swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmmConfig {
    /// Caller-supplied uniqueness identifier
    pub config_id: Pubkey,
    /// Identity authorized for privileged operations
    pub admin: Pubkey,
    /// Swap fee in basis points, strictly below 10000
    pub fee_bps: u16,
}

impl AmmConfig {
    /// Validate and build a configuration record
    pub fn new(config_id: Pubkey, admin: Pubkey, fee_bps: u16) -> Result<Self, AmmError> {
        if u64::from(fee_bps) >= BPS_SCALE {
            return Err(AmmError::InvalidFee);
        }
        Ok(Self {
            config_id,
            admin,
            fee_bps,
        })
    }
}
