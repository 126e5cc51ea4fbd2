//! Keyed record store
//!
//! Configuration and pool records are held by the external ledger
//! collaborator in a store keyed by derived address; the core only reads and
//! writes records through this interface and keeps no process-wide state of
//! its own. [`MemoryStore`] is the in-process implementation used by the
//! test harness.

use std::collections::BTreeMap;

use solana_program::pubkey::Pubkey;

use crate::error::AmmError;
use crate::state::{AmmConfig, Pool};

/// Record store consumed by the operation processors
pub trait AccountStore {
    /// Configuration record at a derived address, if any
    fn config(&self, address: &Pubkey) -> Option<&AmmConfig>;

    /// Pool record at a derived address, if any
    fn pool(&self, address: &Pubkey) -> Option<&Pool>;

    /// Insert a configuration record; fails if the address is occupied
    fn insert_config(&mut self, address: Pubkey, config: AmmConfig) -> Result<(), AmmError>;

    /// Insert a pool record; fails if the address is occupied
    fn insert_pool(&mut self, address: Pubkey, pool: Pool) -> Result<(), AmmError>;
}

/// In-memory record store keyed by derived address
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    configs: BTreeMap<Pubkey, AmmConfig>,
    pools: BTreeMap<Pubkey, Pool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccountStore for MemoryStore {
    fn config(&self, address: &Pubkey) -> Option<&AmmConfig> {
        self.configs.get(address)
    }

    fn pool(&self, address: &Pubkey) -> Option<&Pool> {
        self.pools.get(address)
    }

    fn insert_config(&mut self, address: Pubkey, config: AmmConfig) -> Result<(), AmmError> {
        if self.configs.contains_key(&address) {
            return Err(AmmError::ConfigAlreadyExists);
        }
        self.configs.insert(address, config);
        Ok(())
    }

    fn insert_pool(&mut self, address: Pubkey, pool: Pool) -> Result<(), AmmError> {
        if self.pools.contains_key(&address) {
            return Err(AmmError::PoolAlreadyExists);
        }
        self.pools.insert(address, pool);
        Ok(())
    }
}
