//! Core state records

mod config;
mod pool;

pub use config::AmmConfig;
pub use pool::Pool;
