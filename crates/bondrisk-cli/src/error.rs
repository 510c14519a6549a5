//! CLI error types.

use thiserror::Error;

use bondrisk_config::ConfigError;
use bondrisk_core::BondRiskError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input rejected by the analytics core.
    #[error(transparent)]
    Analytics(#[from] BondRiskError),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
