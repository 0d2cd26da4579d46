//! Ledger error model.

use thiserror::Error;

/// Result type used across the ledger domain.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger-level error.
///
/// Every documented ledger operation is total except logo replacement,
/// whose only failure mode is the size-limit rejection below.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// A logo payload exceeded the fixed size limit.
    #[error("logo image exceeds the 1 MiB limit ({size} bytes)")]
    LogoTooLarge { size: usize },
}

impl LedgerError {
    pub fn logo_too_large(size: usize) -> Self {
        Self::LogoTooLarge { size }
    }
}
