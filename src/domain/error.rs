//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid split requests.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("part count must be at least 1")]
    ZeroPartCount,

    #[error("part size must be at least 1 byte")]
    ZeroPartSize,
}
