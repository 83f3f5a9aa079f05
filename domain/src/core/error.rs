//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown country stat: {0}")]
    UnknownStat(String),

    #[error("Invalid player name: {0:?}")]
    InvalidPlayerName(String),
}
