//! Player display name

use crate::core::error::DomainError;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Display name of the current player (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerName(String);

impl PlayerName {
    pub fn try_new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::InvalidPlayerName(name));
        }
        Ok(Self(name))
    }

    /// A throwaway name such as `Player-0427`
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(format!("Player-{:04}", rng.gen_range(0..10_000)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
