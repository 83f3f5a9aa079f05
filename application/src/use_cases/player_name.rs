//! Player Name use case
//!
//! The display name is generated on the first visit of a session and
//! read back from session storage afterwards.

use crate::ports::session_storage::SessionStorage;
use rand::Rng;
use slapworld_domain::PlayerName;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Session storage key holding the player name
pub const PLAYER_NAME_KEY: &str = "slapworld.player_name";

/// Use case for resolving the current player's display name
pub struct PlayerNameUseCase<S: SessionStorage + ?Sized> {
    storage: Arc<S>,
}

impl<S: SessionStorage + ?Sized> PlayerNameUseCase<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    pub fn resolve(&self) -> PlayerName {
        self.resolve_with(&mut rand::thread_rng())
    }

    pub fn resolve_with<R: Rng + ?Sized>(&self, rng: &mut R) -> PlayerName {
        if let Some(stored) = self.storage.get(PLAYER_NAME_KEY) {
            match PlayerName::try_new(stored) {
                Ok(name) => {
                    debug!("Using stored player name {}", name);
                    return name;
                }
                Err(e) => warn!("Ignoring stored player name: {}", e),
            }
        }

        let name = PlayerName::generate(rng);
        self.storage.set(PLAYER_NAME_KEY, name.as_str());
        info!("Generated player name {}", name);
        name
    }
}
