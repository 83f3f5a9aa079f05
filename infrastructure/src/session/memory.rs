//! Process-lifetime session storage

use slapworld_application::SessionStorage;
use std::collections::HashMap;
use std::sync::RwLock;

/// Session storage that lives exactly as long as the process.
///
/// One run of the game is one session, so nothing is written to disk.
#[derive(Debug, Default)]
pub struct InMemorySessionStorage {
    values: RwLock<HashMap<String, String>>,
}

impl InMemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for InMemorySessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.write() {
            values.insert(key.to_string(), value.to_string());
        }
    }
}
