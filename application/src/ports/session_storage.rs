//! Session-scoped key-value storage port

/// Key-value storage that lives as long as the player's session
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);
}
