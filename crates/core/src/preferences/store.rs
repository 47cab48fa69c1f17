//! Key-value storage seam for console state.

use std::collections::HashMap;

use super::error::PreferenceError;

/// String key-value storage.
pub trait PreferenceStore {
    /// Reads a value.
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    /// Writes a value, replacing any previous one.
    fn set(&mut self, key: &str, value: String) -> Result<(), PreferenceError>;

    /// Deletes a value. Missing keys are not an error.
    fn remove(&mut self, key: &str) -> Result<(), PreferenceError>;
}

/// Store that lives as long as the session.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PreferenceError> {
        self.values.remove(key);
        Ok(())
    }
}
