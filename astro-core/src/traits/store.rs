//! Key-value store trait
//!
//! The operator dashboard is a flat table of named numbers and booleans.
//! The climb reads its tunables from it and the climber publishes its
//! telemetry into it.

/// Errors from store writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StoreError {
    /// No room for another key
    Full,
    /// Key longer than the store supports
    KeyTooLong,
    /// Key exists with a different value type
    TypeMismatch,
}

/// Flat key-value store of numbers and booleans
pub trait KeyValueStore {
    /// Get a number, or None if the key is missing (or not a number)
    fn get_number(&self, key: &str) -> Option<f32>;

    /// Set a number
    fn put_number(&mut self, key: &str, value: f32) -> Result<(), StoreError>;

    /// Get a boolean, or None if the key is missing (or not a boolean)
    fn get_boolean(&self, key: &str) -> Option<bool>;

    /// Set a boolean
    fn put_boolean(&mut self, key: &str, value: bool) -> Result<(), StoreError>;

    /// Get a number, falling back to `default` when missing
    fn number_or(&self, key: &str, default: f32) -> f32 {
        self.get_number(key).unwrap_or(default)
    }

    /// Get a boolean, falling back to `default` when missing
    fn boolean_or(&self, key: &str, default: bool) -> bool {
        self.get_boolean(key).unwrap_or(default)
    }
}
