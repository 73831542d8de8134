//! In-memory dashboard store
//!
//! A flat table of named numbers and booleans with fixed capacity. The
//! firmware keeps one for the climb tunables and telemetry and streams it
//! over the debug link.

use heapless::{String, Vec};

use astro_core::traits::{KeyValueStore, StoreError};

/// Longest key the dashboard accepts
pub const MAX_KEY_LEN: usize = 32;

/// Default number of entries
pub const DEFAULT_CAPACITY: usize = 32;

/// Stored value
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Value {
    Number(f32),
    Boolean(bool),
}

/// Fixed-capacity key-value table
#[derive(Debug, Default)]
pub struct Dashboard<const N: usize = DEFAULT_CAPACITY> {
    entries: Vec<(String<MAX_KEY_LEN>, Value), N>,
}

impl<const N: usize> Dashboard<N> {
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up any value
    pub fn get(&self, key: &str) -> Option<Value> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| *v)
    }

    /// All entries, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Value)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    fn put(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        if let Some((_, slot)) = self.entries.iter_mut().find(|(k, _)| k.as_str() == key) {
            return match (*slot, value) {
                (Value::Number(_), Value::Number(_)) | (Value::Boolean(_), Value::Boolean(_)) => {
                    *slot = value;
                    Ok(())
                }
                _ => Err(StoreError::TypeMismatch),
            };
        }

        let mut owned = String::new();
        owned.push_str(key).map_err(|_| StoreError::KeyTooLong)?;
        self.entries
            .push((owned, value))
            .map_err(|_| StoreError::Full)
    }
}

impl<const N: usize> KeyValueStore for Dashboard<N> {
    fn get_number(&self, key: &str) -> Option<f32> {
        match self.get(key)? {
            Value::Number(n) => Some(n),
            Value::Boolean(_) => None,
        }
    }

    fn put_number(&mut self, key: &str, value: f32) -> Result<(), StoreError> {
        self.put(key, Value::Number(value))
    }

    fn get_boolean(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            Value::Boolean(b) => Some(b),
            Value::Number(_) => None,
        }
    }

    fn put_boolean(&mut self, key: &str, value: bool) -> Result<(), StoreError> {
        self.put(key, Value::Boolean(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_and_get() {
        let mut store: Dashboard = Dashboard::new();
        store.put_number("Lean", -1.5).unwrap();
        store.put_boolean("Front Extended", true).unwrap();

        assert_eq!(store.get_number("Lean"), Some(-1.5));
        assert_eq!(store.get_boolean("Front Extended"), Some(true));
        assert_eq!(store.get_number("Missing"), None);
        assert_eq!(store.number_or("Missing", 0.25), 0.25);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_overwrite_keeps_one_entry() {
        let mut store: Dashboard = Dashboard::new();
        store.put_number("Lean", 1.0).unwrap();
        store.put_number("Lean", 2.0).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get_number("Lean"), Some(2.0));
    }

    #[test]
    fn test_type_mismatch() {
        let mut store: Dashboard = Dashboard::new();
        store.put_boolean("Climb Debug", false).unwrap();
        assert_eq!(
            store.put_number("Climb Debug", 1.0),
            Err(StoreError::TypeMismatch)
        );
        assert_eq!(store.get_number("Climb Debug"), None);
    }

    #[test]
    fn test_full() {
        let mut store: Dashboard<2> = Dashboard::new();
        store.put_number("a", 1.0).unwrap();
        store.put_number("b", 2.0).unwrap();
        assert_eq!(store.put_number("c", 3.0), Err(StoreError::Full));
        // Existing keys can still be updated
        assert_eq!(store.put_number("a", 4.0), Ok(()));
    }

    #[test]
    fn test_key_too_long() {
        let mut store: Dashboard = Dashboard::new();
        let key = "This key is much longer than thirty-two bytes";
        assert_eq!(store.put_number(key, 1.0), Err(StoreError::KeyTooLong));
        assert!(store.is_empty());
    }

    #[test]
    fn test_iter_in_insertion_order() {
        let mut store: Dashboard = Dashboard::new();
        store.put_number("b", 1.0).unwrap();
        store.put_boolean("a", true).unwrap();
        let keys: std::vec::Vec<&str> = store.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["b", "a"]);
    }
}
