//! Name-keyed backing storage for property values.

use crate::core::Value;
use std::collections::HashMap;

/// Backing store mapping property names to their current values.
///
/// The store knows nothing about listeners or default policies; it only
/// keeps values and reports whether a write changed anything.
#[derive(Debug, Default)]
pub struct PropertyStore {
    values: HashMap<String, Value>,
}

impl PropertyStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the stored value for `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Return the stored value for `name`, inserting the result of `default`
    /// first if the name is absent.
    pub fn get_or_insert_with(&mut self, name: &str, default: impl FnOnce() -> Value) -> &Value {
        self.values.entry(name.to_string()).or_insert_with(default)
    }

    /// Store `value` under `name`.
    ///
    /// Returns `true` if the name was absent or the stored value differed
    /// (see [`Value`] for the equality rules), `false` if nothing changed.
    pub fn set(&mut self, name: &str, value: Value) -> bool {
        match self.values.get_mut(name) {
            Some(current) if *current == value => false,
            Some(current) => {
                *current = value;
                true
            }
            None => {
                self.values.insert(name.to_string(), value);
                true
            }
        }
    }

    /// Whether a value is stored under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of stored properties.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no property has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Names of all stored properties, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_reports_changes() {
        let mut store = PropertyStore::new();
        assert!(store.set("Name", Value::from("Alice")));
        assert!(!store.set("Name", Value::from("Alice")));
        assert!(store.set("Name", Value::from("Bob")));
        assert_eq!(store.get("Name"), Some(&Value::from("Bob")));
    }

    #[test]
    fn test_first_set_of_default_is_a_change() {
        let mut store = PropertyStore::new();
        assert!(store.set("Age", Value::from(0i32)));
        assert!(!store.set("Age", Value::from(0i32)));
    }

    #[test]
    fn test_get_or_insert_with() {
        let mut store = PropertyStore::new();
        assert_eq!(
            store.get_or_insert_with("Age", || Value::from(0i32)),
            &Value::Int(0)
        );
        // Existing entries are not overwritten
        assert_eq!(
            store.get_or_insert_with("Age", || Value::from(5i32)),
            &Value::Int(0)
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_introspection() {
        let mut store = PropertyStore::new();
        assert!(store.is_empty());

        store.set("A", Value::Null);
        store.set("B", Value::Bool(true));

        assert!(store.contains("A"));
        assert!(!store.contains("C"));
        let mut names: Vec<_> = store.names().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["A", "B"]);
    }
}
