//! Store configuration.

use serde::{Deserialize, Serialize};

/// How reads of never-written properties are answered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultPolicy {
    /// Return the requested type's zero-value without storing anything.
    ///
    /// The first write of any value, including the default itself, is
    /// reported as a change.
    #[default]
    Transient,

    /// Store the default produced by the property's declared provider on
    /// first read. Reading an undeclared property fails with
    /// [`PropertyNotDeclared`].
    ///
    /// [`PropertyNotDeclared`]: crate::error::ObservableError::PropertyNotDeclared
    Materialize,
}

/// Options controlling an [`ObservableObject`](crate::core::ObservableObject).
///
/// Deserializable so applications can carry it in their own configuration.
///
/// # Examples
///
/// ```rust
/// use observable_object::core::{DefaultPolicy, StoreOptions};
///
/// let options: StoreOptions =
///     serde_json::from_str(r#"{ "default_policy": "materialize" }"#).unwrap();
/// assert_eq!(options.default_policy, DefaultPolicy::Materialize);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreOptions {
    /// Policy for reads of properties that were never written.
    pub default_policy: DefaultPolicy,
}

impl StoreOptions {
    /// Options with the given default policy.
    pub fn with_policy(default_policy: DefaultPolicy) -> Self {
        Self { default_policy }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_transient() {
        assert_eq!(StoreOptions::default().default_policy, DefaultPolicy::Transient);
    }

    #[test]
    fn test_deserialize_policy() {
        let options: StoreOptions =
            serde_json::from_str(r#"{"default_policy":"materialize"}"#).unwrap();
        assert_eq!(options, StoreOptions::with_policy(DefaultPolicy::Materialize));

        let options: StoreOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options.default_policy, DefaultPolicy::Transient);
    }

    #[test]
    fn test_serialize_policy() {
        let json =
            serde_json::to_string(&StoreOptions::with_policy(DefaultPolicy::Transient)).unwrap();
        assert_eq!(json, r#"{"default_policy":"transient"}"#);
    }
}
