//! Builder for constructing ObservableObject instances.

use crate::core::object::DefaultProvider;
use crate::core::{DefaultPolicy, ObservableObject, StoreOptions, Value};
use std::collections::HashMap;

#[cfg(feature = "metrics")]
use crate::metrics::StoreMetrics;

/// Builder for constructing an [`ObservableObject`].
///
/// Declared defaults are only consulted under
/// [`DefaultPolicy::Materialize`]; with the default `Transient` policy unset
/// properties read as their type's zero-value and declarations are ignored.
///
/// # Examples
///
/// ```rust
/// use observable_object::prelude::*;
///
/// let object = ObservableObject::builder()
///     .default_policy(DefaultPolicy::Materialize)
///     .declare::<String>("Name")
///     .with_default("Age", || 18u32)
///     .build();
///
/// assert_eq!(object.get::<u32>("Age").unwrap(), 18);
/// assert!(object.get::<bool>("Unknown").is_err());
/// ```
pub struct ObservableObjectBuilder {
    options: StoreOptions,
    defaults: HashMap<String, DefaultProvider>,
    #[cfg(feature = "metrics")]
    metrics: Option<StoreMetrics>,
}

impl ObservableObjectBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            options: StoreOptions::default(),
            defaults: HashMap::new(),
            #[cfg(feature = "metrics")]
            metrics: None,
        }
    }

    /// Replace all options, e.g. with ones loaded from a config file.
    pub fn options(mut self, options: StoreOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the policy for reads of never-written properties.
    pub fn default_policy(mut self, policy: DefaultPolicy) -> Self {
        self.options.default_policy = policy;
        self
    }

    /// Declare a property whose default is `T::default()`.
    pub fn declare<T>(self, name: impl Into<String>) -> Self
    where
        T: Into<Value> + Default + 'static,
    {
        self.with_default(name, T::default)
    }

    /// Declare a property with a custom default provider.
    ///
    /// The provider runs each time the default has to be materialized; a
    /// later declaration of the same name replaces the earlier one.
    pub fn with_default<V, F>(mut self, name: impl Into<String>, provider: F) -> Self
    where
        V: Into<Value> + 'static,
        F: Fn() -> V + 'static,
    {
        self.defaults
            .insert(name.into(), Box::new(move || -> Value { provider().into() }));
        self
    }

    /// Record store operations with OpenTelemetry.
    #[cfg(feature = "metrics")]
    pub fn with_metrics(mut self, meter: opentelemetry::metrics::Meter) -> Self {
        self.metrics = Some(StoreMetrics::new(meter));
        self
    }

    /// Build the object.
    pub fn build(self) -> ObservableObject {
        let object = ObservableObject::from_parts(self.options, self.defaults);

        #[cfg(feature = "metrics")]
        let object = match self.metrics {
            Some(metrics) => object.with_metrics(metrics),
            None => object,
        };

        object
    }
}

impl Default for ObservableObjectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let object = ObservableObjectBuilder::new().build();
        assert_eq!(object.default_policy(), DefaultPolicy::Transient);
        assert!(object.is_empty());
    }

    #[test]
    fn test_builder_options() {
        let object = ObservableObject::builder()
            .options(StoreOptions::with_policy(DefaultPolicy::Materialize))
            .declare::<Option<String>>("Nickname")
            .build();

        assert_eq!(object.default_policy(), DefaultPolicy::Materialize);
        assert_eq!(object.get::<Option<String>>("Nickname").unwrap(), None);
        assert!(object.contains("Nickname"));
    }

    #[test]
    fn test_redeclare_replaces_provider() {
        let object = ObservableObject::builder()
            .default_policy(DefaultPolicy::Materialize)
            .with_default("Level", || 1u8)
            .with_default("Level", || 5u8)
            .build();

        assert_eq!(object.get::<u8>("Level").unwrap(), 5);
    }

    #[test]
    fn test_declarations_ignored_when_transient() {
        let object = ObservableObject::builder()
            .with_default("Level", || 5u8)
            .build();

        assert_eq!(object.get::<u8>("Level").unwrap(), 0);
        assert!(!object.contains("Level"));
    }
}
