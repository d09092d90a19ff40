//! The observable object: backing store plus change notification.

use crate::core::{
    DefaultPolicy, ObservableObjectBuilder, PropertyStore, PropertyValue, StoreOptions, Value,
};
use crate::error::{ObservableError, Result};
use crate::notify::{SubscriberRegistry, SubscriptionHandle};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

#[cfg(feature = "metrics")]
use crate::metrics::StoreMetrics;

/// Type alias for declared default-value providers.
pub(crate) type DefaultProvider = Box<dyn Fn() -> Value>;

/// Property storage with change notification.
///
/// Composing types embed an `ObservableObject` and route their property
/// accessors through it, usually via the [`Observable`](crate::core::Observable)
/// trait or the [`observable_property!`](crate::observable_property) macro.
/// Writes that change a stored value notify every listener with the
/// property's name.
///
/// All methods take `&self`; the store uses interior mutability and is
/// therefore neither `Send` nor `Sync`.
///
/// # Examples
///
/// ```rust
/// use observable_object::prelude::*;
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let object = ObservableObject::new();
/// let seen = Rc::new(RefCell::new(Vec::new()));
///
/// let seen_clone = Rc::clone(&seen);
/// let _handle = object.subscribe(move |_, name| seen_clone.borrow_mut().push(name.to_string()));
///
/// assert!(object.set("Name", "Alice"));
/// assert!(!object.set("Name", "Alice"));
/// assert_eq!(object.get::<String>("Name").unwrap(), "Alice");
/// assert_eq!(*seen.borrow(), vec!["Name"]);
/// ```
pub struct ObservableObject {
    /// Current property values
    values: RefCell<PropertyStore>,
    /// Declared default providers, consulted when materializing defaults
    defaults: HashMap<String, DefaultProvider>,
    /// Store configuration
    options: StoreOptions,
    /// Listeners for change notifications
    subscribers: SubscriberRegistry,
    /// Optional metrics collector
    #[cfg(feature = "metrics")]
    metrics: Option<StoreMetrics>,
}

impl ObservableObject {
    /// Create an empty object with default options.
    ///
    /// Unset properties read as their type's zero-value.
    pub fn new() -> Self {
        Self::with_options(StoreOptions::default())
    }

    /// Create an empty object with the given options and no declared defaults.
    pub fn with_options(options: StoreOptions) -> Self {
        Self::from_parts(options, HashMap::new())
    }

    /// Create an object with declared default providers.
    pub(crate) fn from_parts(
        options: StoreOptions,
        defaults: HashMap<String, DefaultProvider>,
    ) -> Self {
        Self {
            values: RefCell::new(PropertyStore::new()),
            defaults,
            options,
            subscribers: SubscriberRegistry::new(),
            #[cfg(feature = "metrics")]
            metrics: None,
        }
    }

    /// Attach a metrics collector to this object.
    ///
    /// The subscriber gauge follows every subscribe and unsubscribe.
    #[cfg(feature = "metrics")]
    pub(crate) fn with_metrics(mut self, metrics: StoreMetrics) -> Self {
        let gauge = metrics.clone();
        self.subscribers.on_count_change(move |count| gauge.update_subscriber_count(count));
        self.metrics = Some(metrics);
        self
    }

    /// Create a builder for declaring defaults and options.
    pub fn builder() -> ObservableObjectBuilder {
        ObservableObjectBuilder::new()
    }

    /// The policy used for reads of never-written properties.
    pub fn default_policy(&self) -> DefaultPolicy {
        self.options.default_policy
    }

    /// Read a property as `T`.
    ///
    /// If nothing is stored under `name`, the result depends on the
    /// [`DefaultPolicy`]: `Transient` returns [`PropertyValue::zero`] and
    /// stores nothing, `Materialize` stores and returns the declared default.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The stored value cannot be read as `T`, or the property is unset
    ///   and `T` has no zero-value, such as `Rc<T>` (`InvalidCast`)
    /// - Defaults are materialized and `name` has no declared default
    ///   (`PropertyNotDeclared`)
    ///
    /// The store is never modified when an error is returned.
    pub fn get<T: PropertyValue>(&self, name: &str) -> Result<T> {
        if let Some(value) = self.values.borrow().get(name) {
            return convert(name, value);
        }

        match self.options.default_policy {
            DefaultPolicy::Transient => T::zero().ok_or_else(|| {
                ObservableError::invalid_cast(name, std::any::type_name::<T>(), Value::Null.kind())
            }),
            DefaultPolicy::Materialize => {
                let provider = self
                    .defaults
                    .get(name)
                    .ok_or_else(|| ObservableError::not_declared(name))?;
                let value = provider();
                let typed = convert(name, &value)?;

                #[cfg(feature = "tracing")]
                tracing::trace!(property = name, kind = value.kind(), "default materialized");

                #[cfg(feature = "metrics")]
                if let Some(metrics) = &self.metrics {
                    metrics.record_default_materialized();
                }

                self.values.borrow_mut().get_or_insert_with(name, || value);
                Ok(typed)
            }
        }
    }

    /// Snapshot of the raw stored value, if any.
    pub fn value(&self, name: &str) -> Option<Value> {
        self.values.borrow().get(name).cloned()
    }

    /// Write a property, notifying listeners if the stored value changed.
    ///
    /// Returns whether a change occurred.
    pub fn set(&self, name: &str, value: impl Into<Value>) -> bool {
        self.set_with(name, value, &[])
    }

    /// Write a property; if the stored value changed, notify `name` and then
    /// every name in `also_notify`.
    ///
    /// The additional names are notified whether or not their own values
    /// changed, which suits computed properties derived from `name`.
    ///
    /// Returns whether a change occurred.
    pub fn set_with(&self, name: &str, value: impl Into<Value>, also_notify: &[&str]) -> bool {
        let changed = self.values.borrow_mut().set(name, value.into());

        #[cfg(feature = "tracing")]
        tracing::trace!(property = name, changed, "property set");

        #[cfg(feature = "metrics")]
        if let Some(metrics) = &self.metrics {
            metrics.record_set(changed);
        }

        if changed {
            self.notify_property_changed(name, also_notify);
        }
        changed
    }

    /// Notify listeners that `name` and every name in `also_notify` changed.
    ///
    /// Each name is dispatched to all listeners, in subscription order,
    /// before the next name is dispatched. Names are not checked against
    /// the store.
    pub fn notify_property_changed(&self, name: &str, also_notify: &[&str]) {
        for property in std::iter::once(name).chain(also_notify.iter().copied()) {
            #[cfg(feature = "metrics")]
            let timer = self.metrics.as_ref().map(StoreMetrics::start_dispatch);

            let listeners = self.subscribers.notify(self, property);

            #[cfg(feature = "tracing")]
            tracing::trace!(property, listeners, "property change dispatched");

            #[cfg(feature = "metrics")]
            if let (Some(metrics), Some(timer)) = (&self.metrics, timer) {
                metrics.record_dispatch(timer, listeners);
            }

            #[cfg(not(any(feature = "tracing", feature = "metrics")))]
            let _ = listeners;
        }
    }

    /// Register a listener called with `(sender, property_name)` on every
    /// notification.
    ///
    /// Returns a handle that unsubscribes the listener when dropped; call
    /// [`SubscriptionHandle::detach`] to keep it for the object's lifetime.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionHandle
    where
        F: Fn(&ObservableObject, &str) + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    /// Get the number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.subscriber_count()
    }

    /// Whether a value is stored under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.values.borrow().contains(name)
    }

    /// Number of stored properties.
    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    /// Whether no property has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }

    /// Names of all stored properties, sorted.
    pub fn property_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.values.borrow().names().map(str::to_string).collect();
        names.sort_unstable();
        names
    }
}

fn convert<T: PropertyValue>(name: &str, value: &Value) -> Result<T> {
    T::from_value(value).ok_or_else(|| {
        ObservableError::invalid_cast(name, std::any::type_name::<T>(), value.kind())
    })
}

impl Default for ObservableObject {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ObservableObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservableObject")
            .field("values", &self.values.borrow())
            .field("declared_defaults", &self.defaults.len())
            .field("options", &self.options)
            .field("subscribers", &self.subscribers)
            .finish()
    }
}
