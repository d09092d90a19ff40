//! Trait giving composing types the observable property API.

use crate::core::{ObservableObject, PropertyValue, Value};
use crate::error::Result;
use crate::notify::SubscriptionHandle;

/// Implemented by types that embed an [`ObservableObject`].
///
/// Only [`observable`](Observable::observable) has to be provided; every
/// other method forwards to the embedded object.
///
/// # Examples
///
/// ```rust
/// use observable_object::prelude::*;
///
/// #[derive(Default)]
/// struct Counter {
///     props: ObservableObject,
/// }
///
/// impl Observable for Counter {
///     fn observable(&self) -> &ObservableObject {
///         &self.props
///     }
/// }
///
/// impl Counter {
///     fn count(&self) -> u32 {
///         self.get("count").unwrap_or_default()
///     }
///
///     fn increment(&self) {
///         self.set("count", self.count() + 1);
///     }
/// }
///
/// let counter = Counter::default();
/// counter.increment();
/// counter.increment();
/// assert_eq!(counter.count(), 2);
/// ```
pub trait Observable {
    /// The embedded observable object.
    fn observable(&self) -> &ObservableObject;

    /// Read a property. See [`ObservableObject::get`].
    fn get<T: PropertyValue>(&self, name: &str) -> Result<T> {
        self.observable().get(name)
    }

    /// Write a property. See [`ObservableObject::set`].
    fn set<V: Into<Value>>(&self, name: &str, value: V) -> bool {
        self.observable().set(name, value)
    }

    /// Write a property and notify additional names on change.
    /// See [`ObservableObject::set_with`].
    fn set_with<V: Into<Value>>(&self, name: &str, value: V, also_notify: &[&str]) -> bool {
        self.observable().set_with(name, value, also_notify)
    }

    /// Fire notifications without writing. See
    /// [`ObservableObject::notify_property_changed`].
    fn notify_property_changed(&self, name: &str, also_notify: &[&str]) {
        self.observable().notify_property_changed(name, also_notify);
    }

    /// Register a listener. See [`ObservableObject::subscribe`].
    fn subscribe<F>(&self, callback: F) -> SubscriptionHandle
    where
        F: Fn(&ObservableObject, &str) + 'static,
    {
        self.observable().subscribe(callback)
    }
}

impl Observable for ObservableObject {
    fn observable(&self) -> &ObservableObject {
        self
    }
}
