//! # observable-object
//!
//! Property storage with change notification for composing types.
//!
//! ## Overview
//!
//! `observable-object` provides the building block behind "observable"
//! view models and settings objects:
//! - A name-keyed backing store holding values of many types
//! - Change detection on every write
//! - Synchronous, ordered notification of registered listeners
//! - Configurable handling of reads of never-written properties
//!
//! ## Quick Start
//!
//! ```rust
//! use observable_object::observable_property;
//! use observable_object::prelude::*;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! #[derive(Default)]
//! struct Settings {
//!     props: ObservableObject,
//! }
//!
//! impl Observable for Settings {
//!     fn observable(&self) -> &ObservableObject {
//!         &self.props
//!     }
//! }
//!
//! impl Settings {
//!     observable_property!(pub theme / set_theme: String);
//! }
//!
//! let settings = Settings::default();
//! let changes = Rc::new(RefCell::new(Vec::new()));
//!
//! let changes_clone = Rc::clone(&changes);
//! let _handle =
//!     settings.subscribe(move |_, name| changes_clone.borrow_mut().push(name.to_string()));
//!
//! settings.set_theme("dark".to_string());
//! settings.set_theme("dark".to_string());
//!
//! assert_eq!(*changes.borrow(), vec!["theme"]);
//! ```
//!
//! ## Default Policies
//!
//! - [`DefaultPolicy::Transient`](core::DefaultPolicy::Transient) (default):
//!   unset properties read as the type's zero-value and nothing is stored.
//! - [`DefaultPolicy::Materialize`](core::DefaultPolicy::Materialize): unset
//!   properties store the default declared on the builder; reading an
//!   undeclared property is an error.
//!
//! ## Feature Flags
//!
//! - `tracing` (default): emit `tracing` events for writes and notifications
//! - `metrics`: record OpenTelemetry metrics via
//!   [`ObservableObjectBuilder::with_metrics`](core::ObservableObjectBuilder)
//!
//! Objects are single-threaded: they are neither `Send` nor `Sync`.

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod notify;

mod macros;

#[cfg(feature = "metrics")]
pub mod metrics;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::core::{
        DefaultPolicy, Observable, ObservableObject, ObservableObjectBuilder, PropertyValue,
        StoreOptions, Value,
    };
    pub use crate::error::{ObservableError, Result};
    pub use crate::notify::SubscriptionHandle;
}
