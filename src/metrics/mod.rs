//! Built-in metrics for observable objects.
//!
//! Provides OpenTelemetry metrics tracking:
//! - Property writes and actual changes
//! - Notifications dispatched and dispatch duration
//! - Defaults materialized on first read
//! - Active subscribers
//!
//! # Examples
//!
//! ```rust,no_run
//! use observable_object::prelude::*;
//! use opentelemetry::global;
//!
//! let meter = global::meter("my-app");
//!
//! let object = ObservableObject::builder()
//!     .with_metrics(meter)
//!     .build();
//! object.set("Name", "Alice");
//! ```

mod store_metrics;

pub use store_metrics::StoreMetrics;
