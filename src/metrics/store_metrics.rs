//! Observable object metrics tracking using OpenTelemetry.

use opentelemetry::metrics::{Counter, Gauge, Histogram, Meter};
use std::time::Instant;

/// Metrics collector for property writes and notifications.
///
/// # Examples
///
/// ```rust,no_run
/// use observable_object::metrics::StoreMetrics;
/// use opentelemetry::global;
///
/// let meter = global::meter("observable-object");
/// let metrics = StoreMetrics::new(meter);
///
/// metrics.record_set(true);
/// let timer = metrics.start_dispatch();
/// // ... invoke listeners ...
/// metrics.record_dispatch(timer, 2);
/// ```
#[derive(Clone)]
pub struct StoreMetrics {
    set_calls: Counter<u64>,
    changes: Counter<u64>,
    notifications: Counter<u64>,
    dispatch_duration: Histogram<f64>,
    defaults_materialized: Counter<u64>,
    active_subscribers: Gauge<i64>,
}

impl StoreMetrics {
    /// Create a new metrics collector with the provided meter.
    pub fn new(meter: Meter) -> Self {
        let set_calls = meter
            .u64_counter("observable_object.set.calls")
            .with_description("Total number of property writes")
            .build();

        let changes = meter
            .u64_counter("observable_object.set.changes")
            .with_description("Number of property writes that changed the stored value")
            .build();

        let notifications = meter
            .u64_counter("observable_object.notify.listeners")
            .with_description("Number of listener invocations")
            .build();

        let dispatch_duration = meter
            .f64_histogram("observable_object.notify.duration")
            .with_description("Duration of a single property notification in seconds")
            .with_unit("s")
            .build();

        let defaults_materialized = meter
            .u64_counter("observable_object.defaults.materialized")
            .with_description("Number of defaults stored on first read")
            .build();

        let active_subscribers = meter
            .i64_gauge("observable_object.subscribers.active")
            .with_description("Number of active subscribers")
            .build();

        Self {
            set_calls,
            changes,
            notifications,
            dispatch_duration,
            defaults_materialized,
            active_subscribers,
        }
    }

    /// Record a property write and whether it changed the stored value.
    pub fn record_set(&self, changed: bool) {
        self.set_calls.add(1, &[]);
        if changed {
            self.changes.add(1, &[]);
        }
    }

    /// Start timing the notification of one property name.
    pub fn start_dispatch(&self) -> Instant {
        Instant::now()
    }

    /// Record a finished notification.
    ///
    /// # Arguments
    ///
    /// * `start` - The `Instant` returned from `start_dispatch()`
    /// * `listeners` - Number of listeners invoked
    pub fn record_dispatch(&self, start: Instant, listeners: usize) {
        self.notifications.add(listeners as u64, &[]);
        self.dispatch_duration
            .record(start.elapsed().as_secs_f64(), &[]);
    }

    /// Record a default value stored on first read.
    pub fn record_default_materialized(&self) {
        self.defaults_materialized.add(1, &[]);
    }

    /// Update the number of active subscribers.
    pub fn update_subscriber_count(&self, count: usize) {
        self.active_subscribers
            .record(i64::try_from(count).unwrap_or(i64::MAX), &[]);
    }
}
