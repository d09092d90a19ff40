//! Property change notification system.
//!
//! Provides the ordered listener registry each observable object owns.

pub mod subscriber;

pub use subscriber::{SubscriberRegistry, SubscriptionHandle};
