//! Subscriber-based notifications for property changes.

use crate::core::ObservableObject;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Listener callback receiving the sender and the changed property name.
type Listener = Rc<dyn Fn(&ObservableObject, &str)>;

/// Hook called with the new listener count after every add or remove.
type CountHook = Rc<dyn Fn(usize)>;

/// Handle for a subscription that can be dropped to unsubscribe.
///
/// When the handle is dropped, the listener is removed from the registry.
/// The handle only holds a weak reference, so it never keeps the observed
/// object alive.
#[must_use = "dropping the handle immediately unsubscribes the listener"]
pub struct SubscriptionHandle {
    id: usize,
    registry: Weak<RefCell<SubscriberRegistryInner>>,
}

impl SubscriptionHandle {
    /// Identifier of this subscription, unique per registry.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Remove the listener now. Equivalent to dropping the handle.
    pub fn unsubscribe(self) {}

    /// Keep the listener registered for the lifetime of the observed object.
    pub fn detach(mut self) {
        self.registry = Weak::new();
    }
}

impl Drop for SubscriptionHandle {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let id = self.id;
            let (count, hook) = {
                let mut inner = registry.borrow_mut();
                inner.subscribers.retain(|(sub_id, _)| *sub_id != id);
                (inner.subscribers.len(), inner.on_count_change.clone())
            };

            #[cfg(feature = "tracing")]
            tracing::debug!(subscription = id, "listener unsubscribed");

            if let Some(hook) = hook {
                hook(count);
            }
        }
    }
}

impl fmt::Debug for SubscriptionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriptionHandle")
            .field("id", &self.id)
            .field("attached", &(self.registry.strong_count() > 0))
            .finish()
    }
}

/// Internal subscriber registry state.
struct SubscriberRegistryInner {
    subscribers: Vec<(usize, Listener)>,
    next_id: usize,
    on_count_change: Option<CountHook>,
}

/// Registry of property-change listeners for one observable object.
///
/// Listeners are called synchronously, in the order they subscribed. The
/// listener list is snapshotted before each dispatch and no borrow is held
/// while listeners run, so a listener may freely read or write the sender,
/// subscribe new listeners or drop handles. Changes to the list made during a
/// dispatch take effect on the next one.
///
/// A panicking listener unwinds to the caller of the dispatch; listeners
/// after it are not called for that name.
pub struct SubscriberRegistry {
    inner: Rc<RefCell<SubscriberRegistryInner>>,
}

impl SubscriberRegistry {
    /// Create a new, empty registry.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(SubscriberRegistryInner {
                subscribers: Vec::new(),
                next_id: 0,
                on_count_change: None,
            })),
        }
    }

    /// Register a listener.
    ///
    /// Returns a handle that removes the listener when dropped.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionHandle
    where
        F: Fn(&ObservableObject, &str) + 'static,
    {
        let (id, count, hook) = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            let listener: Listener = Rc::new(callback);
            inner.subscribers.push((id, listener));
            (id, inner.subscribers.len(), inner.on_count_change.clone())
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(subscription = id, "listener subscribed");

        if let Some(hook) = hook {
            hook(count);
        }

        SubscriptionHandle {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Install a hook called with the listener count after every subscribe
    /// or unsubscribe, including handles dropped from inside a listener.
    ///
    /// Replaces any previously installed hook.
    pub fn on_count_change<F>(&self, hook: F)
    where
        F: Fn(usize) + 'static,
    {
        self.inner.borrow_mut().on_count_change = Some(Rc::new(hook));
    }

    /// Call every listener once with `name`, in subscription order.
    ///
    /// Returns the number of listeners invoked.
    pub fn notify(&self, sender: &ObservableObject, name: &str) -> usize {
        let listeners: Vec<Listener> = self
            .inner
            .borrow()
            .subscribers
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        for listener in &listeners {
            listener(sender, name);
        }
        listeners.len()
    }

    /// Get the number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

impl Default for SubscriberRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SubscriberRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriberRegistry")
            .field("subscriber_count", &self.subscriber_count())
            .finish()
    }
}
