//! Ordered observer registry with drop-to-unsubscribe handles.
//!
//! DESIGN
//! ======
//! Everything here runs on the single UI thread, so the registry is an
//! `Rc<RefCell<..>>` with no locking. `notify` snapshots the callbacks before
//! invoking them, which keeps `RefCell` borrows out of observer bodies: an
//! observer may subscribe, unsubscribe, or trigger another notification while
//! it runs.
//!
//! A round delivers to the observers registered when it started. Late
//! subscribers wait for the next round; observers removed mid-round are
//! skipped. [`Observers::notify_while`] lets the owner cut a round short once
//! the value being delivered is stale.

#[cfg(test)]
#[path = "observer_test.rs"]
mod observer_test;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

type Callback<T> = Rc<dyn Fn(&T)>;

struct Registry<T> {
    next_id: u64,
    entries: Vec<(u64, Callback<T>)>,
}

impl<T> Registry<T> {
    fn contains(&self, id: u64) -> bool {
        self.entries.iter().any(|(entry_id, _)| *entry_id == id)
    }
}

/// Subscription list notified synchronously in subscription order.
pub struct Observers<T> {
    registry: Rc<RefCell<Registry<T>>>,
}

impl<T: 'static> Observers<T> {
    #[must_use]
    pub fn new() -> Self {
        Self { registry: Rc::new(RefCell::new(Registry { next_id: 0, entries: Vec::new() })) }
    }

    /// Register `callback`. It stays registered until the returned
    /// [`Subscription`] is dropped.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.entries.push((id, Rc::new(callback)));
            id
        };

        let registry = Rc::downgrade(&self.registry);
        Subscription::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry.borrow_mut().entries.retain(|(entry_id, _)| *entry_id != id);
            }
        })
    }

    /// Deliver `value` to every currently registered observer.
    pub fn notify(&self, value: &T) {
        self.notify_while(value, || true);
    }

    /// Deliver `value` in order, checking `proceed` before each observer.
    /// The round stops at the first `false`, so a value superseded by an
    /// observer is not handed to the ones after it.
    pub fn notify_while(&self, value: &T, mut proceed: impl FnMut() -> bool) {
        let round: Vec<(u64, Callback<T>)> = self.registry.borrow().entries.clone();
        for (id, callback) in round {
            if !proceed() {
                return;
            }
            let live = self.registry.borrow().contains(id);
            if live {
                callback(value);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.registry.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: 'static> Default for Observers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Observers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers").field("len", &self.registry.borrow().entries.len()).finish()
    }
}

// =============================================================================
// SUBSCRIPTION
// =============================================================================

/// Scoped registration handle. Dropping it releases the registration.
///
/// Used both for route observers and for platform fragment listeners, so a
/// torn-down router never leaves a listener behind.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    /// A handle with nothing to release, for registrations the platform refused.
    pub fn detached() -> Self {
        Self { release: None }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Release the registration now rather than at end of scope.
    pub fn cancel(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("active", &self.is_active()).finish()
    }
}
