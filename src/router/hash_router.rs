//! Hash router core.
//!
//! DESIGN
//! ======
//! The router owns one piece of state, the current [`Route`], and keeps it in
//! step with the address fragment. Two transitions assign it: `navigate`
//! (program-driven; writes the fragment first) and an external fragment change
//! (platform-driven). Both notify observers synchronously, in subscription
//! order, and only when the value actually changes. That collapses the echo a
//! browser emits after `navigate` writes the fragment; a synchronous echo
//! (as from `MemoryLocation`) is ignored outright while the write is in
//! progress.
//!
//! Observers may navigate while being notified. The newer route supersedes
//! the one in flight: observers not yet reached skip the stale value, and
//! everyone then receives the newest one.
//!
//! The platform listener is held as a [`Subscription`] field, so dropping the
//! router releases it on every exit path. The listener reaches router state
//! through a `Weak`, so it cannot keep a torn-down router alive.
//!
//! No route is ever rejected here. Unknown names fall through to the view
//! dispatcher's default.

#[cfg(test)]
#[path = "hash_router_test.rs"]
mod hash_router_test;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use super::location::Location;
use super::observer::{Observers, Subscription};
use super::route::Route;

struct RouterState {
    current: RefCell<Route>,
    observers: Observers<Route>,
    /// Bumped on every change; a round whose revision is stale stops early.
    revision: Cell<u64>,
    delivering: Cell<bool>,
    /// Set while `navigate` writes the fragment, so its own echo is ignored.
    writing: Cell<bool>,
}

impl RouterState {
    fn new(initial: Route) -> Self {
        Self {
            current: RefCell::new(initial),
            observers: Observers::new(),
            revision: Cell::new(0),
            delivering: Cell::new(false),
            writing: Cell::new(false),
        }
    }

    /// Make `route` current. Returns whether it changed.
    ///
    /// An assignment made by an observer mid-round supersedes the value being
    /// delivered: the outer round stops and the newest route is delivered to
    /// everyone, so each observer's last value matches `current`.
    fn assign(&self, route: Route) -> bool {
        {
            let mut current = self.current.borrow_mut();
            if *current == route {
                return false;
            }
            *current = route;
        }
        self.revision.set(self.revision.get() + 1);
        if self.delivering.replace(true) {
            return true;
        }

        loop {
            let revision = self.revision.get();
            let route = self.current.borrow().clone();
            self.observers.notify_while(&route, || self.revision.get() == revision);
            if self.revision.get() == revision {
                break;
            }
        }
        self.delivering.set(false);
        true
    }
}

/// Fragment-backed router over a platform [`Location`].
pub struct HashRouter {
    state: Rc<RouterState>,
    location: Rc<dyn Location>,
    _fragment_watch: Subscription,
}

impl HashRouter {
    /// Read the initial route from `location` and start watching it.
    pub fn new(location: Rc<dyn Location>) -> Self {
        let initial = Route::from_fragment(&location.fragment());
        let state = Rc::new(RouterState::new(initial));

        let weak: Weak<RouterState> = Rc::downgrade(&state);
        let fragment_watch = location.watch(Box::new(move |fragment| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            if state.writing.get() {
                return;
            }
            let route = Route::from_fragment(fragment);
            let label = route.to_string();
            if state.assign(route) {
                leptos::logging::log!("route changed externally: {label}");
            }
        }));

        Self { state, location, _fragment_watch: fragment_watch }
    }

    /// Current route.
    pub fn current(&self) -> Route {
        self.state.current.borrow().clone()
    }

    /// Write `route` to the fragment and make it current. Never fails.
    pub fn navigate(&self, route: impl Into<Route>) {
        let route = route.into();
        let outer = self.state.writing.replace(true);
        self.location.set_fragment(route.as_str());
        self.state.writing.set(outer);
        self.state.assign(route);
    }

    /// Observe route changes from now on. Past changes are not replayed.
    pub fn subscribe(&self, observer: impl Fn(&Route) + 'static) -> Subscription {
        self.state.observers.subscribe(observer)
    }

    pub fn observer_count(&self) -> usize {
        self.state.observers.len()
    }
}

impl fmt::Debug for HashRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashRouter")
            .field("current", &*self.state.current.borrow())
            .field("observers", &self.state.observers.len())
            .finish_non_exhaustive()
    }
}
