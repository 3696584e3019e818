//! Leptos bridge: router as component context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` calls [`provide_router`] once. Components read the route through
//! [`RouterHandle::route`] (a reactive signal mirrored from the core router's
//! observer list) and call [`RouterHandle::navigate`]. When the providing
//! owner is cleaned up, the router is disposed, which drops its fragment
//! subscription.
//!
//! The core router is `Rc`-based and not `Send`, so it lives in a
//! `LocalStorage` stored value; the handle itself is `Copy`.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use std::rc::Rc;

use leptos::prelude::*;

use super::error::RouterError;
use super::hash_router::HashRouter;
use super::location::Location;
use super::observer::Subscription;
use super::route::Route;
use super::view::View;

struct Mounted {
    router: HashRouter,
    _mirror: Subscription,
}

/// Copyable access to the provided router.
#[derive(Clone, Copy)]
pub struct RouterHandle {
    route: RwSignal<Route>,
    mounted: StoredValue<Mounted, LocalStorage>,
}

impl RouterHandle {
    /// Reactive current route.
    pub fn route(&self) -> ReadSignal<Route> {
        self.route.read_only()
    }

    pub fn current_untracked(&self) -> Route {
        self.route.get_untracked()
    }

    /// Reactive check used for navbar highlighting.
    pub fn is_at(&self, view: View) -> bool {
        self.route.with(|route| route.as_str() == view.route_name())
    }

    /// Navigate to `route`. After teardown this only logs.
    pub fn navigate(&self, route: impl Into<Route>) {
        let route = route.into();
        let done = self.mounted.try_with_value(|mounted| mounted.router.navigate(route.clone()));
        if done.is_none() {
            leptos::logging::warn!("navigate({route}) ignored: router already torn down");
        }
    }
}

/// Build the router over `location` and provide it to the current owner.
pub fn provide_router(location: Rc<dyn Location>) -> RouterHandle {
    let router = HashRouter::new(location);
    let route = RwSignal::new(router.current());
    let mirror = router.subscribe(move |next| route.set(next.clone()));

    let mounted = StoredValue::new_local(Mounted { router, _mirror: mirror });
    let handle = RouterHandle { route, mounted };
    provide_context(handle);

    on_cleanup(move || {
        mounted.dispose();
        leptos::logging::log!("hash router torn down");
    });

    handle
}

/// Router handle from context, or [`RouterError::NotInitialized`] outside
/// a [`provide_router`] scope.
pub fn try_use_router() -> Result<RouterHandle, RouterError> {
    use_context::<RouterHandle>().ok_or(RouterError::NotInitialized)
}

/// Router handle from context. Panics outside a [`provide_router`] scope.
pub fn use_router() -> RouterHandle {
    match try_use_router() {
        Ok(handle) => handle,
        Err(e) => panic!("{e}: use_router called outside provide_router"),
    }
}
