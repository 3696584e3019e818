//! Hash-fragment router.
//!
//! ARCHITECTURE
//! ============
//! `hash_router` is the platform-independent core; it talks to the address
//! bar only through the `location::Location` trait. `browser` adapts the real
//! `window.location` (csr builds), `context` hands the router to Leptos
//! components, and `view` is the dispatcher that turns a route into a page.

#[cfg(feature = "csr")]
pub mod browser;
pub mod context;
pub mod error;
pub mod hash_router;
pub mod location;
pub mod observer;
pub mod route;
pub mod view;

pub use context::{RouterHandle, provide_router, try_use_router, use_router};
pub use error::RouterError;
pub use hash_router::HashRouter;
pub use location::{Location, MemoryLocation};
pub use observer::{Observers, Subscription};
pub use route::{DEFAULT_ROUTE, Route};
pub use view::View;

use std::rc::Rc;

/// Location for the running platform: the browser tab in csr builds,
/// otherwise an in-memory tab starting at the default route.
pub fn platform_location() -> Rc<dyn Location> {
    #[cfg(feature = "csr")]
    {
        if let Some(location) = browser::BrowserLocation::new() {
            return Rc::new(location);
        }
        leptos::logging::warn!("no browser window; routing in memory");
    }
    Rc::new(MemoryLocation::default())
}
