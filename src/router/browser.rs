//! Browser-backed [`Location`]: `window.location.hash` plus `hashchange`.
//!
//! Requires a browser environment. Platform call failures are logged and
//! otherwise ignored; navigation has no error channel.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use super::location::Location;
use super::observer::Subscription;
use super::route::strip_delimiter;

const HASHCHANGE: &str = "hashchange";

/// The current tab's address fragment.
pub struct BrowserLocation {
    window: web_sys::Window,
}

impl BrowserLocation {
    /// Returns `None` outside a browser window (e.g. in a worker).
    pub fn new() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }
}

fn read_hash(location: &web_sys::Location) -> String {
    match location.hash() {
        Ok(hash) => strip_delimiter(&hash).to_owned(),
        Err(e) => {
            leptos::logging::warn!("reading location.hash failed: {e:?}");
            String::new()
        }
    }
}

impl Location for BrowserLocation {
    fn fragment(&self) -> String {
        read_hash(&self.window.location())
    }

    fn set_fragment(&self, fragment: &str) {
        if let Err(e) = self.window.location().set_hash(fragment) {
            leptos::logging::warn!("writing location.hash failed: {e:?}");
        }
    }

    fn watch(&self, on_change: Box<dyn Fn(&str)>) -> Subscription {
        let location = self.window.location();
        let listener = Closure::<dyn Fn(web_sys::Event)>::new(move |_event: web_sys::Event| {
            on_change(&read_hash(&location));
        });

        if let Err(e) =
            self.window.add_event_listener_with_callback(HASHCHANGE, listener.as_ref().unchecked_ref())
        {
            leptos::logging::warn!("adding {HASHCHANGE} listener failed: {e:?}");
            return Subscription::detached();
        }

        let window = self.window.clone();
        Subscription::new(move || {
            if let Err(e) =
                window.remove_event_listener_with_callback(HASHCHANGE, listener.as_ref().unchecked_ref())
            {
                leptos::logging::warn!("removing {HASHCHANGE} listener failed: {e:?}");
            }
            drop(listener);
        })
    }
}
