//! Platform seam over the address fragment.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router only needs three platform capabilities: read the fragment,
//! write it, and hear about changes it did not cause (back/forward, a typed
//! URL). [`Location`] captures exactly that. The browser implementation lives
//! in `browser` behind the `csr` feature; [`MemoryLocation`] simulates a
//! browser tab with a history stack so routing can be exercised natively.

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

use std::cell::RefCell;

use super::observer::{Observers, Subscription};
use super::route::strip_delimiter;

/// Address-fragment access for the hash router.
pub trait Location {
    /// Current fragment, without the `#` delimiter.
    fn fragment(&self) -> String;

    /// Program-driven fragment write.
    fn set_fragment(&self, fragment: &str);

    /// Listen for fragment changes. The listener is removed when the returned
    /// handle drops.
    fn watch(&self, on_change: Box<dyn Fn(&str)>) -> Subscription;
}

// =============================================================================
// MEMORY LOCATION
// =============================================================================

struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    fn current(&self) -> &str {
        &self.entries[self.cursor]
    }
}

/// In-memory browser tab: a history stack plus `hashchange`-style listeners.
///
/// Like a browser, writing the fragment it already holds neither adds a
/// history entry nor notifies listeners.
pub struct MemoryLocation {
    history: RefCell<History>,
    listeners: Observers<String>,
}

impl MemoryLocation {
    pub fn new(initial: &str) -> Self {
        Self {
            history: RefCell::new(History { entries: vec![strip_delimiter(initial).to_owned()], cursor: 0 }),
            listeners: Observers::new(),
        }
    }

    /// Simulate the user typing a new fragment into the address bar.
    pub fn edit_address(&self, fragment: &str) {
        self.push(fragment);
    }

    /// Simulate the back button. Returns `false` at the start of history.
    pub fn back(&self) -> bool {
        let fragment = {
            let mut history = self.history.borrow_mut();
            if history.cursor == 0 {
                return false;
            }
            history.cursor -= 1;
            history.current().to_owned()
        };
        self.listeners.notify(&fragment);
        true
    }

    /// Simulate the forward button. Returns `false` at the end of history.
    pub fn forward(&self) -> bool {
        let fragment = {
            let mut history = self.history.borrow_mut();
            if history.cursor + 1 >= history.entries.len() {
                return false;
            }
            history.cursor += 1;
            history.current().to_owned()
        };
        self.listeners.notify(&fragment);
        true
    }

    /// Number of history entries, including ones ahead of the cursor.
    pub fn history_len(&self) -> usize {
        self.history.borrow().entries.len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn push(&self, fragment: &str) {
        let fragment = strip_delimiter(fragment).to_owned();
        {
            let mut history = self.history.borrow_mut();
            if history.current() == fragment {
                return;
            }
            let keep = history.cursor + 1;
            history.entries.truncate(keep);
            history.entries.push(fragment.clone());
            history.cursor = keep;
        }
        self.listeners.notify(&fragment);
    }
}

impl Default for MemoryLocation {
    fn default() -> Self {
        Self::new("")
    }
}

impl Location for MemoryLocation {
    fn fragment(&self) -> String {
        self.history.borrow().current().to_owned()
    }

    fn set_fragment(&self, fragment: &str) {
        self.push(fragment);
    }

    fn watch(&self, on_change: Box<dyn Fn(&str)>) -> Subscription {
        self.listeners.subscribe(move |fragment: &String| on_change(fragment.as_str()))
    }
}
