//! Route identifiers and the fragment convention.
//!
//! A route is whatever follows the `#` delimiter in the address. The router
//! stores it verbatim; only an empty fragment is special and maps to
//! [`DEFAULT_ROUTE`]. Membership in the set of known views is checked by the
//! view dispatcher, never here.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use std::fmt;

/// Route used when the address carries no fragment.
pub const DEFAULT_ROUTE: &str = "home";

/// Opaque route identifier taken from the address fragment.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Route(String);

impl Route {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Interpret a raw fragment, with or without its leading `#`.
    pub fn from_fragment(raw: &str) -> Self {
        let fragment = strip_delimiter(raw);
        if fragment.is_empty() { Self::default() } else { Self(fragment.to_owned()) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_ROUTE
    }
}

/// Drop a single leading `#` if present.
pub fn strip_delimiter(raw: &str) -> &str {
    raw.strip_prefix('#').unwrap_or(raw)
}

impl Default for Route {
    fn default() -> Self {
        Self(DEFAULT_ROUTE.to_owned())
    }
}

impl From<&str> for Route {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Route {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for Route {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Route {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Route {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
