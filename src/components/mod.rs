//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page chrome shared by every view. Components read the router and auth
//! state from Leptos context.

pub mod layout;
pub mod navbar;
