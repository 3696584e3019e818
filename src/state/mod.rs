//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Route state lives in `router`; everything else pages share is provided as
//! an `RwSignal` context from `App`.

pub mod auth;
