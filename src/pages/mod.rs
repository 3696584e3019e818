//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! One page per `router::View`. Pages own their navigation actions and keep
//! static content to a heading and a short blurb.

pub mod about;
pub mod download;
pub mod edit_form;
pub mod home;
pub mod login;
pub mod profile;
pub mod signup;
pub mod upload_documents;
pub mod upload_form;
