#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Misuse of the router from outside its provided scope.
///
/// Navigation itself never fails: unknown routes are a display fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
    #[error("router not initialized")]
    NotInitialized,
}
