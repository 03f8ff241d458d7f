//! Error handling adapter traits

use super::Result;

/// Extension trait for attaching context to failing results
pub trait ResultExt<T> {
    /// Replace the error's context with the given one, preserving
    /// the structural payload of the error.
    fn with_context(self, context: &'static str) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, context: &'static str) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}
