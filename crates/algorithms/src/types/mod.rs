//! Common types used by the primitive implementations

// Re-export the fixed-size secret containers from the API and common crates
pub use api::types::SecretBytes;
pub use common::security::{SecretWords, SecureZeroingType};
