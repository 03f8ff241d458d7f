//! Public API types for the purecrypt library
//!
//! This crate provides the public API surface shared by the purecrypt
//! ecosystem: the workspace-level error type and the fixed-size secret byte
//! container used for root keys.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use types::SecretBytes;
