//! Common implementations and shared functionality for the purecrypt library
//!
//! This crate provides the secure-memory containers used across the
//! purecrypt implementation crates.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

pub mod security;

// Re-export core security types
pub use security::{EphemeralSecret, SecretWords, SecureZeroingType, ZeroizeGuard};
