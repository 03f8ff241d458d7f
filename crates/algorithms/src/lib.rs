//! Cryptographic primitives for the purecrypt library
//!
//! This crate provides the primitive implementations of the purecrypt
//! ecosystem. The current primitive is the AES block cipher in its three
//! key sizes, exposed through the [`block::BlockCipher`] trait.
//!
//! # Security Notes
//!
//! Derived key material is held in containers that are zeroized when a
//! cipher instance is dropped. The AES round function is table-driven, so
//! no claim of cache-timing resistance is made; see the module
//! documentation of [`block::aes`] for details.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Block cipher implementations
pub mod block;
pub use block::{Aes128, Aes192, Aes256};

// Type system
pub mod types;
pub use types::{SecretBytes, SecretWords, SecureZeroingType};

// Re-export security types from purecrypt-common
pub use common::security::{EphemeralSecret, ZeroizeGuard};
