//! # purecrypt
//!
//! A pure Rust cryptographic library built around a table-driven AES block
//! cipher engine.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! purecrypt = "0.1"
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - `purecrypt-algorithms`: The primitive implementations (AES)
//! - `purecrypt-api`: Public error types and the secret byte container
//! - `purecrypt-common`: Secure-memory containers
//! - `purecrypt-internal`: Shared byte-order, rotate, and constant-time helpers
//! - `purecrypt-params`: Algorithm constants
//!
//! ## Example
//!
//! ```
//! use purecrypt::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let key = Aes256::generate_key(&mut OsRng);
//! let cipher = Aes256::new(&key);
//!
//! let mut block = *b"sixteen byte blk";
//! cipher.encrypt_block(&mut block).unwrap();
//! cipher.decrypt_block(&mut block).unwrap();
//! assert_eq!(&block, b"sixteen byte blk");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub use purecrypt_api as api;
pub use purecrypt_common as common;
pub use purecrypt_internal as internal;
pub use purecrypt_params as params;

pub use purecrypt_algorithms as algorithms;

/// Common imports for purecrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export the block cipher traits and implementations
    pub use crate::algorithms::block::{
        Aes128, Aes192, Aes256, AesVariant, BlockCipher, CipherAlgorithm,
    };

    // Re-export security types
    pub use crate::api::types::SecretBytes;
    pub use crate::common::security::{
        EphemeralSecret, SecretWords, SecureZeroingType, ZeroizeGuard,
    };
}
