//! Block cipher implementations with type-level guarantees
//!
//! This module contains the block cipher traits and the AES implementation.
//! Key and block sizes are carried as associated constants so that callers
//! cannot construct a cipher with a wrong-sized key.
//!
//! ## Example usage
//!
//! ```
//! use purecrypt_algorithms::block::{Aes128, BlockCipher};
//! use rand::rngs::OsRng;
//!
//! // Generate a random key and create a cipher instance
//! let key = Aes128::generate_key(&mut OsRng);
//! let cipher = Aes128::new(&key);
//!
//! // Encrypt and decrypt a single block in place
//! let mut block = *b"exactly 16 bytes";
//! cipher.encrypt_block(&mut block).unwrap();
//! cipher.decrypt_block(&mut block).unwrap();
//!
//! assert_eq!(&block, b"exactly 16 bytes");
//! ```

use zeroize::Zeroize;

use crate::error::Result;
use params::utils::symmetric::{
    AES128_KEY_SIZE, AES128_ROUNDS, AES192_KEY_SIZE, AES192_ROUNDS, AES256_KEY_SIZE,
    AES256_ROUNDS, AES_BLOCK_SIZE,
};
use rand::{CryptoRng, RngCore};

pub mod aes;

// Re-exports
pub use aes::{Aes128, Aes192, Aes256};

/// Marker trait for cipher algorithms with compile-time properties
pub trait CipherAlgorithm {
    /// Key size in bytes
    const KEY_SIZE: usize;

    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Algorithm name
    fn name() -> &'static str;
}

/// Marker trait for specific AES key sizes
pub trait AesVariant: CipherAlgorithm {
    /// Number of rounds
    const ROUNDS: usize;
}

/// Trait for block ciphers with type-level constraints
pub trait BlockCipher {
    /// The algorithm this cipher implements
    type Algorithm: CipherAlgorithm;

    /// Key type with appropriate size guarantee
    type Key: AsRef<[u8]> + AsMut<[u8]> + Clone + Zeroize;

    /// Creates a new block cipher instance with the given key
    fn new(key: &Self::Key) -> Self;

    /// Encrypts a single block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypts a single block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Returns the key size in bytes
    fn key_size() -> usize {
        Self::Algorithm::KEY_SIZE
    }

    /// Returns the block size in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Returns the name of the block cipher
    fn name() -> &'static str {
        Self::Algorithm::name()
    }

    /// Generate a random key
    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key;
}

/// Type-level constants for AES-128
pub enum Aes128Algorithm {}

impl CipherAlgorithm for Aes128Algorithm {
    const KEY_SIZE: usize = AES128_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-128"
    }
}

impl AesVariant for Aes128Algorithm {
    const ROUNDS: usize = AES128_ROUNDS;
}

/// Type-level constants for AES-192
pub enum Aes192Algorithm {}

impl CipherAlgorithm for Aes192Algorithm {
    const KEY_SIZE: usize = AES192_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-192"
    }
}

impl AesVariant for Aes192Algorithm {
    const ROUNDS: usize = AES192_ROUNDS;
}

/// Type-level constants for AES-256
pub enum Aes256Algorithm {}

impl CipherAlgorithm for Aes256Algorithm {
    const KEY_SIZE: usize = AES256_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-256"
    }
}

impl AesVariant for Aes256Algorithm {
    const ROUNDS: usize = AES256_ROUNDS;
}
