//! Constants for symmetric encryption algorithms

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-192 key size in bytes
pub const AES192_KEY_SIZE: usize = 24;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// Number of AES-128 rounds
pub const AES128_ROUNDS: usize = 10;

/// Number of AES-192 rounds
pub const AES192_ROUNDS: usize = 12;

/// Number of AES-256 rounds
pub const AES256_ROUNDS: usize = 14;
