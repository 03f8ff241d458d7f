//! AES block cipher implementations
//!
//! This module implements the Advanced Encryption Standard (AES) block cipher
//! as specified in FIPS 197, using the classic table-driven round function:
//! SubBytes, ShiftRows, and MixColumns are fused into four 256-entry word
//! tables per direction, so a full round costs four lookups and four XORs
//! per output word. ShiftRows is realized by which state word each table
//! argument is drawn from, never as an explicit permutation step.
//!
//! Decryption uses the equivalent inverse cipher of FIPS 197 §5.3.5: the
//! decryption schedule is the reversed encryption schedule with
//! InvMixColumns applied to every interior round key, which lets both
//! directions share the same round shape.
//!
//! Blocks are interpreted as a 4×4 byte matrix filled column-major, each
//! column packed into one big-endian word; this convention is what the
//! published test vectors pin down.
//!
//! Note: the tables are indexed by secret-dependent bytes, so this
//! implementation makes no claim of cache-timing resistance.

use common::security::SecretWords;
use internal::endian::{u32_from_be_bytes, u32_to_be_bytes};
use internal::rotate::rotl32;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{Aes128Algorithm, Aes192Algorithm, Aes256Algorithm, AesVariant, BlockCipher};
use crate::error::{validate, Result};
use crate::types::SecretBytes;
use params::utils::symmetric::{
    AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE, AES_BLOCK_SIZE,
};

mod tables;
use tables::{INV_SBOX, TD0, TD1, TD2, TD3, TE0, TE1, TE2, TE3};

/// Round constants for AES key expansion
const RCON: [u32; 11] = [
    0x00000000, 0x01000000, 0x02000000, 0x04000000, 0x08000000, 0x10000000, 0x20000000,
    0x40000000, 0x80000000, 0x1b000000, 0x36000000,
];

/// Substitutes each byte of a word through the S-box, reassembled from
/// masked fused-table lookups
#[inline(always)]
fn sub_word(w: u32) -> u32 {
    (TE2[((w >> 24) & 0xff) as usize] & 0xff00_0000)
        ^ (TE3[((w >> 16) & 0xff) as usize] & 0x00ff_0000)
        ^ (TE0[((w >> 8) & 0xff) as usize] & 0x0000_ff00)
        ^ (TE1[(w & 0xff) as usize] & 0x0000_00ff)
}

/// InvMixColumns of one round-key word: each byte is pushed through the
/// forward S-box and then the inverse tables, which cancel to the plain
/// InvMixColumns of the original bytes
#[inline(always)]
fn inv_mix_word(w: u32) -> u32 {
    TD0[(TE1[((w >> 24) & 0xff) as usize] & 0xff) as usize]
        ^ TD1[(TE1[((w >> 16) & 0xff) as usize] & 0xff) as usize]
        ^ TD2[(TE1[((w >> 8) & 0xff) as usize] & 0xff) as usize]
        ^ TD3[(TE1[(w & 0xff) as usize] & 0xff) as usize]
}

/// FIPS 197 §5.2 key expansion, shared by all key sizes
///
/// The first `Nk` words are the big-endian-packed root key; every later
/// word is `rk[i - Nk] ^ temp`, where `temp` is the previous word, rotated
/// and substituted with a round constant folded in at `i % Nk == 0`, and
/// substituted once more at `i % 8 == 4` for 256-bit keys only.
fn expand_key(key: &[u8], rk: &mut [u32]) {
    let nk = key.len() / 4;
    for i in 0..nk {
        rk[i] = u32_from_be_bytes(&key[4 * i..4 * i + 4]);
    }
    for i in nk..rk.len() {
        let mut temp = rk[i - 1];
        if i % nk == 0 {
            temp = sub_word(rotl32(temp, 8)) ^ RCON[i / nk];
        } else if nk == 8 && i % nk == 4 {
            temp = sub_word(temp);
        }
        rk[i] = rk[i - nk] ^ temp;
    }
}

/// Turn an encryption schedule into an equivalent-inverse-cipher schedule
///
/// Reverses the order of the round-key groups, then applies InvMixColumns
/// to every word except those of the first and last groups; those two
/// correspond to the initial and final AddRoundKey steps, which have no
/// MixColumns counterpart in the cipher structure.
fn invert_schedule(rk: &mut [u32], rounds: usize) {
    let mut lo = 0;
    let mut hi = 4 * rounds;
    while lo < hi {
        for off in 0..4 {
            rk.swap(lo + off, hi + off);
        }
        lo += 4;
        hi -= 4;
    }
    for w in rk[4..4 * rounds].iter_mut() {
        *w = inv_mix_word(*w);
    }
}

/// Table-driven encryption of one block in place
///
/// Round 0 is the initial AddRoundKey; rounds `1..rounds` are the fused
/// table rounds; the final round reassembles substituted bytes through
/// masked lookups, skipping the MixColumns contribution.
fn encrypt_rounds(ek: &[u32], rounds: usize, block: &mut [u8]) {
    let mut s0 = u32_from_be_bytes(&block[0..4]) ^ ek[0];
    let mut s1 = u32_from_be_bytes(&block[4..8]) ^ ek[1];
    let mut s2 = u32_from_be_bytes(&block[8..12]) ^ ek[2];
    let mut s3 = u32_from_be_bytes(&block[12..16]) ^ ek[3];

    for round in 1..rounds {
        let k = 4 * round;
        let t0 = TE0[((s0 >> 24) & 0xff) as usize]
            ^ TE1[((s1 >> 16) & 0xff) as usize]
            ^ TE2[((s2 >> 8) & 0xff) as usize]
            ^ TE3[(s3 & 0xff) as usize]
            ^ ek[k];
        let t1 = TE0[((s1 >> 24) & 0xff) as usize]
            ^ TE1[((s2 >> 16) & 0xff) as usize]
            ^ TE2[((s3 >> 8) & 0xff) as usize]
            ^ TE3[(s0 & 0xff) as usize]
            ^ ek[k + 1];
        let t2 = TE0[((s2 >> 24) & 0xff) as usize]
            ^ TE1[((s3 >> 16) & 0xff) as usize]
            ^ TE2[((s0 >> 8) & 0xff) as usize]
            ^ TE3[(s1 & 0xff) as usize]
            ^ ek[k + 2];
        let t3 = TE0[((s3 >> 24) & 0xff) as usize]
            ^ TE1[((s0 >> 16) & 0xff) as usize]
            ^ TE2[((s1 >> 8) & 0xff) as usize]
            ^ TE3[(s2 & 0xff) as usize]
            ^ ek[k + 3];
        s0 = t0;
        s1 = t1;
        s2 = t2;
        s3 = t3;
    }

    let k = 4 * rounds;
    let t0 = (TE2[((s0 >> 24) & 0xff) as usize] & 0xff00_0000)
        ^ (TE3[((s1 >> 16) & 0xff) as usize] & 0x00ff_0000)
        ^ (TE0[((s2 >> 8) & 0xff) as usize] & 0x0000_ff00)
        ^ (TE1[(s3 & 0xff) as usize] & 0x0000_00ff)
        ^ ek[k];
    let t1 = (TE2[((s1 >> 24) & 0xff) as usize] & 0xff00_0000)
        ^ (TE3[((s2 >> 16) & 0xff) as usize] & 0x00ff_0000)
        ^ (TE0[((s3 >> 8) & 0xff) as usize] & 0x0000_ff00)
        ^ (TE1[(s0 & 0xff) as usize] & 0x0000_00ff)
        ^ ek[k + 1];
    let t2 = (TE2[((s2 >> 24) & 0xff) as usize] & 0xff00_0000)
        ^ (TE3[((s3 >> 16) & 0xff) as usize] & 0x00ff_0000)
        ^ (TE0[((s0 >> 8) & 0xff) as usize] & 0x0000_ff00)
        ^ (TE1[(s1 & 0xff) as usize] & 0x0000_00ff)
        ^ ek[k + 2];
    let t3 = (TE2[((s3 >> 24) & 0xff) as usize] & 0xff00_0000)
        ^ (TE3[((s0 >> 16) & 0xff) as usize] & 0x00ff_0000)
        ^ (TE0[((s1 >> 8) & 0xff) as usize] & 0x0000_ff00)
        ^ (TE1[(s2 & 0xff) as usize] & 0x0000_00ff)
        ^ ek[k + 3];

    u32_to_be_bytes(&mut block[0..4], t0);
    u32_to_be_bytes(&mut block[4..8], t1);
    u32_to_be_bytes(&mut block[8..12], t2);
    u32_to_be_bytes(&mut block[12..16], t3);
}

/// Table-driven decryption of one block in place
///
/// Mirrors `encrypt_rounds` with the inverse tables and the inverse shift
/// pattern; the final round substitutes through the inverse S-box directly,
/// since the last round of the cipher skips MixColumns.
fn decrypt_rounds(dk: &[u32], rounds: usize, block: &mut [u8]) {
    let mut s0 = u32_from_be_bytes(&block[0..4]) ^ dk[0];
    let mut s1 = u32_from_be_bytes(&block[4..8]) ^ dk[1];
    let mut s2 = u32_from_be_bytes(&block[8..12]) ^ dk[2];
    let mut s3 = u32_from_be_bytes(&block[12..16]) ^ dk[3];

    for round in 1..rounds {
        let k = 4 * round;
        let t0 = TD0[((s0 >> 24) & 0xff) as usize]
            ^ TD1[((s3 >> 16) & 0xff) as usize]
            ^ TD2[((s2 >> 8) & 0xff) as usize]
            ^ TD3[(s1 & 0xff) as usize]
            ^ dk[k];
        let t1 = TD0[((s1 >> 24) & 0xff) as usize]
            ^ TD1[((s0 >> 16) & 0xff) as usize]
            ^ TD2[((s3 >> 8) & 0xff) as usize]
            ^ TD3[(s2 & 0xff) as usize]
            ^ dk[k + 1];
        let t2 = TD0[((s2 >> 24) & 0xff) as usize]
            ^ TD1[((s1 >> 16) & 0xff) as usize]
            ^ TD2[((s0 >> 8) & 0xff) as usize]
            ^ TD3[(s3 & 0xff) as usize]
            ^ dk[k + 2];
        let t3 = TD0[((s3 >> 24) & 0xff) as usize]
            ^ TD1[((s2 >> 16) & 0xff) as usize]
            ^ TD2[((s1 >> 8) & 0xff) as usize]
            ^ TD3[(s0 & 0xff) as usize]
            ^ dk[k + 3];
        s0 = t0;
        s1 = t1;
        s2 = t2;
        s3 = t3;
    }

    let k = 4 * rounds;
    let t0 = ((INV_SBOX[((s0 >> 24) & 0xff) as usize] as u32) << 24)
        ^ ((INV_SBOX[((s3 >> 16) & 0xff) as usize] as u32) << 16)
        ^ ((INV_SBOX[((s2 >> 8) & 0xff) as usize] as u32) << 8)
        ^ (INV_SBOX[(s1 & 0xff) as usize] as u32)
        ^ dk[k];
    let t1 = ((INV_SBOX[((s1 >> 24) & 0xff) as usize] as u32) << 24)
        ^ ((INV_SBOX[((s0 >> 16) & 0xff) as usize] as u32) << 16)
        ^ ((INV_SBOX[((s3 >> 8) & 0xff) as usize] as u32) << 8)
        ^ (INV_SBOX[(s2 & 0xff) as usize] as u32)
        ^ dk[k + 1];
    let t2 = ((INV_SBOX[((s2 >> 24) & 0xff) as usize] as u32) << 24)
        ^ ((INV_SBOX[((s1 >> 16) & 0xff) as usize] as u32) << 16)
        ^ ((INV_SBOX[((s0 >> 8) & 0xff) as usize] as u32) << 8)
        ^ (INV_SBOX[(s3 & 0xff) as usize] as u32)
        ^ dk[k + 2];
    let t3 = ((INV_SBOX[((s3 >> 24) & 0xff) as usize] as u32) << 24)
        ^ ((INV_SBOX[((s2 >> 16) & 0xff) as usize] as u32) << 16)
        ^ ((INV_SBOX[((s1 >> 8) & 0xff) as usize] as u32) << 8)
        ^ (INV_SBOX[(s0 & 0xff) as usize] as u32)
        ^ dk[k + 3];

    u32_to_be_bytes(&mut block[0..4], t0);
    u32_to_be_bytes(&mut block[4..8], t1);
    u32_to_be_bytes(&mut block[8..12], t2);
    u32_to_be_bytes(&mut block[12..16], t3);
}

/// AES-128 block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes128 {
    ek: SecretWords<44>,
    dk: SecretWords<44>,
}

/// AES-192 block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes192 {
    ek: SecretWords<52>,
    dk: SecretWords<52>,
}

/// AES-256 block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes256 {
    ek: SecretWords<60>,
    dk: SecretWords<60>,
}

impl Aes128 {
    /// Derive the encryption and decryption schedules from the root key
    fn expand(key: &[u8]) -> Result<(SecretWords<44>, SecretWords<44>)> {
        validate::length("AES-128 key", key.len(), AES128_KEY_SIZE)?;

        let mut ek = SecretWords::<44>::zeroed();
        expand_key(key, ek.as_mut_slice());
        let mut dk = ek.clone();
        invert_schedule(dk.as_mut_slice(), Aes128Algorithm::ROUNDS);
        Ok((ek, dk))
    }
}

impl BlockCipher for Aes128 {
    type Algorithm = Aes128Algorithm;
    type Key = SecretBytes<16>;

    fn new(key: &Self::Key) -> Self {
        let (ek, dk) =
            Self::expand(key.as_ref()).expect("AES-128 key expansion should not fail");

        Aes128 { ek, dk }
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;
        encrypt_rounds(self.ek.as_slice(), Aes128Algorithm::ROUNDS, block);
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;
        decrypt_rounds(self.dk.as_slice(), Aes128Algorithm::ROUNDS, block);
        Ok(())
    }

    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key {
        let mut key_data = [0u8; AES128_KEY_SIZE];
        rng.fill_bytes(&mut key_data);
        SecretBytes::new(key_data)
    }
}

impl Aes192 {
    /// Derive the encryption and decryption schedules from the root key
    fn expand(key: &[u8]) -> Result<(SecretWords<52>, SecretWords<52>)> {
        validate::length("AES-192 key", key.len(), AES192_KEY_SIZE)?;

        let mut ek = SecretWords::<52>::zeroed();
        expand_key(key, ek.as_mut_slice());
        let mut dk = ek.clone();
        invert_schedule(dk.as_mut_slice(), Aes192Algorithm::ROUNDS);
        Ok((ek, dk))
    }
}

impl BlockCipher for Aes192 {
    type Algorithm = Aes192Algorithm;
    type Key = SecretBytes<24>;

    fn new(key: &Self::Key) -> Self {
        let (ek, dk) =
            Self::expand(key.as_ref()).expect("AES-192 key expansion should not fail");

        Aes192 { ek, dk }
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;
        encrypt_rounds(self.ek.as_slice(), Aes192Algorithm::ROUNDS, block);
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;
        decrypt_rounds(self.dk.as_slice(), Aes192Algorithm::ROUNDS, block);
        Ok(())
    }

    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key {
        let mut key_data = [0u8; AES192_KEY_SIZE];
        rng.fill_bytes(&mut key_data);
        SecretBytes::new(key_data)
    }
}

impl Aes256 {
    /// Derive the encryption and decryption schedules from the root key
    fn expand(key: &[u8]) -> Result<(SecretWords<60>, SecretWords<60>)> {
        validate::length("AES-256 key", key.len(), AES256_KEY_SIZE)?;

        let mut ek = SecretWords::<60>::zeroed();
        expand_key(key, ek.as_mut_slice());
        let mut dk = ek.clone();
        invert_schedule(dk.as_mut_slice(), Aes256Algorithm::ROUNDS);
        Ok((ek, dk))
    }
}

impl BlockCipher for Aes256 {
    type Algorithm = Aes256Algorithm;
    type Key = SecretBytes<32>;

    fn new(key: &Self::Key) -> Self {
        let (ek, dk) =
            Self::expand(key.as_ref()).expect("AES-256 key expansion should not fail");

        Aes256 { ek, dk }
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;
        encrypt_rounds(self.ek.as_slice(), Aes256Algorithm::ROUNDS, block);
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;
        decrypt_rounds(self.dk.as_slice(), Aes256Algorithm::ROUNDS, block);
        Ok(())
    }

    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key {
        let mut key_data = [0u8; AES256_KEY_SIZE];
        rng.fill_bytes(&mut key_data);
        SecretBytes::new(key_data)
    }
}

#[cfg(test)]
mod tests;
