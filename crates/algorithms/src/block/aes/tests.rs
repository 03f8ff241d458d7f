use super::tables::{INV_SBOX, TD0, TD1, TD2, TD3, TE0, TE1, TE2, TE3};
use super::*;
use crate::error::Error;
use proptest::prelude::*;

#[test]
fn test_aes128_encrypt() {
    // FIPS 197 Appendix C.1
    // Key: 000102030405060708090a0b0c0d0e0f
    // Plaintext: 00112233445566778899aabbccddeeff
    // Ciphertext: 69c4e0d86a7b0430d8cdb78070b4c55a

    let key = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    let mut block = hex::decode("00112233445566778899aabbccddeeff").unwrap();
    let expected = hex::decode("69c4e0d86a7b0430d8cdb78070b4c55a").unwrap();

    let aes = Aes128::new(&SecretBytes::from_slice(&key).unwrap());
    aes.encrypt_block(&mut block).unwrap();

    assert_eq!(block, expected);
}

#[test]
fn test_aes128_decrypt() {
    // FIPS 197 Appendix C.1, inverse direction

    let key = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    let mut block = hex::decode("69c4e0d86a7b0430d8cdb78070b4c55a").unwrap();
    let expected = hex::decode("00112233445566778899aabbccddeeff").unwrap();

    let aes = Aes128::new(&SecretBytes::from_slice(&key).unwrap());
    aes.decrypt_block(&mut block).unwrap();

    assert_eq!(block, expected);
}

#[test]
fn test_aes192_encrypt() {
    // FIPS 197 Appendix C.2
    // Key: 000102030405060708090a0b0c0d0e0f1011121314151617
    // Plaintext: 00112233445566778899aabbccddeeff
    // Ciphertext: dda97ca4864cdfe06eaf70a0ec0d7191

    let key = hex::decode("000102030405060708090a0b0c0d0e0f1011121314151617").unwrap();
    let mut block = hex::decode("00112233445566778899aabbccddeeff").unwrap();
    let expected = hex::decode("dda97ca4864cdfe06eaf70a0ec0d7191").unwrap();

    let aes = Aes192::new(&SecretBytes::from_slice(&key).unwrap());
    aes.encrypt_block(&mut block).unwrap();

    assert_eq!(block, expected);
}

#[test]
fn test_aes192_decrypt() {
    // FIPS 197 Appendix C.2, inverse direction

    let key = hex::decode("000102030405060708090a0b0c0d0e0f1011121314151617").unwrap();
    let mut block = hex::decode("dda97ca4864cdfe06eaf70a0ec0d7191").unwrap();
    let expected = hex::decode("00112233445566778899aabbccddeeff").unwrap();

    let aes = Aes192::new(&SecretBytes::from_slice(&key).unwrap());
    aes.decrypt_block(&mut block).unwrap();

    assert_eq!(block, expected);
}

#[test]
fn test_aes256_encrypt() {
    // FIPS 197 Appendix C.3
    // Key: 000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f
    // Plaintext: 00112233445566778899aabbccddeeff
    // Ciphertext: 8ea2b7ca516745bfeafc49904b496089

    let key =
        hex::decode("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f").unwrap();
    let mut block = hex::decode("00112233445566778899aabbccddeeff").unwrap();
    let expected = hex::decode("8ea2b7ca516745bfeafc49904b496089").unwrap();

    let aes = Aes256::new(&SecretBytes::from_slice(&key).unwrap());
    aes.encrypt_block(&mut block).unwrap();

    assert_eq!(block, expected);
}

#[test]
fn test_aes256_decrypt() {
    // FIPS 197 Appendix C.3, inverse direction

    let key =
        hex::decode("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f").unwrap();
    let mut block = hex::decode("8ea2b7ca516745bfeafc49904b496089").unwrap();
    let expected = hex::decode("00112233445566778899aabbccddeeff").unwrap();

    let aes = Aes256::new(&SecretBytes::from_slice(&key).unwrap());
    aes.decrypt_block(&mut block).unwrap();

    assert_eq!(block, expected);
}

#[test]
fn test_aes128_fips_appendix_b() {
    // FIPS 197 Appendix B worked example
    // Key: 2b7e151628aed2a6abf7158809cf4f3c
    // Plaintext: 3243f6a8885a308d313198a2e0370734
    // Ciphertext: 3925841d02dc09fbdc118597196a0b32

    let key = hex::decode("2b7e151628aed2a6abf7158809cf4f3c").unwrap();
    let mut block = hex::decode("3243f6a8885a308d313198a2e0370734").unwrap();
    let expected = hex::decode("3925841d02dc09fbdc118597196a0b32").unwrap();

    let aes = Aes128::new(&SecretBytes::from_slice(&key).unwrap());
    aes.encrypt_block(&mut block).unwrap();

    assert_eq!(block, expected);
}

#[test]
fn test_aes128_nist_ecb_vector() {
    // NIST SP 800-38A, ECB-AES128 block 1
    // Key: 2b7e151628aed2a6abf7158809cf4f3c
    // Plaintext: 6bc1bee22e409f96e93d7e117393172a
    // Ciphertext: 3ad77bb40d7a3660a89ecaf32466ef97

    let key = hex::decode("2b7e151628aed2a6abf7158809cf4f3c").unwrap();
    let mut block = hex::decode("6bc1bee22e409f96e93d7e117393172a").unwrap();
    let expected = hex::decode("3ad77bb40d7a3660a89ecaf32466ef97").unwrap();

    let aes = Aes128::new(&SecretBytes::from_slice(&key).unwrap());
    aes.encrypt_block(&mut block).unwrap();
    assert_eq!(block, expected);

    aes.decrypt_block(&mut block).unwrap();
    assert_eq!(block, hex::decode("6bc1bee22e409f96e93d7e117393172a").unwrap());
}

#[test]
fn test_aes192_nist_ecb_vector() {
    // NIST SP 800-38A, ECB-AES192 block 1
    // Key: 8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b
    // Plaintext: 6bc1bee22e409f96e93d7e117393172a
    // Ciphertext: bd334f1d6e45f25ff712a214571fa5cc

    let key = hex::decode("8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b").unwrap();
    let mut block = hex::decode("6bc1bee22e409f96e93d7e117393172a").unwrap();
    let expected = hex::decode("bd334f1d6e45f25ff712a214571fa5cc").unwrap();

    let aes = Aes192::new(&SecretBytes::from_slice(&key).unwrap());
    aes.encrypt_block(&mut block).unwrap();
    assert_eq!(block, expected);

    aes.decrypt_block(&mut block).unwrap();
    assert_eq!(block, hex::decode("6bc1bee22e409f96e93d7e117393172a").unwrap());
}

#[test]
fn test_aes256_nist_ecb_vector() {
    // NIST SP 800-38A, ECB-AES256 block 1
    // Key: 603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4
    // Plaintext: 6bc1bee22e409f96e93d7e117393172a
    // Ciphertext: f3eed1bdb5d2a03c064b5a7e3db181f8

    let key =
        hex::decode("603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4").unwrap();
    let mut block = hex::decode("6bc1bee22e409f96e93d7e117393172a").unwrap();
    let expected = hex::decode("f3eed1bdb5d2a03c064b5a7e3db181f8").unwrap();

    let aes = Aes256::new(&SecretBytes::from_slice(&key).unwrap());
    aes.encrypt_block(&mut block).unwrap();
    assert_eq!(block, expected);

    aes.decrypt_block(&mut block).unwrap();
    assert_eq!(block, hex::decode("6bc1bee22e409f96e93d7e117393172a").unwrap());
}

#[test]
fn test_key_expansion_reference_words() {
    // FIPS 197 Appendix A.1 key expansion of 2b7e151628aed2a6abf7158809cf4f3c
    let key = hex::decode("2b7e151628aed2a6abf7158809cf4f3c").unwrap();
    let mut ek = [0u32; 44];
    expand_key(&key, &mut ek);

    assert_eq!(ek[0], 0x2b7e1516);
    assert_eq!(ek[3], 0x09cf4f3c);
    assert_eq!(ek[4], 0xa0fafe17);
    assert_eq!(ek[8], 0xf2c295f2);
    assert_eq!(ek[43], 0xb6630ca6);
}

#[test]
fn test_key_expansion_is_deterministic() {
    let key = SecretBytes::new([0x42u8; 16]);
    let a = Aes128::new(&key);
    let b = Aes128::new(&key);

    assert_eq!(a.ek.as_slice(), b.ek.as_slice());
    assert_eq!(a.dk.as_slice(), b.dk.as_slice());
}

#[test]
fn test_schedule_lengths() {
    let aes128 = Aes128::new(&SecretBytes::new([0u8; 16]));
    let aes192 = Aes192::new(&SecretBytes::new([0u8; 24]));
    let aes256 = Aes256::new(&SecretBytes::new([0u8; 32]));

    assert_eq!(aes128.ek.len(), 4 * (Aes128Algorithm::ROUNDS + 1));
    assert_eq!(aes192.ek.len(), 4 * (Aes192Algorithm::ROUNDS + 1));
    assert_eq!(aes256.ek.len(), 4 * (Aes256Algorithm::ROUNDS + 1));
    assert_eq!(aes128.dk.len(), aes128.ek.len());
    assert_eq!(aes192.dk.len(), aes192.ek.len());
    assert_eq!(aes256.dk.len(), aes256.ek.len());
}

#[test]
fn test_decrypt_schedule_boundary_groups() {
    // The first and last round-key groups of the decryption schedule must
    // be exactly the reversed encryption groups; every interior group picks
    // up an InvMixColumns transform.
    let key = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    let mut ek = [0u32; 44];
    expand_key(&key, &mut ek);

    let mut reversed = [0u32; 44];
    for g in 0..11 {
        reversed[4 * g..4 * g + 4].copy_from_slice(&ek[4 * (10 - g)..4 * (10 - g) + 4]);
    }

    let mut dk = ek;
    invert_schedule(&mut dk, 10);

    assert_eq!(&dk[0..4], &reversed[0..4]);
    assert_eq!(&dk[40..44], &reversed[40..44]);
    for g in 1..10 {
        assert_ne!(&dk[4 * g..4 * g + 4], &reversed[4 * g..4 * g + 4]);
    }
}

#[test]
fn test_fused_table_reference_entries() {
    // Spot checks against the FIPS 197 reference tables
    assert_eq!(TE0[0x00], 0xc66363a5);
    assert_eq!(TE0[0x01], 0xf87c7c84);
    assert_eq!(TE0[0xff], 0x2c16163a);
    assert_eq!(TD0[0x00], 0x51f4a750);
    assert_eq!(TD0[0x01], 0x7e416553);
    assert_eq!(TD0[0xff], 0xd0b85742);
}

#[test]
fn test_sbox_reference_entries() {
    // The forward S-box lives in the low byte of TE1
    assert_eq!(TE1[0x00] & 0xff, 0x63);
    assert_eq!(TE1[0x53] & 0xff, 0xed);
    assert_eq!(TE1[0xff] & 0xff, 0x16);
    assert_eq!(INV_SBOX[0x00], 0x52);
    assert_eq!(INV_SBOX[0xed], 0x53);
}

#[test]
fn test_table_lane_rotations() {
    for i in 0..256 {
        assert_eq!(TE1[i], TE0[i].rotate_right(8));
        assert_eq!(TE2[i], TE1[i].rotate_right(8));
        assert_eq!(TE3[i], TE2[i].rotate_right(8));
        assert_eq!(TD1[i], TD0[i].rotate_right(8));
        assert_eq!(TD2[i], TD1[i].rotate_right(8));
        assert_eq!(TD3[i], TD2[i].rotate_right(8));
    }
}

#[test]
fn test_inverse_tables_invert_forward_tables() {
    for b in 0..256 {
        let s = TE1[b] & 0xff;
        // the inverse S-box undoes the forward S-box
        assert_eq!(INV_SBOX[s as usize] as usize, b);
        // InvMixColumns of a forward-table column returns the substituted
        // byte alone in lane 0
        assert_eq!(inv_mix_word(TE0[b]), s << 24);
    }
}

#[test]
fn test_block_length_is_validated() {
    let aes = Aes128::new(&SecretBytes::new([0u8; 16]));

    let mut short = [0u8; 15];
    match aes.encrypt_block(&mut short).unwrap_err() {
        Error::Length {
            expected, actual, ..
        } => {
            assert_eq!(expected, 16);
            assert_eq!(actual, 15);
        }
        other => panic!("unexpected error: {:?}", other),
    }

    let mut long = [0u8; 32];
    assert!(aes.decrypt_block(&mut long).is_err());
}

proptest! {
    #[test]
    fn prop_aes128_round_trip(
        key in proptest::array::uniform16(any::<u8>()),
        block in proptest::array::uniform16(any::<u8>()),
    ) {
        let aes = Aes128::new(&SecretBytes::new(key));
        let mut buf = block;
        aes.encrypt_block(&mut buf).unwrap();
        aes.decrypt_block(&mut buf).unwrap();
        prop_assert_eq!(buf, block);
    }

    #[test]
    fn prop_aes192_round_trip(
        key in proptest::array::uniform24(any::<u8>()),
        block in proptest::array::uniform16(any::<u8>()),
    ) {
        let aes = Aes192::new(&SecretBytes::new(key));
        let mut buf = block;
        aes.encrypt_block(&mut buf).unwrap();
        aes.decrypt_block(&mut buf).unwrap();
        prop_assert_eq!(buf, block);
    }

    #[test]
    fn prop_aes256_round_trip(
        key in proptest::array::uniform32(any::<u8>()),
        block in proptest::array::uniform16(any::<u8>()),
    ) {
        let aes = Aes256::new(&SecretBytes::new(key));
        let mut buf = block;
        aes.encrypt_block(&mut buf).unwrap();
        aes.decrypt_block(&mut buf).unwrap();
        prop_assert_eq!(buf, block);
    }
}
