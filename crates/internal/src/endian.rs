//! Endianness utility functions

use byteorder::{BigEndian, ByteOrder, LittleEndian};

/// Convert a u32 from little-endian byte order to native byte order
pub fn u32_from_le_bytes(bytes: &[u8]) -> u32 {
    LittleEndian::read_u32(bytes)
}

/// Convert a u32 from big-endian byte order to native byte order
pub fn u32_from_be_bytes(bytes: &[u8]) -> u32 {
    BigEndian::read_u32(bytes)
}

/// Write a u32 to a buffer in little-endian byte order
pub fn u32_to_le_bytes(buf: &mut [u8], value: u32) {
    LittleEndian::write_u32(buf, value)
}

/// Write a u32 to a buffer in big-endian byte order
pub fn u32_to_be_bytes(buf: &mut [u8], value: u32) {
    BigEndian::write_u32(buf, value)
}
