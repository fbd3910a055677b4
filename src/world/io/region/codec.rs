//! 24-bit big-endian integers, as used by the sector offsets in the region header.

use byteorder::{BigEndian, ByteOrder};

/// Largest value representable in three bytes.
pub const U24_MAX: u32 = 0x00FF_FFFF;

/// Reads three bytes at `offset`, most significant byte first.
/// Panics if `offset + 3 > buffer.len()`.
#[inline]
pub fn decode3(buffer: &[u8], offset: usize) -> u32 {
	BigEndian::read_u24(&buffer[offset..offset + 3])
}

/// Writes the low 24 bits of `value` into the three bytes at `offset`,
/// most significant byte first. Bytes outside of that range are untouched.
/// Panics if `offset + 3 > buffer.len()`.
#[inline]
pub fn encode3(value: u32, buffer: &mut [u8], offset: usize) {
	BigEndian::write_u24(&mut buffer[offset..offset + 3], value & U24_MAX);
}
