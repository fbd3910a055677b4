use std::io::Write;

use crate::{
	ioext::*,
	RegionResult,
};

/// A chunk's entry in the timestamp table.
/// The bytes are carried around verbatim and never interpreted as a number,
/// so there is no byte order to get wrong.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default, Hash)]
pub struct Timestamp([u8; 4]);

impl Timestamp {
	pub const fn new(bytes: [u8; 4]) -> Self {
		Self(bytes)
	}

	/// Copies the four bytes at `position`.
	/// Panics if fewer than 4 bytes are available.
	pub fn decode(buffer: &[u8], position: usize) -> Self {
		let mut bytes = [0u8; 4];
		bytes.copy_from_slice(&buffer[position..position + 4]);
		Self(bytes)
	}

	/// Writes the four bytes at `position`.
	/// Panics if fewer than 4 bytes are available.
	pub fn encode(&self, buffer: &mut [u8], position: usize) {
		buffer[position..position + 4].copy_from_slice(&self.0);
	}

	pub fn bytes(&self) -> [u8; 4] {
		self.0
	}
}

impl From<[u8; 4]> for Timestamp {
	fn from(value: [u8; 4]) -> Self {
		Self(value)
	}
}

impl From<Timestamp> for [u8; 4] {
	fn from(value: Timestamp) -> Self {
		value.0
	}
}

impl Writable for Timestamp {
	fn write_to<W: Write>(&self, writer: &mut W) -> RegionResult<usize> {
		let mut entry = [0u8; 4];
		self.encode(&mut entry, 0);
		writer.write_all(&entry)?;
		Ok(4)
	}
}
