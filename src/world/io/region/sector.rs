use std::{
	io::Write,
	ops::BitOr,
};

use crate::{
	ioext::*,
	RegionResult,
};

use super::{
	codec::{decode3, encode3},
	SECTOR_SIZE,
};

/// Offset and size are packed together, exactly the way the
/// sector table stores them.
/// |Offset:3|Size:1|
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct RegionSector(u32);

impl RegionSector {
	/// Provide offset and size in 4KiB sectors.
	/// Only the low 24 bits of `offset` are kept.
	pub fn new(offset: u32, size: u8) -> Self {
		Self(offset.overflowing_shl(8).0.bitor(size as u32))
	}

	/// Creates a new empty RegionSector.
	pub const fn empty() -> Self {
		Self(0)
	}

	/// Reads a sector table entry (3-byte offset, 1-byte count) at `position`.
	/// Panics if fewer than 4 bytes are available.
	pub fn decode(buffer: &[u8], position: usize) -> Self {
		Self::new(decode3(buffer, position), buffer[position + 3])
	}

	/// Writes this entry as a sector table entry at `position`.
	/// Panics if fewer than 4 bytes are available.
	pub fn encode(&self, buffer: &mut [u8], position: usize) {
		encode3(self.sector_offset() as u32, buffer, position);
		buffer[position + 3] = self.sector_count() as u8;
	}

	/// The 4KiB sector offset.
	/// Multiply this by `4096` to get the seek offset.
	pub fn sector_offset(&self) -> u64 {
		self.0.overflowing_shr(8).0 as u64
	}

	/// The 4KiB sector offset that marks the end of this sector and the start of
	/// the next.
	pub fn sector_end_offset(&self) -> u64 {
		self.sector_offset() + self.sector_count()
	}

	/// The 4KiB sector count.
	/// Multiply this by `4096` to get the sector size.
	pub fn sector_count(&self) -> u64 {
		(self.0 & 0xFF) as u64
	}

	/// The offset in bytes that this sector begins
	/// at in the region file.
	pub fn offset(&self) -> u64 {
		self.sector_offset() * SECTOR_SIZE
	}

	/// The offset in bytes that this sector ends at in the region file.
	pub fn end_offset(&self) -> u64 {
		self.sector_end_offset() * SECTOR_SIZE
	}

	/// The size in bytes that this sector occupies.
	pub fn size(&self) -> u64 {
		self.sector_count() * SECTOR_SIZE
	}

	/// A sector with a count of zero holds no chunk, whatever its offset says.
	pub fn is_empty(&self) -> bool {
		self.sector_count() == 0
	}
}

impl Writable for RegionSector {
	fn write_to<W: Write>(&self, writer: &mut W) -> RegionResult<usize> {
		let mut entry = [0u8; 4];
		self.encode(&mut entry, 0);
		writer.write_all(&entry)?;
		Ok(4)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn packing() {
		let sector = RegionSector::new(0x01_02_03, 7);
		assert_eq!(sector.sector_offset(), 0x01_02_03);
		assert_eq!(sector.sector_count(), 7);
		assert_eq!(sector.offset(), 0x01_02_03 * 4096);
		assert_eq!(sector.size(), 7 * 4096);
		assert_eq!(sector.sector_end_offset(), 0x01_02_03 + 7);
		assert!(!sector.is_empty());
	}

	#[test]
	fn count_decides_emptiness() {
		assert!(RegionSector::empty().is_empty());
		assert!(RegionSector::new(40, 0).is_empty());
	}

	#[test]
	fn encode_decode() {
		let mut buffer = [0u8; 8];
		RegionSector::new(0xABCDEF, 0x12).encode(&mut buffer, 4);
		assert_eq!(buffer, [0, 0, 0, 0, 0xAB, 0xCD, 0xEF, 0x12]);
		assert_eq!(RegionSector::decode(&buffer, 4), RegionSector::new(0xABCDEF, 0x12));

		let mut written = Vec::new();
		RegionSector::new(0xABCDEF, 0x12).write_to(&mut written).unwrap();
		assert_eq!(written, &buffer[4..]);
	}
}
