use crate::{
	ioext::*,
	RegionResult, RegionError,
};

use super::{
	sector::*,
	timestamp::*,
	coord::*,
	HEADER_SIZE,
	REGION_CHUNKS,
};

use std::{
	io::Write,
	ops::{
		Index, IndexMut,
	},
};

/// This trait defines the offset in a file where
/// a table can be found for a specific type, and how a
/// single 4-byte entry of that table is read.
/// This trait is meant to be defined for [RegionSector] and [Timestamp]
pub trait RegionTableItem: Sized {
	/// The offset in the file that this type's table begins.
	const OFFSET: usize;

	fn decode_entry(buffer: &[u8], position: usize) -> Self;
}

impl RegionTableItem for RegionSector {
	const OFFSET: usize = 0;

	fn decode_entry(buffer: &[u8], position: usize) -> Self {
		RegionSector::decode(buffer, position)
	}
}

impl RegionTableItem for Timestamp {
	const OFFSET: usize = 4096;

	fn decode_entry(buffer: &[u8], position: usize) -> Self {
		Timestamp::decode(buffer, position)
	}
}

/// A table of 1024 elements that contain information related to
/// a chunk within a Region file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionTable<T: RegionTableItem>(Box<[T; REGION_CHUNKS]>);

/// A table of 1024 [RegionSector] elements for each potential chunk in
/// a 32x32 chunk region file.
pub type SectorTable = RegionTable<RegionSector>;

/// A table of 1024 [Timestamp] elements for each potential chunk in a
/// 32x32 chunk region file.
pub type TimestampTable = RegionTable<Timestamp>;

/// The header at the beginning of every region file.
/// It contains 1024 [RegionSector] elements and 1024 [Timestamp] elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionHeader {
	/// The sector table, containing information about where chunks exist
	/// in the file.
	pub sectors: SectorTable,
	/// The timestamp table. Entries are opaque.
	pub timestamps: TimestampTable,
}

impl<T: RegionTableItem> RegionTable<T> {
	pub const OFFSET: usize = T::OFFSET;

	/// Reads the table out of a buffer that holds at least the whole table.
	/// Panics if the buffer is too short; [RegionHeader::decode] checks the length.
	fn decode(buffer: &[u8]) -> Self
	where T: Copy + Default {
		let mut table = Self::default();
		table.0.iter_mut().enumerate().for_each(|(i, item)| {
			*item = T::decode_entry(buffer, T::OFFSET + i * 4);
		});
		table
	}

	/// Returns an iterator of the elements in the table.
	pub fn iter(&self) -> std::slice::Iter<T> {
		self.0.iter()
	}

	/// Returns a mutable iterator of the elements in the table.
	pub fn iter_mut(&mut self) -> std::slice::IterMut<T> {
		self.0.iter_mut()
	}
}

impl<T: Default + Copy + RegionTableItem> Default for RegionTable<T> {
	fn default() -> Self {
		Self(Box::new([T::default(); REGION_CHUNKS]))
	}
}

impl<C: Into<RegionCoord>,T: RegionTableItem> Index<C> for RegionTable<T> {
	type Output = T;

	fn index(&self, index: C) -> &Self::Output {
		let coord: RegionCoord = index.into();
		&self.0[coord.index()]
	}
}

impl<C: Into<RegionCoord>,T: RegionTableItem> IndexMut<C> for RegionTable<T> {
	fn index_mut(&mut self, index: C) -> &mut Self::Output {
		let coord: RegionCoord = index.into();
		&mut self.0[coord.index()]
	}
}

impl<T: Writable + RegionTableItem> Writable for RegionTable<T> {
	fn write_to<W: Write>(&self, writer: &mut W) -> RegionResult<usize> {
		let mut write_size: usize = 0;
		for item in self.0.iter() {
			write_size += item.write_to(writer)?;
		}
		Ok(write_size)
	}
}

impl<T: RegionTableItem> From<[T; REGION_CHUNKS]> for RegionTable<T> {
	fn from(value: [T; REGION_CHUNKS]) -> Self {
		Self(Box::new(value))
	}
}

impl RegionHeader {
	/// Reads both header tables from the start of a region file buffer.
	pub fn decode(buffer: &[u8]) -> RegionResult<Self> {
		if buffer.len() < HEADER_SIZE {
			return Err(RegionError::HeaderTooShort { len: buffer.len() });
		}
		Ok(Self {
			sectors: SectorTable::decode(buffer),
			timestamps: TimestampTable::decode(buffer),
		})
	}
}

impl Writable for RegionHeader {
	fn write_to<W: Write>(&self, writer: &mut W) -> RegionResult<usize> {
		Ok(
			self.sectors.write_to(writer)? + self.timestamps.write_to(writer)?
		)
	}
}
