use std::ops::Index;

use log::{debug, warn};

use crate::{
	RegionResult, RegionError,
};

use super::{
	coord::*,
	header::*,
	payload::*,
	sector::*,
	timestamp::*,
	required_sectors,
	MAX_CHUNK_SECTORS,
	REGION_CHUNKS,
	SECTOR_SIZE,
};

/// One of the 1024 chunk slots in a region.
/// A slot with a sector count of zero is empty and its payload is never read.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChunkSlot<'a> {
	payload: PayloadRef<'a>,
	sector_count: u8,
	timestamp: Timestamp,
}

impl<'a> ChunkSlot<'a> {
	pub const fn empty() -> Self {
		Self {
			payload: PayloadRef::empty(),
			sector_count: 0,
			timestamp: Timestamp::new([0; 4]),
		}
	}

	/// Builds a slot around raw chunk bytes. The sector count is the number of
	/// 4KiB sectors needed to hold them; the writer pads the last sector with zeroes.
	pub fn with_payload(bytes: &'a [u8], timestamp: Timestamp) -> RegionResult<Self> {
		let sectors = required_sectors(bytes.len() as u64);
		if sectors > MAX_CHUNK_SECTORS {
			return Err(RegionError::SectorCountOverflow { sectors });
		}
		Ok(Self {
			payload: PayloadRef::from_bytes(bytes),
			sector_count: sectors as u8,
			timestamp,
		})
	}

	pub fn payload(&self) -> PayloadRef<'a> {
		self.payload
	}

	pub fn sector_count(&self) -> u8 {
		self.sector_count
	}

	pub fn timestamp(&self) -> Timestamp {
		self.timestamp
	}

	/// Byte length the payload takes up once written (a whole number of sectors).
	pub fn size(&self) -> u64 {
		self.sector_count as u64 * SECTOR_SIZE
	}

	pub fn is_empty(&self) -> bool {
		self.sector_count == 0
	}
}

/// The 1024 chunk slots of a region, in table order (`z * 32 + x`).
/// Payloads are borrowed from the buffers they were loaded from, so those
/// buffers have to outlive the table.
#[derive(Debug, Clone)]
pub struct ChunkTable<'a> {
	slots: Box<[ChunkSlot<'a>; REGION_CHUNKS]>,
}

impl<'a> ChunkTable<'a> {
	/// A table with every slot empty.
	pub fn new() -> Self {
		Self {
			slots: Box::new([ChunkSlot::empty(); REGION_CHUNKS]),
		}
	}

	/// Reads the chunk table out of a region file buffer.
	/// Payloads are not copied. Every occupied slot's sectors are checked to lie
	/// within `buffer`; empty slots are never dereferenced.
	pub fn load(buffer: &'a [u8]) -> RegionResult<Self> {
		let header = RegionHeader::decode(buffer)?;
		let mut table = Self::new();
		for coord in RegionCoord::all() {
			let sector: RegionSector = header.sectors[coord];
			let payload = if sector.is_empty() {
				PayloadRef::empty()
			} else {
				PayloadRef::new(buffer, sector.offset(), sector.size())
					.ok_or(RegionError::BufferTooShort {
						index: coord.index(),
						end: sector.end_offset(),
						len: buffer.len(),
					})?
			};
			table.slots[coord.index()] = ChunkSlot {
				payload,
				sector_count: sector.sector_count() as u8,
				timestamp: header.timestamps[coord],
			};
		}
		debug!(
			"Loaded region table: {} chunks in {} sectors ({} byte buffer).",
			table.occupied(),
			table.total_sectors(),
			buffer.len(),
		);
		Ok(table)
	}

	pub fn slot<C: Into<RegionCoord>>(&self, coord: C) -> &ChunkSlot<'a> {
		let coord: RegionCoord = coord.into();
		&self.slots[coord.index()]
	}

	/// Replaces a whole slot, timestamp included. No checks happen here;
	/// a slot is validated when it is built, by [ChunkSlot::with_payload] or [ChunkTable::load].
	pub fn set_slot<C: Into<RegionCoord>>(&mut self, coord: C, slot: ChunkSlot<'a>) -> ChunkSlot<'a> {
		let coord: RegionCoord = coord.into();
		std::mem::replace(&mut self.slots[coord.index()], slot)
	}

	/// Copies the payload and sector count of `source`'s slot at `coord` into
	/// this table. The timestamp of this table's slot is kept as it was.
	/// Returns the slot as it was before the substitution.
	pub fn substitute<C: Into<RegionCoord>>(&mut self, source: &ChunkTable<'a>, coord: C) -> ChunkSlot<'a> {
		let coord: RegionCoord = coord.into();
		let replacement = source.slots[coord.index()];
		let target = &mut self.slots[coord.index()];
		let previous = *target;
		if replacement.is_empty() && !previous.is_empty() {
			warn!("Substitution at {coord} empties a slot that held {} sectors.", previous.sector_count);
		}
		target.payload = replacement.payload;
		target.sector_count = replacement.sector_count;
		previous
	}

	/// Iterates over every slot with its coordinate, in table order.
	pub fn iter(&self) -> impl Iterator<Item = (RegionCoord, &ChunkSlot<'a>)> {
		RegionCoord::all().zip(self.slots.iter())
	}

	/// Number of occupied slots.
	pub fn occupied(&self) -> usize {
		self.slots.iter().filter(|slot| !slot.is_empty()).count()
	}

	/// Sum of the sector counts of every slot.
	pub fn total_sectors(&self) -> u64 {
		self.slots.iter().map(|slot| slot.sector_count as u64).sum()
	}
}

impl<'a> Default for ChunkTable<'a> {
	fn default() -> Self {
		Self::new()
	}
}

impl<'a, C: Into<RegionCoord>> Index<C> for ChunkTable<'a> {
	type Output = ChunkSlot<'a>;

	fn index(&self, index: C) -> &Self::Output {
		self.slot(index)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use super::super::HEADER_SIZE;

	/// Builds a region buffer by hand: every entry is `(coord, sector offset, sector count, fill byte)`.
	fn region_bytes(entries: &[((u16, u16), u32, u8, u8)], total_sectors: usize) -> Vec<u8> {
		let mut buffer = vec![0u8; total_sectors * SECTOR_SIZE as usize];
		for &((x, z), offset, count, fill) in entries {
			let coord = RegionCoord::new(x, z);
			RegionSector::new(offset, count).encode(&mut buffer, coord.sector_table_offset());
			Timestamp::new([fill; 4]).encode(&mut buffer, coord.timestamp_table_offset());
			let start = offset as usize * SECTOR_SIZE as usize;
			let end = start + count as usize * SECTOR_SIZE as usize;
			buffer[start..end].fill(fill);
		}
		buffer
	}

	#[test]
	fn load_borrows_payloads() {
		let buffer = region_bytes(&[((1, 0), 2, 1, 0x11), ((0, 2), 3, 2, 0x22)], 5);
		let table = ChunkTable::load(&buffer).unwrap();
		assert_eq!(table.occupied(), 2);
		assert_eq!(table.total_sectors(), 3);

		let slot = table.slot((0, 2));
		assert_eq!(slot.sector_count(), 2);
		assert_eq!(slot.payload().len(), 8192);
		assert_eq!(slot.payload().offset(), 3 * 4096);
		assert!(slot.payload().bytes().iter().all(|&b| b == 0x22));
		assert_eq!(slot.timestamp(), Timestamp::new([0x22; 4]));
		assert!(table[(5, 5)].is_empty());
	}

	#[test]
	fn header_only_region_loads_empty() {
		let buffer = vec![0u8; HEADER_SIZE];
		let table = ChunkTable::load(&buffer).unwrap();
		assert_eq!(table.occupied(), 0);
		assert!(matches!(
			ChunkTable::load(&buffer[..HEADER_SIZE - 4]),
			Err(RegionError::HeaderTooShort { .. })
		));
	}

	#[test]
	fn payload_past_end_is_rejected() {
		let mut buffer = region_bytes(&[((3, 1), 2, 2, 0x33)], 4);
		buffer.truncate(3 * 4096 + 100);
		match ChunkTable::load(&buffer) {
			Err(RegionError::BufferTooShort { index, end, len }) => {
				assert_eq!(index, 35);
				assert_eq!(end, 4 * 4096);
				assert_eq!(len, 3 * 4096 + 100);
			}
			other => panic!("expected BufferTooShort, got {other:?}"),
		}
	}

	#[test]
	fn empty_slot_offsets_are_ignored() {
		// An empty slot pointing far outside the buffer is fine.
		let mut buffer = vec![0u8; HEADER_SIZE];
		RegionSector::new(0xFFFFFF, 0).encode(&mut buffer, 0);
		let table = ChunkTable::load(&buffer).unwrap();
		assert!(table[0usize].is_empty());
		assert!(table[0usize].payload().is_empty());
	}

	#[test]
	fn substitute_keeps_destination_timestamp() {
		let target_bytes = region_bytes(&[((7, 7), 2, 1, 0xAA)], 3);
		let source_bytes = region_bytes(&[((7, 7), 2, 3, 0xBB), ((0, 0), 5, 1, 0xCC)], 6);
		let mut target = ChunkTable::load(&target_bytes).unwrap();
		let source = ChunkTable::load(&source_bytes).unwrap();

		let previous = target.substitute(&source, (7, 7));
		assert_eq!(previous.sector_count(), 1);
		let slot = target.slot((7, 7));
		assert_eq!(slot.sector_count(), 3);
		assert!(slot.payload().bytes().iter().all(|&b| b == 0xBB));
		assert_eq!(slot.timestamp(), Timestamp::new([0xAA; 4]));
		// Only the requested slot is touched.
		assert!(target.slot((0, 0)).is_empty());
		assert_eq!(target.occupied(), 1);
	}

	#[test]
	fn substitute_with_empty_source_empties_slot() {
		let target_bytes = region_bytes(&[((2, 3), 2, 1, 0xAA)], 3);
		let source_bytes = vec![0u8; HEADER_SIZE];
		let mut target = ChunkTable::load(&target_bytes).unwrap();
		let source = ChunkTable::load(&source_bytes).unwrap();
		target.substitute(&source, (2, 3));
		assert!(target.slot((2, 3)).is_empty());
		assert_eq!(target.slot((2, 3)).timestamp(), Timestamp::new([0xAA; 4]));
	}

	#[test]
	fn oversized_payload_is_rejected() {
		let bytes = vec![0u8; 255 * 4096 + 1];
		assert!(matches!(
			ChunkSlot::with_payload(&bytes, Timestamp::default()),
			Err(RegionError::SectorCountOverflow { sectors: 256 })
		));
		let slot = ChunkSlot::with_payload(&bytes[..255 * 4096], Timestamp::default()).unwrap();
		assert_eq!(slot.sector_count(), 255);
		let slot = ChunkSlot::with_payload(&bytes[..10], Timestamp::default()).unwrap();
		assert_eq!(slot.sector_count(), 1);
		assert_eq!(slot.size(), 4096);
	}
}
