use std::io::{
	Cursor,
	Write,
	BufWriter,
	Seek, SeekFrom,
};

use log::{debug, trace};

use crate::{
	ioext::*,
	RegionResult, RegionError,
};

use super::{
	chunktable::*,
	header::*,
	sector::*,
	is_multiple_of_4096,
	HEADER_SECTORS,
	SECTOR_SIZE,
};

/// What to store in the sector table for an empty slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptySlotOffset {
	/// Store the sector cursor at the point the empty slot is reached,
	/// the same as an occupied slot would get.
	#[default]
	Cursor,
	/// Store `0`, the usual marker for a missing chunk.
	Zero,
}

/// The exact byte length of the compacted region file for `table`:
/// the two header sectors plus every slot's sectors.
pub fn required_len(table: &ChunkTable) -> u64 {
	(HEADER_SECTORS + table.total_sectors()) * SECTOR_SIZE
}

/// Builds the header that [RegionWriter::write_table] writes for `table`.
/// Sectors are handed out in table order, starting right after the header.
pub fn compacted_header(table: &ChunkTable, empty_offset: EmptySlotOffset) -> RegionHeader {
	let mut header = RegionHeader::default();
	let mut cursor = HEADER_SECTORS;
	for (coord, slot) in table.iter() {
		let offset = match (slot.is_empty(), empty_offset) {
			(true, EmptySlotOffset::Zero) => 0,
			_ => cursor,
		};
		header.sectors[coord] = RegionSector::new(offset as u32, slot.sector_count());
		header.timestamps[coord] = slot.timestamp();
		cursor += slot.sector_count() as u64;
	}
	header
}

/// Serializes `table` into `out`, which must be exactly [required_len] bytes.
/// Every byte of `out` is overwritten. Returns the number of bytes written.
pub fn store_into(table: &ChunkTable, out: &mut [u8], empty_offset: EmptySlotOffset) -> RegionResult<u64> {
	let expected = required_len(table);
	if out.len() as u64 != expected {
		return Err(RegionError::OutputSizeMismatch {
			expected,
			actual: out.len() as u64,
		});
	}
	let mut writer = RegionWriter::new(Cursor::new(out));
	writer.write_table(table, empty_offset)
}

/// Serializes `table` into a new buffer.
pub fn store(table: &ChunkTable, empty_offset: EmptySlotOffset) -> RegionResult<Vec<u8>> {
	let mut buffer = vec![0u8; required_len(table) as usize];
	store_into(table, &mut buffer, empty_offset)?;
	Ok(buffer)
}

/// An abstraction for writing Region files.
/// You pass a seekable writer to this struct, write the table,
/// then call `.finish()` to take the writer back.
pub struct RegionWriter<W: Write + Seek> {
	/// The writer that this [RegionWriter] is bound to.
	writer: W,
}

impl<W: Write + Seek> RegionWriter<W> {
	pub fn new(writer: W) -> Self {
		Self {
			writer,
		}
	}

	pub fn with_capacity(capacity: usize, inner: W) -> RegionWriter<BufWriter<W>> {
		RegionWriter::<BufWriter<W>>{
			writer: BufWriter::with_capacity(capacity, inner)
		}
	}

	/// Seeks to the beginning of the stream and writes a header.
	/// The stream is returned to where it was.
	pub fn write_header(&mut self, header: &RegionHeader) -> RegionResult<()> {
		let ret = self.writer.seek_return()?;
		self.writer.seek(SeekFrom::Start(0))?;
		header.write_to(&mut self.writer)?;
		self.writer.seek(ret)?;
		Ok(())
	}

	/// Writes a chunk's payload at the current position, which must be on a
	/// 4KiB boundary, padding the last sector with zeroes.
	/// Returns the number of bytes written.
	pub fn write_chunk(&mut self, slot: &ChunkSlot) -> RegionResult<u64> {
		debug_assert!(is_multiple_of_4096(self.writer.stream_position()?));
		let size = slot.size();
		let bytes = slot.payload().bytes();
		let bytes = &bytes[..bytes.len().min(size as usize)];
		self.writer.write_all(bytes)?;
		self.writer.write_zeroes(size - bytes.len() as u64)?;
		Ok(size)
	}

	/// Writes the whole table as a compacted region file: every occupied slot's
	/// sectors back to back in table order right after the header, then the
	/// header itself once the payloads are in place.
	/// Returns the length of the region file.
	pub fn write_table(&mut self, table: &ChunkTable, empty_offset: EmptySlotOffset) -> RegionResult<u64> {
		let header = compacted_header(table, empty_offset);
		let mut length = HEADER_SECTORS * SECTOR_SIZE;
		self.writer.seek(SeekFrom::Start(length))?;
		for (coord, slot) in table.iter() {
			if slot.is_empty() {
				continue;
			}
			trace!("Writing chunk {coord}: {} sectors at sector {}.", slot.sector_count(), header.sectors[coord].sector_offset());
			length += self.write_chunk(slot)?;
		}
		self.write_header(&header)?;
		self.writer.flush()?;
		debug!("Stored region table: {} chunks, {length} bytes.", table.occupied());
		Ok(length)
	}

	/// Returns the inner writer.
	pub fn finish(self) -> W {
		self.writer
	}
}
