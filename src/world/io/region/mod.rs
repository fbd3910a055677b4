pub mod codec;
pub mod coord;
pub mod sector;
pub mod timestamp;
pub mod header;
pub mod payload;
pub mod chunktable;
pub mod writer;

/// Size in bytes of a single sector. Both header tables and every chunk
/// payload are allocated in whole sectors.
pub const SECTOR_SIZE: u64 = 4096;

/// Number of chunk slots in a region (32x32).
pub const REGION_CHUNKS: usize = 1024;

/// The region header (sector table + timestamp table) occupies the first two sectors.
pub const HEADER_SECTORS: u64 = 2;

/// Byte length of the region header.
pub const HEADER_SIZE: usize = (SECTOR_SIZE * HEADER_SECTORS) as usize;

/// The most sectors a single chunk can occupy, since the count is stored in one byte.
pub const MAX_CHUNK_SECTORS: u64 = u8::MAX as u64;

/// Tests if a value is a multiple of 4096.
pub const fn is_multiple_of_4096(n: u64) -> bool {
	(n & 4095) == 0
}

/// Counts the number of 4KiB sectors required to accomodate `size` bytes.
pub const fn required_sectors(size: u64) -> u64 {
	let sub = size >> 12;
	// true => 1 | false => 0
	let overflow = !is_multiple_of_4096(size) as u64;
	sub + overflow
}

/// Returns the 4KiB pad size for the given size.
/// The pad size is the number of bytes required
/// to add to the size in order to make it a
/// multiple of 4096.
pub const fn pad_size(size: u64) -> u64 {
	(4096 - (size & 4095)) & 4095
}

pub mod prelude {
	pub use super::{
		coord::*,
		sector::*,
		timestamp::*,
		header::*,
		payload::*,
		chunktable::*,
		writer::*,
		SECTOR_SIZE,
		REGION_CHUNKS,
		HEADER_SIZE,
	};
}
