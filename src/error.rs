use thiserror::Error;

use crate::world::io::region::coord::RegionCoord;

/// The master error type.
#[derive(Debug, Error)]
pub enum RegionError {
	#[error("IO Error: {0}")]
	IoError(#[from] std::io::Error),
	#[error("Region file is too small to contain a header ({len} bytes).")]
	HeaderTooShort {
		len: usize,
	},
	#[error("Chunk {index} declares sectors ending at byte {end}, but the buffer is only {len} bytes.")]
	BufferTooShort {
		index: usize,
		end: u64,
		len: usize,
	},
	#[error("Attempted to store chunk data that takes up {sectors} 4KiB sectors (the limit is 255).")]
	SectorCountOverflow {
		sectors: u64,
	},
	#[error("Replacement chunk at {coord} is empty and would remove the existing chunk.")]
	EmptySourceSubstitution {
		coord: RegionCoord,
	},
	#[error("Output buffer is {actual} bytes, but the region requires {expected} bytes.")]
	OutputSizeMismatch {
		expected: u64,
		actual: u64,
	},
}

pub type RegionResult<T> = Result<T,RegionError>;
