//! Chunk splicing for region files: copy a single chunk from one region
//! file into another and write the result back out compacted.

pub mod world;
pub mod ioext;
pub mod error;
pub mod math;
pub mod macros;
pub mod splice;

pub use error::RegionError;
pub use error::RegionResult;

pub use splice::{
	splice,
	splice_with,
	Splice,
	SpliceOptions,
	Spliced,
};
pub use world::position::Position;
pub use world::io::region::writer::EmptySlotOffset;
