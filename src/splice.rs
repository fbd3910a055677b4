//! Replacing one chunk of a region file with the same chunk from another
//! region file.
//!
//! ```no_run
//! # fn run(source: &[u8], replacement: &[u8]) -> mcsplice::RegionResult<()> {
//! let spliced = mcsplice::splice::splice(source, replacement, -1, 200)?;
//! assert_eq!(spliced.bytes.len() as u64, spliced.len);
//! # Ok(())
//! # }
//! ```

use log::{debug, info};

use crate::{
	world::{
		io::region::{
			chunktable::ChunkTable,
			writer::{
				self,
				EmptySlotOffset,
			},
		},
		position::Position,
	},
	RegionResult, RegionError,
};

/// Knobs for how a splice behaves. The defaults reproduce the output of
/// the original tool byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpliceOptions {
	/// What empty slots get in the sector table of the output.
	pub empty_slot_offset: EmptySlotOffset,
	/// Whether an empty replacement slot may remove an occupied destination chunk.
	/// When `false`, that case is an [RegionError::EmptySourceSubstitution].
	pub allow_empty_source: bool,
}

impl Default for SpliceOptions {
	fn default() -> Self {
		Self {
			empty_slot_offset: EmptySlotOffset::Cursor,
			allow_empty_source: true,
		}
	}
}

impl SpliceOptions {
	pub fn with_empty_slot_offset(mut self, empty_slot_offset: EmptySlotOffset) -> Self {
		self.empty_slot_offset = empty_slot_offset;
		self
	}

	pub fn with_allow_empty_source(mut self, allow_empty_source: bool) -> Self {
		self.allow_empty_source = allow_empty_source;
		self
	}
}

/// A source table with the replacement chunk already substituted,
/// ready to be serialized.
#[derive(Debug)]
pub struct Splice<'a> {
	table: ChunkTable<'a>,
	position: Position,
	options: SpliceOptions,
}

/// The serialized result of a splice.
#[derive(Debug, Clone)]
pub struct Spliced {
	pub bytes: Vec<u8>,
	/// Always equal to `bytes.len()`.
	pub len: u64,
	pub position: Position,
}

impl<'a> Splice<'a> {
	/// Loads both region buffers and substitutes the chunk that contains the
	/// block at `(world_x, world_z)`. Both buffers are borrowed until the splice
	/// has been written.
	pub fn prepare(
		source: &'a [u8],
		replacement: &'a [u8],
		world_x: i64,
		world_z: i64,
		options: SpliceOptions,
	) -> RegionResult<Self> {
		let position = Position::resolve(world_x, world_z);
		debug!("Resolved {position}.");
		let mut table = ChunkTable::load(source)?;
		let replacements = ChunkTable::load(replacement)?;
		if !options.allow_empty_source
			&& replacements[position.local].is_empty()
			&& !table[position.local].is_empty() {
			return Err(RegionError::EmptySourceSubstitution { coord: position.local });
		}
		let previous = table.substitute(&replacements, position.local);
		info!(
			"Replaced chunk {} (slot {}): {} sectors -> {} sectors.",
			position.chunk,
			position.local,
			previous.sector_count(),
			table[position.local].sector_count(),
		);
		Ok(Self {
			table,
			position,
			options,
		})
	}

	pub fn position(&self) -> Position {
		self.position
	}

	pub fn options(&self) -> SpliceOptions {
		self.options
	}

	/// The merged table.
	pub fn table(&self) -> &ChunkTable<'a> {
		&self.table
	}

	/// The exact size the output buffer must have.
	pub fn required_len(&self) -> u64 {
		writer::required_len(&self.table)
	}

	/// Serializes into a caller supplied buffer of exactly [Splice::required_len] bytes.
	pub fn write_into(&self, out: &mut [u8]) -> RegionResult<u64> {
		writer::store_into(&self.table, out, self.options.empty_slot_offset)
	}

	/// Serializes into a new buffer.
	pub fn finish(self) -> RegionResult<Spliced> {
		let bytes = writer::store(&self.table, self.options.empty_slot_offset)?;
		Ok(Spliced {
			len: bytes.len() as u64,
			bytes,
			position: self.position,
		})
	}
}

/// Splices with the default [SpliceOptions].
pub fn splice(source: &[u8], replacement: &[u8], world_x: i64, world_z: i64) -> RegionResult<Spliced> {
	splice_with(source, replacement, world_x, world_z, SpliceOptions::default())
}

pub fn splice_with(
	source: &[u8],
	replacement: &[u8],
	world_x: i64,
	world_z: i64,
	options: SpliceOptions,
) -> RegionResult<Spliced> {
	Splice::prepare(source, replacement, world_x, world_z, options)?.finish()
}
