use crate::{
	math::coord::{
		Coord2,
		floor_div,
		floor_mod,
	},
	world::io::region::coord::RegionCoord,
};

/// Width of a chunk in blocks.
pub const BLOCKS_PER_CHUNK: i64 = 16;
/// Width of a region in chunks.
pub const CHUNKS_PER_REGION: i64 = 32;

/// Where a world coordinate lives: which chunk, which region file, and
/// which slot of that region file's chunk table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
	/// The block coordinate that was resolved.
	pub world: Coord2,
	/// Chunk coordinate.
	pub chunk: Coord2,
	/// Region coordinate. This is what the region file is named after.
	pub region: Coord2,
	/// Chunk slot within the region.
	pub local: RegionCoord,
}

impl Position {
	/// Resolves a block coordinate. Negative coordinates are floored, so
	/// block `-1` is in chunk `-1`, which is in region `-1` at local `31`.
	pub fn resolve(world_x: i64, world_z: i64) -> Self {
		let world = Coord2::new(world_x, world_z);
		let chunk = world.map(|v| floor_div(v, BLOCKS_PER_CHUNK));
		let region = chunk.map(|v| floor_div(v, CHUNKS_PER_REGION));
		let local = chunk.map(|v| floor_mod(v, CHUNKS_PER_REGION));
		Self {
			world,
			chunk,
			region,
			local: RegionCoord::new(local.x as u16, local.z as u16),
		}
	}

	/// The local slot as `(x, z)`, both in `[0, 32)`.
	pub fn local_xz(&self) -> (i64, i64) {
		self.local.tuple()
	}
}

impl From<Coord2> for Position {
	fn from(value: Coord2) -> Self {
		Position::resolve(value.x, value.z)
	}
}

impl From<Position> for RegionCoord {
	fn from(value: Position) -> Self {
		value.local
	}
}

impl std::fmt::Display for Position {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"block {} -> chunk {} in region {} at slot {}",
			self.world,
			self.chunk,
			self.region,
			self.local,
		)
	}
}
