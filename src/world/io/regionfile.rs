//! File access for region files. The region container code never touches
//! the filesystem; this is the layer that feeds it buffers and writes its output.

use std::{
	fs::File,
	path::{
		Path,
		PathBuf,
	},
};

use log::debug;

use crate::{
	math::coord::Coord2,
	RegionResult,
};

use super::region::{
	chunktable::ChunkTable,
	writer::{
		required_len,
		EmptySlotOffset,
		RegionWriter,
	},
	HEADER_SIZE,
};

/// The conventional file name for a region: `r.<x>.<z>.<ext>`.
pub fn region_file_name(region: Coord2, ext: &str) -> String {
	format!("r.{}.{}.{}", region.x, region.z, ext)
}

/// A region file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionFile {
	path: PathBuf,
}

impl RegionFile {
	pub fn new(path: impl AsRef<Path>) -> Self {
		Self {
			path: path.as_ref().to_owned()
		}
	}

	/// The region file for `region` inside `directory`.
	pub fn in_dir(directory: impl AsRef<Path>, region: Coord2, ext: &str) -> Self {
		Self::new(directory.as_ref().join(region_file_name(region, ext)))
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn exists(&self) -> bool {
		self.path.is_file()
	}

	/// Reads the whole file into memory.
	pub fn read(&self) -> RegionResult<Vec<u8>> {
		let bytes = std::fs::read(&self.path)?;
		debug!("Read {} bytes from {}.", bytes.len(), self.path.display());
		Ok(bytes)
	}

	/// Writes `bytes` as the whole file, creating parent directories as needed.
	pub fn write(&self, bytes: &[u8]) -> RegionResult<()> {
		self.create_parent()?;
		std::fs::write(&self.path, bytes)?;
		debug!("Wrote {} bytes to {}.", bytes.len(), self.path.display());
		Ok(())
	}

	/// Serializes `table` straight into the file. The file is truncated and
	/// sized to the compacted length before anything is written.
	/// Returns the file length.
	pub fn write_table(&self, table: &ChunkTable, empty_offset: EmptySlotOffset) -> RegionResult<u64> {
		self.create_parent()?;
		let length = required_len(table);
		let file = File::options().write(true).create(true).truncate(true).open(&self.path)?;
		file.set_len(length)?;
		let mut writer = RegionWriter::<File>::with_capacity(HEADER_SIZE, file);
		let written = writer.write_table(table, empty_offset)?;
		debug!("Wrote {written} bytes to {}.", self.path.display());
		Ok(written)
	}

	fn create_parent(&self) -> RegionResult<()> {
		if let Some(parent) = self.path.parent() {
			if !parent.as_os_str().is_empty() {
				std::fs::create_dir_all(parent)?;
			}
		}
		Ok(())
	}
}
