use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use mcsplice::{
	world::io::regionfile::RegionFile,
	EmptySlotOffset,
	Position,
	Splice,
	SpliceOptions,
};

/// Replace the chunk containing a block coordinate with the same chunk from another world.
#[derive(Parser, Debug)]
#[command(name = "mcsplice", version, about)]
struct Cli {
	/// Region directory of the world being edited
	source: PathBuf,
	/// Region directory of the world the chunk is taken from
	replacement: PathBuf,
	/// Block X coordinate
	#[arg(allow_negative_numbers = true)]
	x: i64,
	/// Block Z coordinate
	#[arg(allow_negative_numbers = true)]
	z: i64,
	/// Directory the spliced region file is written to
	#[arg(long, short, default_value = "output")]
	output: PathBuf,
	/// Region file extension
	#[arg(long, default_value = "mca")]
	ext: String,
	/// Store offset 0 for empty slots instead of the running sector cursor
	#[arg(long)]
	zero_empty_offsets: bool,
	/// Fail instead of removing an existing chunk when the replacement slot is empty
	#[arg(long)]
	reject_empty_source: bool,
}

impl Cli {
	fn options(&self) -> SpliceOptions {
		let empty_slot_offset = if self.zero_empty_offsets {
			EmptySlotOffset::Zero
		} else {
			EmptySlotOffset::Cursor
		};
		SpliceOptions::default()
			.with_empty_slot_offset(empty_slot_offset)
			.with_allow_empty_source(!self.reject_empty_source)
	}
}

fn run(cli: Cli) -> Result<()> {
	let position = Position::resolve(cli.x, cli.z);
	info!("{position}");

	let source_file = RegionFile::in_dir(&cli.source, position.region, &cli.ext);
	let replacement_file = RegionFile::in_dir(&cli.replacement, position.region, &cli.ext);
	let output_file = RegionFile::in_dir(&cli.output, position.region, &cli.ext);

	let source = source_file.read()
		.with_context(|| format!("Cannot read region file {}", source_file.path().display()))?;
	let replacement = replacement_file.read()
		.with_context(|| format!("Cannot read region file {}", replacement_file.path().display()))?;

	let splice = Splice::prepare(&source, &replacement, cli.x, cli.z, cli.options())
		.context("Cannot splice region files")?;
	info!("Counted region file size {}", splice.required_len());

	let written = output_file.write_table(splice.table(), splice.options().empty_slot_offset)
		.with_context(|| format!("Cannot write region file {}", output_file.path().display()))?;
	info!("Wrote {written} bytes to {}", output_file.path().display());
	Ok(())
}

fn main() -> Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
	run(Cli::parse())
}
