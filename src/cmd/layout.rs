use std::path::PathBuf;

use mdbdoc::mdb::{MdbFile, Result, Span};

use crate::cmd::util::{DecodeArgs, emit_json};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
	#[command(flatten)]
	pub decode: DecodeArgs,
}

/// Print where each top-level region sits in the file.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json, decode } = args;
	let file = MdbFile::open_with(&path, &decode.options())?;
	let layout = file.layout();

	let regions = [
		("header", Span { start: 0, len: 16 }),
		("models", layout.models),
		("materials", layout.materials),
		("animation_sections", layout.animation_sections),
		("bounding_box", layout.bounding_box),
		("centroid", layout.centroid),
		("strings", layout.strings),
	];

	if json {
		emit_json(&LayoutJson {
			path: path.display().to_string(),
			file_structure_offset: file.header.file_structure_offset,
			cursor_end: layout.end(),
			strings_follow_centroid: layout.strings_follow_centroid(),
			regions: regions
				.iter()
				.map(|(name, span)| RegionJson {
					name: *name,
					start: span.start,
					len: span.len,
				})
				.collect(),
		});
		return Ok(());
	}

	println!("path: {}", path.display());
	for (name, span) in regions {
		println!("{name}: start={} len={} end={}", span.start, span.len, span.end());
	}
	println!("cursor_end: {}", layout.end());
	println!("file_structure_offset: {}", file.header.file_structure_offset);
	println!("strings_follow_centroid: {}", layout.strings_follow_centroid());

	Ok(())
}

#[derive(serde::Serialize)]
struct LayoutJson {
	path: String,
	file_structure_offset: u32,
	cursor_end: usize,
	strings_follow_centroid: bool,
	regions: Vec<RegionJson>,
}

#[derive(serde::Serialize)]
struct RegionJson {
	name: &'static str,
	start: usize,
	len: usize,
}
