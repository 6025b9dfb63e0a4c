use std::path::{Path, PathBuf};

use mdbdoc::mdb::{MdbError, MdbFile, Result};
use tracing::warn;

use crate::cmd::util::{DecodeArgs, collect_inputs, emit_json, fmt_floats};

#[derive(clap::Args)]
pub struct Args {
	/// Files or directories of `.mdb` files.
	#[arg(required = true)]
	pub paths: Vec<PathBuf>,
	#[arg(long)]
	pub json: bool,
	#[command(flatten)]
	pub decode: DecodeArgs,
}

/// Print a summary of each container; failures are reported and skipped.
pub fn run(args: Args) -> Result<()> {
	let Args { paths, json, decode } = args;
	let options = decode.options();
	let inputs = collect_inputs(&paths)?;

	let mut files = Vec::new();
	let mut failures = Vec::new();
	for path in &inputs {
		match MdbFile::open_with(path, &options) {
			Ok(file) => {
				if json {
					files.push(info_json(path, &file));
				} else {
					print_info(path, &file);
				}
			}
			Err(err) => {
				warn!(path = %path.display(), error = %err, "decode failed");
				if !json {
					eprintln!("error: {}: {err}", path.display());
				}
				failures.push(FailureJson {
					path: path.display().to_string(),
					error: err.to_string(),
				});
			}
		}
	}

	let failed = failures.len();
	if json {
		emit_json(&BatchJson { files, failures });
	}

	if failed == 0 {
		Ok(())
	} else {
		Err(MdbError::BatchFailed {
			failed,
			total: inputs.len(),
		})
	}
}

fn print_info(path: &Path, file: &MdbFile) {
	println!("file: {}", display_name(path, file));
	println!("models: {}", file.models().len());
	for (index, model) in file.models().iter().enumerate() {
		println!("model #{index}");
		println!("  declared_size: {}", model.declared_size);
		println!("  model_id: {}", model.model_id);
		println!("  vertices: {}", model.vertex_count());
		println!("  faces: {}", model.face_count());
		println!("  frames: {}", model.frame_count());
	}

	println!("materials: {}", file.materials().len());
	for (index, material) in file.materials().iter().enumerate() {
		println!("  #{index}: {}", material.texture_name);
	}

	println!("animation_sections: {}", file.animation_sections().len());
	for (index, section) in file.animation_sections().iter().enumerate() {
		println!("  #{index}: {}", section.name);
	}

	let bounds = file.bounding_box();
	println!("bounding_box:");
	println!("  min: {}", fmt_floats(&bounds.min));
	println!("  max: {}", fmt_floats(&bounds.max));

	let centroid = file.centroid();
	println!("centroid:");
	println!("  position: {}", fmt_floats(&centroid.position));
	println!("  radius: {:+.3}", centroid.radius);

	println!("strings:");
	for line in file.strings().lines() {
		println!("  {line}");
	}
}

fn display_name(path: &Path, file: &MdbFile) -> String {
	file.name.clone().unwrap_or_else(|| path.display().to_string())
}

fn info_json(path: &Path, file: &MdbFile) -> InfoJson {
	InfoJson {
		path: path.display().to_string(),
		name: display_name(path, file),
		model_count: file.header.model_count,
		models: file
			.models()
			.iter()
			.map(|model| ModelSummaryJson {
				declared_size: model.declared_size,
				model_id: model.model_id,
				vertex_count: model.vertex_count(),
				face_count: model.face_count(),
				frame_count: model.frame_count(),
			})
			.collect(),
		materials: file
			.materials()
			.iter()
			.map(|material| NamedJson {
				name: material.texture_name.clone(),
				payload_len: material.payload.len(),
			})
			.collect(),
		animation_sections: file
			.animation_sections()
			.iter()
			.map(|section| NamedJson {
				name: section.name.clone(),
				payload_len: section.payload.len(),
			})
			.collect(),
		bounding_box: BoundsJson {
			min: file.bounding_box().min,
			max: file.bounding_box().max,
		},
		centroid: CentroidJson {
			position: file.centroid().position,
			radius: file.centroid().radius,
		},
		strings: file.strings().text.clone(),
	}
}

#[derive(serde::Serialize)]
struct BatchJson {
	files: Vec<InfoJson>,
	failures: Vec<FailureJson>,
}

#[derive(serde::Serialize)]
struct FailureJson {
	path: String,
	error: String,
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	name: String,
	model_count: u32,
	models: Vec<ModelSummaryJson>,
	materials: Vec<NamedJson>,
	animation_sections: Vec<NamedJson>,
	bounding_box: BoundsJson,
	centroid: CentroidJson,
	strings: String,
}

#[derive(serde::Serialize)]
struct ModelSummaryJson {
	declared_size: u32,
	model_id: u32,
	vertex_count: usize,
	face_count: usize,
	frame_count: usize,
}

#[derive(serde::Serialize)]
struct NamedJson {
	name: String,
	payload_len: usize,
}

#[derive(serde::Serialize)]
struct BoundsJson {
	min: [f32; 3],
	max: [f32; 3],
}

#[derive(serde::Serialize)]
struct CentroidJson {
	position: [f32; 3],
	radius: f32,
}
