use std::path::PathBuf;

use mdbdoc::mdb::{MdbFile, Model, Result};

use crate::cmd::util::{DecodeArgs, emit_json, fmt_floats};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long, default_value_t = 0)]
	pub index: usize,
	#[arg(long)]
	pub vertices: bool,
	#[arg(long)]
	pub faces: bool,
	#[arg(long)]
	pub frames: bool,
	#[arg(long)]
	pub json: bool,
	#[command(flatten)]
	pub decode: DecodeArgs,
}

/// Dump one model, optionally with its per-record data.
pub fn run(args: Args) -> Result<()> {
	let file = MdbFile::open_with(&args.path, &args.decode.options())?;
	let model = file.model(args.index)?;

	if args.json {
		emit_json(&model_json(&args, model));
		return Ok(());
	}

	println!("path: {}", args.path.display());
	println!("model: {}", args.index);
	println!("declared_size: {}", model.declared_size);
	println!("model_id: {}", model.model_id);
	println!("vertices: {}", model.vertex_count());
	println!("faces: {}", model.face_count());
	println!("frames: {}", model.frame_count());

	if args.vertices {
		println!("vertex_records:");
		for (index, vertex) in model.vertices.iter().enumerate() {
			println!(
				"  #{index}: xyz={} uv={} rgb=[{}, {}, {}] trailing={}",
				fmt_floats(&vertex.position),
				fmt_floats(&vertex.uv),
				vertex.color.r,
				vertex.color.g,
				vertex.color.b,
				vertex.trailing_unknown.len()
			);
		}
	}

	if args.faces {
		println!("face_records:");
		for (index, face) in model.faces.iter().enumerate() {
			let [a, b, c] = face.vertex_indices;
			println!("  #{index}: indices=[{a:05}, {b:05}, {c:05}] material={:05}", face.material_id);
		}
	}

	if args.frames {
		println!("frame_records:");
		for (index, frame) in model.frames.iter().enumerate() {
			println!("  #{index}: size={:05} value={}", frame.declared_size, frame_value_label(frame.value()));
		}
	}

	Ok(())
}

fn frame_value_label(value: Option<u128>) -> String {
	value.map(|item| item.to_string()).unwrap_or_else(|| "-".to_owned())
}

fn model_json(args: &Args, model: &Model) -> ModelJson {
	ModelJson {
		path: args.path.display().to_string(),
		index: args.index,
		declared_size: model.declared_size,
		model_id: model.model_id,
		vertex_count: model.vertex_count(),
		face_count: model.face_count(),
		frame_count: model.frame_count(),
		vertices: args.vertices.then(|| {
			model
				.vertices
				.iter()
				.map(|vertex| VertexJson {
					position: vertex.position,
					uv: vertex.uv,
					color: [vertex.color.r, vertex.color.g, vertex.color.b],
					trailing_len: vertex.trailing_unknown.len(),
				})
				.collect()
		}),
		faces: args.faces.then(|| {
			model
				.faces
				.iter()
				.map(|face| FaceJson {
					vertex_indices: face.vertex_indices,
					material_id: face.material_id,
				})
				.collect()
		}),
		frames: args.frames.then(|| {
			model
				.frames
				.iter()
				.map(|frame| FrameJson {
					declared_size: frame.declared_size,
					value: frame.value().map(|item| item.to_string()),
				})
				.collect()
		}),
	}
}

#[derive(serde::Serialize)]
struct ModelJson {
	path: String,
	index: usize,
	declared_size: u32,
	model_id: u32,
	vertex_count: usize,
	face_count: usize,
	frame_count: usize,
	#[serde(skip_serializing_if = "Option::is_none")]
	vertices: Option<Vec<VertexJson>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	faces: Option<Vec<FaceJson>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	frames: Option<Vec<FrameJson>>,
}

#[derive(serde::Serialize)]
struct VertexJson {
	position: [f32; 3],
	uv: [f32; 2],
	color: [u8; 3],
	trailing_len: usize,
}

#[derive(serde::Serialize)]
struct FaceJson {
	vertex_indices: [u16; 3],
	material_id: u16,
}

#[derive(serde::Serialize)]
struct FrameJson {
	declared_size: u32,
	value: Option<String>,
}
