use tracing::debug;

use crate::mdb::bytes::Cursor;
use crate::mdb::section::{Record, check_count, decode_counted_section, decode_section};
use crate::mdb::{AnimationFrame, DecodeOptions, Face, MdbError, Result, Vertex};

/// One model record with its vertex, face, and frame sections.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
	/// Size field from the record prefix.
	pub declared_size: u32,
	/// Model identifier.
	pub model_id: u32,
	/// Vertices in file order.
	pub vertices: Vec<Vertex>,
	/// Faces in file order.
	pub faces: Vec<Face>,
	/// Animation frames in file order.
	pub frames: Vec<AnimationFrame>,
}

impl Model {
	/// Bytes of fixed fields: size, id, and the three section counts.
	pub const FIXED_LEN: usize = 20;

	/// Number of vertices.
	pub fn vertex_count(&self) -> usize {
		self.vertices.len()
	}

	/// Number of faces.
	pub fn face_count(&self) -> usize {
		self.faces.len()
	}

	/// Number of animation frames.
	pub fn frame_count(&self) -> usize {
		self.frames.len()
	}
}

impl Record for Model {
	const KIND: &'static str = "model";

	/// Decode the model at `offset`.
	///
	/// Each section's start depends on the summed sizes of the one before it,
	/// so sections are decoded in order and measured before moving on.
	fn decode(buf: &[u8], offset: usize, options: &DecodeOptions) -> Result<Self> {
		let mut cursor = Cursor::at(buf, offset);
		let declared_size = cursor.read_u32_le()?;
		let model_id = cursor.read_u32_le()?;
		let vertex_count_at = cursor.pos();
		let vertex_count = cursor.read_u32_le()?;
		check_count(Vertex::KIND, vertex_count_at, vertex_count, options)?;

		let vertices = decode_section::<Vertex>(buf, cursor.pos(), vertex_count, options)?;
		let faces = decode_counted_section::<Face>(buf, vertices.end(), options)?;
		let frames = decode_counted_section::<AnimationFrame>(buf, faces.end(), options)?;

		let expected = declared_size as usize + 4;
		let actual = Self::FIXED_LEN + vertices.byte_len() + faces.byte_len() + frames.byte_len();
		if expected != actual {
			return Err(MdbError::StructuralMismatch {
				at: offset,
				what: "model size",
				expected,
				actual,
			});
		}

		debug!(
			offset,
			model_id,
			vertices = vertices.len(),
			faces = faces.len(),
			frames = frames.len(),
			"model decoded"
		);

		Ok(Self {
			declared_size,
			model_id,
			vertices: vertices.into_items(),
			faces: faces.into_items(),
			frames: frames.into_items(),
		})
	}

	fn declared_size(&self) -> u32 {
		self.declared_size
	}
}
