use crate::mdb::bytes::Cursor;
use crate::mdb::section::Record;
use crate::mdb::{DecodeOptions, Result};

/// One triangle record.
///
/// Indices are ordinals into the owning model's vertices and are not checked
/// against the vertex count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
	/// Size field from the record prefix.
	pub declared_size: u32,
	/// Corner vertex ordinals.
	pub vertex_indices: [u16; 3],
	/// Material ordinal.
	pub material_id: u16,
}

impl Record for Face {
	const KIND: &'static str = "face";

	fn decode(buf: &[u8], offset: usize, _options: &DecodeOptions) -> Result<Self> {
		let mut cursor = Cursor::at(buf, offset);
		let declared_size = cursor.read_u32_le()?;
		let vertex_indices = [cursor.read_u16_le()?, cursor.read_u16_le()?, cursor.read_u16_le()?];
		let material_id = cursor.read_u16_le()?;

		Ok(Self {
			declared_size,
			vertex_indices,
			material_id,
		})
	}

	fn declared_size(&self) -> u32 {
		self.declared_size
	}
}
