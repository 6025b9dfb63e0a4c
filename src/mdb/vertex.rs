use crate::mdb::bytes::{Cursor, read_bytes};
use crate::mdb::section::Record;
use crate::mdb::{DecodeOptions, MdbError, Result, Rgb565};

/// One mesh vertex record.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
	/// Size field from the record prefix.
	pub declared_size: u32,
	/// Object-space position.
	pub position: [f32; 3],
	/// Texture coordinates.
	pub uv: [f32; 2],
	/// Undecoded bytes between the UV pair and the color word.
	pub trailing_unknown: Vec<u8>,
	/// Packed color taken from the two bytes ending at `declared_size`.
	pub color: Rgb565,
}

impl Vertex {
	/// Byte offset past the prefix and the five float fields.
	pub const FIXED_LEN: usize = 24;
	/// Smallest declared size that still holds the color word.
	pub const MIN_DECLARED_SIZE: u32 = 26;
}

impl Record for Vertex {
	const KIND: &'static str = "vertex";

	fn decode(buf: &[u8], offset: usize, _options: &DecodeOptions) -> Result<Self> {
		let mut cursor = Cursor::at(buf, offset);
		let declared_size = cursor.read_u32_le()?;
		let position = cursor.read_vec3()?;
		let uv = [cursor.read_f32_le()?, cursor.read_f32_le()?];

		if declared_size < Self::MIN_DECLARED_SIZE {
			return Err(MdbError::StructuralMismatch {
				at: offset,
				what: "vertex declared size",
				expected: Self::MIN_DECLARED_SIZE as usize,
				actual: declared_size as usize,
			});
		}

		let color_at = offset + declared_size as usize - 2;
		let trailing_unknown = read_bytes(buf, offset + Self::FIXED_LEN, color_at - offset - Self::FIXED_LEN)?.to_vec();
		let color_bytes = read_bytes(buf, color_at, 2)?;

		Ok(Self {
			declared_size,
			position,
			uv,
			trailing_unknown,
			color: Rgb565::unpack([color_bytes[0], color_bytes[1]]),
		})
	}

	fn declared_size(&self) -> u32 {
		self.declared_size
	}
}

#[cfg(test)]
mod tests;
