use crate::mdb::Result;
use crate::mdb::bytes::Cursor;

/// Axis-aligned bounds of the whole container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
	/// Minimum corner.
	pub min: [f32; 3],
	/// Maximum corner.
	pub max: [f32; 3],
}

impl BoundingBox {
	/// Encoded size in bytes.
	pub const SIZE: usize = 24;

	/// Parse at absolute `offset`.
	pub fn parse(buf: &[u8], offset: usize) -> Result<Self> {
		let mut cursor = Cursor::at(buf, offset);
		Ok(Self {
			min: cursor.read_vec3()?,
			max: cursor.read_vec3()?,
		})
	}
}

/// Bounding sphere of the whole container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centroid {
	/// Sphere center.
	pub position: [f32; 3],
	/// Sphere radius.
	pub radius: f32,
}

impl Centroid {
	/// Encoded size in bytes.
	pub const SIZE: usize = 16;

	/// Parse at absolute `offset`.
	pub fn parse(buf: &[u8], offset: usize) -> Result<Self> {
		let mut cursor = Cursor::at(buf, offset);
		Ok(Self {
			position: cursor.read_vec3()?,
			radius: cursor.read_f32_le()?,
		})
	}
}
