use crate::mdb::Result;
use crate::mdb::bytes::Cursor;

/// Fixed 16-byte container header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MdbHeader {
	/// Absolute offset of the string table.
	pub file_structure_offset: u32,
	/// Bytes `4..8`, meaning unknown.
	pub unknown: u32,
	/// Bytes `4..12` read as one `u64`; overlaps `unknown`.
	pub trailer_marker: u64,
	/// Number of model records following the header.
	pub model_count: u32,
}

impl MdbHeader {
	/// Header size in bytes.
	pub const SIZE: usize = 16;

	/// Parse the header from the beginning of `bytes`.
	pub fn parse(bytes: &[u8]) -> Result<Self> {
		let mut cursor = Cursor::at(bytes, 0);
		let file_structure_offset = cursor.read_u32_le()?;
		let unknown = cursor.read_u32_le()?;
		let trailer_marker = Cursor::at(bytes, 4).read_u64_le()?;
		let _ = cursor.read_u32_le()?;
		let model_count = cursor.read_u32_le()?;

		Ok(Self {
			file_structure_offset,
			unknown,
			trailer_marker,
			model_count,
		})
	}
}

#[cfg(test)]
mod tests;
