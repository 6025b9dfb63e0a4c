use std::str;

use crate::mdb::bytes::{Cursor, read_bytes};
use crate::mdb::section::Record;
use crate::mdb::{DecodeOptions, MdbError, Result};

/// Material record: a texture name followed by opaque material data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Material {
	/// Size field from the record prefix.
	pub declared_size: u32,
	/// Stored byte length of the name.
	pub name_length: u32,
	/// Texture file name.
	pub texture_name: String,
	/// Bytes after the name up to the end of the record.
	pub payload: Vec<u8>,
}

/// Animation section record. Shares the material layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationSection {
	/// Size field from the record prefix.
	pub declared_size: u32,
	/// Stored byte length of the name.
	pub name_length: u32,
	/// Section name, lossily decoded.
	pub name: String,
	/// Bytes after the name up to the end of the record.
	pub payload: Vec<u8>,
}

struct NamedRecord<'a> {
	declared_size: u32,
	name_length: u32,
	name_at: usize,
	name: &'a [u8],
	payload: &'a [u8],
}

fn decode_named<'a>(buf: &'a [u8], offset: usize, what: &'static str) -> Result<NamedRecord<'a>> {
	let mut cursor = Cursor::at(buf, offset);
	let declared_size = cursor.read_u32_le()?;
	let name_length = cursor.read_u32_le()?;

	// payload ends at declared_size + 4; the name must fit before it
	let record_len = declared_size as usize + 4;
	let header_len = 8 + name_length as usize;
	if header_len > record_len {
		return Err(MdbError::StructuralMismatch {
			at: offset,
			what,
			expected: record_len,
			actual: header_len,
		});
	}

	let name_at = cursor.pos();
	let name = cursor.read_exact(name_length as usize)?;
	let payload = read_bytes(buf, cursor.pos(), record_len - header_len)?;

	Ok(NamedRecord {
		declared_size,
		name_length,
		name_at,
		name,
		payload,
	})
}

impl Record for Material {
	const KIND: &'static str = "material";

	fn decode(buf: &[u8], offset: usize, options: &DecodeOptions) -> Result<Self> {
		let raw = decode_named(buf, offset, "material record")?;
		let texture_name = if options.strict_material_names {
			str::from_utf8(raw.name)
				.map_err(|source| MdbError::InvalidEncoding {
					at: raw.name_at,
					what: "material texture name",
					source,
				})?
				.to_owned()
		} else {
			String::from_utf8_lossy(raw.name).into_owned()
		};

		Ok(Self {
			declared_size: raw.declared_size,
			name_length: raw.name_length,
			texture_name,
			payload: raw.payload.to_vec(),
		})
	}

	fn declared_size(&self) -> u32 {
		self.declared_size
	}
}

impl Record for AnimationSection {
	const KIND: &'static str = "animation section";

	fn decode(buf: &[u8], offset: usize, _options: &DecodeOptions) -> Result<Self> {
		let raw = decode_named(buf, offset, "animation section record")?;
		Ok(Self {
			declared_size: raw.declared_size,
			name_length: raw.name_length,
			name: String::from_utf8_lossy(raw.name).into_owned(),
			payload: raw.payload.to_vec(),
		})
	}

	fn declared_size(&self) -> u32 {
		self.declared_size
	}
}
