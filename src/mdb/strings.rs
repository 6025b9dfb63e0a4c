use std::str;

use crate::mdb::bytes::read_bytes;
use crate::mdb::{MdbError, Result};

/// Text blob running from the header's structure offset to end of file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StringTable {
	/// Raw table text.
	pub text: String,
}

impl StringTable {
	/// Decode `buf[offset..]` as strict UTF-8.
	///
	/// An offset equal to the buffer length yields an empty table.
	pub fn parse(buf: &[u8], offset: usize) -> Result<Self> {
		let raw = read_bytes(buf, offset, buf.len().saturating_sub(offset))?;
		let text = str::from_utf8(raw).map_err(|source| MdbError::InvalidEncoding {
			at: offset,
			what: "string table",
			source,
		})?;
		Ok(Self { text: text.to_owned() })
	}

	/// Non-empty lines of the table.
	pub fn lines(&self) -> impl Iterator<Item = &str> {
		self.text.lines().filter(|line| !line.is_empty())
	}
}

#[cfg(test)]
mod tests;
