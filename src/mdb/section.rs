use tracing::{debug, trace};

use crate::mdb::bytes::{advance, read_u32_le};
use crate::mdb::{DecodeOptions, MdbError, Result};

/// A length-prefixed record decoded at an absolute offset.
///
/// Every record spans `declared_size + 4` bytes from its size prefix, whatever
/// its fixed fields occupy.
pub trait Record: Sized {
	/// Label used in logs and errors.
	const KIND: &'static str;

	/// Decode one record starting at `offset`.
	fn decode(buf: &[u8], offset: usize, options: &DecodeOptions) -> Result<Self>;

	/// Size field stored in the record prefix.
	fn declared_size(&self) -> u32;

	/// Bytes the cursor advances past this record.
	fn consumed_len(&self) -> usize {
		self.declared_size() as usize + 4
	}
}

/// Decoded run of back-to-back records.
///
/// The format never stores a section's byte length, so it is recomputed from
/// the children's declared sizes once they are decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct Section<T> {
	start: usize,
	items: Vec<T>,
}

impl<T: Record> Section<T> {
	/// Absolute offset of the first record.
	pub fn start(&self) -> usize {
		self.start
	}

	/// Sum of the records' consumed lengths.
	pub fn byte_len(&self) -> usize {
		self.items.iter().map(Record::consumed_len).sum()
	}

	/// Absolute offset one past the last record.
	pub fn end(&self) -> usize {
		self.start + self.byte_len()
	}

	/// Number of records.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// True when the section holds no records.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Decoded records in file order.
	pub fn items(&self) -> &[T] {
		&self.items
	}

	/// Take ownership of the decoded records.
	pub fn into_items(self) -> Vec<T> {
		self.items
	}
}

/// Decode `count` records back-to-back starting at `start`.
pub fn decode_section<T: Record>(buf: &[u8], start: usize, count: u32, options: &DecodeOptions) -> Result<Section<T>> {
	let mut items = Vec::with_capacity((count as usize).min(buf.len() / 4));
	let mut offset = start;
	for index in 0..count {
		let item = T::decode(buf, offset, options)?;
		trace!(kind = T::KIND, index, offset, declared_size = item.declared_size(), "record");
		offset = advance(buf, offset, item.consumed_len())?;
		items.push(item);
	}

	let section = Section { start, items };
	debug!(kind = T::KIND, start, count, byte_len = section.byte_len(), "section decoded");
	Ok(section)
}

/// Read a `u32` count at `count_at` and decode that many records after it.
pub fn decode_counted_section<T: Record>(buf: &[u8], count_at: usize, options: &DecodeOptions) -> Result<Section<T>> {
	let count = read_count(buf, count_at, T::KIND, options)?;
	decode_section(buf, advance(buf, count_at, 4)?, count, options)
}

/// Read a record count and check it against the configured ceiling.
pub fn read_count(buf: &[u8], at: usize, section: &'static str, options: &DecodeOptions) -> Result<u32> {
	let count = read_u32_le(buf, at)?;
	check_count(section, at, count, options)?;
	Ok(count)
}

/// Check an already-read count against the configured ceiling.
pub fn check_count(section: &'static str, at: usize, count: u32, options: &DecodeOptions) -> Result<()> {
	if count as usize > options.max_section_count {
		return Err(MdbError::SectionCountTooLarge {
			section,
			at,
			count,
			max: options.max_section_count,
		});
	}
	Ok(())
}
