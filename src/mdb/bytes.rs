use crate::mdb::{MdbError, Result};

/// Bounded little-endian cursor over the whole file buffer.
///
/// Positions are absolute so error offsets always point into the file.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at absolute position `pos`.
	pub fn at(bytes: &'a [u8], pos: usize) -> Self {
		Self { bytes, pos }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		let raw = read_bytes(self.bytes, self.pos, n)?;
		self.pos += n;
		Ok(raw)
	}

	/// Read a little-endian `u16`.
	pub fn read_u16_le(&mut self) -> Result<u16> {
		Ok(u16::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `u32`.
	pub fn read_u32_le(&mut self) -> Result<u32> {
		Ok(u32::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `u64`.
	pub fn read_u64_le(&mut self) -> Result<u64> {
		Ok(u64::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian IEEE-754 `f32`.
	pub fn read_f32_le(&mut self) -> Result<f32> {
		Ok(f32::from_le_bytes(self.read_array()?))
	}

	/// Read three consecutive `f32` values.
	pub fn read_vec3(&mut self) -> Result<[f32; 3]> {
		Ok([self.read_f32_le()?, self.read_f32_le()?, self.read_f32_le()?])
	}

	fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
		let raw = self.read_exact(N)?;
		let mut buf = [0_u8; N];
		buf.copy_from_slice(raw);
		Ok(buf)
	}
}

/// Borrow `len` bytes at `offset`, failing instead of truncating.
pub fn read_bytes(buf: &[u8], offset: usize, len: usize) -> Result<&[u8]> {
	offset
		.checked_add(len)
		.and_then(|end| buf.get(offset..end))
		.ok_or(MdbError::OutOfBounds {
			at: offset,
			need: len,
			len: buf.len(),
		})
}

/// Read a little-endian `u16` at `offset`.
pub fn read_u16_le(buf: &[u8], offset: usize) -> Result<u16> {
	Cursor::at(buf, offset).read_u16_le()
}

/// Read a little-endian `u32` at `offset`.
pub fn read_u32_le(buf: &[u8], offset: usize) -> Result<u32> {
	Cursor::at(buf, offset).read_u32_le()
}

/// Read a little-endian `f32` at `offset`.
pub fn read_f32_le(buf: &[u8], offset: usize) -> Result<f32> {
	Cursor::at(buf, offset).read_f32_le()
}

/// Advance `offset` by `len`, reporting overflow as an out-of-bounds read.
pub fn advance(buf: &[u8], offset: usize, len: usize) -> Result<usize> {
	offset.checked_add(len).ok_or(MdbError::OutOfBounds {
		at: offset,
		need: len,
		len: buf.len(),
	})
}
