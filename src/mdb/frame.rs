use crate::mdb::bytes::{read_bytes, read_u32_le};
use crate::mdb::section::Record;
use crate::mdb::{DecodeOptions, MdbError, Result};

/// One animation frame record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationFrame {
	/// Size field from the record prefix.
	pub declared_size: u32,
	/// Bytes `[4, declared_size)` of the record.
	pub payload: Vec<u8>,
}

impl AnimationFrame {
	/// Payload read as a little-endian unsigned integer.
	///
	/// Returns `None` when the significant bytes do not fit in 128 bits.
	pub fn value(&self) -> Option<u128> {
		let significant = self.payload.iter().rposition(|byte| *byte != 0).map_or(0, |idx| idx + 1);
		if significant > 16 {
			return None;
		}
		Some(
			self.payload[..significant]
				.iter()
				.rev()
				.fold(0_u128, |acc, byte| (acc << 8) | u128::from(*byte)),
		)
	}
}

impl Record for AnimationFrame {
	const KIND: &'static str = "animation frame";

	fn decode(buf: &[u8], offset: usize, _options: &DecodeOptions) -> Result<Self> {
		let declared_size = read_u32_le(buf, offset)?;
		if declared_size < 4 {
			return Err(MdbError::StructuralMismatch {
				at: offset,
				what: "animation frame declared size",
				expected: 4,
				actual: declared_size as usize,
			});
		}

		let payload = read_bytes(buf, offset + 4, declared_size as usize - 4)?.to_vec();
		Ok(Self { declared_size, payload })
	}

	fn declared_size(&self) -> u32 {
		self.declared_size
	}
}
