/// Color unpacked from a 16-bit vertex word.
///
/// Bit assignment is `[0:5)` blue, `[5:11)` green, `[11:16)` red. Channels
/// keep their packed ranges (`0..=31`, `0..=63`, `0..=31`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb565 {
	/// Red, 5 bits.
	pub r: u8,
	/// Green, 6 bits.
	pub g: u8,
	/// Blue, 5 bits.
	pub b: u8,
}

impl Rgb565 {
	/// Unpack a little-endian packed word.
	pub fn unpack(bytes: [u8; 2]) -> Self {
		Self::from_word(u16::from_le_bytes(bytes))
	}

	/// Unpack an already-assembled word.
	pub fn from_word(word: u16) -> Self {
		Self {
			r: ((word >> 11) & 0x1F) as u8,
			g: ((word >> 5) & 0x3F) as u8,
			b: (word & 0x1F) as u8,
		}
	}

	/// Re-pack into the stored word.
	pub fn to_word(self) -> u16 {
		(u16::from(self.r) << 11) | (u16::from(self.g) << 5) | u16::from(self.b)
	}
}
