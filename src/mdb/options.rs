/// Decoder options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
	/// Reject material texture names that are not valid UTF-8.
	///
	/// When `false`, invalid sequences are replaced with U+FFFD. Animation
	/// section names are always decoded lossily.
	pub strict_material_names: bool,
	/// Maximum accepted value of any record count field.
	pub max_section_count: usize,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			strict_material_names: true,
			max_section_count: 1 << 20,
		}
	}
}
