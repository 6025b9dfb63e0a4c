use std::str::Utf8Error;

use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, MdbError>;

/// Errors produced while reading and decoding `.mdb` data.
#[derive(Debug, Error)]
pub enum MdbError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// A read extended past the end of the buffer.
	#[error("out of bounds at offset {at}: need {need} bytes, buffer length {len}")]
	OutOfBounds {
		/// Absolute byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Total buffer length.
		len: usize,
	},
	/// Text region is not valid UTF-8 where strict decoding applies.
	#[error("invalid utf-8 in {what} at offset {at}: {source}")]
	InvalidEncoding {
		/// Absolute byte offset of the text region.
		at: usize,
		/// Logical region being decoded.
		what: &'static str,
		/// Underlying decode failure.
		source: Utf8Error,
	},
	/// A declared size disagrees with the bytes its record actually needs.
	#[error("structural mismatch in {what} at offset {at}: expected {expected} bytes, got {actual}")]
	StructuralMismatch {
		/// Absolute byte offset of the record.
		at: usize,
		/// Logical record or check that failed.
		what: &'static str,
		/// Byte count implied by the declared size.
		expected: usize,
		/// Byte count derived from the record contents.
		actual: usize,
	},
	/// A count field exceeds the configured ceiling.
	#[error("{section} count {count} at offset {at} exceeds limit {max}")]
	SectionCountTooLarge {
		/// Section whose count was read.
		section: &'static str,
		/// Absolute offset of the count field.
		at: usize,
		/// Parsed count.
		count: u32,
		/// Configured ceiling.
		max: usize,
	},
	/// Requested model index does not exist.
	#[error("model index {index} out of range (model_count={count})")]
	ModelIndexOutOfRange {
		/// Requested index.
		index: usize,
		/// Number of decoded models.
		count: usize,
	},
	/// No input files were found for a batch command.
	#[error("no .mdb inputs found")]
	NoInputs,
	/// Some files in a batch failed to decode.
	#[error("{failed} of {total} files failed to decode")]
	BatchFailed {
		/// Files that failed.
		failed: usize,
		/// Files attempted.
		total: usize,
	},
}
