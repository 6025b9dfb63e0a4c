use mdbdoc_testkit::vertex_record;

use crate::mdb::section::Record;
use crate::mdb::{DecodeOptions, MdbError, Rgb565, Vertex};

#[test]
fn minimum_size_vertex_has_empty_trailing_region() {
	let bytes = vertex_record([1.0, 2.0, 3.0], [0.5, 0.25], &[], 0xFFFF);
	let vertex = Vertex::decode(&bytes, 0, &DecodeOptions::default()).expect("vertex decodes");

	assert_eq!(vertex.declared_size, Vertex::MIN_DECLARED_SIZE);
	assert_eq!(vertex.position, [1.0, 2.0, 3.0]);
	assert_eq!(vertex.uv, [0.5, 0.25]);
	assert!(vertex.trailing_unknown.is_empty());
	assert_eq!(vertex.color, Rgb565 { r: 31, g: 63, b: 31 });
	assert_eq!(vertex.consumed_len(), 30);
}

#[test]
fn color_comes_from_record_not_buffer_tail() {
	let mut bytes = vertex_record([0.0; 3], [0.0; 2], &[0xAB, 0xCD, 0xEF], 0xF800);
	// a following record must not influence the color
	bytes.extend_from_slice(&[0xFF; 8]);
	let vertex = Vertex::decode(&bytes, 0, &DecodeOptions::default()).expect("vertex decodes");

	assert_eq!(vertex.trailing_unknown, vec![0xAB, 0xCD, 0xEF]);
	assert_eq!(vertex.color, Rgb565 { r: 31, g: 0, b: 0 });
}

#[test]
fn decodes_at_nonzero_offset() {
	let mut bytes = vec![0_u8; 5];
	bytes.extend_from_slice(&vertex_record([4.0, 5.0, 6.0], [1.0, 1.0], &[7], 0x001F));
	let vertex = Vertex::decode(&bytes, 5, &DecodeOptions::default()).expect("vertex decodes");
	assert_eq!(vertex.position, [4.0, 5.0, 6.0]);
	assert_eq!(vertex.trailing_unknown, vec![7]);
	assert_eq!(vertex.color.b, 31);
}

#[test]
fn undersized_declared_size_is_structural_mismatch() {
	let mut bytes = vertex_record([0.0; 3], [0.0; 2], &[], 0);
	bytes[..4].copy_from_slice(&24_u32.to_le_bytes());
	let err = Vertex::decode(&bytes, 0, &DecodeOptions::default()).expect_err("24 leaves no room for color");
	assert!(matches!(
		err,
		MdbError::StructuralMismatch {
			expected: 26,
			actual: 24,
			..
		}
	));
}

#[test]
fn truncated_color_is_out_of_bounds() {
	let bytes = vertex_record([0.0; 3], [0.0; 2], &[1, 2], 0);
	let err = Vertex::decode(&bytes[..27], 0, &DecodeOptions::default()).expect_err("color is cut off");
	assert!(matches!(err, MdbError::OutOfBounds { .. }));
}
