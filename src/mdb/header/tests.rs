use crate::mdb::{MdbError, MdbHeader};

#[test]
fn parses_fields_and_overlapping_marker() {
	let bytes = [
		0x40, 0x01, 0x00, 0x00, // file_structure_offset = 320
		0x44, 0x33, 0x22, 0x11, // unknown
		0x88, 0x77, 0x66, 0x55, // high half of trailer_marker
		0x03, 0x00, 0x00, 0x00, // model_count
	];
	let header = MdbHeader::parse(&bytes).expect("header parses");
	assert_eq!(header.file_structure_offset, 320);
	assert_eq!(header.unknown, 0x1122_3344);
	assert_eq!(header.trailer_marker, 0x5566_7788_1122_3344);
	assert_eq!(header.model_count, 3);
}

#[test]
fn short_header_is_out_of_bounds() {
	let err = MdbHeader::parse(&[0_u8; 15]).expect_err("15 bytes is not a header");
	assert!(matches!(err, MdbError::OutOfBounds { at: 12, need: 4, len: 15 }));
}
