use crate::mdb::{MdbError, StringTable};

#[test]
fn decodes_remainder_of_buffer() {
	let bytes = b"\x00\x00\x00root\nmesh\n";
	let table = StringTable::parse(bytes, 3).expect("table decodes");
	assert_eq!(table.text, "root\nmesh\n");
	assert_eq!(table.lines().collect::<Vec<_>>(), vec!["root", "mesh"]);
}

#[test]
fn offset_at_end_is_empty() {
	let bytes = [1_u8, 2, 3, 4];
	let table = StringTable::parse(&bytes, 4).expect("empty table at end");
	assert!(table.text.is_empty());
}

#[test]
fn offset_past_end_is_out_of_bounds() {
	let bytes = [1_u8, 2, 3, 4];
	let err = StringTable::parse(&bytes, 5).expect_err("offset is past the end");
	assert!(matches!(err, MdbError::OutOfBounds { at: 5, len: 4, .. }));
}

#[test]
fn invalid_utf8_is_rejected() {
	let bytes = b"ok\xC3(";
	let err = StringTable::parse(bytes, 0).expect_err("strict decoding");
	assert!(matches!(err, MdbError::InvalidEncoding { at: 0, what: "string table", .. }));
}
