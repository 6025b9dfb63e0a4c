#![allow(missing_docs)]

use std::fs;

use mdbdoc::mdb::{MdbError, MdbFile};
use mdbdoc_testkit::{MdbBuilder, ModelBuilder, sample_container};

#[test]
fn open_reads_whole_file_and_records_name() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("crate.mdb");
	fs::write(&path, sample_container().build()).expect("fixture written");

	let file = MdbFile::open(&path).expect("fixture opens");
	assert_eq!(file.name.as_deref(), Some("crate.mdb"));
	assert_eq!(file.models().len(), 1);
	assert_eq!(file.materials()[1].texture_name, "grass.tga");
	assert_eq!(file.strings().lines().collect::<Vec<_>>(), vec!["root", "mesh_a"]);
}

#[test]
fn open_missing_file_is_io_error() {
	let dir = tempfile::tempdir().expect("tempdir");
	let err = MdbFile::open(dir.path().join("absent.mdb")).expect_err("file is missing");
	assert!(matches!(err, MdbError::Io(_)));
}

#[test]
fn batch_of_files_decodes_independently() {
	let good = sample_container().build();
	let bad = MdbBuilder::new()
		.model(ModelBuilder::new(1).declared_size_delta(8))
		.build();
	let empty = MdbBuilder::new().build();

	let results: Vec<_> = [good.as_slice(), bad.as_slice(), empty.as_slice()]
		.iter()
		.map(|bytes| MdbFile::parse(bytes))
		.collect();

	assert!(results[0].is_ok());
	assert!(matches!(results[1], Err(MdbError::StructuralMismatch { .. })));
	assert!(results[2].as_ref().is_ok_and(|file| file.models().is_empty()));
}

#[test]
fn multiple_models_are_walked_back_to_back() {
	let bytes = MdbBuilder::new()
		.model(ModelBuilder::new(10))
		.model(ModelBuilder::new(11).frame(mdbdoc_testkit::frame_record(&[3])))
		.model(ModelBuilder::new(12))
		.material(b"a.tga", &[])
		.build();
	let file = MdbFile::parse(&bytes).expect("container decodes");

	let ids: Vec<_> = file.models().iter().map(|model| model.model_id).collect();
	assert_eq!(ids, vec![10, 11, 12]);
	assert_eq!(file.models()[1].frames[0].value(), Some(3));
	assert_eq!(file.materials()[0].texture_name, "a.tga");
	assert_eq!(file.layout().models.len, 20 + 29 + 20);
}
