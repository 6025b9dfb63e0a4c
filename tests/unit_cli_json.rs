#![allow(missing_docs)]

use std::fs;
use std::process::{Command, Output};

use mdbdoc_testkit::{MdbBuilder, ModelBuilder, sample_container};
use serde_json::Value;

#[test]
fn info_json_reports_summary() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("sample.mdb");
	fs::write(&path, sample_container().build()).expect("fixture written");

	let output = run(&["info", &path.display().to_string(), "--json"]);
	assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
	let json = parse_stdout(&output);

	let file = &json["files"][0];
	assert_eq!(file["name"], "sample.mdb");
	assert_eq!(file["model_count"], 1);
	assert_eq!(file["models"][0]["vertex_count"], 3);
	assert_eq!(file["models"][0]["face_count"], 1);
	assert_eq!(file["materials"][0]["name"], "stone.tga");
	assert_eq!(file["animation_sections"][0]["name"], "idle");
	assert_eq!(file["centroid"]["radius"], 4.0);
	assert_eq!(file["strings"], "root\nmesh_a\n");
	assert!(json["failures"].as_array().is_some_and(|items| items.is_empty()));
}

#[test]
fn info_batch_continues_past_failures() {
	let dir = tempfile::tempdir().expect("tempdir");
	fs::write(dir.path().join("a_good.mdb"), sample_container().build()).expect("fixture written");
	let broken = MdbBuilder::new().model(ModelBuilder::new(1).declared_size_delta(4)).build();
	fs::write(dir.path().join("b_broken.mdb"), broken).expect("fixture written");
	fs::write(dir.path().join("c_empty.mdb"), MdbBuilder::new().build()).expect("fixture written");

	let output = run(&["info", &dir.path().display().to_string(), "--json"]);
	assert_eq!(output.status.code(), Some(1));
	let json = parse_stdout(&output);

	let files = json["files"].as_array().expect("files array");
	assert_eq!(files.len(), 2);
	assert_eq!(files[0]["name"], "a_good.mdb");
	assert_eq!(files[1]["name"], "c_empty.mdb");

	let failures = json["failures"].as_array().expect("failures array");
	assert_eq!(failures.len(), 1);
	assert!(failures[0]["path"].as_str().is_some_and(|path| path.ends_with("b_broken.mdb")));
	assert!(failures[0]["error"].as_str().is_some_and(|err| err.contains("structural mismatch")));
}

#[test]
fn info_text_lists_textures() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("sample.mdb");
	fs::write(&path, sample_container().build()).expect("fixture written");

	let output = run(&["info", &path.display().to_string()]);
	assert!(output.status.success());
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("file: sample.mdb"));
	assert!(stdout.contains("  #0: stone.tga"));
	assert!(stdout.contains("  min: [-1.000, -2.000, -3.000]"));
}

#[test]
fn model_json_includes_requested_records() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("sample.mdb");
	fs::write(&path, sample_container().build()).expect("fixture written");

	let output = run(&["model", &path.display().to_string(), "--index", "0", "--vertices", "--faces", "--json"]);
	assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
	let json = parse_stdout(&output);

	assert_eq!(json["model_id"], 7);
	assert_eq!(json["vertices"][1]["color"], serde_json::json!([31, 63, 31]));
	assert_eq!(json["vertices"][2]["trailing_len"], 4);
	assert_eq!(json["faces"][0]["vertex_indices"], serde_json::json!([0, 1, 2]));
	assert!(json.get("frames").is_none(), "frames were not requested");
}

#[test]
fn model_index_out_of_range_fails() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("sample.mdb");
	fs::write(&path, sample_container().build()).expect("fixture written");

	let output = run(&["model", &path.display().to_string(), "--index", "5"]);
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("model index 5 out of range"));
}

#[test]
fn layout_json_flags_string_gap() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("gap.mdb");
	fs::write(&path, MdbBuilder::new().gap(&[0; 8]).strings("s").build()).expect("fixture written");

	let output = run(&["layout", &path.display().to_string(), "--json"]);
	assert!(output.status.success());
	let json = parse_stdout(&output);

	assert_eq!(json["strings_follow_centroid"], false);
	assert_eq!(json["cursor_end"], 64);
	assert_eq!(json["file_structure_offset"], 72);
	assert_eq!(json["regions"][6]["name"], "strings");
	assert_eq!(json["regions"][6]["len"], 1);
}

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_mdbdoc"))
		.args(args)
		.output()
		.expect("command executes")
}

fn parse_stdout(output: &Output) -> Value {
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}
