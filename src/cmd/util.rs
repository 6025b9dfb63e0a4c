use std::fs;
use std::path::{Path, PathBuf};

use mdbdoc::mdb::{DecodeOptions, MdbError, Result};

/// Decoder flags shared by every subcommand.
#[derive(clap::Args, Debug, Clone, Copy)]
pub struct DecodeArgs {
	/// Decode material names lossily instead of rejecting invalid UTF-8.
	#[arg(long = "lossy-names")]
	pub lossy_names: bool,
	/// Maximum accepted record count in any section.
	#[arg(long = "max-count")]
	pub max_count: Option<usize>,
}

impl DecodeArgs {
	/// Build decoder options from flags.
	pub(crate) fn options(&self) -> DecodeOptions {
		let defaults = DecodeOptions::default();
		DecodeOptions {
			strict_material_names: !self.lossy_names,
			max_section_count: self.max_count.unwrap_or(defaults.max_section_count),
		}
	}
}

/// Expand directories to their `*.mdb` entries, keeping file arguments as given.
pub(crate) fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
	let mut out = Vec::new();
	for path in paths {
		if path.is_dir() {
			let mut entries = Vec::new();
			for entry in fs::read_dir(path)? {
				let entry_path = entry?.path();
				if entry_path.is_file() && has_mdb_extension(&entry_path) {
					entries.push(entry_path);
				}
			}
			entries.sort();
			out.extend(entries);
		} else {
			out.push(path.clone());
		}
	}

	if out.is_empty() {
		return Err(MdbError::NoInputs);
	}
	Ok(out)
}

fn has_mdb_extension(path: &Path) -> bool {
	path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("mdb"))
}

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: json encode failed: {err}"),
	}
}

/// Render floats with a sign and three decimals.
pub(crate) fn fmt_floats(values: &[f32]) -> String {
	let items: Vec<String> = values.iter().map(|value| format!("{value:+.3}")).collect();
	format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
	use std::fs;

	use super::{collect_inputs, fmt_floats};

	#[test]
	fn directory_expands_to_sorted_mdb_files() {
		let dir = tempfile::tempdir().expect("tempdir");
		for name in ["b.mdb", "a.MDB", "notes.txt"] {
			fs::write(dir.path().join(name), b"").expect("write file");
		}
		fs::create_dir(dir.path().join("nested.mdb")).expect("create dir");

		let inputs = collect_inputs(&[dir.path().to_path_buf()]).expect("inputs collect");
		let names: Vec<_> = inputs
			.iter()
			.map(|path| path.file_name().expect("file name").to_string_lossy().into_owned())
			.collect();
		assert_eq!(names, vec!["a.MDB", "b.mdb"]);
	}

	#[test]
	fn empty_directory_has_no_inputs() {
		let dir = tempfile::tempdir().expect("tempdir");
		assert!(collect_inputs(&[dir.path().to_path_buf()]).is_err());
	}

	#[test]
	fn floats_render_signed() {
		assert_eq!(fmt_floats(&[1.0, -0.5]), "[+1.000, -0.500]");
	}
}
