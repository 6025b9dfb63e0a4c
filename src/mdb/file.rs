use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::mdb::bytes::advance;
use crate::mdb::section::{Record, check_count, decode_counted_section, decode_section};
use crate::mdb::{
	AnimationSection, BoundingBox, Centroid, DecodeOptions, Material, MdbError, MdbHeader, Model, Result, StringTable,
};

/// Byte extent of one top-level region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
	/// Absolute start offset.
	pub start: usize,
	/// Length in bytes.
	pub len: usize,
}

impl Span {
	/// Absolute offset one past the region.
	pub fn end(&self) -> usize {
		self.start + self.len
	}
}

/// Where each top-level region was found during the decode walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLayout {
	/// Model records, excluding the header.
	pub models: Span,
	/// Material count field and records.
	pub materials: Span,
	/// Animation section count field and records.
	pub animation_sections: Span,
	/// Bounding box.
	pub bounding_box: Span,
	/// Centroid.
	pub centroid: Span,
	/// String table, from the header offset to end of file.
	pub strings: Span,
}

impl SectionLayout {
	/// Cursor position after the centroid.
	pub fn end(&self) -> usize {
		self.centroid.end()
	}

	/// True when the string table starts right where the cursor walk ended.
	pub fn strings_follow_centroid(&self) -> bool {
		self.end() == self.strings.start
	}
}

/// Decoded `.mdb` container.
#[derive(Debug, Clone, PartialEq)]
pub struct MdbFile {
	/// Final path component when opened from disk.
	pub name: Option<String>,
	/// Fixed header.
	pub header: MdbHeader,
	models: Vec<Model>,
	materials: Vec<Material>,
	animation_sections: Vec<AnimationSection>,
	bounding_box: BoundingBox,
	centroid: Centroid,
	strings: StringTable,
	layout: SectionLayout,
}

impl MdbFile {
	/// Read and decode a file with default options.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		Self::open_with(path, &DecodeOptions::default())
	}

	/// Read and decode a file.
	pub fn open_with(path: impl AsRef<Path>, options: &DecodeOptions) -> Result<Self> {
		let path = path.as_ref();
		let bytes = fs::read(path)?;
		let mut file = Self::parse_with(&bytes, options)?;
		file.name = path.file_name().map(|name| name.to_string_lossy().into_owned());
		Ok(file)
	}

	/// Decode an in-memory buffer with default options.
	pub fn parse(bytes: &[u8]) -> Result<Self> {
		Self::parse_with(bytes, &DecodeOptions::default())
	}

	/// Decode an in-memory buffer.
	pub fn parse_with(bytes: &[u8], options: &DecodeOptions) -> Result<Self> {
		let header = MdbHeader::parse(bytes)?;
		check_count(Model::KIND, 12, header.model_count, options)?;

		let models = decode_section::<Model>(bytes, MdbHeader::SIZE, header.model_count, options)?;
		let materials = decode_counted_section::<Material>(bytes, models.end(), options)?;
		let animation_sections = decode_counted_section::<AnimationSection>(bytes, materials.end(), options)?;

		let bounding_box_at = animation_sections.end();
		let bounding_box = BoundingBox::parse(bytes, bounding_box_at)?;
		let centroid_at = advance(bytes, bounding_box_at, BoundingBox::SIZE)?;
		let centroid = Centroid::parse(bytes, centroid_at)?;

		let strings_at = header.file_structure_offset as usize;
		let strings = StringTable::parse(bytes, strings_at)?;

		let layout = SectionLayout {
			models: Span {
				start: models.start(),
				len: models.byte_len(),
			},
			materials: Span {
				start: models.end(),
				len: materials.end() - models.end(),
			},
			animation_sections: Span {
				start: materials.end(),
				len: animation_sections.end() - materials.end(),
			},
			bounding_box: Span {
				start: bounding_box_at,
				len: BoundingBox::SIZE,
			},
			centroid: Span {
				start: centroid_at,
				len: Centroid::SIZE,
			},
			strings: Span {
				start: strings_at,
				len: bytes.len() - strings_at,
			},
		};

		if !layout.strings_follow_centroid() {
			warn!(
				cursor = layout.end(),
				file_structure_offset = strings_at,
				"string table offset does not follow centroid"
			);
		}
		debug!(
			models = models.len(),
			materials = materials.len(),
			animation_sections = animation_sections.len(),
			string_bytes = layout.strings.len,
			"container decoded"
		);

		Ok(Self {
			name: None,
			header,
			models: models.into_items(),
			materials: materials.into_items(),
			animation_sections: animation_sections.into_items(),
			bounding_box,
			centroid,
			strings,
			layout,
		})
	}

	/// Decoded models in file order.
	pub fn models(&self) -> &[Model] {
		&self.models
	}

	/// Model at `index`.
	pub fn model(&self, index: usize) -> Result<&Model> {
		self.models.get(index).ok_or(MdbError::ModelIndexOutOfRange {
			index,
			count: self.models.len(),
		})
	}

	/// Decoded materials in file order.
	pub fn materials(&self) -> &[Material] {
		&self.materials
	}

	/// Decoded animation sections in file order.
	pub fn animation_sections(&self) -> &[AnimationSection] {
		&self.animation_sections
	}

	/// Container bounding box.
	pub fn bounding_box(&self) -> &BoundingBox {
		&self.bounding_box
	}

	/// Container bounding sphere.
	pub fn centroid(&self) -> &Centroid {
		&self.centroid
	}

	/// String table.
	pub fn strings(&self) -> &StringTable {
		&self.strings
	}

	/// Region offsets recorded during decode.
	pub fn layout(&self) -> &SectionLayout {
		&self.layout
	}
}
