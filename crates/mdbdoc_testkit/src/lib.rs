//! Synthetic MDB byte images for tests.
//!
//! Every record builder follows the on-disk convention that a record spans
//! `declared_size + 4` bytes from its size prefix.

/// Bytes of the fixed vertex fields: size prefix plus `x, y, z, u, v`.
pub const VERTEX_FIXED: usize = 24;

/// Encode one vertex record.
///
/// The declared size is `24 + trailing.len() + 2`, placing `color` in the two
/// bytes just before `declared_size`. The four bytes after it are zero fill.
pub fn vertex_record(position: [f32; 3], uv: [f32; 2], trailing: &[u8], color: u16) -> Vec<u8> {
	let declared = VERTEX_FIXED + trailing.len() + 2;
	let mut out = Vec::with_capacity(declared + 4);
	push_u32(&mut out, declared as u32);
	for value in position.iter().chain(uv.iter()) {
		out.extend_from_slice(&value.to_le_bytes());
	}
	out.extend_from_slice(trailing);
	out.extend_from_slice(&color.to_le_bytes());
	out.resize(declared + 4, 0);
	out
}

/// Encode one face record with an explicit declared size.
///
/// `declared` must be at least 8; bytes past the fixed fields are zero fill.
pub fn face_record_sized(declared: u32, indices: [u16; 3], material_id: u16) -> Vec<u8> {
	let mut out = Vec::new();
	push_u32(&mut out, declared);
	for index in indices {
		out.extend_from_slice(&index.to_le_bytes());
	}
	out.extend_from_slice(&material_id.to_le_bytes());
	out.resize(declared as usize + 4, 0);
	out
}

/// Encode one face record with the tight declared size of 8.
pub fn face_record(indices: [u16; 3], material_id: u16) -> Vec<u8> {
	face_record_sized(8, indices, material_id)
}

/// Encode one animation frame whose value bytes are `payload`.
pub fn frame_record(payload: &[u8]) -> Vec<u8> {
	let declared = 4 + payload.len();
	let mut out = Vec::with_capacity(declared + 4);
	push_u32(&mut out, declared as u32);
	out.extend_from_slice(payload);
	out.resize(declared + 4, 0);
	out
}

/// Encode one material or animation-section record.
pub fn named_record(name: &[u8], payload: &[u8]) -> Vec<u8> {
	let mut out = Vec::new();
	push_u32(&mut out, (4 + name.len() + payload.len()) as u32);
	push_u32(&mut out, name.len() as u32);
	out.extend_from_slice(name);
	out.extend_from_slice(payload);
	out
}

/// Builder for one model record.
#[derive(Debug, Clone, Default)]
pub struct ModelBuilder {
	id: u32,
	vertices: Vec<Vec<u8>>,
	faces: Vec<Vec<u8>>,
	frames: Vec<Vec<u8>>,
	size_delta: i64,
}

impl ModelBuilder {
	/// Start an empty model with the given id.
	pub fn new(id: u32) -> Self {
		Self { id, ..Self::default() }
	}

	/// Append an encoded vertex record.
	pub fn vertex(mut self, record: Vec<u8>) -> Self {
		self.vertices.push(record);
		self
	}

	/// Append an encoded face record.
	pub fn face(mut self, record: Vec<u8>) -> Self {
		self.faces.push(record);
		self
	}

	/// Append an encoded animation frame record.
	pub fn frame(mut self, record: Vec<u8>) -> Self {
		self.frames.push(record);
		self
	}

	/// Skew the declared size away from the consistent value.
	pub fn declared_size_delta(mut self, delta: i64) -> Self {
		self.size_delta = delta;
		self
	}

	/// Consistent declared size: record length minus the size prefix.
	pub fn consistent_size(&self) -> u32 {
		let body: usize = [&self.vertices, &self.faces, &self.frames]
			.iter()
			.flat_map(|records| records.iter())
			.map(Vec::len)
			.sum();
		(16 + body) as u32
	}

	/// Encode the model record.
	pub fn build(&self) -> Vec<u8> {
		let declared = (i64::from(self.consistent_size()) + self.size_delta) as u32;
		let mut out = Vec::new();
		push_u32(&mut out, declared);
		push_u32(&mut out, self.id);
		push_section(&mut out, &self.vertices);
		push_section(&mut out, &self.faces);
		push_section(&mut out, &self.frames);
		out
	}
}

/// Builder for a whole MDB container image.
#[derive(Debug, Clone)]
pub struct MdbBuilder {
	unknown: u32,
	marker_high: u32,
	models: Vec<ModelBuilder>,
	materials: Vec<Vec<u8>>,
	sections: Vec<Vec<u8>>,
	bounding_box: [f32; 6],
	centroid: [f32; 4],
	gap: Vec<u8>,
	strings: Vec<u8>,
	string_offset: Option<u32>,
}

impl Default for MdbBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl MdbBuilder {
	/// Start an empty container with zeroed bounds and no strings.
	pub fn new() -> Self {
		Self {
			unknown: 0,
			marker_high: 0,
			models: Vec::new(),
			materials: Vec::new(),
			sections: Vec::new(),
			bounding_box: [0.0; 6],
			centroid: [0.0; 4],
			gap: Vec::new(),
			strings: Vec::new(),
			string_offset: None,
		}
	}

	/// Set header bytes `4..8` and `8..12`.
	pub fn unknown(mut self, low: u32, high: u32) -> Self {
		self.unknown = low;
		self.marker_high = high;
		self
	}

	/// Append a model.
	pub fn model(mut self, model: ModelBuilder) -> Self {
		self.models.push(model);
		self
	}

	/// Append a material record.
	pub fn material(mut self, name: &[u8], payload: &[u8]) -> Self {
		self.materials.push(named_record(name, payload));
		self
	}

	/// Append an animation-section record.
	pub fn animation_section(mut self, name: &[u8], payload: &[u8]) -> Self {
		self.sections.push(named_record(name, payload));
		self
	}

	/// Set the bounding box corners.
	pub fn bounding_box(mut self, min: [f32; 3], max: [f32; 3]) -> Self {
		self.bounding_box = [min[0], min[1], min[2], max[0], max[1], max[2]];
		self
	}

	/// Set the centroid position and radius.
	pub fn centroid(mut self, position: [f32; 3], radius: f32) -> Self {
		self.centroid = [position[0], position[1], position[2], radius];
		self
	}

	/// Insert opaque bytes between the centroid and the string table.
	pub fn gap(mut self, bytes: &[u8]) -> Self {
		self.gap = bytes.to_vec();
		self
	}

	/// Set the string table text.
	pub fn strings(self, text: &str) -> Self {
		self.strings_bytes(text.as_bytes())
	}

	/// Set raw string table bytes (may be invalid UTF-8).
	pub fn strings_bytes(mut self, bytes: &[u8]) -> Self {
		self.strings = bytes.to_vec();
		self
	}

	/// Override the header string-table offset.
	pub fn string_offset(mut self, offset: u32) -> Self {
		self.string_offset = Some(offset);
		self
	}

	/// Encode the container.
	pub fn build(&self) -> Vec<u8> {
		let mut body = Vec::new();
		for model in &self.models {
			body.extend_from_slice(&model.build());
		}
		push_section(&mut body, &self.materials);
		push_section(&mut body, &self.sections);
		for value in self.bounding_box.iter().chain(self.centroid.iter()) {
			body.extend_from_slice(&value.to_le_bytes());
		}
		body.extend_from_slice(&self.gap);

		let strings_at = 16 + body.len() as u32;
		let mut out = Vec::with_capacity(16 + body.len() + self.strings.len());
		push_u32(&mut out, self.string_offset.unwrap_or(strings_at));
		push_u32(&mut out, self.unknown);
		push_u32(&mut out, self.marker_high);
		push_u32(&mut out, self.models.len() as u32);
		out.extend_from_slice(&body);
		out.extend_from_slice(&self.strings);
		out
	}
}

/// A small container with one textured triangle, two materials, one
/// animation section, and a string table.
pub fn sample_container() -> MdbBuilder {
	let model = ModelBuilder::new(7)
		.vertex(vertex_record([0.0, 0.0, 0.0], [0.0, 0.0], &[], 0x0000))
		.vertex(vertex_record([1.0, 0.0, 0.0], [1.0, 0.0], &[0xAA, 0xBB], 0xFFFF))
		.vertex(vertex_record([0.0, 1.0, 0.0], [0.0, 1.0], &[0x01, 0x02, 0x03, 0x04], 0xF800))
		.face(face_record([0, 1, 2], 1))
		.frame(frame_record(&[0x10, 0x27, 0x00, 0x00]));

	MdbBuilder::new()
		.unknown(0x1122_3344, 0x5566_7788)
		.model(model)
		.material(b"stone.tga", &[1, 2, 3, 4])
		.material(b"grass.tga", &[])
		.animation_section(b"idle", &[9, 9])
		.bounding_box([-1.0, -2.0, -3.0], [1.0, 2.0, 3.0])
		.centroid([0.25, 0.5, 0.75], 4.0)
		.strings("root\nmesh_a\n")
}

fn push_u32(out: &mut Vec<u8>, value: u32) {
	out.extend_from_slice(&value.to_le_bytes());
}

fn push_section(out: &mut Vec<u8>, records: &[Vec<u8>]) {
	push_u32(out, records.len() as u32);
	for record in records {
		out.extend_from_slice(record);
	}
}
