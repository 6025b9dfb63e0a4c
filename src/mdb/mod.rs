mod bounds;
mod bytes;
mod color;
mod error;
mod face;
mod file;
mod frame;
mod header;
mod model;
mod named;
mod options;
mod section;
mod strings;
mod vertex;

/// Bounding box and centroid records.
pub use bounds::{BoundingBox, Centroid};
/// Offset-based little-endian readers.
pub use bytes::{read_f32_le, read_u16_le, read_u32_le};
/// Packed vertex color.
pub use color::Rgb565;
/// Error and result aliases.
pub use error::{MdbError, Result};
/// Face record.
pub use face::Face;
/// Container entry points and layout diagnostics.
pub use file::{MdbFile, SectionLayout, Span};
/// Animation frame record.
pub use frame::AnimationFrame;
/// Container header.
pub use header::MdbHeader;
/// Model record.
pub use model::Model;
/// Name-prefixed records.
pub use named::{AnimationSection, Material};
/// Decoder options.
pub use options::DecodeOptions;
/// Record decoding trait and section helpers.
pub use section::{Record, Section, decode_counted_section, decode_section};
/// String table.
pub use strings::StringTable;
/// Vertex record.
pub use vertex::Vertex;
