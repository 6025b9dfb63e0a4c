//! Public library API for inspecting legacy `.mdb` model containers.

/// MDB container decoding: primitive readers, records, sections, and file entry points.
pub mod mdb;
