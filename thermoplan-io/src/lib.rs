//! Reference-resolving JSON conversion for thermoplan entities.
//!
//! [`JsonExport`] turns an in-memory entity graph into JSON documents:
//! value entities are embedded inline, root entities become lightweight
//! `{id, @type, name}` references, and — when the export is bound to a
//! [`thermoplan_pack::DataPack`] — every referenced root entity is written
//! into the pack at most once per id. [`JsonImport`] mirrors this on the way
//! back, loading referenced documents from the pack by id and tolerating
//! holes: a missing document or an unknown enumeration symbol reads as an
//! absent field, never as a failure.
//!
//! The per-entity field mappings live in the `entities` module; they are
//! mechanical applications of the helpers on the two contexts.

mod entities;
mod export;
mod import;

pub use export::{JsonExport, ToDocument};
pub use import::{FromDocument, JsonImport};
