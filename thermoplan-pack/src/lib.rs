//! Zip-backed data pack archive for thermoplan.
//!
//! A data pack is a single portable zip file holding one JSON document per
//! entity at `category/id.json`, where the category directory comes from the
//! entity's [`thermoplan_model::ModelType`]. The pack is a plain key/value
//! store: it never interprets document contents beyond the `id` field, and it
//! never overwrites — a second write to an existing (category, id) is a
//! logged no-op, which is what makes graph persistence idempotent one layer
//! up.

mod error;
mod pack;

pub use error::{PackError, PackResult};
pub use pack::DataPack;
