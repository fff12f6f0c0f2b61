//! Core domain model for thermoplan.
//!
//! Defines the entity taxonomy every other subsystem builds on:
//! - [`Entity`] / [`RootEntity`] / [`BaseDataEntity`] — the capability tiers
//!   of persistable objects
//! - [`ModelType`] — the closed set of storage categories, one per root
//!   entity type
//! - [`Symbol`] — bidirectional mapping between symbolic enumeration values
//!   and their string encoding
//! - the concrete heating-plant entities (fuels, products, projects)
//!
//! Value entities (consumers, producers, cost records, …) implement only
//! [`Entity`]; they live embedded inside their owning root entity's document
//! and never get a category of their own.

mod base_data;
mod entity;
mod enums;
mod model_type;
mod project;

pub use base_data::{
    Boiler, BufferTank, CostSettings, Fuel, Manufacturer, Pipe, ProductGroup, WeatherStation,
};
pub use entity::{BaseDataEntity, Entity, RootEntity};
pub use enums::{BuildingType, FuelGroup, PipeType, ProducerFunction, ProductType, Symbol};
pub use model_type::ModelType;
pub use project::{Consumer, FuelConsumption, Producer, ProductCosts, Project, TimeInterval};
