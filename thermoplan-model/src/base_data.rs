//! Catalog entities: fuels, products, and settings shipped as base data.
//!
//! All of these are root entities — each is stored as its own archive
//! document and referenced from elsewhere. Every optional attribute is an
//! `Option` (or an empty `Vec`): present or absent, nothing in between.

use crate::entity::{new_id, BaseDataEntity, Entity, RootEntity};
use crate::enums::{FuelGroup, PipeType, ProductType};
use crate::ModelType;

/// A burnable fuel (or electricity tariff) from the base data catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fuel {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_protected: bool,
    pub group: Option<FuelGroup>,
    /// Trade unit, e.g. "L", "kg", "kWh".
    pub unit: Option<String>,
    /// kWh per unit.
    pub calorific_value: Option<f64>,
    /// kg per unit, for wood fuels traded by volume.
    pub density: Option<f64>,
    /// g CO2 equivalents per kWh.
    pub co2_emissions: Option<f64>,
    pub water_content: Option<f64>,
}

impl Fuel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

impl Entity for Fuel {
    fn id(&self) -> &str {
        &self.id
    }
}

impl RootEntity for Fuel {
    const TYPE: ModelType = ModelType::Fuel;

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl BaseDataEntity for Fuel {
    fn is_protected(&self) -> bool {
        self.is_protected
    }
}

/// A product manufacturer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manufacturer {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_protected: bool,
    pub address: Option<String>,
    pub url: Option<String>,
}

impl Manufacturer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

impl Entity for Manufacturer {
    fn id(&self) -> &str {
        &self.id
    }
}

impl RootEntity for Manufacturer {
    const TYPE: ModelType = ModelType::Manufacturer;

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl BaseDataEntity for Manufacturer {
    fn is_protected(&self) -> bool {
        self.is_protected
    }
}

/// A heat-generating boiler product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Boiler {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_protected: bool,
    pub manufacturer: Option<Manufacturer>,
    pub group: Option<ProductGroup>,
    pub fuel: Option<Fuel>,
    /// kW
    pub max_power: Option<f64>,
    /// kW
    pub min_power: Option<f64>,
    pub efficiency_rate: Option<f64>,
    /// EUR
    pub purchase_price: Option<f64>,
}

impl Boiler {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

impl Entity for Boiler {
    fn id(&self) -> &str {
        &self.id
    }
}

impl RootEntity for Boiler {
    const TYPE: ModelType = ModelType::Boiler;

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl BaseDataEntity for Boiler {
    fn is_protected(&self) -> bool {
        self.is_protected
    }
}

/// A network pipe product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pipe {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_protected: bool,
    pub manufacturer: Option<Manufacturer>,
    pub group: Option<ProductGroup>,
    pub pipe_type: Option<PipeType>,
    /// W per m·K
    pub u_value: Option<f64>,
    /// mm
    pub inner_diameter: Option<f64>,
    /// mm
    pub outer_diameter: Option<f64>,
    /// EUR per m
    pub price_per_meter: Option<f64>,
}

impl Pipe {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

impl Entity for Pipe {
    fn id(&self) -> &str {
        &self.id
    }
}

impl RootEntity for Pipe {
    const TYPE: ModelType = ModelType::Pipe;

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl BaseDataEntity for Pipe {
    fn is_protected(&self) -> bool {
        self.is_protected
    }
}

/// A buffer tank product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BufferTank {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_protected: bool,
    pub manufacturer: Option<Manufacturer>,
    pub group: Option<ProductGroup>,
    /// L
    pub volume: Option<f64>,
    /// mm
    pub diameter: Option<f64>,
    /// mm
    pub height: Option<f64>,
    /// mm
    pub insulation_thickness: Option<f64>,
    /// EUR
    pub purchase_price: Option<f64>,
}

impl BufferTank {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

impl Entity for BufferTank {
    fn id(&self) -> &str {
        &self.id
    }
}

impl RootEntity for BufferTank {
    const TYPE: ModelType = ModelType::BufferTank;

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl BaseDataEntity for BufferTank {
    fn is_protected(&self) -> bool {
        self.is_protected
    }
}

/// Groups products of one family and carries their cost defaults
/// (usage duration, repair/maintenance/operation shares).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductGroup {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_protected: bool,
    pub product_type: Option<ProductType>,
    /// Display order within the catalog.
    pub index: Option<i32>,
    /// Usage duration in years.
    pub duration: Option<i32>,
    /// % of investment per year.
    pub repair: Option<f64>,
    /// % of investment per year.
    pub maintenance: Option<f64>,
    /// Hours per year.
    pub operation: Option<f64>,
}

impl ProductGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

impl Entity for ProductGroup {
    fn id(&self) -> &str {
        &self.id
    }
}

impl RootEntity for ProductGroup {
    const TYPE: ModelType = ModelType::ProductGroup;

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl BaseDataEntity for ProductGroup {
    fn is_protected(&self) -> bool {
        self.is_protected
    }
}

/// A weather station with its hourly temperature series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherStation {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_protected: bool,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    /// m above sea level.
    pub altitude: Option<f64>,
    /// Hourly temperatures for a reference year, °C. Copied verbatim.
    pub data: Vec<f64>,
}

impl WeatherStation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

impl Entity for WeatherStation {
    fn id(&self) -> &str {
        &self.id
    }
}

impl RootEntity for WeatherStation {
    const TYPE: ModelType = ModelType::WeatherStation;

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl BaseDataEntity for WeatherStation {
    fn is_protected(&self) -> bool {
        self.is_protected
    }
}

/// Default economic parameters applied to new projects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CostSettings {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_protected: bool,
    /// %
    pub vat_rate: Option<f64>,
    /// EUR per hour.
    pub hourly_wage: Option<f64>,
    /// EUR per kWh.
    pub electricity_price: Option<f64>,
    /// %
    pub interest_rate: Option<f64>,
    /// % with public funding.
    pub interest_rate_funding: Option<f64>,
    /// Share of produced heat spent on auxiliary electricity, %.
    pub electricity_demand_share: Option<f64>,
    /// % of investment per year.
    pub insurance_share: Option<f64>,
}

impl CostSettings {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

impl Entity for CostSettings {
    fn id(&self) -> &str {
        &self.id
    }
}

impl RootEntity for CostSettings {
    const TYPE: ModelType = ModelType::CostSettings;

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl BaseDataEntity for CostSettings {
    fn is_protected(&self) -> bool {
        self.is_protected
    }
}
