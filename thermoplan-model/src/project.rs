//! Project entities.
//!
//! A [`Project`] is a root entity; its consumers and producers are value
//! entities owned by the project and embedded in its document. References
//! out of that embedded structure (boilers, fuels, the weather station) point
//! back into the base data catalog.

use crate::base_data::{Boiler, CostSettings, Fuel, WeatherStation};
use crate::entity::{new_id, Entity, RootEntity};
use crate::enums::{BuildingType, ProducerFunction};
use crate::ModelType;

/// A heating-network planning project.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Project {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Observation period in years.
    pub duration: Option<i32>,
    pub weather_station: Option<WeatherStation>,
    pub cost_settings: Option<CostSettings>,
    pub consumers: Vec<Consumer>,
    pub producers: Vec<Producer>,
    /// Scenario variants of this project; each is an independently stored
    /// project referenced from here.
    pub variants: Vec<Project>,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

impl Entity for Project {
    fn id(&self) -> &str {
        &self.id
    }
}

impl RootEntity for Project {
    const TYPE: ModelType = ModelType::Project;

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// A heat consumer (building or consumption meter) within a project.
///
/// Value entity: lives only inside its project's document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Consumer {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub building_type: Option<BuildingType>,
    /// kW
    pub heating_load: Option<f64>,
    /// Share of the load used for warm water, %.
    pub water_fraction: Option<f64>,
    /// Full-load hours per year.
    pub load_hours: Option<i32>,
    pub interruptions: Vec<TimeInterval>,
    pub fuel_consumptions: Vec<FuelConsumption>,
}

impl Consumer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

impl Entity for Consumer {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A heat producer slot within a project, wrapping a catalog boiler.
///
/// Value entity: lives only inside its project's document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Producer {
    pub id: String,
    pub name: Option<String>,
    /// Position in the merit order.
    pub rank: Option<i32>,
    pub function: Option<ProducerFunction>,
    pub boiler: Option<Boiler>,
    pub costs: Option<ProductCosts>,
}

impl Producer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

impl Entity for Producer {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Cost attributes of a concrete product installation. Value entity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductCosts {
    pub id: String,
    /// EUR
    pub investment: Option<f64>,
    /// Years.
    pub duration: Option<i32>,
    /// % of investment per year.
    pub repair: Option<f64>,
    /// % of investment per year.
    pub maintenance: Option<f64>,
    /// Hours per year.
    pub operation: Option<f64>,
}

impl ProductCosts {
    pub fn new() -> Self {
        Self {
            id: new_id(),
            ..Self::default()
        }
    }
}

impl Entity for ProductCosts {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A time span, e.g. a scheduled interruption of a consumer. Value entity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeInterval {
    pub id: String,
    /// Day-of-year bounds, inclusive.
    pub start: Option<i32>,
    pub end: Option<i32>,
    pub description: Option<String>,
}

impl TimeInterval {
    pub fn new() -> Self {
        Self {
            id: new_id(),
            ..Self::default()
        }
    }
}

impl Entity for TimeInterval {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A measured yearly fuel consumption of a consumer. Value entity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FuelConsumption {
    pub id: String,
    pub fuel: Option<Fuel>,
    /// Amount in the fuel's trade unit.
    pub amount: Option<f64>,
    pub utilisation_rate: Option<f64>,
}

impl FuelConsumption {
    pub fn new() -> Self {
        Self {
            id: new_id(),
            ..Self::default()
        }
    }
}

impl Entity for FuelConsumption {
    fn id(&self) -> &str {
        &self.id
    }
}
