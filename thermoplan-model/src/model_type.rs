use std::fmt;

/// Storage category of a root entity type.
///
/// Closed enumeration: every root entity type maps to exactly one variant,
/// and every variant maps to exactly one archive directory. Both matches
/// below are exhaustive on purpose — adding a variant without a directory
/// mapping is a compile error, not a silent fallthrough to some "unknown"
/// bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelType {
    Fuel,
    Manufacturer,
    Boiler,
    Pipe,
    BufferTank,
    ProductGroup,
    WeatherStation,
    CostSettings,
    Project,
}

impl ModelType {
    /// Every category, for enumeration in registries, tooling, and tests.
    pub const ALL: [ModelType; 9] = [
        ModelType::Fuel,
        ModelType::Manufacturer,
        ModelType::Boiler,
        ModelType::Pipe,
        ModelType::BufferTank,
        ModelType::ProductGroup,
        ModelType::WeatherStation,
        ModelType::CostSettings,
        ModelType::Project,
    ];

    /// The fixed archive directory holding this category's documents.
    pub fn dir(self) -> &'static str {
        match self {
            ModelType::Fuel => "fuels",
            ModelType::Manufacturer => "manufacturers",
            ModelType::Boiler => "boilers",
            ModelType::Pipe => "pipes",
            ModelType::BufferTank => "buffers",
            ModelType::ProductGroup => "product_groups",
            ModelType::WeatherStation => "weather_stations",
            ModelType::CostSettings => "cost_settings",
            ModelType::Project => "projects",
        }
    }

    /// Resolve a directory name back to its category.
    pub fn from_dir(dir: &str) -> Option<ModelType> {
        ModelType::ALL.into_iter().find(|t| t.dir() == dir)
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir())
    }
}
