//! Symbolic enumerations and their string codec.
//!
//! Encoding is the declared name, exactly and case-sensitively. Decoding an
//! unrecognized string yields `None` — never an error, never a default
//! member — because archives may be opened against an older or newer
//! enumeration set than the running code. Callers treat `None` as "field
//! absent".

/// Bidirectional mapping between an enumeration value and its symbolic name.
pub trait Symbol: Sized + Copy {
    /// The symbolic name exactly as declared.
    fn symbol(&self) -> &'static str;

    /// Decode a symbolic name; unknown or empty input yields `None`.
    fn from_symbol(symbol: &str) -> Option<Self>;
}

/// Fuel classification used for pricing and emission factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FuelGroup {
    Wood,
    WoodChips,
    Pellets,
    Oil,
    Gas,
    Electricity,
}

impl FuelGroup {
    pub const ALL: [FuelGroup; 6] = [
        FuelGroup::Wood,
        FuelGroup::WoodChips,
        FuelGroup::Pellets,
        FuelGroup::Oil,
        FuelGroup::Gas,
        FuelGroup::Electricity,
    ];

    /// Wood-based groups are traded by volume and carry a water content.
    pub fn is_wood(self) -> bool {
        matches!(self, FuelGroup::Wood | FuelGroup::WoodChips | FuelGroup::Pellets)
    }
}

impl Symbol for FuelGroup {
    fn symbol(&self) -> &'static str {
        match self {
            FuelGroup::Wood => "WOOD",
            FuelGroup::WoodChips => "WOOD_CHIPS",
            FuelGroup::Pellets => "PELLETS",
            FuelGroup::Oil => "OIL",
            FuelGroup::Gas => "GAS",
            FuelGroup::Electricity => "ELECTRICITY",
        }
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "WOOD" => Some(FuelGroup::Wood),
            "WOOD_CHIPS" => Some(FuelGroup::WoodChips),
            "PELLETS" => Some(FuelGroup::Pellets),
            "OIL" => Some(FuelGroup::Oil),
            "GAS" => Some(FuelGroup::Gas),
            "ELECTRICITY" => Some(FuelGroup::Electricity),
            _ => None,
        }
    }
}

/// Product family of a [`crate::ProductGroup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductType {
    Boiler,
    Pipe,
    BufferTank,
    TransferStation,
    Planning,
}

impl ProductType {
    pub const ALL: [ProductType; 5] = [
        ProductType::Boiler,
        ProductType::Pipe,
        ProductType::BufferTank,
        ProductType::TransferStation,
        ProductType::Planning,
    ];
}

impl Symbol for ProductType {
    fn symbol(&self) -> &'static str {
        match self {
            ProductType::Boiler => "BOILER",
            ProductType::Pipe => "PIPE",
            ProductType::BufferTank => "BUFFER_TANK",
            ProductType::TransferStation => "TRANSFER_STATION",
            ProductType::Planning => "PLANNING",
        }
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "BOILER" => Some(ProductType::Boiler),
            "PIPE" => Some(ProductType::Pipe),
            "BUFFER_TANK" => Some(ProductType::BufferTank),
            "TRANSFER_STATION" => Some(ProductType::TransferStation),
            "PLANNING" => Some(ProductType::Planning),
            _ => None,
        }
    }
}

/// Building classification of a heat consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildingType {
    SingleFamilyHouse,
    MultiFamilyHouse,
    Office,
    School,
    Hospital,
    Other,
}

impl BuildingType {
    pub const ALL: [BuildingType; 6] = [
        BuildingType::SingleFamilyHouse,
        BuildingType::MultiFamilyHouse,
        BuildingType::Office,
        BuildingType::School,
        BuildingType::Hospital,
        BuildingType::Other,
    ];
}

impl Symbol for BuildingType {
    fn symbol(&self) -> &'static str {
        match self {
            BuildingType::SingleFamilyHouse => "SINGLE_FAMILY_HOUSE",
            BuildingType::MultiFamilyHouse => "MULTI_FAMILY_HOUSE",
            BuildingType::Office => "OFFICE",
            BuildingType::School => "SCHOOL",
            BuildingType::Hospital => "HOSPITAL",
            BuildingType::Other => "OTHER",
        }
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "SINGLE_FAMILY_HOUSE" => Some(BuildingType::SingleFamilyHouse),
            "MULTI_FAMILY_HOUSE" => Some(BuildingType::MultiFamilyHouse),
            "OFFICE" => Some(BuildingType::Office),
            "SCHOOL" => Some(BuildingType::School),
            "HOSPITAL" => Some(BuildingType::Hospital),
            "OTHER" => Some(BuildingType::Other),
            _ => None,
        }
    }
}

/// Role of a producer in the heat schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProducerFunction {
    BaseLoad,
    PeakLoad,
}

impl ProducerFunction {
    pub const ALL: [ProducerFunction; 2] = [ProducerFunction::BaseLoad, ProducerFunction::PeakLoad];
}

impl Symbol for ProducerFunction {
    fn symbol(&self) -> &'static str {
        match self {
            ProducerFunction::BaseLoad => "BASE_LOAD",
            ProducerFunction::PeakLoad => "PEAK_LOAD",
        }
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "BASE_LOAD" => Some(ProducerFunction::BaseLoad),
            "PEAK_LOAD" => Some(ProducerFunction::PeakLoad),
            _ => None,
        }
    }
}

/// Physical layout of a network pipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipeType {
    /// Single medium pipe per casing.
    Uno,
    /// Flow and return in one casing.
    Duo,
}

impl PipeType {
    pub const ALL: [PipeType; 2] = [PipeType::Uno, PipeType::Duo];
}

impl Symbol for PipeType {
    fn symbol(&self) -> &'static str {
        match self {
            PipeType::Uno => "UNO",
            PipeType::Duo => "DUO",
        }
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "UNO" => Some(PipeType::Uno),
            "DUO" => Some(PipeType::Duo),
            _ => None,
        }
    }
}
