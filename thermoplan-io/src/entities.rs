//! Field mappings between the domain entities and their JSON documents.
//!
//! One `ToDocument`/`FromDocument` pair per entity. Field names are
//! camelCase in the documents. Keep the two directions of each pair next to
//! each other and in the same field order.

use serde_json::{Map, Value};

use thermoplan_model::{
    Boiler, BufferTank, Consumer, CostSettings, Fuel, FuelConsumption, Manufacturer, Pipe,
    Producer, ProductCosts, ProductGroup, Project, TimeInterval, WeatherStation,
};

use crate::export::{JsonExport, ToDocument};
use crate::import::{FromDocument, JsonImport};

// ---------------------------------------------------------------------------
// Base data
// ---------------------------------------------------------------------------

impl ToDocument for Fuel {
    const TAG: &'static str = "Fuel";

    fn write_fields(&self, doc: &mut Map<String, Value>, w: &mut JsonExport<'_>) {
        w.put_str(doc, "name", self.name.as_deref());
        w.put_str(doc, "description", self.description.as_deref());
        w.put_flag(doc, "isProtected", self.is_protected);
        w.put_enum(doc, "group", self.group);
        w.put_str(doc, "unit", self.unit.as_deref());
        w.put_f64(doc, "calorificValue", self.calorific_value);
        w.put_f64(doc, "density", self.density);
        w.put_f64(doc, "co2Emissions", self.co2_emissions);
        w.put_f64(doc, "waterContent", self.water_content);
    }
}

impl FromDocument for Fuel {
    fn read_fields(doc: &Map<String, Value>, r: &mut JsonImport<'_>) -> Self {
        Fuel {
            id: r.str_of(doc, "id").unwrap_or_default(),
            name: r.str_of(doc, "name"),
            description: r.str_of(doc, "description"),
            is_protected: r.flag_of(doc, "isProtected"),
            group: r.enum_of(doc, "group"),
            unit: r.str_of(doc, "unit"),
            calorific_value: r.f64_of(doc, "calorificValue"),
            density: r.f64_of(doc, "density"),
            co2_emissions: r.f64_of(doc, "co2Emissions"),
            water_content: r.f64_of(doc, "waterContent"),
        }
    }
}

impl ToDocument for Manufacturer {
    const TAG: &'static str = "Manufacturer";

    fn write_fields(&self, doc: &mut Map<String, Value>, w: &mut JsonExport<'_>) {
        w.put_str(doc, "name", self.name.as_deref());
        w.put_str(doc, "description", self.description.as_deref());
        w.put_flag(doc, "isProtected", self.is_protected);
        w.put_str(doc, "address", self.address.as_deref());
        w.put_str(doc, "url", self.url.as_deref());
    }
}

impl FromDocument for Manufacturer {
    fn read_fields(doc: &Map<String, Value>, r: &mut JsonImport<'_>) -> Self {
        Manufacturer {
            id: r.str_of(doc, "id").unwrap_or_default(),
            name: r.str_of(doc, "name"),
            description: r.str_of(doc, "description"),
            is_protected: r.flag_of(doc, "isProtected"),
            address: r.str_of(doc, "address"),
            url: r.str_of(doc, "url"),
        }
    }
}

impl ToDocument for Boiler {
    const TAG: &'static str = "Boiler";

    fn write_fields(&self, doc: &mut Map<String, Value>, w: &mut JsonExport<'_>) {
        w.put_str(doc, "name", self.name.as_deref());
        w.put_str(doc, "description", self.description.as_deref());
        w.put_flag(doc, "isProtected", self.is_protected);
        w.put_ref(doc, "manufacturer", self.manufacturer.as_ref());
        w.put_ref(doc, "group", self.group.as_ref());
        w.put_ref(doc, "fuel", self.fuel.as_ref());
        w.put_f64(doc, "maxPower", self.max_power);
        w.put_f64(doc, "minPower", self.min_power);
        w.put_f64(doc, "efficiencyRate", self.efficiency_rate);
        w.put_f64(doc, "purchasePrice", self.purchase_price);
    }
}

impl FromDocument for Boiler {
    fn read_fields(doc: &Map<String, Value>, r: &mut JsonImport<'_>) -> Self {
        Boiler {
            id: r.str_of(doc, "id").unwrap_or_default(),
            name: r.str_of(doc, "name"),
            description: r.str_of(doc, "description"),
            is_protected: r.flag_of(doc, "isProtected"),
            manufacturer: r.ref_of(doc, "manufacturer"),
            group: r.ref_of(doc, "group"),
            fuel: r.ref_of(doc, "fuel"),
            max_power: r.f64_of(doc, "maxPower"),
            min_power: r.f64_of(doc, "minPower"),
            efficiency_rate: r.f64_of(doc, "efficiencyRate"),
            purchase_price: r.f64_of(doc, "purchasePrice"),
        }
    }
}

impl ToDocument for Pipe {
    const TAG: &'static str = "Pipe";

    fn write_fields(&self, doc: &mut Map<String, Value>, w: &mut JsonExport<'_>) {
        w.put_str(doc, "name", self.name.as_deref());
        w.put_str(doc, "description", self.description.as_deref());
        w.put_flag(doc, "isProtected", self.is_protected);
        w.put_ref(doc, "manufacturer", self.manufacturer.as_ref());
        w.put_ref(doc, "group", self.group.as_ref());
        w.put_enum(doc, "pipeType", self.pipe_type);
        w.put_f64(doc, "uValue", self.u_value);
        w.put_f64(doc, "innerDiameter", self.inner_diameter);
        w.put_f64(doc, "outerDiameter", self.outer_diameter);
        w.put_f64(doc, "pricePerMeter", self.price_per_meter);
    }
}

impl FromDocument for Pipe {
    fn read_fields(doc: &Map<String, Value>, r: &mut JsonImport<'_>) -> Self {
        Pipe {
            id: r.str_of(doc, "id").unwrap_or_default(),
            name: r.str_of(doc, "name"),
            description: r.str_of(doc, "description"),
            is_protected: r.flag_of(doc, "isProtected"),
            manufacturer: r.ref_of(doc, "manufacturer"),
            group: r.ref_of(doc, "group"),
            pipe_type: r.enum_of(doc, "pipeType"),
            u_value: r.f64_of(doc, "uValue"),
            inner_diameter: r.f64_of(doc, "innerDiameter"),
            outer_diameter: r.f64_of(doc, "outerDiameter"),
            price_per_meter: r.f64_of(doc, "pricePerMeter"),
        }
    }
}

impl ToDocument for BufferTank {
    const TAG: &'static str = "BufferTank";

    fn write_fields(&self, doc: &mut Map<String, Value>, w: &mut JsonExport<'_>) {
        w.put_str(doc, "name", self.name.as_deref());
        w.put_str(doc, "description", self.description.as_deref());
        w.put_flag(doc, "isProtected", self.is_protected);
        w.put_ref(doc, "manufacturer", self.manufacturer.as_ref());
        w.put_ref(doc, "group", self.group.as_ref());
        w.put_f64(doc, "volume", self.volume);
        w.put_f64(doc, "diameter", self.diameter);
        w.put_f64(doc, "height", self.height);
        w.put_f64(doc, "insulationThickness", self.insulation_thickness);
        w.put_f64(doc, "purchasePrice", self.purchase_price);
    }
}

impl FromDocument for BufferTank {
    fn read_fields(doc: &Map<String, Value>, r: &mut JsonImport<'_>) -> Self {
        BufferTank {
            id: r.str_of(doc, "id").unwrap_or_default(),
            name: r.str_of(doc, "name"),
            description: r.str_of(doc, "description"),
            is_protected: r.flag_of(doc, "isProtected"),
            manufacturer: r.ref_of(doc, "manufacturer"),
            group: r.ref_of(doc, "group"),
            volume: r.f64_of(doc, "volume"),
            diameter: r.f64_of(doc, "diameter"),
            height: r.f64_of(doc, "height"),
            insulation_thickness: r.f64_of(doc, "insulationThickness"),
            purchase_price: r.f64_of(doc, "purchasePrice"),
        }
    }
}

impl ToDocument for ProductGroup {
    const TAG: &'static str = "ProductGroup";

    fn write_fields(&self, doc: &mut Map<String, Value>, w: &mut JsonExport<'_>) {
        w.put_str(doc, "name", self.name.as_deref());
        w.put_str(doc, "description", self.description.as_deref());
        w.put_flag(doc, "isProtected", self.is_protected);
        w.put_enum(doc, "productType", self.product_type);
        w.put_i32(doc, "index", self.index);
        w.put_i32(doc, "duration", self.duration);
        w.put_f64(doc, "repair", self.repair);
        w.put_f64(doc, "maintenance", self.maintenance);
        w.put_f64(doc, "operation", self.operation);
    }
}

impl FromDocument for ProductGroup {
    fn read_fields(doc: &Map<String, Value>, r: &mut JsonImport<'_>) -> Self {
        ProductGroup {
            id: r.str_of(doc, "id").unwrap_or_default(),
            name: r.str_of(doc, "name"),
            description: r.str_of(doc, "description"),
            is_protected: r.flag_of(doc, "isProtected"),
            product_type: r.enum_of(doc, "productType"),
            index: r.i32_of(doc, "index"),
            duration: r.i32_of(doc, "duration"),
            repair: r.f64_of(doc, "repair"),
            maintenance: r.f64_of(doc, "maintenance"),
            operation: r.f64_of(doc, "operation"),
        }
    }
}

impl ToDocument for WeatherStation {
    const TAG: &'static str = "WeatherStation";

    fn write_fields(&self, doc: &mut Map<String, Value>, w: &mut JsonExport<'_>) {
        w.put_str(doc, "name", self.name.as_deref());
        w.put_str(doc, "description", self.description.as_deref());
        w.put_flag(doc, "isProtected", self.is_protected);
        w.put_f64(doc, "longitude", self.longitude);
        w.put_f64(doc, "latitude", self.latitude);
        w.put_f64(doc, "altitude", self.altitude);
        w.put_f64s(doc, "data", &self.data);
    }
}

impl FromDocument for WeatherStation {
    fn read_fields(doc: &Map<String, Value>, r: &mut JsonImport<'_>) -> Self {
        WeatherStation {
            id: r.str_of(doc, "id").unwrap_or_default(),
            name: r.str_of(doc, "name"),
            description: r.str_of(doc, "description"),
            is_protected: r.flag_of(doc, "isProtected"),
            longitude: r.f64_of(doc, "longitude"),
            latitude: r.f64_of(doc, "latitude"),
            altitude: r.f64_of(doc, "altitude"),
            data: r.f64s_of(doc, "data"),
        }
    }
}

impl ToDocument for CostSettings {
    const TAG: &'static str = "CostSettings";

    fn write_fields(&self, doc: &mut Map<String, Value>, w: &mut JsonExport<'_>) {
        w.put_str(doc, "name", self.name.as_deref());
        w.put_str(doc, "description", self.description.as_deref());
        w.put_flag(doc, "isProtected", self.is_protected);
        w.put_f64(doc, "vatRate", self.vat_rate);
        w.put_f64(doc, "hourlyWage", self.hourly_wage);
        w.put_f64(doc, "electricityPrice", self.electricity_price);
        w.put_f64(doc, "interestRate", self.interest_rate);
        w.put_f64(doc, "interestRateFunding", self.interest_rate_funding);
        w.put_f64(doc, "electricityDemandShare", self.electricity_demand_share);
        w.put_f64(doc, "insuranceShare", self.insurance_share);
    }
}

impl FromDocument for CostSettings {
    fn read_fields(doc: &Map<String, Value>, r: &mut JsonImport<'_>) -> Self {
        CostSettings {
            id: r.str_of(doc, "id").unwrap_or_default(),
            name: r.str_of(doc, "name"),
            description: r.str_of(doc, "description"),
            is_protected: r.flag_of(doc, "isProtected"),
            vat_rate: r.f64_of(doc, "vatRate"),
            hourly_wage: r.f64_of(doc, "hourlyWage"),
            electricity_price: r.f64_of(doc, "electricityPrice"),
            interest_rate: r.f64_of(doc, "interestRate"),
            interest_rate_funding: r.f64_of(doc, "interestRateFunding"),
            electricity_demand_share: r.f64_of(doc, "electricityDemandShare"),
            insurance_share: r.f64_of(doc, "insuranceShare"),
        }
    }
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

impl ToDocument for Project {
    const TAG: &'static str = "Project";

    fn write_fields(&self, doc: &mut Map<String, Value>, w: &mut JsonExport<'_>) {
        w.put_str(doc, "name", self.name.as_deref());
        w.put_str(doc, "description", self.description.as_deref());
        w.put_i32(doc, "duration", self.duration);
        w.put_ref(doc, "weatherStation", self.weather_station.as_ref());
        w.put_ref(doc, "costSettings", self.cost_settings.as_ref());
        w.put_values(doc, "consumers", &self.consumers);
        w.put_values(doc, "producers", &self.producers);
        w.put_refs(doc, "variants", &self.variants);
    }
}

impl FromDocument for Project {
    fn read_fields(doc: &Map<String, Value>, r: &mut JsonImport<'_>) -> Self {
        Project {
            id: r.str_of(doc, "id").unwrap_or_default(),
            name: r.str_of(doc, "name"),
            description: r.str_of(doc, "description"),
            duration: r.i32_of(doc, "duration"),
            weather_station: r.ref_of(doc, "weatherStation"),
            cost_settings: r.ref_of(doc, "costSettings"),
            consumers: r.values_of(doc, "consumers"),
            producers: r.values_of(doc, "producers"),
            variants: r.refs_of(doc, "variants"),
        }
    }
}

impl ToDocument for Consumer {
    const TAG: &'static str = "Consumer";

    fn write_fields(&self, doc: &mut Map<String, Value>, w: &mut JsonExport<'_>) {
        w.put_str(doc, "name", self.name.as_deref());
        w.put_str(doc, "description", self.description.as_deref());
        w.put_enum(doc, "buildingType", self.building_type);
        w.put_f64(doc, "heatingLoad", self.heating_load);
        w.put_f64(doc, "waterFraction", self.water_fraction);
        w.put_i32(doc, "loadHours", self.load_hours);
        w.put_values(doc, "interruptions", &self.interruptions);
        w.put_values(doc, "fuelConsumptions", &self.fuel_consumptions);
    }
}

impl FromDocument for Consumer {
    fn read_fields(doc: &Map<String, Value>, r: &mut JsonImport<'_>) -> Self {
        Consumer {
            id: r.str_of(doc, "id").unwrap_or_default(),
            name: r.str_of(doc, "name"),
            description: r.str_of(doc, "description"),
            building_type: r.enum_of(doc, "buildingType"),
            heating_load: r.f64_of(doc, "heatingLoad"),
            water_fraction: r.f64_of(doc, "waterFraction"),
            load_hours: r.i32_of(doc, "loadHours"),
            interruptions: r.values_of(doc, "interruptions"),
            fuel_consumptions: r.values_of(doc, "fuelConsumptions"),
        }
    }
}

impl ToDocument for Producer {
    const TAG: &'static str = "Producer";

    fn write_fields(&self, doc: &mut Map<String, Value>, w: &mut JsonExport<'_>) {
        w.put_str(doc, "name", self.name.as_deref());
        w.put_i32(doc, "rank", self.rank);
        w.put_enum(doc, "function", self.function);
        w.put_ref(doc, "boiler", self.boiler.as_ref());
        w.put_value(doc, "costs", self.costs.as_ref());
    }
}

impl FromDocument for Producer {
    fn read_fields(doc: &Map<String, Value>, r: &mut JsonImport<'_>) -> Self {
        Producer {
            id: r.str_of(doc, "id").unwrap_or_default(),
            name: r.str_of(doc, "name"),
            rank: r.i32_of(doc, "rank"),
            function: r.enum_of(doc, "function"),
            boiler: r.ref_of(doc, "boiler"),
            costs: r.value_of(doc, "costs"),
        }
    }
}

impl ToDocument for ProductCosts {
    const TAG: &'static str = "ProductCosts";

    fn write_fields(&self, doc: &mut Map<String, Value>, w: &mut JsonExport<'_>) {
        w.put_f64(doc, "investment", self.investment);
        w.put_i32(doc, "duration", self.duration);
        w.put_f64(doc, "repair", self.repair);
        w.put_f64(doc, "maintenance", self.maintenance);
        w.put_f64(doc, "operation", self.operation);
    }
}

impl FromDocument for ProductCosts {
    fn read_fields(doc: &Map<String, Value>, r: &mut JsonImport<'_>) -> Self {
        ProductCosts {
            id: r.str_of(doc, "id").unwrap_or_default(),
            investment: r.f64_of(doc, "investment"),
            duration: r.i32_of(doc, "duration"),
            repair: r.f64_of(doc, "repair"),
            maintenance: r.f64_of(doc, "maintenance"),
            operation: r.f64_of(doc, "operation"),
        }
    }
}

impl ToDocument for TimeInterval {
    const TAG: &'static str = "TimeInterval";

    fn write_fields(&self, doc: &mut Map<String, Value>, w: &mut JsonExport<'_>) {
        w.put_i32(doc, "start", self.start);
        w.put_i32(doc, "end", self.end);
        w.put_str(doc, "description", self.description.as_deref());
    }
}

impl FromDocument for TimeInterval {
    fn read_fields(doc: &Map<String, Value>, r: &mut JsonImport<'_>) -> Self {
        TimeInterval {
            id: r.str_of(doc, "id").unwrap_or_default(),
            start: r.i32_of(doc, "start"),
            end: r.i32_of(doc, "end"),
            description: r.str_of(doc, "description"),
        }
    }
}

impl ToDocument for FuelConsumption {
    const TAG: &'static str = "FuelConsumption";

    fn write_fields(&self, doc: &mut Map<String, Value>, w: &mut JsonExport<'_>) {
        w.put_ref(doc, "fuel", self.fuel.as_ref());
        w.put_f64(doc, "amount", self.amount);
        w.put_f64(doc, "utilisationRate", self.utilisation_rate);
    }
}

impl FromDocument for FuelConsumption {
    fn read_fields(doc: &Map<String, Value>, r: &mut JsonImport<'_>) -> Self {
        FuelConsumption {
            id: r.str_of(doc, "id").unwrap_or_default(),
            fuel: r.ref_of(doc, "fuel"),
            amount: r.f64_of(doc, "amount"),
            utilisation_rate: r.f64_of(doc, "utilisationRate"),
        }
    }
}
