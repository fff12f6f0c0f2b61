use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use thermoplan_io::JsonExport;
use thermoplan_model::{
    Boiler, Fuel, FuelGroup, Manufacturer, ModelType, Pipe, WeatherStation,
};
use thermoplan_pack::{DataPack, PackError};

fn fuel_f1() -> Fuel {
    Fuel {
        id: "f1".into(),
        group: Some(FuelGroup::Wood),
        calorific_value: Some(4.0),
        ..Fuel::default()
    }
}

fn manufacturer_m1() -> Manufacturer {
    Manufacturer {
        id: "m1".into(),
        name: Some("Acme".into()),
        ..Manufacturer::default()
    }
}

// ── Document shape ───────────────────────────────────────────────

#[test]
fn fuel_document_shape() {
    let mut export = JsonExport::new();
    let doc = export.document(&fuel_f1());
    assert_eq!(
        Value::Object(doc),
        json!({
            "id": "f1",
            "@type": "Fuel",
            "group": "WOOD",
            "calorificValue": 4.0,
        })
    );
}

#[test]
fn absent_fields_are_omitted_not_null() {
    let mut export = JsonExport::new();
    let doc = export.document(&Fuel {
        id: "f1".into(),
        ..Fuel::default()
    });
    assert_eq!(doc.len(), 2); // id and @type only
    assert!(!doc.values().any(Value::is_null));
}

#[test]
fn protection_flag_written_only_when_set() {
    let mut export = JsonExport::new();

    let unprotected = export.document(&fuel_f1());
    assert!(!unprotected.contains_key("isProtected"));

    let protected = export.document(&Fuel {
        is_protected: true,
        ..fuel_f1()
    });
    assert_eq!(protected.get("isProtected"), Some(&json!(true)));
}

#[test]
fn numeric_series_copied_verbatim() {
    let mut export = JsonExport::new();
    let station = WeatherStation {
        id: "w1".into(),
        data: vec![-5.0, 0.5, 3.25],
        ..WeatherStation::default()
    };
    let doc = export.document(&station);
    assert_eq!(doc.get("data"), Some(&json!([-5.0, 0.5, 3.25])));

    let empty = export.document(&WeatherStation {
        id: "w2".into(),
        ..WeatherStation::default()
    });
    assert!(!empty.contains_key("data"));
}

// ── Reference emission ───────────────────────────────────────────

#[test]
fn reference_structure_shape() {
    let pipe = Pipe {
        id: "p1".into(),
        manufacturer: Some(manufacturer_m1()),
        ..Pipe::default()
    };
    let mut export = JsonExport::new();
    let doc = export.document(&pipe);
    assert_eq!(
        doc.get("manufacturer"),
        Some(&json!({"id": "m1", "@type": "Manufacturer", "name": "Acme"}))
    );
}

#[test]
fn reference_name_is_null_when_unnamed() {
    let pipe = Pipe {
        id: "p1".into(),
        manufacturer: Some(Manufacturer {
            id: "m1".into(),
            ..Manufacturer::default()
        }),
        ..Pipe::default()
    };
    let mut export = JsonExport::new();
    let doc = export.document(&pipe);
    assert_eq!(
        doc.get("manufacturer"),
        Some(&json!({"id": "m1", "@type": "Manufacturer", "name": null}))
    );
}

#[test]
fn unbound_export_persists_nothing() {
    // Documents in isolation: references are emitted, no store is involved.
    let pipe = Pipe {
        id: "p1".into(),
        manufacturer: Some(manufacturer_m1()),
        ..Pipe::default()
    };
    let mut export = JsonExport::new();
    let doc = export.document(&pipe);
    assert!(doc.contains_key("manufacturer"));
}

#[test]
fn bound_export_writes_referenced_entity() {
    let pipe = Pipe {
        id: "p1".into(),
        manufacturer: Some(manufacturer_m1()),
        ..Pipe::default()
    };
    let mut pack = DataPack::new();
    let mut export = JsonExport::to_pack(&mut pack);
    let doc = export.document(&pipe);

    assert!(doc.contains_key("manufacturer"));
    assert!(pack.contains(ModelType::Manufacturer, "m1"));
    // The document itself was not persisted; only the referent was.
    assert!(!pack.contains(ModelType::Pipe, "p1"));
}

#[test]
fn second_export_leaves_referent_bytes_unchanged() {
    let pipe = Pipe {
        id: "p1".into(),
        manufacturer: Some(manufacturer_m1()),
        ..Pipe::default()
    };
    let mut pack = DataPack::new();

    let first_doc = JsonExport::to_pack(&mut pack).document(&pipe);
    let stored = pack
        .entry_bytes(ModelType::Manufacturer, "m1")
        .unwrap()
        .to_vec();

    let second_doc = JsonExport::to_pack(&mut pack).document(&pipe);
    assert_eq!(first_doc, second_doc);
    assert_eq!(
        pack.entry_bytes(ModelType::Manufacturer, "m1").unwrap(),
        &stored[..]
    );
}

#[test]
fn shared_referent_written_once() {
    let shared = manufacturer_m1();
    let boiler_a = Boiler {
        id: "b1".into(),
        manufacturer: Some(shared.clone()),
        ..Boiler::default()
    };
    let boiler_b = Boiler {
        id: "b2".into(),
        manufacturer: Some(shared),
        ..Boiler::default()
    };

    let mut pack = DataPack::new();
    let mut export = JsonExport::to_pack(&mut pack);
    export.write(&boiler_a).unwrap();
    export.write(&boiler_b).unwrap();

    assert_eq!(pack.ids(ModelType::Manufacturer), vec!["m1"]);
    let mut boiler_ids = pack.ids(ModelType::Boiler);
    boiler_ids.sort();
    assert_eq!(boiler_ids, vec!["b1", "b2"]);
}

#[test]
fn write_twice_is_at_most_once() {
    let fuel = fuel_f1();
    let mut pack = DataPack::new();
    {
        let mut export = JsonExport::to_pack(&mut pack);
        export.write(&fuel).unwrap();
    }
    let stored = pack.entry_bytes(ModelType::Fuel, "f1").unwrap().to_vec();

    {
        let mut export = JsonExport::to_pack(&mut pack);
        export.write(&fuel).unwrap();
    }
    assert_eq!(pack.ids(ModelType::Fuel), vec!["f1"]);
    assert_eq!(pack.entry_bytes(ModelType::Fuel, "f1").unwrap(), &stored[..]);
}

// ── Invalid ids ──────────────────────────────────────────────────

#[test]
fn write_with_empty_id_rejected() {
    let mut pack = DataPack::new();
    let mut export = JsonExport::to_pack(&mut pack);
    let err = export.write(&Fuel::default()).unwrap_err();
    assert!(matches!(err, PackError::InvalidId(_)));
    assert!(pack.is_empty());
}

#[test]
fn write_with_separator_id_rejected() {
    let mut pack = DataPack::new();
    let mut export = JsonExport::to_pack(&mut pack);
    let fuel = Fuel {
        id: "a/b".into(),
        ..Fuel::default()
    };
    let err = export.write(&fuel).unwrap_err();
    assert!(matches!(err, PackError::InvalidId(_)));
    assert!(pack.is_empty());
}

#[test]
fn invalid_referent_is_absorbed() {
    // A referent that cannot be persisted does not abort the traversal;
    // the reference structure is still emitted.
    let pipe = Pipe {
        id: "p1".into(),
        manufacturer: Some(Manufacturer::default()),
        ..Pipe::default()
    };
    let mut pack = DataPack::new();
    let mut export = JsonExport::to_pack(&mut pack);
    let doc = export.document(&pipe);

    assert!(doc.contains_key("manufacturer"));
    assert!(pack.is_empty());
}
