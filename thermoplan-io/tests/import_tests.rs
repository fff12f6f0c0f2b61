use pretty_assertions::assert_eq;
use serde_json::{json, Map, Value};
use thermoplan_io::{JsonExport, JsonImport};
use thermoplan_model::{Fuel, Manufacturer, ModelType, Pipe, Project};
use thermoplan_pack::DataPack;

fn as_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

// ── loadByIdentity ───────────────────────────────────────────────

#[test]
fn load_returns_entity() {
    let mut pack = DataPack::new();
    pack.put(
        ModelType::Fuel,
        &as_map(json!({"id": "f1", "@type": "Fuel", "group": "WOOD"})),
    )
    .unwrap();

    let fuel: Fuel = JsonImport::from_pack(&pack).load("f1").unwrap();
    assert_eq!(fuel.id, "f1");
}

#[test]
fn load_missing_is_none() {
    let pack = DataPack::new();
    let fuel: Option<Fuel> = JsonImport::from_pack(&pack).load("f1");
    assert!(fuel.is_none());
}

#[test]
fn load_without_pack_is_none() {
    let fuel: Option<Fuel> = JsonImport::new().load("f1");
    assert!(fuel.is_none());
}

#[test]
fn category_drives_lookup_not_type_tag() {
    // The @type string is informational; a document stored under fuels/
    // decodes as whatever the caller asks for by category.
    let mut pack = DataPack::new();
    pack.put(
        ModelType::Fuel,
        &as_map(json!({"id": "f1", "@type": "SomethingElse"})),
    )
    .unwrap();

    let fuel: Option<Fuel> = JsonImport::from_pack(&pack).load("f1");
    assert!(fuel.is_some());
}

// ── Holes stay holes ─────────────────────────────────────────────

#[test]
fn missing_reference_resolves_to_absent() {
    let mut pack = DataPack::new();
    pack.put(
        ModelType::Pipe,
        &as_map(json!({
            "id": "p1",
            "@type": "Pipe",
            "manufacturer": {"id": "m9", "@type": "Manufacturer", "name": "Gone"},
        })),
    )
    .unwrap();

    let pipe: Pipe = JsonImport::from_pack(&pack).load("p1").unwrap();
    assert_eq!(pipe.manufacturer, None);
}

#[test]
fn unknown_enum_symbol_is_absent() {
    let mut pack = DataPack::new();
    pack.put(
        ModelType::Fuel,
        &as_map(json!({"id": "f1", "@type": "Fuel", "group": "ANTIMATTER"})),
    )
    .unwrap();

    let fuel: Fuel = JsonImport::from_pack(&pack).load("f1").unwrap();
    assert_eq!(fuel.group, None);

    // Re-encoding the absent field omits it.
    let doc = JsonExport::new().document(&fuel);
    assert!(!doc.contains_key("group"));
}

#[test]
fn explicit_null_reads_as_absent() {
    let mut pack = DataPack::new();
    pack.put(
        ModelType::Fuel,
        &as_map(json!({"id": "f1", "@type": "Fuel", "unit": null, "calorificValue": null})),
    )
    .unwrap();

    let fuel: Fuel = JsonImport::from_pack(&pack).load("f1").unwrap();
    assert_eq!(fuel.unit, None);
    assert_eq!(fuel.calorific_value, None);
}

#[test]
fn malformed_embedded_elements_are_skipped() {
    let mut pack = DataPack::new();
    pack.put(
        ModelType::Project,
        &as_map(json!({
            "id": "pr1",
            "@type": "Project",
            "consumers": [{"id": "c1", "@type": "Consumer"}, 42, "nonsense"],
        })),
    )
    .unwrap();

    let project: Project = JsonImport::from_pack(&pack).load("pr1").unwrap();
    assert_eq!(project.consumers.len(), 1);
    assert_eq!(project.consumers[0].id, "c1");
}

// ── Stubs ────────────────────────────────────────────────────────

#[test]
fn unbound_reader_keeps_reference_data_as_stub() {
    let doc = as_map(json!({
        "id": "p1",
        "@type": "Pipe",
        "manufacturer": {"id": "m1", "@type": "Manufacturer", "name": "Acme"},
    }));

    let pipe: Pipe = JsonImport::new().entity(&doc);
    let stub = pipe.manufacturer.expect("stub expected");
    assert_eq!(stub.id, "m1");
    assert_eq!(stub.name.as_deref(), Some("Acme"));
    assert_eq!(stub.address, None);
}

#[test]
fn reference_cycle_terminates_with_stub() {
    // Two projects referencing each other as variants. Decoding A pulls in
    // B; decoding B sees A already in progress and stops at a stub.
    let mut pack = DataPack::new();
    pack.put(
        ModelType::Project,
        &as_map(json!({
            "id": "a",
            "@type": "Project",
            "name": "A",
            "variants": [{"id": "b", "@type": "Project", "name": "B"}],
        })),
    )
    .unwrap();
    pack.put(
        ModelType::Project,
        &as_map(json!({
            "id": "b",
            "@type": "Project",
            "name": "B",
            "variants": [{"id": "a", "@type": "Project", "name": "A"}],
        })),
    )
    .unwrap();

    let a: Project = JsonImport::from_pack(&pack).load("a").unwrap();
    assert_eq!(a.variants.len(), 1);

    let b = &a.variants[0];
    assert_eq!(b.id, "b");
    // B was fully decoded, so its back-reference to A exists as a stub…
    assert_eq!(b.variants.len(), 1);
    let a_stub = &b.variants[0];
    assert_eq!(a_stub.id, "a");
    assert_eq!(a_stub.name.as_deref(), Some("A"));
    // …and the stub carries no further structure.
    assert!(a_stub.variants.is_empty());
}

#[test]
fn self_reference_terminates() {
    let mut pack = DataPack::new();
    pack.put(
        ModelType::Project,
        &as_map(json!({
            "id": "a",
            "@type": "Project",
            "variants": [{"id": "a", "@type": "Project", "name": null}],
        })),
    )
    .unwrap();

    let a: Project = JsonImport::from_pack(&pack).load("a").unwrap();
    assert_eq!(a.variants.len(), 1);
    assert_eq!(a.variants[0].id, "a");
    assert!(a.variants[0].variants.is_empty());
}

// ── Robustness ───────────────────────────────────────────────────

#[test]
fn reference_without_id_is_absent() {
    let doc = as_map(json!({
        "id": "p1",
        "@type": "Pipe",
        "manufacturer": {"@type": "Manufacturer", "name": "No id"},
    }));
    let pack = DataPack::new();
    let pipe: Pipe = JsonImport::from_pack(&pack).entity(&doc);
    assert_eq!(pipe.manufacturer, None);
}

#[test]
fn wrong_scalar_types_read_as_absent() {
    let doc = as_map(json!({
        "id": "f1",
        "@type": "Fuel",
        "calorificValue": "four",
        "unit": 7,
    }));
    let fuel: Fuel = JsonImport::new().entity(&doc);
    assert_eq!(fuel.calorific_value, None);
    assert_eq!(fuel.unit, None);
}

#[test]
fn sibling_references_are_not_cycle_hits() {
    // The same manufacturer referenced from two fields of one document is
    // resolved fully both times; the in-progress set only tracks documents
    // on the current decode stack.
    let mut pack = DataPack::new();
    pack.put(
        ModelType::Manufacturer,
        &as_map(json!({"id": "m1", "@type": "Manufacturer", "name": "Acme", "url": "https://acme.test"})),
    )
    .unwrap();
    pack.put(
        ModelType::Pipe,
        &as_map(json!({
            "id": "p1",
            "@type": "Pipe",
            "manufacturer": {"id": "m1", "@type": "Manufacturer", "name": "Acme"},
        })),
    )
    .unwrap();
    pack.put(
        ModelType::Pipe,
        &as_map(json!({
            "id": "p2",
            "@type": "Pipe",
            "manufacturer": {"id": "m1", "@type": "Manufacturer", "name": "Acme"},
        })),
    )
    .unwrap();

    let mut import = JsonImport::from_pack(&pack);
    let p1: Pipe = import.load("p1").unwrap();
    let p2: Pipe = import.load("p2").unwrap();
    // Both dereferences resolved the full document, not a stub.
    assert_eq!(p1.manufacturer.as_ref().unwrap().url.as_deref(), Some("https://acme.test"));
    assert_eq!(p1.manufacturer, p2.manufacturer);
}

// ── Partial archives ─────────────────────────────────────────────

#[test]
fn archive_with_only_manufacturers() {
    let mut pack = DataPack::new();
    pack.put(
        ModelType::Manufacturer,
        &as_map(json!({"id": "m1", "@type": "Manufacturer", "name": "Acme"})),
    )
    .unwrap();

    let pipe: Option<Pipe> = JsonImport::from_pack(&pack).load("p1");
    assert!(pipe.is_none());

    let manufacturer: Manufacturer = JsonImport::from_pack(&pack).load("m1").unwrap();
    assert_eq!(manufacturer.name.as_deref(), Some("Acme"));
    assert_eq!(pack.ids(ModelType::Manufacturer), vec!["m1"]);
}
