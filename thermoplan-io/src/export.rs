use std::collections::HashSet;

use serde_json::{Map, Value};
use tracing::warn;

use thermoplan_model::{Entity, ModelType, RootEntity, Symbol};
use thermoplan_pack::{DataPack, PackError, PackResult};

/// Converts an entity into its JSON document form.
///
/// Implementations fill in everything beyond `id` and `@type`, which
/// [`JsonExport::document`] writes first. Field order and naming belong to
/// the implementation; absence is expressed by not inserting the field.
pub trait ToDocument: Entity {
    /// Concrete type tag recorded as `@type`. Informational: decoding
    /// dispatch is driven by the caller-chosen type, never by this string.
    const TAG: &'static str;

    fn write_fields(&self, doc: &mut Map<String, Value>, w: &mut JsonExport<'_>);
}

/// Reference-resolving writer.
///
/// Unbound, it only produces documents: reference fields still become
/// `{id, @type, name}` structures, but nothing is persisted. Bound to a
/// [`DataPack`], every root entity reachable through reference fields is
/// additionally written into the pack — each (category, id) at most once,
/// however often it is shared, and cycles terminate because an id that is
/// already present or currently being written is emitted as a reference
/// without recursing.
pub struct JsonExport<'a> {
    pack: Option<&'a mut DataPack>,
    writing: HashSet<(ModelType, String)>,
}

impl<'a> JsonExport<'a> {
    /// A writer that produces documents without persisting anything.
    pub fn new() -> Self {
        Self {
            pack: None,
            writing: HashSet::new(),
        }
    }

    /// A writer that persists referenced root entities into `pack`.
    pub fn to_pack(pack: &'a mut DataPack) -> Self {
        Self {
            pack: Some(pack),
            writing: HashSet::new(),
        }
    }

    /// Convert an entity to its document. Bound to a pack, this also writes
    /// every referenced root entity that is not yet stored.
    pub fn document<E: ToDocument>(&mut self, entity: &E) -> Map<String, Value> {
        let mut doc = Map::new();
        doc.insert("id".into(), Value::String(entity.id().to_string()));
        doc.insert("@type".into(), Value::String(E::TAG.to_string()));
        entity.write_fields(&mut doc, self);
        doc
    }

    /// Persist a root entity (and, transitively, everything it references)
    /// into the bound pack.
    ///
    /// An empty id or an id containing `/` is rejected with
    /// [`PackError::InvalidId`] before the pack is touched. If the pack
    /// already holds a document for this (category, id), nothing happens —
    /// the stored bytes stay exactly as they were. Without a bound pack this
    /// is a no-op.
    pub fn write<E: RootEntity + ToDocument>(&mut self, entity: &E) -> PackResult<()> {
        let id = entity.id();
        if id.is_empty() || id.contains('/') {
            return Err(PackError::InvalidId(id.to_string()));
        }
        match self.pack.as_deref() {
            Some(pack) if !pack.contains(E::TYPE, id) => {}
            _ => return Ok(()),
        }
        let key = (E::TYPE, id.to_string());
        if !self.writing.insert(key.clone()) {
            // Already being written higher up this traversal; the reference
            // alone is enough.
            return Ok(());
        }
        let doc = self.document(entity);
        let result = match self.pack.as_deref_mut() {
            Some(pack) => pack.put(E::TYPE, &doc),
            None => Ok(()),
        };
        self.writing.remove(&key);
        result
    }

    // ── field helpers ────────────────────────────────────────────

    /// Insert a string field; absent values are omitted, not null.
    pub fn put_str(&self, doc: &mut Map<String, Value>, field: &str, value: Option<&str>) {
        if let Some(value) = value {
            doc.insert(field.to_string(), Value::String(value.to_string()));
        }
    }

    pub fn put_f64(&self, doc: &mut Map<String, Value>, field: &str, value: Option<f64>) {
        if let Some(value) = value {
            if let Some(number) = serde_json::Number::from_f64(value) {
                doc.insert(field.to_string(), Value::Number(number));
            }
        }
    }

    pub fn put_i32(&self, doc: &mut Map<String, Value>, field: &str, value: Option<i32>) {
        if let Some(value) = value {
            doc.insert(field.to_string(), Value::Number(value.into()));
        }
    }

    /// Insert a flag only when set; an unset flag reads back as `false`.
    pub fn put_flag(&self, doc: &mut Map<String, Value>, field: &str, value: bool) {
        if value {
            doc.insert(field.to_string(), Value::Bool(true));
        }
    }

    /// Insert a raw numeric sequence verbatim; empty sequences are omitted.
    pub fn put_f64s(&self, doc: &mut Map<String, Value>, field: &str, values: &[f64]) {
        if values.is_empty() {
            return;
        }
        let numbers = values
            .iter()
            .filter_map(|v| serde_json::Number::from_f64(*v))
            .map(Value::Number)
            .collect();
        doc.insert(field.to_string(), Value::Array(numbers));
    }

    /// Insert an enumerated field via its symbolic name.
    pub fn put_enum<S: Symbol>(&self, doc: &mut Map<String, Value>, field: &str, value: Option<S>) {
        if let Some(value) = value {
            doc.insert(field.to_string(), Value::String(value.symbol().to_string()));
        }
    }

    /// Embed a value entity inline.
    pub fn put_value<E: ToDocument>(
        &mut self,
        doc: &mut Map<String, Value>,
        field: &str,
        value: Option<&E>,
    ) {
        if let Some(value) = value {
            let inline = self.document(value);
            doc.insert(field.to_string(), Value::Object(inline));
        }
    }

    /// Embed a sequence of value entities inline; empty sequences are omitted.
    pub fn put_values<E: ToDocument>(
        &mut self,
        doc: &mut Map<String, Value>,
        field: &str,
        values: &[E],
    ) {
        if values.is_empty() {
            return;
        }
        let inline: Vec<Value> = values
            .iter()
            .map(|v| Value::Object(self.document(v)))
            .collect();
        doc.insert(field.to_string(), Value::Array(inline));
    }

    /// Emit a reference to a root entity, persisting the referent first when
    /// a pack is bound and does not contain it yet.
    pub fn put_ref<R: RootEntity + ToDocument>(
        &mut self,
        doc: &mut Map<String, Value>,
        field: &str,
        target: Option<&R>,
    ) {
        if let Some(target) = target {
            let reference = self.reference(target);
            doc.insert(field.to_string(), reference);
        }
    }

    /// Emit a sequence of references; empty sequences are omitted.
    pub fn put_refs<R: RootEntity + ToDocument>(
        &mut self,
        doc: &mut Map<String, Value>,
        field: &str,
        targets: &[R],
    ) {
        if targets.is_empty() {
            return;
        }
        let references: Vec<Value> = targets.iter().map(|t| self.reference(t)).collect();
        doc.insert(field.to_string(), Value::Array(references));
    }

    fn reference<R: RootEntity + ToDocument>(&mut self, target: &R) -> Value {
        // A referent that cannot be persisted (bad id) is logged and the
        // traversal continues; the reference structure itself is still
        // emitted so the document stays structurally complete.
        if let Err(err) = self.write(target) {
            warn!(category = %R::TYPE, %err, "referenced entity not persisted");
        }
        let mut reference = Map::new();
        reference.insert("id".into(), Value::String(target.id().to_string()));
        reference.insert("@type".into(), Value::String(R::TAG.to_string()));
        reference.insert(
            "name".into(),
            match target.name() {
                Some(name) => Value::String(name.to_string()),
                None => Value::Null,
            },
        );
        Value::Object(reference)
    }
}

impl Default for JsonExport<'_> {
    fn default() -> Self {
        Self::new()
    }
}
