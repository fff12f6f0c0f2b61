use std::collections::HashSet;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use thermoplan_model::{ModelType, RootEntity, Symbol};
use thermoplan_pack::DataPack;

/// Builds an entity from its JSON document form.
///
/// The inverse of [`crate::ToDocument`]: reads the fields that
/// `write_fields` emits, treating anything missing or malformed as absent.
/// Implementations never fail — a document full of holes decodes into an
/// entity full of `None`s.
pub trait FromDocument: Sized {
    fn read_fields(doc: &Map<String, Value>, r: &mut JsonImport<'_>) -> Self;
}

/// Reference-resolving reader.
///
/// Bound to a [`DataPack`], reference structures are dereferenced by loading
/// the referenced document and decoding it recursively. The set of
/// (category, id) pairs currently being decoded guards against reference
/// cycles: re-entering one of them yields a stub decoded from the reference
/// structure itself (id and name survive, nothing else), which bounds the
/// recursion by the number of distinct documents.
pub struct JsonImport<'a> {
    pack: Option<&'a DataPack>,
    decoding: HashSet<(ModelType, String)>,
}

impl<'a> JsonImport<'a> {
    /// A reader without an archive; references decode to stubs.
    pub fn new() -> Self {
        Self {
            pack: None,
            decoding: HashSet::new(),
        }
    }

    /// A reader that resolves references against `pack`.
    pub fn from_pack(pack: &'a DataPack) -> Self {
        Self {
            pack: Some(pack),
            decoding: HashSet::new(),
        }
    }

    /// Decode a document in place, without any archive lookup for the
    /// document itself.
    pub fn entity<E: FromDocument>(&mut self, doc: &Map<String, Value>) -> E {
        E::read_fields(doc, self)
    }

    /// Load a root entity from the bound pack by id.
    ///
    /// `None` when no pack is bound or the pack holds no document at
    /// (category, id) — a normal outcome, not an error.
    pub fn load<E: RootEntity + FromDocument>(&mut self, id: &str) -> Option<E> {
        let pack = self.pack?;
        let doc = pack.read(E::TYPE, id)?;
        let key = (E::TYPE, id.to_string());
        self.decoding.insert(key.clone());
        let entity = self.entity::<E>(&doc);
        self.decoding.remove(&key);
        Some(entity)
    }

    // ── field helpers ────────────────────────────────────────────

    pub fn str_of(&self, doc: &Map<String, Value>, field: &str) -> Option<String> {
        doc.get(field)?.as_str().map(str::to_string)
    }

    pub fn f64_of(&self, doc: &Map<String, Value>, field: &str) -> Option<f64> {
        doc.get(field)?.as_f64()
    }

    pub fn i32_of(&self, doc: &Map<String, Value>, field: &str) -> Option<i32> {
        doc.get(field)?
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
    }

    /// Flags read absent as `false`.
    pub fn flag_of(&self, doc: &Map<String, Value>, field: &str) -> bool {
        doc.get(field).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Raw numeric sequence; absent or non-array reads as empty.
    pub fn f64s_of(&self, doc: &Map<String, Value>, field: &str) -> Vec<f64> {
        match doc.get(field).and_then(Value::as_array) {
            Some(items) => items.iter().filter_map(Value::as_f64).collect(),
            None => Vec::new(),
        }
    }

    /// Decode an enumerated field; an unknown symbol is absent, never an
    /// error and never some default member.
    pub fn enum_of<S: Symbol>(&self, doc: &Map<String, Value>, field: &str) -> Option<S> {
        let symbol = doc.get(field)?.as_str()?;
        match S::from_symbol(symbol) {
            decoded @ Some(_) => decoded,
            None => {
                debug!(field, symbol, "unknown symbolic value treated as absent");
                None
            }
        }
    }

    /// Decode an inline value entity.
    pub fn value_of<E: FromDocument>(
        &mut self,
        doc: &Map<String, Value>,
        field: &str,
    ) -> Option<E> {
        let inline = doc.get(field)?.as_object()?;
        Some(self.entity(inline))
    }

    /// Decode a sequence of inline value entities; non-object elements are
    /// skipped.
    pub fn values_of<E: FromDocument>(&mut self, doc: &Map<String, Value>, field: &str) -> Vec<E> {
        let Some(items) = doc.get(field).and_then(Value::as_array) else {
            return Vec::new();
        };
        items
            .iter()
            .filter_map(Value::as_object)
            .map(|inline| self.entity(inline))
            .collect()
    }

    /// Dereference a single reference field.
    pub fn ref_of<R: RootEntity + FromDocument>(
        &mut self,
        doc: &Map<String, Value>,
        field: &str,
    ) -> Option<R> {
        let reference = doc.get(field)?.as_object()?;
        self.dereference(reference)
    }

    /// Dereference a sequence of references; unresolvable elements are
    /// dropped.
    pub fn refs_of<R: RootEntity + FromDocument>(
        &mut self,
        doc: &Map<String, Value>,
        field: &str,
    ) -> Vec<R> {
        let Some(items) = doc.get(field).and_then(Value::as_array) else {
            return Vec::new();
        };
        items
            .iter()
            .filter_map(Value::as_object)
            .filter_map(|reference| self.dereference(reference))
            .collect()
    }

    fn dereference<R: RootEntity + FromDocument>(
        &mut self,
        reference: &Map<String, Value>,
    ) -> Option<R> {
        let id = reference.get("id").and_then(Value::as_str)?.to_string();
        let Some(pack) = self.pack else {
            // No archive to resolve against; keep what the reference carries.
            return Some(self.entity(reference));
        };
        let key = (R::TYPE, id.clone());
        if self.decoding.contains(&key) {
            // This document is being decoded higher up the stack; a stub
            // breaks the cycle.
            return Some(self.entity(reference));
        }
        let Some(doc) = pack.read(R::TYPE, &id) else {
            warn!(category = %R::TYPE, id = %id, "referenced document missing from archive");
            return None;
        };
        self.decoding.insert(key.clone());
        let entity = self.entity::<R>(&doc);
        self.decoding.remove(&key);
        Some(entity)
    }
}

impl Default for JsonImport<'_> {
    fn default() -> Self {
        Self::new()
    }
}
