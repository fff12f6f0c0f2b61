use std::collections::BTreeMap;
use std::io::{Cursor, Read, Seek, Write};
use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, warn};
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

use thermoplan_model::ModelType;

use crate::error::{PackError, PackResult};

/// A portable archive of entity documents.
///
/// Maps `category/id.json` entry paths to UTF-8 JSON bytes, held fully in
/// memory between [`DataPack::open`] and [`DataPack::to_bytes`]. Entries that
/// do not belong to any category (a README, foreign files in a hand-built
/// archive) are carried through untouched but never enumerated as ids.
///
/// A `DataPack` is single-owner mutable state: one writer or one reader at a
/// time, confined to one thread by the embedding application.
pub struct DataPack {
    entries: BTreeMap<String, Vec<u8>>,
}

impl DataPack {
    /// Create a new empty pack.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Parse a pack from a zip-formatted byte stream.
    pub fn open<R: Read + Seek>(reader: R) -> PackResult<Self> {
        let mut archive =
            ZipArchive::new(reader).map_err(|e| PackError::CorruptArchive(e.to_string()))?;
        let mut entries = BTreeMap::new();
        for i in 0..archive.len() {
            let mut file = archive
                .by_index(i)
                .map_err(|e| PackError::CorruptArchive(e.to_string()))?;
            if file.is_dir() {
                continue;
            }
            let name = file.name().to_string();
            let mut data = Vec::new();
            file.read_to_end(&mut data)?;
            entries.insert(name, data);
        }
        Ok(Self { entries })
    }

    /// Parse a pack from an in-memory byte buffer.
    pub fn from_bytes(bytes: &[u8]) -> PackResult<Self> {
        Self::open(Cursor::new(bytes))
    }

    /// Open a pack file from disk.
    pub fn load(path: &Path) -> PackResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::open(file)
    }

    fn entry_path(model_type: ModelType, id: &str) -> String {
        format!("{}/{}.json", model_type.dir(), id)
    }

    /// Ids of all documents stored under the given category.
    ///
    /// Enumeration order is an implementation detail; each id appears exactly
    /// once.
    pub fn ids(&self, model_type: ModelType) -> Vec<String> {
        let prefix = format!("{}/", model_type.dir());
        self.entries
            .keys()
            .filter_map(|path| path.strip_prefix(&prefix))
            .filter_map(|rest| rest.strip_suffix(".json"))
            .filter(|stem| !stem.is_empty() && !stem.contains('/'))
            .map(str::to_string)
            .collect()
    }

    /// Whether a document exists at (category, id).
    pub fn contains(&self, model_type: ModelType, id: &str) -> bool {
        !id.contains('/') && self.entries.contains_key(&Self::entry_path(model_type, id))
    }

    /// Read the document at (category, id).
    ///
    /// `None` is a normal outcome: the entry is absent, or present but not a
    /// JSON object (logged and treated as absent).
    pub fn read(&self, model_type: ModelType, id: &str) -> Option<Map<String, Value>> {
        if id.contains('/') {
            return None;
        }
        let path = Self::entry_path(model_type, id);
        let bytes = self.entries.get(&path)?;
        match serde_json::from_slice::<Value>(bytes) {
            Ok(Value::Object(doc)) => Some(doc),
            Ok(_) => {
                warn!(%path, "archive entry is not a JSON object");
                None
            }
            Err(err) => {
                warn!(%path, %err, "archive entry is not valid JSON");
                None
            }
        }
    }

    /// Insert a document into the given category, keyed by its `id` field.
    ///
    /// The document must carry a non-empty string `id` that is usable as a
    /// path segment, otherwise [`PackError::InvalidId`] is returned before
    /// the pack is touched. If an entry already exists at the computed path
    /// the write is skipped and the existing bytes stay as they are — the
    /// at-most-once-per-id invariant lives here, at the lowest layer.
    pub fn put(&mut self, model_type: ModelType, doc: &Map<String, Value>) -> PackResult<()> {
        let id = doc.get("id").and_then(Value::as_str).unwrap_or_default();
        if id.is_empty() || id.contains('/') {
            return Err(PackError::InvalidId(id.to_string()));
        }
        let path = Self::entry_path(model_type, id);
        if self.entries.contains_key(&path) {
            warn!(%path, "entry already present, write skipped");
            return Ok(());
        }
        let bytes = serde_json::to_vec(doc)
            .map_err(|e| PackError::SerializationFailed(e.to_string()))?;
        debug!(%path, "writing entity document");
        self.entries.insert(path, bytes);
        Ok(())
    }

    /// Encode the pack to a zip-formatted byte buffer.
    ///
    /// Builds the whole archive in memory; on failure nothing has been
    /// written anywhere.
    pub fn to_bytes(&self) -> PackResult<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        for (path, data) in &self.entries {
            zip.start_file(path.as_str(), options)
                .map_err(|e| PackError::SerializationFailed(e.to_string()))?;
            zip.write_all(data)
                .map_err(|e| PackError::SerializationFailed(e.to_string()))?;
        }
        let cursor = zip
            .finish()
            .map_err(|e| PackError::SerializationFailed(e.to_string()))?;
        Ok(cursor.into_inner())
    }

    /// Save the pack to disk.
    ///
    /// The archive is fully encoded in memory first, written to a sibling
    /// temporary file, then renamed into place — the destination never holds
    /// a partial archive, and a failed save leaves any prior file untouched.
    pub fn save(&self, path: &Path) -> PackResult<()> {
        let bytes = self.to_bytes()?;
        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = std::path::PathBuf::from(tmp);
        std::fs::write(&tmp, &bytes)?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Number of entries, foreign ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the pack holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entry paths, for diagnostics and tests.
    pub fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Raw stored bytes of a document, for byte-equality checks.
    pub fn entry_bytes(&self, model_type: ModelType, id: &str) -> Option<&[u8]> {
        self.entries
            .get(&Self::entry_path(model_type, id))
            .map(Vec::as_slice)
    }
}

impl Default for DataPack {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DataPack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataPack")
            .field("entry_count", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(id: &str) -> Map<String, Value> {
        let mut doc = Map::new();
        doc.insert("id".into(), json!(id));
        doc.insert("@type".into(), json!("Fuel"));
        doc
    }

    #[test]
    fn put_and_read() {
        let mut pack = DataPack::new();
        pack.put(ModelType::Fuel, &doc("f1")).unwrap();

        assert!(pack.contains(ModelType::Fuel, "f1"));
        let read_back = pack.read(ModelType::Fuel, "f1").unwrap();
        assert_eq!(read_back.get("id"), Some(&json!("f1")));
    }

    #[test]
    fn read_missing_is_none() {
        let pack = DataPack::new();
        assert!(pack.read(ModelType::Fuel, "nope").is_none());
        assert!(!pack.contains(ModelType::Fuel, "nope"));
    }

    #[test]
    fn second_put_is_noop() {
        let mut pack = DataPack::new();
        pack.put(ModelType::Fuel, &doc("f1")).unwrap();
        let first = pack.entry_bytes(ModelType::Fuel, "f1").unwrap().to_vec();

        let mut altered = doc("f1");
        altered.insert("unit".into(), json!("kg"));
        pack.put(ModelType::Fuel, &altered).unwrap();

        assert_eq!(pack.entry_bytes(ModelType::Fuel, "f1").unwrap(), &first[..]);
        assert_eq!(pack.len(), 1);
    }

    #[test]
    fn empty_id_rejected() {
        let mut pack = DataPack::new();
        let err = pack.put(ModelType::Fuel, &doc("")).unwrap_err();
        assert!(matches!(err, PackError::InvalidId(_)));
        assert!(pack.is_empty());
    }

    #[test]
    fn missing_id_rejected() {
        let mut pack = DataPack::new();
        let mut no_id = Map::new();
        no_id.insert("@type".into(), json!("Fuel"));
        let err = pack.put(ModelType::Fuel, &no_id).unwrap_err();
        assert!(matches!(err, PackError::InvalidId(_)));
    }

    #[test]
    fn slash_in_id_rejected() {
        let mut pack = DataPack::new();
        let err = pack.put(ModelType::Fuel, &doc("../evil")).unwrap_err();
        assert!(matches!(err, PackError::InvalidId(_)));
        assert!(pack.is_empty());
    }

    #[test]
    fn same_id_different_categories() {
        let mut pack = DataPack::new();
        pack.put(ModelType::Fuel, &doc("x1")).unwrap();
        pack.put(ModelType::Manufacturer, &doc("x1")).unwrap();
        assert_eq!(pack.len(), 2);
        assert!(pack.contains(ModelType::Fuel, "x1"));
        assert!(pack.contains(ModelType::Manufacturer, "x1"));
    }

    #[test]
    fn corrupt_bytes_rejected() {
        let err = DataPack::from_bytes(b"definitely not a zip").unwrap_err();
        assert!(matches!(err, PackError::CorruptArchive(_)));
    }
}
