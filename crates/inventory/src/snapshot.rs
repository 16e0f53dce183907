//! Snapshot persistence: where the serialized inventory is read from and
//! written to.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Infrastructure failure while reading or writing a snapshot.
///
/// Unlike domain failures these are never recovered inside the store; they are
/// handed back to the caller.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to read snapshot from {location}: {source}")]
    Read {
        location: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write snapshot to {location}: {source}")]
    Write {
        location: String,
        #[source]
        source: io::Error,
    },

    #[error("malformed snapshot in {location}: {source}")]
    Malformed {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Source/destination for serialized inventory snapshots.
///
/// `read` returns `Ok(None)` when nothing has been stored yet; that is the
/// expected cold-start path, not an error.
pub trait SnapshotStore {
    /// Human-readable location, used in logs and errors.
    fn location(&self) -> String;

    fn read(&self) -> Result<Option<String>, PersistenceError>;

    fn write(&self, contents: &str) -> Result<(), PersistenceError>;
}

impl<S> SnapshotStore for &S
where
    S: SnapshotStore + ?Sized,
{
    fn location(&self) -> String {
        (**self).location()
    }

    fn read(&self) -> Result<Option<String>, PersistenceError> {
        (**self).read()
    }

    fn write(&self, contents: &str) -> Result<(), PersistenceError> {
        (**self).write(contents)
    }
}

/// Snapshot kept in a JSON file on the local filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> Result<Option<String>, PersistenceError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(PersistenceError::Read {
                location: self.location(),
                source,
            }),
        }
    }

    fn write(&self, contents: &str) -> Result<(), PersistenceError> {
        std::fs::write(&self.path, contents).map_err(|source| PersistenceError::Write {
            location: self.location(),
            source,
        })
    }
}

/// In-memory snapshot slot for tests/dev.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    inner: RwLock<Option<String>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing document, as if it had been saved earlier.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            inner: RwLock::new(Some(contents.into())),
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.inner.read().ok()?.clone()
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn location(&self) -> String {
        "<memory>".to_string()
    }

    fn read(&self) -> Result<Option<String>, PersistenceError> {
        let slot = self.inner.read().map_err(|_| PersistenceError::Read {
            location: self.location(),
            source: poisoned(),
        })?;
        Ok(slot.clone())
    }

    fn write(&self, contents: &str) -> Result<(), PersistenceError> {
        let mut slot = self.inner.write().map_err(|_| PersistenceError::Write {
            location: self.location(),
            source: poisoned(),
        })?;
        *slot = Some(contents.to_string());
        Ok(())
    }
}

fn poisoned() -> io::Error {
    io::Error::other("snapshot lock poisoned")
}

/// Render a value as a JSON document with 4-space indentation.
pub(crate) fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String, PersistenceError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser).map_err(PersistenceError::Encode)?;
    // serde_json only ever emits UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub(crate) fn decode<T: DeserializeOwned>(
    location: &str,
    contents: &str,
) -> Result<T, PersistenceError> {
    serde_json::from_str(contents).map_err(|source| PersistenceError::Malformed {
        location: location.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn encode_uses_four_space_indent() {
        let mut doc = BTreeMap::new();
        doc.insert("apple", 7);
        doc.insert("banana", 5);

        let text = encode(&doc).unwrap();
        assert_eq!(text, "{\n    \"apple\": 7,\n    \"banana\": 5\n}");
    }

    #[test]
    fn decode_reports_location_on_bad_json() {
        let err = decode::<BTreeMap<String, i64>>("stock.json", "{ not json").unwrap_err();
        match err {
            PersistenceError::Malformed { location, .. } => assert_eq!(location, "stock.json"),
            other => panic!("expected malformed snapshot error, got {other:?}"),
        }
    }

    #[test]
    fn in_memory_store_starts_empty_and_keeps_last_write() {
        let store = InMemorySnapshotStore::new();
        assert_eq!(store.read().unwrap(), None);

        store.write("{}").unwrap();
        store.write("{\"kiwi\": 2}").unwrap();
        assert_eq!(store.read().unwrap().as_deref(), Some("{\"kiwi\": 2}"));
    }

    #[test]
    fn poisoned_in_memory_store_reports_errors() {
        let store = InMemorySnapshotStore::with_contents("{}");
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = store.inner.write().unwrap();
            panic!("writer panicked while holding the snapshot lock");
        }));

        assert!(matches!(store.write("{\"kiwi\": 2}"), Err(PersistenceError::Write { .. })));
        assert!(matches!(store.read(), Err(PersistenceError::Read { .. })));
    }

    #[test]
    fn missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent.json"));
        assert!(store.read().unwrap().is_none());
    }
}
