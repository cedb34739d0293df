//! # Repositories
//!
//! A [`Repository`] is where a [`ResourceActor`](crate::framework::ResourceActor) keeps its
//! collection. The actor loads it once at start-up and writes the *whole* collection back
//! after each mutation; there is no incremental log.
//!
//! - [`JsonFileRepository`] stores a pretty-printed JSON array in a single file.
//! - [`InMemoryRepository`] keeps the records in a shared vector and can be told to fail
//!   writes, which is how tests exercise storage failures.

use crate::framework::error::StorageError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Persistence contract for one collection of records.
pub trait Repository<T>: Send + Sync + 'static {
    /// Reads every record, in stored order.
    fn load(&self) -> Result<Vec<T>, StorageError>;

    /// Replaces the stored collection with `records`.
    fn save(&self, records: &[T]) -> Result<(), StorageError>;
}

/// A collection stored as one JSON array on disk.
///
/// A missing file reads as an empty collection. Saves go to a sibling temp file that is
/// then renamed over the original, so readers never observe a half-written array.
pub struct JsonFileRepository<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonFileRepository<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl<T> Repository<T> for JsonFileRepository<T>
where
    T: Serialize + DeserializeOwned + 'static,
{
    fn load(&self) -> Result<Vec<T>, StorageError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        serde_json::from_slice(&bytes).map_err(|source| StorageError::Decode {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, records: &[T]) -> Result<(), StorageError> {
        let mut bytes = serde_json::to_vec_pretty(records)?;
        bytes.push(b'\n');
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        std::fs::write(&tmp, &bytes).map_err(|e| self.io_error(e))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| {
            let _ = std::fs::remove_file(&tmp);
            self.io_error(e)
        })
    }
}

/// A collection held in memory. Clones share the same records.
pub struct InMemoryRepository<T> {
    records: Arc<Mutex<Vec<T>>>,
    fail_writes: Arc<AtomicBool>,
}

impl<T> Clone for InMemoryRepository<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
            fail_writes: Arc::clone(&self.fail_writes),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::with_records(Vec::new())
    }
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
            fail_writes: Arc::new(AtomicBool::new(false)),
        }
    }

    /// When set, every subsequent `save` fails with [`StorageError::Unavailable`].
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl<T: Clone> InMemoryRepository<T> {
    /// The records as last saved.
    pub fn snapshot(&self) -> Vec<T> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl<T> Repository<T> for InMemoryRepository<T>
where
    T: Clone + Send + 'static,
{
    fn load(&self) -> Result<Vec<T>, StorageError> {
        self.records
            .lock()
            .map(|records| records.clone())
            .map_err(|_| StorageError::Unavailable("in-memory store poisoned".into()))
    }

    fn save(&self, records: &[T]) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("writes disabled".into()));
        }
        let mut stored = self
            .records
            .lock()
            .map_err(|_| StorageError::Unavailable("in-memory store poisoned".into()))?;
        *stored = records.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Cup {
        size: String,
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::<Cup>::new(dir.path().join("cups.json"));
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn save_rewrites_the_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::<Cup>::new(dir.path().join("cups.json"));
        let cups = vec![
            Cup { size: "tall".into() },
            Cup { size: "grande".into() },
        ];
        repo.save(&cups).unwrap();
        assert_eq!(repo.load().unwrap(), cups);

        repo.save(&cups[1..]).unwrap();
        assert_eq!(repo.load().unwrap(), vec![Cup { size: "grande".into() }]);
        assert!(!dir.path().join("cups.json.tmp").exists());
    }

    #[test]
    fn failed_rename_leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cups.json");
        // A non-empty directory where the file should be makes the rename fail.
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), "").unwrap();

        let repo = JsonFileRepository::<Cup>::new(&path);
        let err = repo.save(&[Cup { size: "venti".into() }]).unwrap_err();
        assert!(matches!(err, StorageError::Io { .. }));
        assert!(!dir.path().join("cups.json.tmp").exists());
        assert!(path.join("keep").exists());
    }

    #[test]
    fn corrupt_file_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cups.json");
        std::fs::write(&path, "{not json").unwrap();
        let repo = JsonFileRepository::<Cup>::new(&path);
        assert!(matches!(repo.load(), Err(StorageError::Decode { .. })));
    }

    #[test]
    fn in_memory_writes_can_be_disabled() {
        let repo = InMemoryRepository::with_records(vec![Cup { size: "short".into() }]);
        repo.fail_writes(true);
        assert!(matches!(
            repo.save(&[]),
            Err(StorageError::Unavailable(_))
        ));
        assert_eq!(repo.snapshot().len(), 1);

        repo.fail_writes(false);
        repo.save(&[]).unwrap();
        assert!(repo.snapshot().is_empty());
    }
}
