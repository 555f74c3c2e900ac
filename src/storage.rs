//! Pluggable blob persistence.
//!
//! The store keeps the whole milestone list under a single fixed key, so
//! the persistence contract is a minimal string key-value interface. The
//! file-backed implementation stands in for browser local storage; the
//! in-memory one substitutes for it in tests and embedding.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::error::Result;

/// Storage key the milestone list is persisted under.
pub const STORAGE_KEY: &str = "life-timeline-milestones";

/// A string key-value store holding one serialized blob per key.
pub trait BlobStore {
    /// Read the blob stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the underlying read fails for a reason other than
    /// the key being absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous blob.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the underlying write fails.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// File-backed blob store: one `<key>.json` file per key under a base
/// directory, created on first write.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl BlobStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.key_path(key);

        // Write-to-temp + rename for atomicity.
        let tmp = path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp)?;
        file.write_all(value.as_bytes())?;
        file.flush()?;
        drop(file);
        fs::rename(&tmp, &path)?;

        Ok(())
    }
}

/// In-memory blob store backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
