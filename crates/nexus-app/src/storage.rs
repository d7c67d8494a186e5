//! Durable key/value storage
//!
//! Each key is a JSON file in the data directory. Writes hold an exclusive
//! lock on a sidecar lock file and land through a temp file + rename, so a
//! crash never leaves a half-written payload behind.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::de::DeserializeOwned;
use serde::Serialize;

use nexus_core::prelude::*;
use nexus_core::Project;

/// Storage key of the project list
pub const PROJECTS_KEY: &str = "nexus_projects";

#[derive(Debug, Clone)]
pub struct KvStore {
    dir: PathBuf,
}

impl KvStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Read and decode a key. A missing key is `Ok(None)`; an undecodable
    /// payload is [`Error::CorruptStore`].
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.path_for(key);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No stored value for '{}' at {:?}", key, path);
                return Ok(None);
            }
            Err(e) => {
                return Err(Error::storage(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| Error::corrupt_store(key, e.to_string()))
    }

    /// Encode and write a key, replacing any previous value
    pub fn put<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            Error::storage(format!("Failed to create {}: {}", self.dir.display(), e))
        })?;

        let payload =
            serde_json::to_string(value).with_context(|| format!("Failed to encode '{}'", key))?;
        let path = self.path_for(key);
        let temp_path = self.dir.join(format!(".{key}.json.tmp"));

        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(self.dir.join(format!(".{key}.lock")))
            .map_err(|e| Error::storage(format!("Failed to open lock for '{}': {}", key, e)))?;
        lock_file
            .lock_exclusive()
            .map_err(|e| Error::storage(format!("Failed to lock '{}': {}", key, e)))?;

        let mut temp = fs::File::create(&temp_path)
            .map_err(|e| Error::storage(format!("Failed to write temp file: {}", e)))?;
        temp.write_all(payload.as_bytes())
            .and_then(|_| temp.sync_all())
            .map_err(|e| Error::storage(format!("Failed to write temp file: {}", e)))?;

        fs::rename(&temp_path, &path)
            .map_err(|e| Error::storage(format!("Failed to replace {}: {}", path.display(), e)))?;

        // Lock is released when lock_file is dropped
        debug!("Stored '{}' ({} bytes)", key, payload.len());
        Ok(())
    }
}

/// The project list under [`PROJECTS_KEY`]
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    store: KvStore,
}

impl ProjectRepository {
    pub fn new(store: KvStore) -> Self {
        Self { store }
    }

    /// Repository rooted in `dir`
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(KvStore::new(dir))
    }

    pub fn store(&self) -> &KvStore {
        &self.store
    }

    /// Stored projects, or an empty list when nothing was saved yet
    pub fn load(&self) -> Result<Vec<Project>> {
        let projects: Vec<Project> = self.store.get(PROJECTS_KEY)?.unwrap_or_default();
        info!("Loaded {} stored project(s)", projects.len());
        Ok(projects)
    }

    pub fn save(&self, projects: &[Project]) -> Result<()> {
        self.store.put(PROJECTS_KEY, projects)
    }
}
