use octomark_core::{Error, Result};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Key-value storage the bookmark store persists into
///
/// Values are opaque strings (serialized JSON). Keeping this a trait
/// means the store itself never touches the filesystem, which makes
/// testing painless.
pub trait StorageBackend {
    /// Read the value stored under `key`, `None` if nothing was ever written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing whatever was there
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// File-per-key backend under the user's data directory
///
/// Each key becomes `<dir>/<key>.json`. Plain files beat a database
/// here: two small keys, written whole on every mutation.
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Backend rooted at the platform data dir (XDG on Unix-likes)
    pub fn default_dir() -> Result<Self> {
        let dir = dirs::data_dir()
            .ok_or_else(|| Error::StorageError("Could not find data directory".into()))?
            .join("octomark");
        Ok(Self::new(dir))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// In-memory backend for tests and throwaway sessions
///
/// Clones share the same underlying map, so a test can keep a handle
/// and inspect what the store wrote.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a key, e.g. to simulate a previous session
    pub fn seed(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .expect("storage mutex poisoned")
            .insert(key.to_string(), value.to_string());
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .entries
            .lock()
            .expect("storage mutex poisoned")
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .expect("storage mutex poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_backend_round_trips() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.get("missing").unwrap(), None);

        backend.set("key", "[1,2,3]").unwrap();
        assert_eq!(backend.get("key").unwrap().as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn memory_backend_clones_share_state() {
        let backend = MemoryBackend::new();
        let handle = backend.clone();

        backend.set("key", "value").unwrap();
        assert_eq!(handle.get("key").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn file_backend_round_trips() {
        let tmp = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(tmp.path().join("bookmarks"));

        assert_eq!(backend.get("github-bookmarks").unwrap(), None);

        backend.set("github-bookmarks", "[]").unwrap();
        assert_eq!(
            backend.get("github-bookmarks").unwrap().as_deref(),
            Some("[]")
        );
    }
}
