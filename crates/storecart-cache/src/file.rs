//! File-backed store for native builds.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{CacheError, KvStore};

/// Store that keeps every key in a single JSON object file.
///
/// The file is re-read on every access so that separate processes (one CLI
/// invocation after another) observe each other's writes. Writes go to a
/// sibling temp file first and are renamed into place.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open a store at `path`, creating parent directories as needed.
    ///
    /// The file itself is created lazily on the first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    CacheError::OpenError(format!("{}: {}", parent.display(), e))
                })?;
            }
        }
        Ok(Self { path })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, CacheError> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), CacheError> {
        let content = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut entries = self.read_all()?;
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;

    fn temp_path(test_name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!(
            "storecart-file-store-{}-{}",
            std::process::id(),
            test_name
        ));
        // Start from a clean directory for isolation
        let _ = fs::remove_dir_all(&dir);
        dir.join("cart.json")
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let store = FileStore::open(temp_path("missing")).unwrap();
        assert_eq!(store.get("cart").unwrap(), None);
        assert!(!store.exists("cart").unwrap());
    }

    #[test]
    fn test_values_survive_reopen() {
        let path = temp_path("reopen");

        let store = FileStore::open(&path).unwrap();
        store
            .set("cart", r#"[{"name":"Tea","price":20,"quantity":1}]"#)
            .unwrap();
        store.set("other", "1").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("cart").unwrap().as_deref(),
            Some(r#"[{"name":"Tea","price":20,"quantity":1}]"#)
        );

        reopened.delete("other").unwrap();
        assert!(!store.exists("other").unwrap());
        assert!(store.exists("cart").unwrap());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let path = temp_path("corrupt");
        let store = FileStore::open(&path).unwrap();
        fs::write(&path, "not json").unwrap();

        assert!(matches!(
            store.get("cart"),
            Err(CacheError::SerializeError(_))
        ));
    }
}
