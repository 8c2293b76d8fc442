//! # Filesystem-backed storage
//!
//! [`FileStorage`] is a [`Storage`] implementation that persists each entry
//! as one file under a base directory. It is used on native platforms to
//! retain the session across app restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── token              # raw credential string
//! └── user               # identity record as JSON
//! ```
//!
//! Writes create the base directory on demand and are best-effort; a failed
//! write leaves the previous entry (or none) in place. Reads of missing or
//! unreadable files yield `None`, which the session layer treats as
//! "no session".

use std::path::PathBuf;

use crate::storage::Storage;

/// Filesystem-backed Storage for native persistence.
#[derive(Clone, Debug)]
pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.entry_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        let path = self.entry_path(key);
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = std::fs::write(path, value);
    }

    fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.entry_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_storage_roundtrip() {
        let dir = std::env::temp_dir().join(format!("techvision_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let storage = FileStorage::new(dir.clone());
        storage.set("token", "tok1");

        // Re-open from the same directory, as after a restart.
        let reopened = FileStorage::new(dir.clone());
        assert_eq!(reopened.get("token").as_deref(), Some("tok1"));

        reopened.remove("token");
        assert!(storage.get("token").is_none());

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_entry_reads_none() {
        let dir = std::env::temp_dir().join(format!("techvision_missing_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let storage = FileStorage::new(dir.clone());
        assert!(storage.get("token").is_none());

        // Removing an absent entry is a no-op.
        storage.remove("token");

        let _ = std::fs::remove_dir_all(&dir);
    }
}
