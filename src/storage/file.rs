//! JSON-file storage so the CLI keeps its session between invocations, the
//! same way a browser keeps local storage between page reloads.

use super::{SessionStorage, StorageError};
use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::NamedTempFile;
use tracing::debug;

#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    // serializes read-modify-write cycles within this process
    lock: Mutex<()>,
}

impl FileStorage {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }

    /// Writes to a sibling temp file and renames it over the target, so a
    /// crash mid-write never leaves a truncated file behind.
    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let contents = serde_json::to_string_pretty(entries)?;
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(contents.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|err| err.error)?;
        debug!("wrote {} storage entries to {}", entries.len(), self.path.display());
        Ok(())
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Poisoned)?;
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Poisoned)?;
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("session.json"));
        assert_eq!(storage.get("access_token").unwrap(), None);
        // removing from a missing file does not create it
        storage.remove("access_token").unwrap();
        assert!(!storage.path().exists());
    }

    #[test]
    fn values_survive_a_new_handle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        FileStorage::new(&path).set("access_token", "token").unwrap();

        let reopened = FileStorage::new(&path);
        assert_eq!(reopened.get("access_token").unwrap(), Some("token".to_string()));

        reopened.remove("access_token").unwrap();
        assert_eq!(FileStorage::new(&path).get("access_token").unwrap(), None);
    }

    #[test]
    fn other_keys_are_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("session.json"));
        storage.set("theme", "dark").unwrap();
        storage.set("access_token", "token").unwrap();
        storage.remove("access_token").unwrap();
        assert_eq!(storage.get("theme").unwrap(), Some("dark".to_string()));
    }

    #[test]
    fn writes_replace_the_file_without_leftovers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, r#"{"theme":"light"}"#).unwrap();

        let storage = FileStorage::new(&path);
        storage.set("access_token", "token").unwrap();
        storage.set("theme", "dark").unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("session.json")]);

        let on_disk: BTreeMap<String, String> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk.get("theme").map(String::as_str), Some("dark"));
        assert_eq!(on_disk.get("access_token").map(String::as_str), Some("token"));
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();

        let storage = FileStorage::new(&path);
        assert!(matches!(
            storage.get("access_token"),
            Err(StorageError::Json(_))
        ));
    }
}
