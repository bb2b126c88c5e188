//! Persisted per-project configuration
//!
//! A flat key/value store scoped to a project directory. Values accumulate
//! in memory via [`ConfigStore::set`] and only reach disk on
//! [`ConfigStore::save`], so an aborted run leaves no store file behind.
//! The file survives the process and is picked up again by
//! [`ConfigStore::load`] on later runs.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// File name of the store inside the project directory
pub const CONFIG_FILE: &str = ".ng-create.yaml";

/// Key/value store scoped to a project directory.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    root: PathBuf,
    values: BTreeMap<String, String>,
}

impl ConfigStore {
    /// An empty store scoped to the given project directory.
    pub fn scoped(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            values: BTreeMap::new(),
        }
    }

    /// Repoint the store at a different project directory, keeping the
    /// in-memory values. Used when prompting moves the destination root.
    pub fn rescope(&mut self, root: impl Into<PathBuf>) {
        self.root = root.into();
    }

    /// On-disk location of the store file.
    pub fn path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    /// Set a value in memory. Nothing is written until [`Self::save`].
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Read a value previously set or loaded.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Merge values from an existing store file, if one is present.
    /// In-memory values win over values from disk.
    pub fn load(&mut self) -> Result<(), Error> {
        let path = self.path();
        if !path.exists() {
            return Ok(());
        }

        let raw =
            std::fs::read_to_string(&path).map_err(|e| Error::fs("read config", path, e))?;
        let stored: BTreeMap<String, String> = serde_yaml::from_str(&raw)?;

        for (key, value) in stored {
            self.values.entry(key).or_insert(value);
        }
        Ok(())
    }

    /// Flush the store to disk, creating the project directory if needed.
    pub fn save(&self) -> Result<(), Error> {
        std::fs::create_dir_all(&self.root)
            .map_err(|e| Error::fs("create directory", self.root.clone(), e))?;

        let yaml = serde_yaml::to_string(&self.values)?;
        let path = self.path();
        std::fs::write(&path, yaml).map_err(|e| Error::fs("write config", path, e))
    }

    /// Project directory the store is scoped to.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get() {
        let mut store = ConfigStore::scoped("/tmp/nowhere");
        store.set("project", "demo");

        assert_eq!(store.get("project"), Some("demo"));
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn save_creates_directory_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("demo");

        let mut store = ConfigStore::scoped(&root);
        store.set("project", "demo");
        store.save().unwrap();

        let raw = std::fs::read_to_string(root.join(CONFIG_FILE)).unwrap();
        assert!(raw.contains("project: demo"));
    }

    #[test]
    fn values_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = ConfigStore::scoped(dir.path());
        store.set("project", "demo");
        store.save().unwrap();

        let mut reloaded = ConfigStore::scoped(dir.path());
        reloaded.load().unwrap();
        assert_eq!(reloaded.get("project"), Some("demo"));
    }

    #[test]
    fn load_does_not_override_in_memory_values() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = ConfigStore::scoped(dir.path());
        store.set("project", "old-name");
        store.save().unwrap();

        let mut current = ConfigStore::scoped(dir.path());
        current.set("project", "new-name");
        current.load().unwrap();
        assert_eq!(current.get("project"), Some("new-name"));
    }

    #[test]
    fn load_without_file_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ConfigStore::scoped(dir.path());
        store.load().unwrap();
        assert_eq!(store.get("project"), None);
    }

    #[test]
    fn rescope_moves_the_store_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ConfigStore::scoped(dir.path());
        assert_eq!(store.path(), dir.path().join(CONFIG_FILE));

        let moved = dir.path().join("demo");
        store.rescope(&moved);
        assert_eq!(store.path(), moved.join(CONFIG_FILE));
        assert_eq!(store.root(), moved.as_path());
    }
}
