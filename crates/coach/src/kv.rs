//! Key-value persistence substrate underneath the preference store.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::Result;

/// Minimal string key-value storage
pub trait KeyValueStore {
  /// Read the raw text stored under `key`, if any
  fn get(&self, key: &str) -> Result<Option<String>>;

  /// Replace whatever is stored under `key`
  fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Stores each key as `<key>.json` inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
  dir: PathBuf,
}

impl FileStore {
  pub fn new(dir: impl Into<PathBuf>) -> Self {
    Self { dir: dir.into() }
  }

  pub fn path_for(&self, key: &str) -> PathBuf {
    self.dir.join(format!("{key}.json"))
  }
}

impl KeyValueStore for FileStore {
  fn get(&self, key: &str) -> Result<Option<String>> {
    match fs::read_to_string(self.path_for(key)) {
      Ok(content) => Ok(Some(content)),
      Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
      Err(e) => Err(e.into()),
    }
  }

  fn set(&self, key: &str, value: &str) -> Result<()> {
    fs::create_dir_all(&self.dir)?;
    fs::write(self.path_for(key), value)?;
    Ok(())
  }
}

/// In-process storage, mostly for tests.
///
/// Writes can be switched off to simulate a full or read-only device.
#[derive(Debug, Default)]
pub struct MemoryStore {
  entries: RefCell<HashMap<String, String>>,
  fail_writes: Cell<bool>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_entry(key: &str, value: &str) -> Self {
    let store = Self::new();
    store.entries.borrow_mut().insert(key.to_string(), value.to_string());
    store
  }

  pub fn set_fail_writes(&self, fail: bool) {
    self.fail_writes.set(fail);
  }

  /// Raw stored text, bypassing the trait
  pub fn raw(&self, key: &str) -> Option<String> {
    self.entries.borrow().get(key).cloned()
  }
}

impl KeyValueStore for MemoryStore {
  fn get(&self, key: &str) -> Result<Option<String>> {
    Ok(self.entries.borrow().get(key).cloned())
  }

  fn set(&self, key: &str, value: &str) -> Result<()> {
    if self.fail_writes.get() {
      return Err(io::Error::new(io::ErrorKind::PermissionDenied, "writes disabled").into());
    }
    self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    Ok(())
  }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
  fn get(&self, key: &str) -> Result<Option<String>> {
    (**self).get(key)
  }

  fn set(&self, key: &str, value: &str) -> Result<()> {
    (**self).set(key, value)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::TempDir;

  #[test]
  fn test_file_store_missing_key() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path());
    assert_eq!(store.get("absent").unwrap(), None);
  }

  #[test]
  fn test_file_store_creates_directory_on_write() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("nested").join("coach");
    let store = FileStore::new(&dir);

    store.set("teslaHelper.vehicle", "\"S\"").unwrap();

    assert!(dir.join("teslaHelper.vehicle.json").exists());
    assert_eq!(store.get("teslaHelper.vehicle").unwrap().as_deref(), Some("\"S\""));
  }

  #[test]
  fn test_file_store_overwrites() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path());
    store.set("k", "one").unwrap();
    store.set("k", "two").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));
  }

  #[test]
  fn test_memory_store_failing_writes() {
    let store = MemoryStore::with_entry("k", "kept");
    store.set_fail_writes(true);
    assert!(store.set("k", "lost").is_err());
    assert_eq!(store.raw("k").as_deref(), Some("kept"));
  }
}
