//! Configuration and data directory resolution

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::{CoachError, Result};
use crate::vehicle::VehicleVariant;

/// Environment variable that relocates all persisted state
pub const DATA_DIR_ENV: &str = "COACH_DATA_DIR";

pub const CONFIG_FILE: &str = "coach.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CoachConfig {
  /// Vehicle shown when nothing has been selected yet
  #[serde(default)]
  pub default_vehicle: VehicleVariant,
}

impl Default for CoachConfig {
  fn default() -> Self {
    Self { default_vehicle: VehicleVariant::default() }
  }
}

impl CoachConfig {
  pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
    let content = fs::read_to_string(path)?;
    let config: CoachConfig = serde_json::from_str(&content)?;
    Ok(config)
  }

  /// Load `coach.json` from the data directory.
  ///
  /// A missing file gives the defaults. A file that can't be read or parsed
  /// also gives the defaults, with a warning.
  pub fn load(data_dir: &Path) -> Self {
    let path = data_dir.join(CONFIG_FILE);
    match Self::load_from_file(&path) {
      Ok(config) => config,
      Err(CoachError::Io(e)) if e.kind() == io::ErrorKind::NotFound => Self::default(),
      Err(e) => {
        warn!("Ignoring unreadable config {}: {}", path.display(), e);
        Self::default()
      }
    }
  }
}

/// Where coach keeps its state (`$COACH_DATA_DIR`, else the platform data dir)
pub fn data_dir() -> Result<PathBuf> {
  if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
    if !custom.is_empty() {
      return Ok(PathBuf::from(custom));
    }
  }

  let base = dirs::data_dir().ok_or(CoachError::NoDataDir)?;
  Ok(base.join("coach"))
}
