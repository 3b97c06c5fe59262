//! Coach - per-vehicle guidance video resolution
//!
//! Holds the built-in video catalog for each vehicle variant, layers the
//! user's persisted overrides on top of it, and normalizes pasted links into
//! embeddable form for the presentation layer.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod kv;
pub mod normalize;
pub mod overrides;
pub mod resolve;
pub mod store;
pub mod vehicle;

use std::path::Path;

pub use catalog::{default_media, default_playlist, MediaMap, PlaylistEntry};
pub use config::CoachConfig;
pub use error::{CoachError, Result};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use normalize::{classify, normalize, MediaKind};
pub use overrides::OverrideRecord;
pub use resolve::{MediaView, ResolutionService};
pub use store::PreferenceStore;
pub use vehicle::{Topic, VehicleVariant};

/// Open the file-backed service rooted at `data_dir`, honoring `coach.json`
pub fn open(data_dir: &Path) -> ResolutionService<FileStore> {
  let config = CoachConfig::load(data_dir);
  let store = PreferenceStore::open_with_default(FileStore::new(data_dir), config.default_vehicle);
  ResolutionService::new(store)
}
