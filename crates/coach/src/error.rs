use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoachError {
  #[error("Unknown vehicle '{code}' (expected one of 3, Y, S, X, CT)")]
  UnknownVehicle { code: String },

  #[error("Unknown topic '{code}'")]
  UnknownTopic { code: String },

  #[error("Playlist for {topic} has {len} entries, no entry at position {index}")]
  PlaylistIndex { topic: String, index: usize, len: usize },

  #[error("Could not determine a data directory for coach")]
  NoDataDir,

  #[error("Storage I/O failed: {0}")]
  Io(#[from] std::io::Error),

  #[error("Stored data is not valid JSON: {0}")]
  Json(#[from] serde_json::Error),
}

impl CoachError {
  pub fn unknown_vehicle(code: impl Into<String>) -> Self {
    Self::UnknownVehicle { code: code.into() }
  }

  pub fn unknown_topic(code: impl Into<String>) -> Self {
    Self::UnknownTopic { code: code.into() }
  }

  pub fn playlist_index(topic: impl Into<String>, index: usize, len: usize) -> Self {
    Self::PlaylistIndex { topic: topic.into(), index, len }
  }
}

pub type Result<T> = std::result::Result<T, CoachError>;
