//! Resolution of what the presentation layer should actually play.
//!
//! An override wins whenever the vehicle has one for the topic, even an empty
//! one; otherwise the catalog default applies. Playlists always come from the
//! catalog.

use serde::Serialize;
use tracing::debug;

use crate::catalog::{self, PlaylistEntry};
use crate::error::{CoachError, Result};
use crate::kv::KeyValueStore;
use crate::normalize::{self, MediaKind};
use crate::store::PreferenceStore;
use crate::vehicle::{Topic, VehicleVariant};

/// A resolved video ready for a player
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaView {
  pub kind: MediaKind,
  /// File URL for direct media, normalized embed URL otherwise
  pub src: String,
}

pub struct ResolutionService<S: KeyValueStore> {
  store: PreferenceStore<S>,
}

impl<S: KeyValueStore> ResolutionService<S> {
  pub fn new(store: PreferenceStore<S>) -> Self {
    Self { store }
  }

  pub fn store(&self) -> &PreferenceStore<S> {
    &self.store
  }

  /// The stored value with override precedence applied, as the user typed it
  pub fn stored_media(&self, vehicle: VehicleVariant, topic: Topic) -> String {
    self
      .store
      .get_override(vehicle, topic)
      .unwrap_or_else(|| catalog::default_url(vehicle, topic))
  }

  /// The URL to play for a (vehicle, topic) pair, in embeddable form
  pub fn effective_media(&self, vehicle: VehicleVariant, topic: Topic) -> String {
    let url = normalize::normalize(&self.stored_media(vehicle, topic));
    debug!(vehicle = vehicle.code(), topic = topic.code(), url = %url, "resolved media");
    url
  }

  pub fn effective_playlist(&self, vehicle: VehicleVariant, topic: Topic) -> Vec<PlaylistEntry> {
    catalog::playlist_for(vehicle, topic)
  }

  pub fn render_kind(&self, url: &str) -> MediaKind {
    normalize::classify(url)
  }

  /// What to show for a pair, or `None` when the user chose "no video"
  pub fn media_view(&self, vehicle: VehicleVariant, topic: Topic) -> Option<MediaView> {
    let raw = self.stored_media(vehicle, topic);
    if raw.is_empty() {
      return None;
    }

    let view = match self.render_kind(&raw) {
      MediaKind::DirectMedia => MediaView { kind: MediaKind::DirectMedia, src: raw },
      MediaKind::Embed => MediaView { kind: MediaKind::Embed, src: normalize::normalize(&raw) },
    };
    Some(view)
  }

  pub fn set_override(&mut self, vehicle: VehicleVariant, topic: Topic, url: &str) {
    self.store.set_override(vehicle, topic, url);
  }

  pub fn reset_override(&mut self, vehicle: VehicleVariant, topic: Topic) {
    self.store.reset_override(vehicle, topic);
  }

  /// Make one of the recommended playlist entries the topic's video.
  ///
  /// `index` is zero-based in recommendation order.
  pub fn pick_playlist_entry(
    &mut self,
    vehicle: VehicleVariant,
    topic: Topic,
    index: usize,
  ) -> Result<PlaylistEntry> {
    let playlist = self.effective_playlist(vehicle, topic);
    let len = playlist.len();
    let entry = playlist
      .into_iter()
      .nth(index)
      .ok_or_else(|| CoachError::playlist_index(topic.code(), index, len))?;

    self.store.set_override(vehicle, topic, &entry.url);
    Ok(entry)
  }

  pub fn selected_vehicle(&self) -> VehicleVariant {
    self.store.selected_vehicle()
  }

  pub fn select_vehicle(&mut self, vehicle: VehicleVariant) {
    self.store.select_vehicle(vehicle);
  }
}
