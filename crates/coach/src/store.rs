//! Persisted user preferences: video overrides and the selected vehicle.
//!
//! Nothing in here surfaces an error to the caller. Unreadable state loads as
//! empty, and a failed write is logged while the in-memory value carries on
//! for the rest of the session.

use tracing::{debug, warn};

use crate::catalog;
use crate::kv::KeyValueStore;
use crate::overrides::OverrideRecord;
use crate::vehicle::{Topic, VehicleVariant};

/// Storage key holding the override record
pub const OVERRIDES_KEY: &str = "teslaHelper.videos";

/// Storage key holding the selected vehicle code
pub const VEHICLE_KEY: &str = "teslaHelper.vehicle";

pub struct PreferenceStore<S: KeyValueStore> {
  backend: S,
  record: OverrideRecord,
  vehicle: VehicleVariant,
}

impl<S: KeyValueStore> PreferenceStore<S> {
  /// Open the store with Model 3 as the fallback vehicle
  pub fn open(backend: S) -> Self {
    Self::open_with_default(backend, VehicleVariant::default())
  }

  /// Open the store, using `fallback` when no valid vehicle was saved
  pub fn open_with_default(backend: S, fallback: VehicleVariant) -> Self {
    let record = load_record(&backend);
    let vehicle = load_vehicle(&backend).unwrap_or(fallback);
    Self { backend, record, vehicle }
  }

  /// Re-read the override record from storage
  pub fn load(&self) -> OverrideRecord {
    load_record(&self.backend)
  }

  pub fn record(&self) -> &OverrideRecord {
    &self.record
  }

  pub fn get_override(&self, vehicle: VehicleVariant, topic: Topic) -> Option<String> {
    self.record.get(vehicle, topic).map(str::to_string)
  }

  pub fn set_override(&mut self, vehicle: VehicleVariant, topic: Topic, url: &str) {
    let next = self.record.with_override(vehicle, topic, url);
    debug!(vehicle = vehicle.code(), topic = topic.code(), url, "saving override");
    self.commit(next);
  }

  /// Pin the catalog default into the slot. The slot stays materialized.
  pub fn reset_override(&mut self, vehicle: VehicleVariant, topic: Topic) {
    let default = catalog::default_url(vehicle, topic);
    let next = self.record.with_override(vehicle, topic, default);
    debug!(vehicle = vehicle.code(), topic = topic.code(), "resetting override to catalog default");
    self.commit(next);
  }

  pub fn selected_vehicle(&self) -> VehicleVariant {
    self.vehicle
  }

  pub fn select_vehicle(&mut self, vehicle: VehicleVariant) {
    self.vehicle = vehicle;
    match serde_json::to_string(&vehicle) {
      Ok(json) => {
        if let Err(e) = self.backend.set(VEHICLE_KEY, &json) {
          warn!("Could not persist selected vehicle, keeping it for this session: {}", e);
        }
      }
      Err(e) => warn!("Could not serialize selected vehicle: {}", e),
    }
  }

  /// Persist the whole record, then make it the current one
  fn commit(&mut self, next: OverrideRecord) {
    match serde_json::to_string(&next) {
      Ok(json) => {
        if let Err(e) = self.backend.set(OVERRIDES_KEY, &json) {
          warn!("Could not persist video overrides, keeping them for this session: {}", e);
        }
      }
      Err(e) => warn!("Could not serialize video overrides: {}", e),
    }
    self.record = next;
  }
}

fn load_record<S: KeyValueStore>(backend: &S) -> OverrideRecord {
  let text = match backend.get(OVERRIDES_KEY) {
    Ok(Some(text)) => text,
    Ok(None) => return OverrideRecord::new(),
    Err(e) => {
      warn!("Could not read video overrides, starting empty: {}", e);
      return OverrideRecord::new();
    }
  };

  match serde_json::from_str(&text) {
    Ok(record) => record,
    Err(e) => {
      warn!("Discarding malformed video overrides: {}", e);
      OverrideRecord::new()
    }
  }
}

fn load_vehicle<S: KeyValueStore>(backend: &S) -> Option<VehicleVariant> {
  let text = match backend.get(VEHICLE_KEY) {
    Ok(text) => text?,
    Err(e) => {
      warn!("Could not read selected vehicle: {}", e);
      return None;
    }
  };

  match serde_json::from_str(&text) {
    Ok(vehicle) => Some(vehicle),
    Err(e) => {
      warn!("Discarding malformed vehicle selection: {}", e);
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::kv::MemoryStore;

  #[test]
  fn test_fresh_store_is_empty() {
    let store = PreferenceStore::open(MemoryStore::new());
    assert!(store.record().is_empty());
    assert_eq!(store.selected_vehicle(), VehicleVariant::Model3);
    assert_eq!(store.get_override(VehicleVariant::Model3, Topic::QuickStart), None);
  }

  #[test]
  fn test_set_override_persists_whole_record() {
    let backend = MemoryStore::new();
    let mut store = PreferenceStore::open(&backend);

    store.set_override(VehicleVariant::ModelY, Topic::Charging, "https://youtu.be/abc");
    store.set_override(VehicleVariant::ModelY, Topic::Climate, "");

    let raw = backend.raw(OVERRIDES_KEY).unwrap();
    assert_eq!(raw, r#"{"Y":{"charging":"https://youtu.be/abc","climate":""}}"#);
    assert_eq!(store.load(), *store.record());
  }

  #[test]
  fn test_override_is_per_topic() {
    let mut store = PreferenceStore::open(MemoryStore::new());
    store.set_override(VehicleVariant::ModelS, Topic::Drive, "https://vimeo.com/1");
    assert_eq!(store.get_override(VehicleVariant::ModelS, Topic::Controls), None);
    assert_eq!(
      store.get_override(VehicleVariant::ModelS, Topic::Drive).as_deref(),
      Some("https://vimeo.com/1")
    );
  }

  #[test]
  fn test_reset_materializes_default() {
    let mut store = PreferenceStore::open(MemoryStore::new());
    store.set_override(VehicleVariant::ModelX, Topic::Drive, "https://youtu.be/zzz");
    store.reset_override(VehicleVariant::ModelX, Topic::Drive);

    assert_eq!(
      store.get_override(VehicleVariant::ModelX, Topic::Drive),
      Some(catalog::default_url(VehicleVariant::ModelX, Topic::Drive))
    );
  }

  #[test]
  fn test_reset_without_prior_override_creates_slot() {
    let mut store = PreferenceStore::open(MemoryStore::new());
    store.reset_override(VehicleVariant::Cybertruck, Topic::PhoneKey);
    assert!(store.record().vehicle(VehicleVariant::Cybertruck).is_some());
  }

  #[test]
  fn test_malformed_record_loads_empty() {
    for bad in ["not json", "[1,2]", r#"{"Z":{}}"#, r#"{"3":{"drive":null}}"#, ""] {
      let store = PreferenceStore::open(MemoryStore::with_entry(OVERRIDES_KEY, bad));
      assert!(store.record().is_empty(), "expected empty record for {bad:?}");
    }
  }

  #[test]
  fn test_failed_write_keeps_session_state() {
    let backend = MemoryStore::with_entry(OVERRIDES_KEY, r#"{"3":{"drive":"old"}}"#);
    backend.set_fail_writes(true);
    let mut store = PreferenceStore::open(&backend);

    store.set_override(VehicleVariant::Model3, Topic::Drive, "new");
    store.select_vehicle(VehicleVariant::ModelS);

    assert_eq!(store.get_override(VehicleVariant::Model3, Topic::Drive).as_deref(), Some("new"));
    assert_eq!(store.selected_vehicle(), VehicleVariant::ModelS);
    assert_eq!(backend.raw(OVERRIDES_KEY).as_deref(), Some(r#"{"3":{"drive":"old"}}"#));
    assert_eq!(backend.raw(VEHICLE_KEY), None);
  }

  #[test]
  fn test_vehicle_selection_round_trip() {
    let backend = MemoryStore::new();
    {
      let mut store = PreferenceStore::open(&backend);
      store.select_vehicle(VehicleVariant::Cybertruck);
    }
    assert_eq!(backend.raw(VEHICLE_KEY).as_deref(), Some("\"CT\""));

    let reopened = PreferenceStore::open(&backend);
    assert_eq!(reopened.selected_vehicle(), VehicleVariant::Cybertruck);
  }

  #[test]
  fn test_invalid_vehicle_uses_fallback() {
    let backend = MemoryStore::with_entry(VEHICLE_KEY, "\"Roadster\"");
    let store = PreferenceStore::open_with_default(&backend, VehicleVariant::ModelY);
    assert_eq!(store.selected_vehicle(), VehicleVariant::ModelY);
  }
}
