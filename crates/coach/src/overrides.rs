//! The user's per-vehicle video overrides as an immutable value.
//!
//! Updates never mutate a record in place; they return a new record, which the
//! preference store then persists and swaps in.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::MediaMap;
use crate::vehicle::{Topic, VehicleVariant};

/// Sparse vehicle to (topic to URL) mapping.
///
/// A vehicle key only exists once something was written for it. A stored
/// empty string is an explicit "no video" and still counts as an override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverrideRecord {
  vehicles: BTreeMap<VehicleVariant, MediaMap>,
}

impl OverrideRecord {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn is_empty(&self) -> bool {
    self.vehicles.is_empty()
  }

  pub fn get(&self, vehicle: VehicleVariant, topic: Topic) -> Option<&str> {
    self.vehicles.get(&vehicle)?.get(&topic).map(String::as_str)
  }

  /// All overrides for one vehicle, if it has ever been edited
  pub fn vehicle(&self, vehicle: VehicleVariant) -> Option<&MediaMap> {
    self.vehicles.get(&vehicle)
  }

  /// A copy of this record with `url` written into one slot, keeping every
  /// other slot of that vehicle and every other vehicle as they were.
  #[must_use]
  pub fn with_override(&self, vehicle: VehicleVariant, topic: Topic, url: impl Into<String>) -> Self {
    let mut vehicles = self.vehicles.clone();
    let mut topics = vehicles.get(&vehicle).cloned().unwrap_or_default();
    topics.insert(topic, url.into());
    vehicles.insert(vehicle, topics);
    Self { vehicles }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_new_record_is_empty() {
    let record = OverrideRecord::new();
    assert!(record.is_empty());
    assert_eq!(record.get(VehicleVariant::Model3, Topic::Charging), None);
  }

  #[test]
  fn test_with_override_leaves_original_untouched() {
    let original = OverrideRecord::new();
    let updated = original.with_override(VehicleVariant::ModelY, Topic::Climate, "https://youtu.be/x");

    assert!(original.is_empty());
    assert_eq!(updated.get(VehicleVariant::ModelY, Topic::Climate), Some("https://youtu.be/x"));
  }

  #[test]
  fn test_writes_merge_per_vehicle() {
    let record = OverrideRecord::new()
      .with_override(VehicleVariant::ModelS, Topic::Drive, "a")
      .with_override(VehicleVariant::ModelS, Topic::Controls, "b")
      .with_override(VehicleVariant::ModelS, Topic::Drive, "c");

    assert_eq!(record.get(VehicleVariant::ModelS, Topic::Drive), Some("c"));
    assert_eq!(record.get(VehicleVariant::ModelS, Topic::Controls), Some("b"));
    assert_eq!(record.get(VehicleVariant::ModelS, Topic::Charging), None);
    assert_eq!(record.vehicle(VehicleVariant::ModelS).map(|m| m.len()), Some(2));
  }

  #[test]
  fn test_vehicles_are_isolated() {
    let record = OverrideRecord::new().with_override(VehicleVariant::ModelX, Topic::Autopilot, "");
    assert_eq!(record.get(VehicleVariant::ModelX, Topic::Autopilot), Some(""));
    assert!(record.vehicle(VehicleVariant::ModelS).is_none());
  }

  #[test]
  fn test_serialized_layout() {
    let record = OverrideRecord::new()
      .with_override(VehicleVariant::Cybertruck, Topic::PhoneKey, "https://vimeo.com/1")
      .with_override(VehicleVariant::Model3, Topic::QuickStart, "");

    let json = serde_json::to_string(&record).unwrap();
    assert_eq!(json, r#"{"3":{"quickstart":""},"CT":{"phonekey":"https://vimeo.com/1"}}"#);

    let parsed: OverrideRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, record);
  }

  #[test]
  fn test_unknown_keys_are_rejected() {
    assert!(serde_json::from_str::<OverrideRecord>(r#"{"Roadster":{"drive":"x"}}"#).is_err());
    assert!(serde_json::from_str::<OverrideRecord>(r#"{"3":{"parking":"x"}}"#).is_err());
    assert!(serde_json::from_str::<OverrideRecord>(r#"{"3":{"drive":42}}"#).is_err());
    assert!(serde_json::from_str::<OverrideRecord>(r#"["3"]"#).is_err());
  }
}
