//! Built-in default videos and recommended playlists for each vehicle.
//!
//! Everything here is computed from constant tables on every call and never
//! mutated. The base table is tuned for Model 3 / Model Y; other variants
//! derive from it by substituting the entries that differ.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::vehicle::{Topic, VehicleVariant};

const ASSET_BASE: &str = "https://digitalassets.tesla.com/tesla-contents/video/upload/f_auto,q_auto:best/";

/// Topic to URL map for one vehicle
pub type MediaMap = BTreeMap<Topic, String>;

/// Topic to ordered recommendation list for one vehicle
pub type PlaylistMap = BTreeMap<Topic, Vec<PlaylistEntry>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistEntry {
  pub title: String,
  pub url: String,
}

impl PlaylistEntry {
  fn new(title: &str, url: impl Into<String>) -> Self {
    Self { title: title.to_string(), url: url.into() }
  }
}

fn asset(file: &str) -> String {
  format!("{ASSET_BASE}{file}")
}

/// Asset file for a topic in the Model 3 / Model Y base table
fn base_asset(topic: Topic) -> &'static str {
  match topic {
    Topic::QuickStart => "Essentials_MYT.mp4",
    Topic::Drive => "Physical-Controls_3Y_MYT_Video.mp4",
    Topic::Controls => "Touchscreen_3Y_MYT_Video.mp4",
    Topic::Charging => "Charging_3Y_MYT_Video.mp4",
    Topic::Autopilot => "Autopilot_3Y_MYT_Video.mp4",
    Topic::PhoneKey => "Tesla-App-Vehicle-Controls_All_Video.mp4",
    Topic::Climate => "Touchscreen_3Y_MYT_Video.mp4",
    Topic::Delivery => "Essentials_MYT.mp4",
  }
}

/// Asset file for a (vehicle, topic) slot after variant substitutions
fn asset_for(vehicle: VehicleVariant, topic: Topic) -> &'static str {
  match (vehicle, topic) {
    (VehicleVariant::ModelS | VehicleVariant::ModelX, Topic::Drive) => {
      "Physical-Controls_SX_MYT_Video.mp4"
    }
    (VehicleVariant::ModelS | VehicleVariant::ModelX, Topic::Controls) => {
      "Touchscreen_SX_MYT_Video.mp4"
    }
    // No dedicated Cybertruck assets are published yet, so it keeps the
    // base table including the 3/Y physical controls video for driving.
    _ => base_asset(topic),
  }
}

/// Default video URL for a single (vehicle, topic) slot
pub fn default_url(vehicle: VehicleVariant, topic: Topic) -> String {
  asset(asset_for(vehicle, topic))
}

/// Default video for every topic of a vehicle
pub fn default_media(vehicle: VehicleVariant) -> MediaMap {
  Topic::ALL.into_iter().map(|topic| (topic, default_url(vehicle, topic))).collect()
}

/// Title of the first playlist entry, which always carries the default video
fn lead_title(topic: Topic) -> &'static str {
  match topic {
    Topic::QuickStart => "Essentials / First Drive",
    Topic::Drive => "Physical Controls",
    Topic::Controls => "Touchscreen Overview",
    Topic::Charging => "Charging Basics",
    Topic::Autopilot => "Autopilot Basics",
    Topic::PhoneKey => "Tesla App Vehicle Controls",
    Topic::Climate => "Climate on Touchscreen",
    Topic::Delivery => "Essentials / First Drive",
  }
}

/// Curated follow-up videos recommended after the default
fn supplementary(topic: Topic) -> Vec<PlaylistEntry> {
  let (title, file) = match topic {
    Topic::QuickStart => ("Driver Profiles", "Driver-Profiles_3Y_MYT_Video.mp4"),
    Topic::Drive => ("Wipers", "Wipers_3Y_MYT_Video.mp4"),
    Topic::Controls => ("Customize Controls", "Customize-Controls_3Y_MYT_Video.mp4"),
    Topic::Charging => ("Trip Planner", "Trip-Planner_3Y_MYT_Video.mp4"),
    Topic::Autopilot => ("Navigate on Autopilot", "Navigate-on-Autopilot_3Y_MYT_Video.mp4"),
    Topic::PhoneKey => ("Phone Key Setup", "Phone-Key_3Y_MYT_Video.mp4"),
    Topic::Climate => ("Cabin Overheat", "Cabin-Overheat_3Y_MYT_Video.mp4"),
    Topic::Delivery => ("Keys & Cards", "Keys_3Y_MYT_Video.mp4"),
  };
  vec![PlaylistEntry::new(title, asset(file))]
}

/// Recommended playlist for a single (vehicle, topic) slot
pub fn playlist_for(vehicle: VehicleVariant, topic: Topic) -> Vec<PlaylistEntry> {
  let mut entries = vec![PlaylistEntry::new(lead_title(topic), default_url(vehicle, topic))];
  entries.extend(supplementary(topic));
  entries
}

/// Recommended playlists for every topic of a vehicle
pub fn default_playlist(vehicle: VehicleVariant) -> PlaylistMap {
  Topic::ALL.into_iter().map(|topic| (topic, playlist_for(vehicle, topic))).collect()
}
