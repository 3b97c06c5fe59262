//! Closed vocabularies the whole engine is keyed by: vehicle variants and
//! guidance topics.
//!
//! Both enums persist as short string codes (`"3"`, `"CT"`, `"quickstart"`,
//! ...). Deserialization only accepts those exact codes so that unknown keys
//! are rejected at the storage boundary. Parsing user input through `FromStr`
//! is more forgiving and also accepts display-style aliases.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::CoachError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VehicleVariant {
  Model3,
  ModelY,
  ModelS,
  ModelX,
  Cybertruck,
}

impl VehicleVariant {
  pub const ALL: [VehicleVariant; 5] = [
    VehicleVariant::Model3,
    VehicleVariant::ModelY,
    VehicleVariant::ModelS,
    VehicleVariant::ModelX,
    VehicleVariant::Cybertruck,
  ];

  /// Persisted code for this variant
  pub fn code(self) -> &'static str {
    match self {
      VehicleVariant::Model3 => "3",
      VehicleVariant::ModelY => "Y",
      VehicleVariant::ModelS => "S",
      VehicleVariant::ModelX => "X",
      VehicleVariant::Cybertruck => "CT",
    }
  }

  pub fn display_name(self) -> &'static str {
    match self {
      VehicleVariant::Model3 => "Model 3",
      VehicleVariant::ModelY => "Model Y",
      VehicleVariant::ModelS => "Model S",
      VehicleVariant::ModelX => "Model X",
      VehicleVariant::Cybertruck => "Cybertruck",
    }
  }

  /// Strict lookup by persisted code
  pub fn from_code(code: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|vehicle| vehicle.code() == code)
  }

  /// Lookup that never fails: anything unrecognized resolves to Model 3,
  /// whose tables are the catalog's base.
  pub fn from_code_or_default(code: &str) -> Self {
    Self::from_code(code).unwrap_or_default()
  }

  /// Model 3 and Model Y shift and engage Autopilot with a drive stalk; the
  /// other variants use the touchscreen strip and yoke buttons.
  pub fn has_drive_stalk(self) -> bool {
    matches!(self, VehicleVariant::Model3 | VehicleVariant::ModelY)
  }
}

impl Default for VehicleVariant {
  fn default() -> Self {
    VehicleVariant::Model3
  }
}

impl fmt::Display for VehicleVariant {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.display_name())
  }
}

impl FromStr for VehicleVariant {
  type Err = CoachError;

  fn from_str(input: &str) -> Result<Self, Self::Err> {
    let normalized: String = input
      .trim()
      .chars()
      .filter(|c| !matches!(c, ' ' | '-' | '_'))
      .collect::<String>()
      .to_lowercase();

    let vehicle = match normalized.as_str() {
      "3" | "model3" | "m3" => VehicleVariant::Model3,
      "y" | "modely" | "my" => VehicleVariant::ModelY,
      "s" | "models" | "ms" => VehicleVariant::ModelS,
      "x" | "modelx" | "mx" => VehicleVariant::ModelX,
      "ct" | "cybertruck" => VehicleVariant::Cybertruck,
      _ => return Err(CoachError::unknown_vehicle(input.trim())),
    };
    Ok(vehicle)
  }
}

impl Serialize for VehicleVariant {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(self.code())
  }
}

impl<'de> Deserialize<'de> for VehicleVariant {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let code = String::deserialize(deserializer)?;
    Self::from_code(&code).ok_or_else(|| de::Error::custom(CoachError::unknown_vehicle(code)))
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Topic {
  QuickStart,
  Drive,
  Controls,
  Charging,
  Autopilot,
  PhoneKey,
  Climate,
  Delivery,
}

impl Topic {
  /// All topics in display order
  pub const ALL: [Topic; 8] = [
    Topic::QuickStart,
    Topic::Drive,
    Topic::Controls,
    Topic::Charging,
    Topic::Autopilot,
    Topic::PhoneKey,
    Topic::Climate,
    Topic::Delivery,
  ];

  pub fn code(self) -> &'static str {
    match self {
      Topic::QuickStart => "quickstart",
      Topic::Drive => "drive",
      Topic::Controls => "controls",
      Topic::Charging => "charging",
      Topic::Autopilot => "autopilot",
      Topic::PhoneKey => "phonekey",
      Topic::Climate => "climate",
      Topic::Delivery => "delivery",
    }
  }

  pub fn title(self) -> &'static str {
    match self {
      Topic::QuickStart => "Quick Start",
      Topic::Drive => "How to Drive",
      Topic::Controls => "Controls & Basics",
      Topic::Charging => "Charging",
      Topic::Autopilot => "Autopilot & Safety",
      Topic::PhoneKey => "Phone as Key / App",
      Topic::Climate => "Climate & Defrost",
      Topic::Delivery => "Delivery Checklist",
    }
  }

  pub fn from_code(code: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|topic| topic.code() == code)
  }
}

impl fmt::Display for Topic {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.code())
  }
}

impl FromStr for Topic {
  type Err = CoachError;

  fn from_str(input: &str) -> Result<Self, Self::Err> {
    let normalized: String = input
      .trim()
      .chars()
      .filter(|c| !matches!(c, ' ' | '-' | '_'))
      .collect::<String>()
      .to_lowercase();

    // Accept the codes plus the spellings used in section titles
    let topic = match normalized.as_str() {
      "quickstart" => Topic::QuickStart,
      "drive" | "driving" => Topic::Drive,
      "controls" => Topic::Controls,
      "charging" => Topic::Charging,
      "autopilot" => Topic::Autopilot,
      "phonekey" => Topic::PhoneKey,
      "climate" => Topic::Climate,
      "delivery" | "deliverychecklist" => Topic::Delivery,
      _ => return Err(CoachError::unknown_topic(input.trim())),
    };
    Ok(topic)
  }
}

impl Serialize for Topic {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(self.code())
  }
}

impl<'de> Deserialize<'de> for Topic {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let code = String::deserialize(deserializer)?;
    Self::from_code(&code).ok_or_else(|| de::Error::custom(CoachError::unknown_topic(code)))
  }
}
