//! In-memory clip bundles and weapon animation reference data.
//!
//! These are read-only inputs supplied by the host application. A
//! [`WeaponAnimConfig`] outlives any single equip cycle; the controller only
//! borrows it while diverging the active override table.

use serde::{Deserialize, Serialize};

use crate::clip::Clip;
use crate::error::ControllerError;

/// Ordered (slot, clip) override pairs exported by an animator bundle asset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClipBundle {
    pub overrides: Vec<(String, Clip)>,
}

impl ClipBundle {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Clip)> {
        self.overrides.iter().map(|(slot, clip)| (slot.as_str(), clip))
    }
}

/// How a gameplay-triggered clip should be bound and tagged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    pub slot: String,
    pub clip: Clip,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Weapon-class animation reference data: raw bundle overrides plus ordered
/// per-slot configs. Configs take precedence over raw pairs for the same
/// slot during equip.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WeaponAnimConfig {
    pub bundle: ClipBundle,
    #[serde(default)]
    pub slot_configs: Vec<AnimationConfig>,
}

impl WeaponAnimConfig {
    /// Parse a config serialized as JSON by host tooling.
    pub fn from_json(text: &str) -> Result<Self, ControllerError> {
        serde_json::from_str(text).map_err(|e| ControllerError::InvalidConfig(e.to_string()))
    }
}
