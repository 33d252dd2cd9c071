//! Controller tuning constants supplied by the host application.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Cross-fade duration into the Equip state (Default -> Combat).
    pub equip_transition: f32,
    /// Cross-fade duration into the Unequip state (Combat -> Default).
    pub unequip_transition: f32,
    /// Cross-fade duration for the fall/land state family.
    pub fall_transition: f32,
    /// Short fixed blend for jump/attack/block requests.
    pub action_transition: f32,
    /// Chase rate of the combat layer weight, per second.
    pub combat_layer_speed: f32,
    /// Weapon override clips at or below this length are treated as
    /// placeholder stubs and skipped during equip.
    pub min_override_clip_len: f32,
    /// Speeds above this count as moving for the jump policy.
    pub idle_speed_threshold: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            equip_transition: 0.1,
            unequip_transition: 0.1,
            fall_transition: 0.1,
            action_transition: 0.1,
            combat_layer_speed: 10.0,
            min_override_clip_len: 1.0,
            idle_speed_threshold: 0.01,
        }
    }
}
