//! Contract the controller needs from the playback service.

use serde::{Deserialize, Serialize};

use crate::clip::PreparedClip;
use crate::ids::{ParamId, StateId};
use crate::params::ParamValue;

/// Blending layer in the playback service. Exactly two are used; their
/// indices are stable.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Layer {
    #[default]
    Default,
    Combat,
}

impl Layer {
    pub const fn index(self) -> usize {
        match self {
            Layer::Default => 0,
            Layer::Combat => 1,
        }
    }
}

/// Playback service consumed by the controller. Hosts adapt their engine's
/// animator behind this trait; tests substitute a recording double.
pub trait Animator {
    /// Timed blend to `state` on `layer`. A new cross-fade supersedes any
    /// in-flight blend on the same layer; substitutes must preserve that.
    fn cross_fade(&mut self, state: StateId, duration: f32, layer: Layer);

    fn set_parameter(&mut self, param: ParamId, value: ParamValue);

    fn set_layer_weight(&mut self, layer: Layer, weight: f32);

    fn layer_weight(&self, layer: Layer) -> f32;

    /// Bind `clip` to `slot`. The binding must be visible no later than the
    /// slot's next evaluation; no buffering is permitted.
    fn bind_slot_clip(&mut self, slot: &str, clip: PreparedClip);
}
