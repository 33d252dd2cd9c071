//! Shared test collaborators for avatar-anim-core: a recording playback
//! service plus clip/bundle/weapon builders.

use std::collections::HashMap;

use avatar_anim_core::{
    AnimationConfig, Animator, Clip, ClipBundle, Layer, ParamId, ParamValue, PreparedClip,
    StateId, WeaponAnimConfig,
};

/// One recorded cross-fade request.
#[derive(Clone, Debug, PartialEq)]
pub struct FadeCall {
    pub state: StateId,
    pub duration: f32,
    pub layer: Layer,
}

/// Animator double that records every call so tests can assert on exact side
/// effects, or on their absence for gated requests.
#[derive(Debug, Default)]
pub struct RecordingAnimator {
    pub fades: Vec<FadeCall>,
    pub params: Vec<(ParamId, ParamValue)>,
    pub binds: Vec<(String, PreparedClip)>,
    pub layer_weights: HashMap<usize, f32>,
}

impl RecordingAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_fade(&self) -> Option<&FadeCall> {
        self.fades.last()
    }

    pub fn last_param(&self, param: ParamId) -> Option<ParamValue> {
        self.params
            .iter()
            .rev()
            .find(|(p, _)| *p == param)
            .map(|(_, v)| *v)
    }

    pub fn last_bind(&self, slot: &str) -> Option<&PreparedClip> {
        self.binds
            .iter()
            .rev()
            .find(|(s, _)| s == slot)
            .map(|(_, c)| c)
    }

    /// Count of calls that would be visible to a player: cross-fades and
    /// slot binds. Parameter mirroring is excluded.
    pub fn side_effects(&self) -> usize {
        self.fades.len() + self.binds.len()
    }
}

impl Animator for RecordingAnimator {
    fn cross_fade(&mut self, state: StateId, duration: f32, layer: Layer) {
        self.fades.push(FadeCall {
            state,
            duration,
            layer,
        });
    }

    fn set_parameter(&mut self, param: ParamId, value: ParamValue) {
        self.params.push((param, value));
    }

    fn set_layer_weight(&mut self, layer: Layer, weight: f32) {
        self.layer_weights.insert(layer.index(), weight);
    }

    fn layer_weight(&self, layer: Layer) -> f32 {
        self.layer_weights
            .get(&layer.index())
            .copied()
            .unwrap_or(0.0)
    }

    fn bind_slot_clip(&mut self, slot: &str, clip: PreparedClip) {
        self.binds.push((slot.to_string(), clip));
    }
}

/// Clip of `length` seconds.
pub fn clip(name: &str, length: f32) -> Clip {
    Clip::new(name, length)
}

/// Base locomotion bundle with a handful of standard slots.
pub fn locomotion_bundle() -> ClipBundle {
    ClipBundle {
        overrides: vec![
            ("Idle".to_string(), clip("idle_loop", 2.0)),
            ("Walk".to_string(), clip("walk_loop", 1.4)),
            ("Run".to_string(), clip("run_loop", 1.1)),
            ("Attack".to_string(), clip("unarmed_attack", 1.2)),
        ],
    }
}

/// Sword weapon config: raw bundle overrides (one placeholder below the
/// default length threshold) plus a tagged per-slot config.
pub fn sword_config() -> WeaponAnimConfig {
    WeaponAnimConfig {
        bundle: ClipBundle {
            overrides: vec![
                ("Attack".to_string(), clip("sword_attack", 1.6)),
                ("Block".to_string(), clip("sword_block", 1.3)),
                ("Sheathe".to_string(), clip("sheathe_placeholder", 0.2)),
            ],
        },
        slot_configs: vec![AnimationConfig {
            slot: "Attack_Strong".to_string(),
            clip: clip("sword_attack_strong", 2.2),
            tags: vec!["recover".to_string()],
        }],
    }
}
