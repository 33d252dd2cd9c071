//! The avatar animation controller: maps discrete gameplay signals onto a
//! layered animation graph, manages slot-clip substitution, and derives
//! busy-state flags from clip lifecycle events.
//!
//! Frame protocol: `update` (simulate phase) runs before gameplay reads
//! status, `late_update` (late phase) runs after all state mutation for the
//! frame. Lifecycle events are routed through `handle_event` synchronously
//! within the frame step.

use std::sync::Arc;

use log::{debug, trace};

use crate::animator::{Animator, Layer};
use crate::bundle::{AnimationConfig, ClipBundle, WeaponAnimConfig};
use crate::clip::{Clip, PreparedClip};
use crate::config::ControllerConfig;
use crate::error::ControllerError;
use crate::events::{LifecycleEvent, TagKind};
use crate::ids::{ParamId, StateId};
use crate::layers::LayerWeightBlender;
use crate::overrides::{OverrideTable, SlotBinding};
use crate::params::{self, ParamValue};
use crate::slots;
use crate::states::{self, StateSetSelector};
use crate::status::{ActionOutcome, ControllerStatus};
use crate::velocity::VelocityProbe;

/// Per-avatar animation state driver, generic over the playback service so
/// hosts and tests supply their own [`Animator`].
pub struct AvatarAnimationController<A: Animator> {
    config: ControllerConfig,
    base_bundle: ClipBundle,
    weapon: Option<Arc<WeaponAnimConfig>>,

    animator: Option<A>,
    base_table: OverrideTable,
    active_table: OverrideTable,

    selector: StateSetSelector,
    status: ControllerStatus,
    active_layer: Layer,
    blender: LayerWeightBlender,
    probe: VelocityProbe,

    speed: f32,
    fall_distance: f32,
    is_running: bool,
    is_crouching: bool,
    is_jumping: bool,
    is_falling: bool,
    horizontal: f32,
    vertical: f32,
    turn: f32,
    attack_horizontal: i32,
    attack_vertical: i32,
}

impl<A: Animator> AvatarAnimationController<A> {
    /// Create a detached controller. `base_bundle` is the locomotion
    /// override set the active table starts from and reverts to.
    pub fn new(config: ControllerConfig, base_bundle: ClipBundle) -> Self {
        let blender = LayerWeightBlender::new(config.combat_layer_speed);
        Self {
            config,
            base_bundle,
            weapon: None,
            animator: None,
            base_table: OverrideTable::new(),
            active_table: OverrideTable::new(),
            selector: StateSetSelector::new(),
            status: ControllerStatus::default(),
            active_layer: Layer::Default,
            blender,
            probe: VelocityProbe::new(),
            speed: 0.0,
            fall_distance: 0.0,
            is_running: false,
            is_crouching: false,
            is_jumping: false,
            is_falling: false,
            horizontal: 0.0,
            vertical: 0.0,
            turn: 0.0,
            attack_horizontal: 0,
            attack_vertical: 0,
        }
    }

    // ---- lifecycle -------------------------------------------------------

    /// Attach the playback service. Rebuilds the base table from the base
    /// bundle, clones it into the active table, and pushes every binding so
    /// playback sees the locomotion set immediately.
    pub fn attach(&mut self, mut animator: A) -> Result<(), ControllerError> {
        if self.animator.is_some() {
            return Err(ControllerError::AlreadyAttached);
        }
        self.base_table = OverrideTable::new();
        for (slot, clip) in self.base_bundle.iter() {
            self.base_table.set(SlotBinding {
                slot: slot.to_string(),
                clip: PreparedClip::raw(clip.clone()),
                config: None,
            });
        }
        self.active_table = self.base_table.clone();
        for binding in self.active_table.iter() {
            animator.bind_slot_clip(&binding.slot, binding.clip.clone());
        }
        self.probe.reset();
        self.animator = Some(animator);
        Ok(())
    }

    /// Release the playback service and return it. Readiness drops on every
    /// path; per-frame logic becomes a no-op until re-attached.
    pub fn detach(&mut self) -> Result<A, ControllerError> {
        self.probe.reset();
        self.animator.take().ok_or(ControllerError::NotAttached)
    }

    pub fn is_ready(&self) -> bool {
        self.animator.is_some()
    }

    pub fn animator(&self) -> Option<&A> {
        self.animator.as_ref()
    }

    /// Supply (or clear) the equipped weapon's reference data. Takes effect
    /// on the next `equip()`; attack/block are gated on its presence.
    pub fn set_weapon(&mut self, weapon: Option<Arc<WeaponAnimConfig>>) {
        self.weapon = weapon;
    }

    pub fn weapon(&self) -> Option<&Arc<WeaponAnimConfig>> {
        self.weapon.as_ref()
    }

    // ---- per-frame phases ------------------------------------------------

    /// Simulate phase. Skipped entirely while detached; the host retries
    /// `attach` best-effort until it succeeds.
    pub fn update(&mut self, dt: f32, position: [f32; 3]) {
        if !self.is_ready() {
            return;
        }
        self.probe.sample(position, dt);
        // Derived speed goes through the same write path as the public
        // setter; the Speed parameter has exactly one write site.
        let speed = self.probe.speed();
        self.set_speed(speed);
    }

    /// Late phase: chase the combat layer weight toward the active layer's
    /// target and write it, every frame, independent of discrete events.
    pub fn late_update(&mut self, dt: f32) {
        let target = if self.active_layer == Layer::Combat { 1.0 } else { 0.0 };
        let Some(animator) = self.animator.as_mut() else {
            return;
        };
        let weight = self.blender.step(dt, target);
        animator.set_layer_weight(Layer::Combat, weight);
    }

    /// Route a lifecycle callback from the playback service. Flag updates
    /// are plain assignments, so a same-frame Stopped(Attack) and
    /// Tagged(Recover) converge on `is_attacking == false` in either order.
    pub fn handle_event(&mut self, event: &LifecycleEvent) {
        match event {
            LifecycleEvent::Started { slot } => {
                if slot.contains(slots::SLOT_ATTACK) {
                    self.status.is_attacking = true;
                    debug!("started attacking ({slot})");
                } else if slot.contains(slots::SLOT_BLOCK) {
                    self.status.is_blocking = true;
                } else if slot.as_str() == slots::SLOT_USE {
                    self.status.is_using = true;
                }
            }
            LifecycleEvent::Stopped { slot } => {
                if slot.contains(slots::SLOT_ATTACK) {
                    self.status.is_attacking = false;
                    debug!("stopped attacking ({slot})");
                } else if slot.contains(slots::SLOT_BLOCK) {
                    self.status.is_blocking = false;
                } else if slot.as_str() == slots::SLOT_USE {
                    self.status.is_using = false;
                }
            }
            LifecycleEvent::Tagged { kind, slot, .. } => {
                if *kind == TagKind::Recover {
                    // Recovery cancels attack busy-state early, whichever
                    // slot raised the tag.
                    self.status.is_attacking = false;
                    debug!("stopped attacking ({slot} entered recovery)");
                }
            }
        }
    }

    // ---- status ----------------------------------------------------------

    pub fn status(&self) -> ControllerStatus {
        self.status
    }

    pub fn is_attacking(&self) -> bool {
        self.status.is_attacking
    }

    pub fn is_blocking(&self) -> bool {
        self.status.is_blocking
    }

    pub fn is_using(&self) -> bool {
        self.status.is_using
    }

    pub fn is_busy(&self) -> bool {
        self.status.is_busy()
    }

    pub fn active_layer(&self) -> Layer {
        self.active_layer
    }

    pub fn combat_layer_weight(&self) -> f32 {
        self.blender.weight()
    }

    pub fn base_table(&self) -> &OverrideTable {
        &self.base_table
    }

    pub fn active_table(&self) -> &OverrideTable {
        &self.active_table
    }

    // ---- mirrored properties ---------------------------------------------

    pub fn velocity(&self) -> [f32; 3] {
        self.probe.velocity()
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
        self.write_param(params::SPEED, ParamValue::Float(speed));
    }

    pub fn fall_distance(&self) -> f32 {
        self.fall_distance
    }

    pub fn set_fall_distance(&mut self, distance: f32) {
        self.fall_distance = distance;
        self.write_param(params::FALL_DISTANCE, ParamValue::Float(distance));
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    /// Also flips the selected walking/running state set.
    pub fn set_running(&mut self, running: bool) {
        self.is_running = running;
        self.selector.set_running(running);
        self.write_param(params::RUN, ParamValue::Bool(running));
    }

    pub fn is_crouching(&self) -> bool {
        self.is_crouching
    }

    pub fn set_crouching(&mut self, crouching: bool) {
        self.is_crouching = crouching;
        self.write_param(params::CROUCH, ParamValue::Bool(crouching));
    }

    pub fn is_jumping(&self) -> bool {
        self.is_jumping
    }

    pub fn set_jumping(&mut self, jumping: bool) {
        self.is_jumping = jumping;
        self.write_param(params::IS_JUMPING, ParamValue::Bool(jumping));
    }

    pub fn is_falling(&self) -> bool {
        self.is_falling
    }

    pub fn set_falling(&mut self, falling: bool) {
        self.is_falling = falling;
        self.write_param(params::IS_FALLING, ParamValue::Bool(falling));
    }

    pub fn horizontal(&self) -> f32 {
        self.horizontal
    }

    pub fn set_horizontal(&mut self, horizontal: f32) {
        self.horizontal = horizontal;
        self.write_param(params::HORIZONTAL, ParamValue::Float(horizontal));
    }

    pub fn vertical(&self) -> f32 {
        self.vertical
    }

    pub fn set_vertical(&mut self, vertical: f32) {
        self.vertical = vertical;
        self.write_param(params::VERTICAL, ParamValue::Float(vertical));
    }

    pub fn turn(&self) -> f32 {
        self.turn
    }

    pub fn set_turn(&mut self, turn: f32) {
        self.turn = turn;
        self.write_param(params::TURN, ParamValue::Float(turn));
    }

    pub fn attack_horizontal(&self) -> i32 {
        self.attack_horizontal
    }

    pub fn set_attack_horizontal(&mut self, direction: i32) {
        self.attack_horizontal = direction;
        self.write_param(params::COMBAT_DIR_HORIZONTAL, ParamValue::Int(direction));
    }

    pub fn attack_vertical(&self) -> i32 {
        self.attack_vertical
    }

    pub fn set_attack_vertical(&mut self, direction: i32) {
        self.attack_vertical = direction;
        self.write_param(params::COMBAT_DIR_VERTICAL, ParamValue::Int(direction));
    }

    // ---- actions ---------------------------------------------------------

    /// Jump on the current layer. With residual speed and no commitment to
    /// move, play the stationary idle jump; otherwise raise the jumping
    /// parameter and fade to the selected set's jump start.
    pub fn jump(&mut self, should_move: bool) -> ActionOutcome {
        if !self.is_ready() {
            return ActionOutcome::NotReady;
        }
        if self.speed > self.config.idle_speed_threshold && !should_move {
            self.fade(states::IDLE_JUMP, self.config.action_transition, self.active_layer);
        } else {
            self.set_jumping(true);
            let jump = self.selector.active().jump;
            self.fade(jump, self.config.action_transition, self.active_layer);
        }
        ActionOutcome::Performed
    }

    pub fn land_on_feet(&mut self, moving: bool) -> ActionOutcome {
        if !self.is_ready() {
            return ActionOutcome::NotReady;
        }
        let set = self.selector.active();
        let state = if moving { set.land_to_move } else { set.land_to_stop };
        self.fade(state, self.config.fall_transition, self.active_layer);
        ActionOutcome::Performed
    }

    pub fn land_hard(&mut self) -> ActionOutcome {
        if !self.is_ready() {
            return ActionOutcome::NotReady;
        }
        let state = self.selector.active().land_hard_stop;
        self.fade(state, self.config.fall_transition, self.active_layer);
        ActionOutcome::Performed
    }

    pub fn land_and_fall(&mut self) -> ActionOutcome {
        if !self.is_ready() {
            return ActionOutcome::NotReady;
        }
        let state = self.selector.active().land_fall;
        self.fade(state, self.config.fall_transition, self.active_layer);
        ActionOutcome::Performed
    }

    pub fn land_and_die(&mut self) -> ActionOutcome {
        if !self.is_ready() {
            return ActionOutcome::NotReady;
        }
        let state = self.selector.active().land_fall_dead;
        self.fade(state, self.config.fall_transition, self.active_layer);
        ActionOutcome::Performed
    }

    /// Full-body state; always on the default layer regardless of equip.
    pub fn start_controlled_fall(&mut self) -> ActionOutcome {
        if !self.is_ready() {
            return ActionOutcome::NotReady;
        }
        let state = self.selector.active().controlled_fall;
        self.fade(state, self.config.fall_transition, Layer::Default);
        ActionOutcome::Performed
    }

    /// Full-body state; always on the default layer regardless of equip.
    pub fn start_uncontrolled_fall(&mut self) -> ActionOutcome {
        if !self.is_ready() {
            return ActionOutcome::NotReady;
        }
        let state = self.selector.active().uncontrolled_fall;
        self.fade(state, self.config.fall_transition, Layer::Default);
        ActionOutcome::Performed
    }

    /// Toggle between the Default and Combat layers, swapping the active
    /// override table to match. The layer flips instantly; its weight is
    /// smoothed by `late_update` from the service's true current value.
    pub fn equip(&mut self) -> ActionOutcome {
        if !self.is_ready() {
            return ActionOutcome::NotReady;
        }
        if self.active_layer == Layer::Combat {
            // Unequip never consults the weapon config; it must succeed even
            // after the weapon was cleared mid-combat.
            self.active_layer = Layer::Default;
            self.fade(states::UNEQUIP, self.config.unequip_transition, Layer::Default);
            self.revert_overrides();
            trace!("unequip: active table reverted to base ({} slots)", self.active_table.len());
        } else {
            let Some(weapon) = self.weapon.clone() else {
                return ActionOutcome::NoWeapon;
            };
            self.active_layer = Layer::Combat;
            self.fade(states::EQUIP, self.config.equip_transition, Layer::Default);
            self.apply_weapon_overrides(&weapon);
            trace!("equip: active table diverged ({} slots)", self.active_table.len());
        }
        if let Some(animator) = self.animator.as_ref() {
            let current = animator.layer_weight(Layer::Combat);
            self.blender.sync(current);
        }
        ActionOutcome::Performed
    }

    pub fn strong_attack(&mut self) -> ActionOutcome {
        self.combat_action(states::ATTACK_STRONG)
    }

    pub fn weak_attack(&mut self) -> ActionOutcome {
        self.combat_action(states::ATTACK_WEAK)
    }

    pub fn block(&mut self) -> ActionOutcome {
        self.combat_action(states::BLOCK)
    }

    /// Rebind the reserved Use slot to `clip`. Playback of the slot is
    /// driven by the graph once the binding is live.
    pub fn use_clip(&mut self, clip: &Clip) -> ActionOutcome {
        if !self.is_ready() {
            return ActionOutcome::NotReady;
        }
        if self.status.is_busy() {
            return ActionOutcome::Busy;
        }
        let prepared = PreparedClip::prepare(slots::SLOT_USE, clip, &[]);
        self.bind_slot(SlotBinding {
            slot: slots::SLOT_USE.to_string(),
            clip: prepared,
            config: None,
        });
        ActionOutcome::Performed
    }

    /// Like [`use_clip`](Self::use_clip) but carries the config's tags into
    /// the prepared clip.
    pub fn use_config(&mut self, config: &AnimationConfig) -> ActionOutcome {
        if !self.is_ready() {
            return ActionOutcome::NotReady;
        }
        if self.status.is_busy() {
            return ActionOutcome::Busy;
        }
        let prepared = PreparedClip::prepare(slots::SLOT_USE, &config.clip, &config.tags);
        self.bind_slot(SlotBinding {
            slot: slots::SLOT_USE.to_string(),
            clip: prepared,
            config: Some(config.clone()),
        });
        ActionOutcome::Performed
    }

    /// Ungated rebind of `config.slot`; for callers that already validated
    /// busy-state (e.g. a different action slot).
    pub fn play_animation_config(&mut self, config: &AnimationConfig) -> ActionOutcome {
        if !self.is_ready() {
            return ActionOutcome::NotReady;
        }
        let prepared = PreparedClip::prepare(&config.slot, &config.clip, &config.tags);
        self.bind_slot(SlotBinding {
            slot: config.slot.clone(),
            clip: prepared,
            config: Some(config.clone()),
        });
        ActionOutcome::Performed
    }

    // ---- internals -------------------------------------------------------

    fn combat_action(&mut self, state: StateId) -> ActionOutcome {
        if !self.is_ready() {
            return ActionOutcome::NotReady;
        }
        if self.weapon.is_none() {
            return ActionOutcome::NoWeapon;
        }
        if self.status.is_busy() {
            return ActionOutcome::Busy;
        }
        // Full-body action, independent of the active layer.
        self.fade(state, self.config.action_transition, Layer::Default);
        ActionOutcome::Performed
    }

    fn fade(&mut self, state: StateId, duration: f32, layer: Layer) {
        if let Some(animator) = self.animator.as_mut() {
            animator.cross_fade(state, duration, layer);
        }
    }

    fn write_param(&mut self, param: ParamId, value: ParamValue) {
        if let Some(animator) = self.animator.as_mut() {
            animator.set_parameter(param, value);
        }
    }

    /// Write a binding to both the active table and the playback service;
    /// the table is live-bound, never snapshotted.
    fn bind_slot(&mut self, binding: SlotBinding) {
        if let Some(animator) = self.animator.as_mut() {
            animator.bind_slot_clip(&binding.slot, binding.clip.clone());
        }
        self.active_table.set(binding);
    }

    /// Diverge the active table for `weapon`: raw bundle pairs first (length
    /// filter applied), then per-slot configs, which win for the same slot.
    fn apply_weapon_overrides(&mut self, weapon: &WeaponAnimConfig) {
        for (slot, clip) in weapon.bundle.iter() {
            if clip.length <= self.config.min_override_clip_len {
                // Placeholder stub; leave the slot on its base binding.
                continue;
            }
            let prepared = PreparedClip::prepare(slot, clip, &[]);
            self.bind_slot(SlotBinding {
                slot: slot.to_string(),
                clip: prepared,
                config: None,
            });
        }
        for config in &weapon.slot_configs {
            let prepared = PreparedClip::prepare(&config.slot, &config.clip, &config.tags);
            self.bind_slot(SlotBinding {
                slot: config.slot.clone(),
                clip: prepared,
                config: Some(config.clone()),
            });
        }
    }

    fn revert_overrides(&mut self) {
        self.active_table.revert_to(&self.base_table);
        if let Some(animator) = self.animator.as_mut() {
            for binding in self.active_table.iter() {
                animator.bind_slot_clip(&binding.slot, binding.clip.clone());
            }
        }
    }
}
