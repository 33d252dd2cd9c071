//! Named animator states and the walking/running state-set selector.

use crate::ids::StateId;

/// Stationary jump used when the avatar is carrying speed but the caller did
/// not commit to a moving jump.
pub const IDLE_JUMP: StateId = StateId::from_name("Idle Jump");
pub const EQUIP: StateId = StateId::from_name("Equip");
pub const UNEQUIP: StateId = StateId::from_name("Unequip");
pub const ATTACK_STRONG: StateId = StateId::from_name("Strong Attacks");
pub const ATTACK_WEAK: StateId = StateId::from_name("Weak Attacks");
pub const BLOCK: StateId = StateId::from_name("Blocks");

/// Immutable bundle of locomotion-family state ids derived from a prefix
/// ("Walking"/"Running") at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimStateSet {
    pub jump: StateId,
    pub controlled_fall: StateId,
    pub uncontrolled_fall: StateId,
    pub land_to_move: StateId,
    pub land_to_stop: StateId,
    pub land_hard_stop: StateId,
    pub land_fall: StateId,
    pub land_fall_dead: StateId,
}

impl AnimStateSet {
    pub fn new(prefix: &str) -> Self {
        let id = |suffix: &str| StateId::from_name(&format!("{prefix} {suffix}"));
        Self {
            jump: id("Jump Start"),
            controlled_fall: id("Controlled Fall"),
            uncontrolled_fall: id("Falling Loop"),
            land_to_move: id("Land To Move"),
            land_to_stop: id("Land To Stop"),
            land_hard_stop: id("Land Hard Stop"),
            land_fall: id("Land Fall"),
            land_fall_dead: id("Land Fall Dead"),
        }
    }
}

/// Owns the two precomputed sets; the selection flag is the only mutable
/// part. Resolution is a lookup, never a recomputation.
#[derive(Clone, Debug)]
pub struct StateSetSelector {
    walking: AnimStateSet,
    running: AnimStateSet,
    running_selected: bool,
}

impl StateSetSelector {
    pub fn new() -> Self {
        Self {
            walking: AnimStateSet::new("Walking"),
            running: AnimStateSet::new("Running"),
            running_selected: false,
        }
    }

    pub fn set_running(&mut self, running: bool) {
        self.running_selected = running;
    }

    pub fn active(&self) -> &AnimStateSet {
        if self.running_selected {
            &self.running
        } else {
            &self.walking
        }
    }
}

impl Default for StateSetSelector {
    fn default() -> Self {
        Self::new()
    }
}
