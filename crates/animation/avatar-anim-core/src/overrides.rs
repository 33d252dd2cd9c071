//! Live slot-to-clip binding table consulted by the playback service.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::bundle::AnimationConfig;
use crate::clip::PreparedClip;

/// One slot's active clip binding. At most one binding per slot is live at a
/// time; setting a slot replaces the previous binding atomically from the
/// caller's perspective.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlotBinding {
    pub slot: String,
    pub clip: PreparedClip,
    /// The config this binding came from, when it was config-driven.
    pub config: Option<AnimationConfig>,
}

/// Mapping from slot name to its live binding. Two lifetimes exist in the
/// controller: the constant base table and the active table that diverges on
/// equip and reverts on unequip.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OverrideTable {
    slots: HashMap<String, SlotBinding>,
}

impl OverrideTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the binding for `binding.slot`.
    pub fn set(&mut self, binding: SlotBinding) {
        self.slots.insert(binding.slot.clone(), binding);
    }

    pub fn get(&self, slot: &str) -> Option<&SlotBinding> {
        self.slots.get(slot)
    }

    /// Restore every slot to `base`, dropping slots the diverged table
    /// introduced on its own.
    pub fn revert_to(&mut self, base: &OverrideTable) {
        self.slots = base.slots.clone();
    }

    pub fn iter(&self) -> impl Iterator<Item = &SlotBinding> {
        self.slots.values()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clip::Clip;

    fn binding(slot: &str, clip_name: &str) -> SlotBinding {
        SlotBinding {
            slot: slot.to_string(),
            clip: PreparedClip::raw(Clip::new(clip_name, 1.0)),
            config: None,
        }
    }

    #[test]
    fn set_replaces_previous_binding() {
        let mut table = OverrideTable::new();
        table.set(binding("Attack", "old"));
        table.set(binding("Attack", "new"));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("Attack").unwrap().clip.clip.name, "new");
    }

    /// it should restore base slots and drop diverged-only slots on revert
    #[test]
    fn revert_restores_base_pointwise() {
        let mut base = OverrideTable::new();
        base.set(binding("Idle", "idle_loop"));
        base.set(binding("Attack", "unarmed"));

        let mut active = base.clone();
        active.set(binding("Attack", "sword"));
        active.set(binding("Attack_Strong", "sword_heavy"));

        active.revert_to(&base);
        assert_eq!(active, base);
        assert!(active.get("Attack_Strong").is_none());
    }
}
