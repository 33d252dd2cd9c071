//! Derived busy-state flags and explicit action outcomes.

use serde::{Deserialize, Serialize};

/// Flags derived from clip lifecycle events. Only the event router writes
/// these; action methods read them as a gate, never set them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerStatus {
    pub is_attacking: bool,
    pub is_blocking: bool,
    pub is_using: bool,
}

impl ControllerStatus {
    #[inline]
    pub fn is_busy(self) -> bool {
        self.is_attacking || self.is_blocking || self.is_using
    }
}

/// Result of a gated action request. The source design dropped rejected
/// requests silently; returning the reason keeps the no-op observable so
/// callers and tests can assert on it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub enum ActionOutcome {
    Performed,
    /// No playback service attached yet.
    NotReady,
    /// Rejected: the avatar is mid-attack, mid-block, or mid-use.
    Busy,
    /// Rejected: no weapon config is equipped.
    NoWeapon,
}

impl ActionOutcome {
    #[inline]
    pub fn performed(self) -> bool {
        matches!(self, ActionOutcome::Performed)
    }
}
