//! Reserved slot names consulted by the lifecycle event router.

/// Matched as a substring; attack slots come in variants ("Attack_Strong",
/// "Attack_Weak", ...).
pub const SLOT_ATTACK: &str = "Attack";
/// Matched as a substring, like [`SLOT_ATTACK`].
pub const SLOT_BLOCK: &str = "Block";
/// Matched exactly; the Use slot has no variants.
pub const SLOT_USE: &str = "Use";
