//! Avatar animation state driver (engine-agnostic).
//!
//! A thin orchestration layer for a humanoid character: discrete gameplay
//! signals (jump/land/equip/attack/block/use) become cross-fades and
//! parameter writes against an opaque playback service, runtime clip
//! substitution runs through a live override table, and clip lifecycle
//! events feed back into derived busy-state flags that gate further input.
//! The playback engine itself (sampling, blending) sits behind the
//! [`Animator`] trait.

pub mod animator;
pub mod bundle;
pub mod clip;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod ids;
pub mod layers;
pub mod overrides;
pub mod params;
pub mod slots;
pub mod states;
pub mod status;
pub mod velocity;

// Re-exports for consumers (host adapters)
pub use animator::{Animator, Layer};
pub use bundle::{AnimationConfig, ClipBundle, WeaponAnimConfig};
pub use clip::{Clip, ClipMarker, PreparedClip};
pub use config::ControllerConfig;
pub use controller::AvatarAnimationController;
pub use error::ControllerError;
pub use events::{LifecycleEvent, TagKind};
pub use ids::{ParamId, StateId};
pub use layers::LayerWeightBlender;
pub use overrides::{OverrideTable, SlotBinding};
pub use params::ParamValue;
pub use states::{AnimStateSet, StateSetSelector};
pub use status::{ActionOutcome, ControllerStatus};
pub use velocity::VelocityProbe;
