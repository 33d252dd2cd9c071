//! Animator parameters owned by the controller.
//!
//! Parameters are written on every semantic change and never read back from
//! the playback service.

use serde::{Deserialize, Serialize};

use crate::ids::ParamId;

/// Typed value written through [`crate::Animator::set_parameter`].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    Bool(bool),
    Float(f32),
    Int(i32),
}

pub const RUN: ParamId = ParamId::from_name("Run");
pub const CROUCH: ParamId = ParamId::from_name("Crouch");
pub const FALL_DISTANCE: ParamId = ParamId::from_name("FallDistance");
pub const IS_JUMPING: ParamId = ParamId::from_name("IsJumping");
pub const IS_FALLING: ParamId = ParamId::from_name("IsFalling");
pub const HORIZONTAL: ParamId = ParamId::from_name("Horizontal");
pub const VERTICAL: ParamId = ParamId::from_name("Vertical");
pub const SPEED: ParamId = ParamId::from_name("Speed");
pub const TURN: ParamId = ParamId::from_name("Turn");
pub const COMBAT_DIR_HORIZONTAL: ParamId = ParamId::from_name("CombatDirectionHorizontal");
pub const COMBAT_DIR_VERTICAL: ParamId = ParamId::from_name("CombatDirectionVertical");
