//! Lifecycle events reported back by the playback service.

use serde::{Deserialize, Serialize};

/// Tag vocabulary carried by tagged markers. Only `Recover` affects the
/// controller's flags; other kinds pass through untouched so hosts can
/// forward their full vocabulary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TagKind {
    Recover,
    Interrupt,
    Custom(String),
}

/// Callback shapes the host forwards into
/// [`crate::AvatarAnimationController::handle_event`], synchronously within
/// the frame step that produced them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleEvent {
    Started { slot: String },
    Stopped { slot: String },
    Tagged { kind: TagKind, slot: String, tag: String },
}
