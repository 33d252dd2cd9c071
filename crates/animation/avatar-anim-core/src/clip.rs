//! Clip handles and per-instance preparation with lifecycle markers.

use serde::{Deserialize, Serialize};

/// Opaque playable clip asset. Cheap to clone; the playback service owns the
/// sampled curve data behind the name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    pub name: String,
    /// Length in seconds.
    pub length: f32,
}

impl Clip {
    pub fn new(name: impl Into<String>, length: f32) -> Self {
        Self {
            name: name.into(),
            length,
        }
    }
}

/// Marker attached to a prepared clip so playback can emit lifecycle events
/// scoped to the slot that bound it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClipMarker {
    Start { slot: String },
    Stop { slot: String },
    Tag { slot: String, tag: String },
}

/// Per-instance copy of a clip plus the markers playback needs to report its
/// lifecycle. The shared base asset is never mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PreparedClip {
    pub clip: Clip,
    pub markers: Vec<ClipMarker>,
}

impl PreparedClip {
    /// Wrap a clip without lifecycle markers (base-table bindings).
    pub fn raw(clip: Clip) -> Self {
        Self {
            clip,
            markers: Vec::new(),
        }
    }

    /// Instantiate `clip` for `slot`: a fresh instance carrying a start and a
    /// stop marker for the slot, plus one tag marker per entry in `tags`.
    /// Repeated calls with the same inputs yield equivalent marker sets but
    /// never a shared instance, so stale markers from a previous
    /// configuration cannot leak into a new binding.
    pub fn prepare(slot: &str, clip: &Clip, tags: &[String]) -> Self {
        let mut markers = Vec::with_capacity(2 + tags.len());
        markers.push(ClipMarker::Start {
            slot: slot.to_string(),
        });
        markers.push(ClipMarker::Stop {
            slot: slot.to_string(),
        });
        for tag in tags {
            markers.push(ClipMarker::Tag {
                slot: slot.to_string(),
                tag: tag.clone(),
            });
        }
        Self {
            clip: clip.clone(),
            markers,
        }
    }
}
