//! Hashed identifiers for animator states and parameters.
//!
//! States and parameters are addressed by a stable hash of their readable
//! name. The well-known ids are computed once at compile time (see `states`
//! and `params`); nothing re-hashes per call.

use serde::{Deserialize, Serialize};

const FNV_OFFSET: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Stable FNV-1a hash of a readable name.
pub const fn hash_name(name: &str) -> u32 {
    let bytes = name.as_bytes();
    let mut hash = FNV_OFFSET;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u32;
        hash = hash.wrapping_mul(FNV_PRIME);
        i += 1;
    }
    hash
}

/// Identifier of a named state in the playback service's graph.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct StateId(pub u32);

impl StateId {
    pub const fn from_name(name: &str) -> Self {
        StateId(hash_name(name))
    }
}

/// Identifier of a named, typed parameter mirrored onto the playback service.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ParamId(pub u32);

impl ParamId {
    pub const fn from_name(name: &str) -> Self {
        ParamId(hash_name(name))
    }
}
