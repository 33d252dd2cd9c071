//! Error types for controller lifecycle and config parsing.
//!
//! Nothing in this crate is fatal: gated action requests report rejection
//! through [`crate::ActionOutcome`], and malformed weapon bundle entries are
//! skipped during equip. These errors cover the remaining misuse cases.

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ControllerError {
    /// attach() called while an animator is already attached
    #[error("an animator is already attached")]
    AlreadyAttached,

    /// detach() called with no animator attached
    #[error("no animator is attached")]
    NotAttached,

    /// Animation/weapon config JSON failed to parse
    #[error("invalid animation config: {0}")]
    InvalidConfig(String),
}
