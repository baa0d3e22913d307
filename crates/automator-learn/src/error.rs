//! Error types for learned triggers.

use crate::trigger::TriggerId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Another entry (or a reserved command) already uses this signature.
    /// `existing` is `None` for reserved signatures.
    #[error("MIDI signature {signature:?} is already assigned")]
    DuplicateSignature {
        signature: String,
        existing: Option<TriggerId>,
    },

    #[error("Unknown trigger: {0}")]
    UnknownTrigger(TriggerId),
}

pub type Result<T> = std::result::Result<T, Error>;
