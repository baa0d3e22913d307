//! A learned MIDI trigger and its persisted form.

use automator_midi::{decode, normalize, parse, RawMessage};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Unique ID for a learned trigger.
pub type TriggerId = u64;

/// One learned list entry.
///
/// Persisted as its bare signature string. On load the signature is parsed
/// back into a message; signatures that cannot be parsed keep the entry
/// visible but never fire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct LearnedTrigger {
    signature: String,
    /// Normalized message this trigger fires on. `None` = display only.
    pattern: Option<RawMessage>,
    /// Runtime switch, not persisted.
    pub enabled: bool,
}

impl LearnedTrigger {
    /// Rebuilds a trigger from a persisted signature.
    pub fn from_signature(signature: impl Into<String>) -> Self {
        let signature = signature.into();
        let pattern = match parse(&signature) {
            Ok(message) => Some(normalize(&message)),
            Err(err) => {
                warn!("MIDI signature is display-only: {}", err);
                None
            }
        };

        Self {
            signature,
            pattern,
            enabled: true,
        }
    }

    /// Learns a captured message.
    ///
    /// The message is normalized and decoded, and the result is treated
    /// exactly like a signature loaded from disk, so a trigger behaves the
    /// same before and after a save.
    pub fn from_message(message: &RawMessage) -> Self {
        Self::from_signature(decode(&normalize(message)))
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Normalized message this trigger fires on.
    pub fn pattern(&self) -> Option<&RawMessage> {
        self.pattern.as_ref()
    }

    /// `false` for display-only entries.
    pub fn is_triggerable(&self) -> bool {
        self.pattern.is_some()
    }

    /// Whether a live message fires this trigger.
    pub fn matches(&self, message: &RawMessage) -> bool {
        if !self.enabled {
            return false;
        }
        self.pattern
            .as_ref()
            .is_some_and(|pattern| *pattern == normalize(message))
    }
}

impl From<String> for LearnedTrigger {
    fn from(signature: String) -> Self {
        Self::from_signature(signature)
    }
}

impl From<LearnedTrigger> for String {
    fn from(trigger: LearnedTrigger) -> Self {
        trigger.signature
    }
}
