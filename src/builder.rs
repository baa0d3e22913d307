//! Builder for configuring and constructing a `MidiAutomator`.

use crate::{MidiAutomator, Result};
use automator_learn::{Error as LearnError, TriggerManager};
use automator_midi::{DecodeStats, Decoder};
use std::sync::Arc;
use tracing::debug;

/// Statistics are off unless `.stats()` or `.shared_stats()` is called.
///
/// # Example
///
/// ```
/// use midi_automator::prelude::*;
///
/// let automator = MidiAutomator::builder()
///     .stats()
///     .trigger("channel 16: CONTROL CHANGE 1 value: 127")
///     .build()
///     .unwrap();
///
/// let dispatch = automator.handle(&RawMessage::from_bytes(&[0xBF, 1, 127]));
/// assert_eq!(dispatch.matched.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MidiAutomatorBuilder {
    stats: Option<Arc<DecodeStats>>,
    triggers: Vec<String>,
    reserved: Vec<String>,
}

impl MidiAutomatorBuilder {
    /// Counts decoded messages and bytes.
    pub fn stats(mut self) -> Self {
        self.stats = Some(Arc::new(DecodeStats::new()));
        self
    }

    /// Counts into statistics shared with other decoders.
    pub fn shared_stats(mut self, stats: Arc<DecodeStats>) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Adds a persisted trigger signature.
    pub fn trigger(mut self, signature: impl Into<String>) -> Self {
        self.triggers.push(signature.into());
        self
    }

    pub fn triggers<I, S>(mut self, signatures: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.triggers.extend(signatures.into_iter().map(Into::into));
        self
    }

    /// Reserves a signature for a built-in command.
    pub fn reserve(mut self, signature: impl Into<String>) -> Self {
        self.reserved.push(signature.into());
        self
    }

    /// Fails if a trigger uses a reserved signature.
    pub fn build(self) -> Result<MidiAutomator> {
        let decoder = match self.stats {
            Some(stats) => Decoder::with_stats(stats),
            None => Decoder::new(),
        };

        let manager = TriggerManager::new();
        for signature in self.reserved {
            manager.reserve(signature);
        }
        for signature in self.triggers {
            if manager.is_reserved(&signature) {
                return Err(LearnError::DuplicateSignature {
                    signature,
                    existing: None,
                }
                .into());
            }
            manager.add_signature(signature);
        }

        debug!(
            "MidiAutomator built: {} triggers, stats {}",
            manager.len(),
            decoder.stats().is_some()
        );

        Ok(MidiAutomator::from_parts(decoder, manager))
    }
}
