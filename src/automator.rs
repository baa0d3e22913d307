//! MidiAutomator that ties the signature codec to the learned trigger list

use crate::Result;
use automator_learn::{TriggerId, TriggerManager};
use automator_midi::{DecodeStats, Decoder, RawMessage, SignatureDump};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, trace};

/// What a live message did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    /// Signature of the message as received.
    pub signature: String,
    /// Triggers fired by the message, in ID order.
    pub matched: Vec<TriggerId>,
    /// Set when the message completed a MIDI learn.
    pub learned: Option<automator_learn::Result<TriggerId>>,
}

/// Decodes live MIDI and dispatches it to learned triggers.
///
/// Cheap to share: all methods take `&self`.
pub struct MidiAutomator {
    decoder: Decoder,
    triggers: TriggerManager,
}

impl MidiAutomator {
    pub fn builder() -> crate::builder::MidiAutomatorBuilder {
        crate::builder::MidiAutomatorBuilder::default()
    }

    pub(crate) fn from_parts(decoder: Decoder, triggers: TriggerManager) -> Self {
        Self { decoder, triggers }
    }

    pub fn handle(&self, message: &RawMessage) -> Dispatch {
        let signature = self.decoder.decode(message);
        let result = self.triggers.process(message);

        if result.fired.is_empty() && result.learned.is_none() {
            trace!("No trigger for {}", signature);
        }

        Dispatch {
            signature,
            matched: result.fired,
            learned: result.learned,
        }
    }

    pub fn decoder(&self) -> &Decoder {
        &self.decoder
    }

    pub fn triggers(&self) -> &TriggerManager {
        &self.triggers
    }

    /// `None` unless built with `.stats()`.
    pub fn stats(&self) -> Option<&Arc<DecodeStats>> {
        self.decoder.stats()
    }

    /// Renders every event of a MIDI file through this automator's decoder.
    pub fn dump_file(&self, path: impl AsRef<Path>) -> Result<SignatureDump> {
        let data = std::fs::read(path.as_ref())?;
        Ok(SignatureDump::parse_with(&data, &self.decoder)?)
    }

    /// Appends triggers from a file holding one signature per line.
    ///
    /// Blank lines are skipped. Returns the number of entries added.
    pub fn load_triggers(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;

        let mut added = 0;
        // Lines are kept verbatim: empty text events end in a space.
        for line in text.lines().filter(|l| !l.is_empty()) {
            self.triggers.add_signature(line);
            added += 1;
        }

        debug!("Loaded {} triggers from {}", added, path.display());
        Ok(added)
    }

    /// Writes the trigger list, one signature per line.
    pub fn save_triggers(&self, path: impl AsRef<Path>) -> Result<()> {
        let text: String = self
            .triggers
            .signatures()
            .into_iter()
            .map(|signature| signature + "\n")
            .collect();
        std::fs::write(path.as_ref(), text)?;
        Ok(())
    }
}
