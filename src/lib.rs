//! # MIDI Automator
//!
//! Human-readable MIDI signatures and learned MIDI triggers.
//!
//! ## Architecture
//!
//! `midi-automator` is an umbrella crate that coordinates:
//! - **automator-midi** - Signature codec (decode, parse, normalize, MIDI file dumps)
//! - **automator-learn** - Learned trigger list (MIDI learn, duplicate checks, matching)
//!
//! ## Quick Start
//!
//! ```
//! use midi_automator::prelude::*;
//!
//! let automator = MidiAutomator::builder()
//!     .trigger("channel 1: CONTROL CHANGE 64 value: 127")
//!     .build()
//!     .unwrap();
//!
//! let dispatch = automator.handle(&RawMessage::from_bytes(&[0xB0, 64, 127]));
//! assert_eq!(dispatch.signature, "channel 1: CONTROL CHANGE 64 value: 127");
//! assert_eq!(dispatch.matched.len(), 1);
//!
//! // MIDI learn
//! automator.triggers().start_learn(None);
//! let dispatch = automator.handle(&RawMessage::from_bytes(&[0x90, 60, 100]));
//! assert!(matches!(dispatch.learned, Some(Ok(_))));
//! ```
//!
//! ## Feature Flags
//!
//! - `default` - `midi-msg`
//! - `midi-msg` - Convert `midi_msg::MidiMsg` values into [`RawMessage`]

/// Re-export of automator-midi for direct access
pub use automator_midi as midi;

/// Re-export of automator-learn for direct access
pub use automator_learn as learn;

pub use automator_midi::{
    decode, key_name, key_number, normalize, parse, try_decode, BoundsError, Command,
    DecodeStats, Decoder, ParseError, RawMessage, ShortMessage, SignatureDump, StatsSnapshot,
};

pub use automator_learn::{LearnedTrigger, ProcessResult, TriggerId, TriggerManager};

mod error;
pub use error::{Error, Result};

mod automator;
pub use automator::{Dispatch, MidiAutomator};

pub mod builder;
pub use builder::MidiAutomatorBuilder;

pub mod prelude {
    pub use crate::{
        decode, normalize, parse, Decoder, Dispatch, Error, LearnedTrigger, MidiAutomator,
        MidiAutomatorBuilder, RawMessage, Result, ShortMessage, TriggerId, TriggerManager,
    };
}
