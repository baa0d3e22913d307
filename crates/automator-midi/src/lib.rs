//! MIDI signature codec for MIDI Automator.
//!
//! Translates MIDI messages to human-readable "signatures", parses persisted
//! signatures back into messages, and normalizes messages for MIDI learn.
//!
//! # Example
//!
//! ```
//! use automator_midi::{decode, normalize, parse, RawMessage, ShortMessage};
//!
//! let cc = RawMessage::from(ShortMessage::control_change(15, 1, 127));
//! let signature = decode(&cc);
//! assert_eq!(signature, "channel 16: CONTROL CHANGE 1 value: 127");
//! assert_eq!(parse(&signature).unwrap(), cc);
//!
//! let soft = RawMessage::from(ShortMessage::note_on(0, 60, 20));
//! let hard = RawMessage::from(ShortMessage::note_on(0, 60, 120));
//! assert_eq!(normalize(&soft), normalize(&hard));
//! ```

pub mod error;
pub use error::{BoundsError, Error, ParseError, Result};

pub(crate) mod decode;
pub use decode::{decode, try_decode, Decoder};

pub(crate) mod file;
pub use file::{SignatureDump, TimedSignature, TrackSignatures};

pub mod key;
pub use key::{key_name, key_number};

pub(crate) mod message;
pub use message::{Command, RawMessage, ShortMessage, UNKNOWN_MESSAGE};

pub(crate) mod normalize;
pub use normalize::{normalize, normalize_short, BINARY_THRESHOLD};

pub(crate) mod parse;
pub use parse::parse;

pub mod stats;
pub use stats::{DecodeStats, StatsSnapshot};
