//! Error types for the signature codec.

use thiserror::Error;

/// Failure to turn a signature string back into a MIDI message.
///
/// Callers loading persisted signatures treat every variant as "display only":
/// the entry stays visible but can never trigger.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed signature: {0:?}")]
    MalformedSignature(String),

    #[error("signature shape cannot be parsed back into a message: {0:?}")]
    UnsupportedSignatureShape(String),

    #[error("unknown MIDI command: {0:?}")]
    UnknownCommand(String),
}

/// A meta payload too short for its event type, or a table index out of range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoundsError {
    #[error("{event} needs {expected} bytes, got {actual}")]
    Truncated {
        event: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("key signature {0} is outside -7..=7")]
    KeySignatureOutOfRange(i8),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Bounds(#[from] BoundsError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("MIDI file parse error: {0}")]
    MidiFileParse(String),
}

impl From<midly::Error> for Error {
    fn from(e: midly::Error) -> Self {
        Error::MidiFileParse(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
