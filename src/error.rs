//! Centralized error type for the midi-automator umbrella crate.
//!
//! Wraps all subsystem errors so `?` propagates naturally across crate boundaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("MIDI: {0}")]
    Midi(#[from] automator_midi::Error),

    #[error("Signature: {0}")]
    Parse(#[from] automator_midi::ParseError),

    #[error("Learn: {0}")]
    Learn(#[from] automator_learn::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
