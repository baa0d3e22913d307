//! Trigger-equivalence normalization for MIDI learn.
//!
//! Two messages that should fire the same learned action normalize to the
//! same value. The result is only compared, never displayed.

use crate::message::{Command, RawMessage, ShortMessage};

/// Values at or below this binarize to 0, above it to 127.
pub const BINARY_THRESHOLD: u8 = 63;

/// Returns the trigger-equivalent form of `message`. Idempotent.
pub fn normalize(message: &RawMessage) -> RawMessage {
    match message {
        RawMessage::Short(short) => RawMessage::Short(normalize_short(*short)),
        other => other.clone(),
    }
}

/// Short-message form of [`normalize`].
pub fn normalize_short(msg: ShortMessage) -> ShortMessage {
    let Some(command) = msg.command() else {
        return msg;
    };

    match command {
        Command::NoteOn | Command::NoteOff => ShortMessage { data2: 0, ..msg },
        Command::PolyPressure | Command::ChannelPressure | Command::PitchBend => ShortMessage {
            data2: binarize(msg.data2),
            ..msg
        },
        Command::ControlChange | Command::ProgramChange | Command::System => msg,
    }
}

#[inline]
fn binarize(value: u8) -> u8 {
    if value <= BINARY_THRESHOLD {
        0
    } else {
        127
    }
}
