//! MIDI message to signature text.
//!
//! Decoding is total: every [`RawMessage`] renders to a non-empty signature.
//! Channel-voice messages render as `channel <n>: <COMMAND> <params>` with a
//! 1-based channel; everything else renders as a fixed descriptive string.
//! The wording is a persisted format and must not change.

mod meta;
mod system;

use std::sync::Arc;

use tracing::warn;

use crate::error::BoundsError;
use crate::key::key_name;
use crate::message::{Command, RawMessage, ShortMessage, UNKNOWN_MESSAGE};
use crate::stats::DecodeStats;

/// Signature decoder with optional instrumentation.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    stats: Option<Arc<DecodeStats>>,
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every decode through this decoder updates `stats`.
    pub fn with_stats(stats: Arc<DecodeStats>) -> Self {
        Self { stats: Some(stats) }
    }

    pub fn stats(&self) -> Option<&Arc<DecodeStats>> {
        self.stats.as_ref()
    }

    /// Renders `message`, degrading malformed meta payloads instead of failing.
    pub fn decode(&self, message: &RawMessage) -> String {
        match self.try_decode(message) {
            Ok(signature) => signature,
            Err(err) => {
                warn!("Degrading malformed MIDI message: {}", err);
                let payload = match message {
                    RawMessage::Meta { payload, .. } => payload.as_slice(),
                    _ => &[],
                };
                format!("Malformed Meta event: {}, data:{}", err, hex_dump(payload))
            }
        }
    }

    /// Renders `message`, reporting meta payloads that are too short for their type.
    pub fn try_decode(&self, message: &RawMessage) -> Result<String, BoundsError> {
        if let Some(stats) = &self.stats {
            match message {
                RawMessage::Short(short) => stats.record_short(short.length()),
                RawMessage::SysEx { status, payload } => {
                    stats.record_sysex(payload.len(), *status == 0xF7)
                }
                RawMessage::Meta { .. } => stats.record_meta(),
                RawMessage::Unknown => stats.record_other(),
            }
        }

        match message {
            RawMessage::Short(short) => Ok(render_short(short)),
            RawMessage::SysEx { status, payload } => Ok(render_sysex(*status, payload)),
            RawMessage::Meta { meta_type, payload } => meta::render(*meta_type, payload),
            RawMessage::Unknown => Ok(UNKNOWN_MESSAGE.to_string()),
        }
    }
}

/// Decodes without instrumentation. Never fails.
pub fn decode(message: &RawMessage) -> String {
    Decoder::new().decode(message)
}

/// Decodes without instrumentation, surfacing truncated meta payloads.
pub fn try_decode(message: &RawMessage) -> Result<String, BoundsError> {
    Decoder::new().try_decode(message)
}

fn render_short(msg: &ShortMessage) -> String {
    let Some(command) = msg.command() else {
        return format!(
            "{}: status = {}, byte1 = {}, byte2 = {}",
            UNKNOWN_MESSAGE, msg.status, msg.data1, msg.data2
        );
    };

    let name = command.name();
    let body = match command {
        Command::NoteOff | Command::NoteOn => format!("{} {}", name, key_name(msg.data1)),
        Command::PolyPressure | Command::ChannelPressure => {
            format!("{} {} pressure: {}", name, key_name(msg.data1), msg.data2)
        }
        Command::ControlChange => format!("{} {} value: {}", name, msg.data1, msg.data2),
        Command::ProgramChange => format!("{} {}", name, msg.data1),
        Command::PitchBend => format!("{} {}", name, combine_14bit(msg.data1, msg.data2)),
        Command::System => return system::render(msg),
    };

    format!("channel {}: {}", msg.channel() + 1, body)
}

fn render_sysex(status: u8, payload: &[u8]) -> String {
    match status {
        0xF0 => format!("Sysex message: F0{}", hex_dump(payload)),
        0xF7 => format!("Continued Sysex message F7{}", hex_dump(payload)),
        _ => format!("{}: status = {},{}", UNKNOWN_MESSAGE, status, hex_dump(payload)),
    }
}

/// LSB-first pair of 7-bit values.
#[inline]
pub(crate) fn combine_14bit(lsb: u8, msb: u8) -> u16 {
    u16::from(lsb & 0x7F) | (u16::from(msb & 0x7F) << 7)
}

/// Each byte as a space followed by two uppercase hex digits.
pub(crate) fn hex_dump(bytes: &[u8]) -> String {
    use std::fmt::Write;

    let mut out = String::with_capacity(bytes.len() * 3);
    for byte in bytes {
        let _ = write!(out, " {byte:02X}");
    }
    out
}
