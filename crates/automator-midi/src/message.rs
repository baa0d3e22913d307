//! Raw MIDI message model shared by the decoder, normalizer and parser.

use serde::{Deserialize, Serialize};

/// Status nibble of a short message, plus the catch-all system class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Command {
    NoteOff = 0x80,
    NoteOn = 0x90,
    PolyPressure = 0xA0,
    ControlChange = 0xB0,
    ProgramChange = 0xC0,
    ChannelPressure = 0xD0,
    PitchBend = 0xE0,
    System = 0xF0,
}

impl Command {
    /// Every command, in status order.
    pub const ALL: [Command; 8] = [
        Command::NoteOff,
        Command::NoteOn,
        Command::PolyPressure,
        Command::ControlChange,
        Command::ProgramChange,
        Command::ChannelPressure,
        Command::PitchBend,
        Command::System,
    ];

    /// Returns `None` for data bytes (status < 0x80).
    pub const fn from_status(status: u8) -> Option<Command> {
        match status & 0xF0 {
            0x80 => Some(Command::NoteOff),
            0x90 => Some(Command::NoteOn),
            0xA0 => Some(Command::PolyPressure),
            0xB0 => Some(Command::ControlChange),
            0xC0 => Some(Command::ProgramChange),
            0xD0 => Some(Command::ChannelPressure),
            0xE0 => Some(Command::PitchBend),
            0xF0 => Some(Command::System),
            _ => None,
        }
    }

    pub const fn status(self) -> u8 {
        self as u8
    }

    /// Name used inside signatures. Part of the persisted format.
    pub const fn name(self) -> &'static str {
        match self {
            Command::NoteOff => "NOTE OFF",
            Command::NoteOn => "NOTE ON",
            Command::PolyPressure => "POLYPHONIC KEY PRESSURE",
            Command::ControlChange => "CONTROL CHANGE",
            Command::ProgramChange => "PROGRAM CHANGE",
            Command::ChannelPressure => "KEY PRESSURE",
            Command::PitchBend => "PITCH WHEEL CHANGE",
            Command::System => "SYSTEM MESSAGE",
        }
    }

    pub fn from_name(name: &str) -> Option<Command> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    #[inline]
    pub const fn is_channel_voice(self) -> bool {
        !matches!(self, Command::System)
    }
}

/// Name rendered for messages whose kind cannot be determined.
pub const UNKNOWN_MESSAGE: &str = "UNKNOWN MESSAGE";

/// Status byte plus up to two data bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShortMessage {
    pub status: u8,
    pub data1: u8,
    pub data2: u8,
}

impl ShortMessage {
    #[inline]
    pub const fn new(status: u8, data1: u8, data2: u8) -> Self {
        Self {
            status,
            data1,
            data2,
        }
    }

    /// Channel-voice message on a 0-based channel.
    #[inline]
    pub const fn channel_voice(command: Command, channel: u8, data1: u8, data2: u8) -> Self {
        Self::new(command.status() | (channel & 0x0F), data1, data2)
    }

    #[inline]
    pub const fn note_on(channel: u8, note: u8, velocity: u8) -> Self {
        Self::channel_voice(Command::NoteOn, channel, note, velocity)
    }

    #[inline]
    pub const fn note_off(channel: u8, note: u8, velocity: u8) -> Self {
        Self::channel_voice(Command::NoteOff, channel, note, velocity)
    }

    #[inline]
    pub const fn control_change(channel: u8, control: u8, value: u8) -> Self {
        Self::channel_voice(Command::ControlChange, channel, control, value)
    }

    #[inline]
    pub const fn program_change(channel: u8, program: u8) -> Self {
        Self::channel_voice(Command::ProgramChange, channel, program, 0)
    }

    /// `bend` is the 14-bit wheel position (8192 = centre).
    #[inline]
    pub const fn pitch_bend(channel: u8, bend: u16) -> Self {
        Self::channel_voice(
            Command::PitchBend,
            channel,
            (bend & 0x7F) as u8,
            ((bend >> 7) & 0x7F) as u8,
        )
    }

    #[inline]
    pub const fn command(&self) -> Option<Command> {
        Command::from_status(self.status)
    }

    /// 0-based channel (low nibble of the status byte).
    #[inline]
    pub const fn channel(&self) -> u8 {
        self.status & 0x0F
    }

    #[inline]
    pub const fn is_channel_voice(&self) -> bool {
        matches!(self.command(), Some(command) if command.is_channel_voice())
    }

    /// Wire length implied by the status byte.
    pub const fn length(&self) -> usize {
        match self.status {
            0x80..=0xBF | 0xE0..=0xEF | 0xF2 => 3,
            0xC0..=0xDF | 0xF1 | 0xF3 => 2,
            0xF0..=0xFF => 1,
            _ => 3,
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        [self.status, self.data1, self.data2][..self.length()].to_vec()
    }
}

/// Any MIDI message the codec understands.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RawMessage {
    Short(ShortMessage),
    /// `status` is 0xF0 (start) or 0xF7 (continuation); `payload` excludes it.
    SysEx { status: u8, payload: Vec<u8> },
    /// Standard MIDI File meta event.
    Meta { meta_type: u8, payload: Vec<u8> },
    Unknown,
}

impl RawMessage {
    /// Classifies a live MIDI byte buffer.
    ///
    /// 0xFF is System Reset on the wire, so meta events never come out of
    /// this constructor; see [`RawMessage::from_track_event`] for file events.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        match bytes {
            [] => RawMessage::Unknown,
            [status @ (0xF0 | 0xF7), payload @ ..] => RawMessage::SysEx {
                status: *status,
                payload: payload.to_vec(),
            },
            [status, data @ ..] => RawMessage::Short(ShortMessage::new(
                *status,
                data.first().copied().unwrap_or(0),
                data.get(1).copied().unwrap_or(0),
            )),
        }
    }

    #[inline]
    pub fn as_short(&self) -> Option<&ShortMessage> {
        match self {
            RawMessage::Short(short) => Some(short),
            _ => None,
        }
    }

    #[inline]
    pub fn is_channel_voice(&self) -> bool {
        self.as_short().is_some_and(ShortMessage::is_channel_voice)
    }
}

impl From<ShortMessage> for RawMessage {
    fn from(short: ShortMessage) -> Self {
        RawMessage::Short(short)
    }
}

#[cfg(feature = "midi-msg")]
impl From<&midi_msg::MidiMsg> for RawMessage {
    fn from(msg: &midi_msg::MidiMsg) -> Self {
        RawMessage::from_bytes(&msg.to_midi())
    }
}
