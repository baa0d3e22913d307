//! Standard MIDI File signatures.
//!
//! Meta events only exist inside files, so this is where they enter the
//! codec. Parsing uses the `midly` crate; every track event is converted to a
//! [`RawMessage`] and rendered through a [`Decoder`].

use crate::decode::Decoder;
use crate::error::Result;
use crate::message::{Command, RawMessage, ShortMessage};
use midly::{MetaMessage, MidiMessage, SmpteTime, Smf, Timing, TrackEventKind};
use std::path::Path;
use tracing::debug;

/// Every event of a MIDI file rendered as a signature.
#[derive(Debug, Clone)]
pub struct SignatureDump {
    pub tracks: Vec<TrackSignatures>,

    /// `None` for SMPTE timecode files.
    pub ticks_per_beat: Option<u16>,

    /// First tempo event in the file, in BPM.
    pub tempo_bpm: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct TrackSignatures {
    pub events: Vec<TimedSignature>,
}

/// A signature with its absolute position in ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedSignature {
    pub tick: u64,
    pub signature: String,
}

impl SignatureDump {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read(path.as_ref())?;
        Self::parse(&data)
    }

    pub fn parse(data: &[u8]) -> Result<Self> {
        Self::parse_with(data, &Decoder::new())
    }

    /// Parses with a caller-supplied decoder, e.g. one carrying statistics.
    pub fn parse_with(data: &[u8], decoder: &Decoder) -> Result<Self> {
        let smf = Smf::parse(data)?;

        let ticks_per_beat = match smf.header.timing {
            Timing::Metrical(tpb) => Some(tpb.as_int()),
            Timing::Timecode(_, _) => None,
        };

        debug!(
            "Dumping MIDI file: {} tracks, timing {:?}",
            smf.tracks.len(),
            smf.header.timing
        );

        let mut tempo_bpm = None;
        let mut tracks = Vec::with_capacity(smf.tracks.len());

        for track in smf.tracks.iter() {
            let mut current_tick = 0u64;
            let mut events = Vec::with_capacity(track.len());

            for event in track.iter() {
                current_tick += u64::from(event.delta.as_int());

                if tempo_bpm.is_none() {
                    if let TrackEventKind::Meta(MetaMessage::Tempo(tempo)) = &event.kind {
                        tempo_bpm = Some(60_000_000.0 / f64::from(tempo.as_int().max(1)));
                    }
                }

                let message = RawMessage::from_track_event(&event.kind);
                events.push(TimedSignature {
                    tick: current_tick,
                    signature: decoder.decode(&message),
                });
            }

            tracks.push(TrackSignatures { events });
        }

        debug!(
            "Dumped {} signatures",
            tracks.iter().map(|t| t.events.len()).sum::<usize>()
        );

        Ok(Self {
            tracks,
            ticks_per_beat,
            tempo_bpm,
        })
    }

    /// All signatures in track order.
    pub fn signatures(&self) -> impl Iterator<Item = &str> {
        self.tracks
            .iter()
            .flat_map(|track| track.events.iter().map(|e| e.signature.as_str()))
    }
}

impl RawMessage {
    /// Converts a `midly` track event to the codec's message model.
    pub fn from_track_event(kind: &TrackEventKind<'_>) -> Self {
        match kind {
            TrackEventKind::Midi { channel, message } => {
                RawMessage::Short(short_from_midly(channel.as_int(), message))
            }
            TrackEventKind::SysEx(data) => RawMessage::SysEx {
                status: 0xF0,
                payload: data.to_vec(),
            },
            TrackEventKind::Escape(data) => RawMessage::SysEx {
                status: 0xF7,
                payload: data.to_vec(),
            },
            TrackEventKind::Meta(meta) => {
                let (meta_type, payload) = meta_bytes(meta);
                RawMessage::Meta { meta_type, payload }
            }
        }
    }
}

fn short_from_midly(channel: u8, message: &MidiMessage) -> ShortMessage {
    let voice = |command, data1, data2| ShortMessage::channel_voice(command, channel, data1, data2);
    match message {
        MidiMessage::NoteOff { key, vel } => voice(Command::NoteOff, key.as_int(), vel.as_int()),
        MidiMessage::NoteOn { key, vel } => voice(Command::NoteOn, key.as_int(), vel.as_int()),
        MidiMessage::Aftertouch { key, vel } => {
            voice(Command::PolyPressure, key.as_int(), vel.as_int())
        }
        MidiMessage::Controller { controller, value } => {
            voice(Command::ControlChange, controller.as_int(), value.as_int())
        }
        MidiMessage::ProgramChange { program } => voice(Command::ProgramChange, program.as_int(), 0),
        MidiMessage::ChannelAftertouch { vel } => voice(Command::ChannelPressure, vel.as_int(), 0),
        MidiMessage::PitchBend { bend } => ShortMessage::pitch_bend(channel, bend.0.as_int()),
    }
}

/// Re-encodes a parsed meta event as its type byte and raw payload.
fn meta_bytes(meta: &MetaMessage<'_>) -> (u8, Vec<u8>) {
    match meta {
        MetaMessage::TrackNumber(number) => (
            0x00,
            number.map(|n| n.to_be_bytes().to_vec()).unwrap_or_default(),
        ),
        MetaMessage::Text(text) => (0x01, text.to_vec()),
        MetaMessage::Copyright(text) => (0x02, text.to_vec()),
        MetaMessage::TrackName(text) => (0x03, text.to_vec()),
        MetaMessage::InstrumentName(text) => (0x04, text.to_vec()),
        MetaMessage::Lyric(text) => (0x05, text.to_vec()),
        MetaMessage::Marker(text) => (0x06, text.to_vec()),
        MetaMessage::CuePoint(text) => (0x07, text.to_vec()),
        MetaMessage::ProgramName(text) => (0x08, text.to_vec()),
        MetaMessage::DeviceName(text) => (0x09, text.to_vec()),
        MetaMessage::MidiChannel(channel) => (0x20, vec![channel.as_int()]),
        MetaMessage::MidiPort(port) => (0x21, vec![port.as_int()]),
        MetaMessage::EndOfTrack => (0x2F, Vec::new()),
        MetaMessage::Tempo(tempo) => (0x51, tempo.as_int().to_be_bytes()[1..].to_vec()),
        MetaMessage::SmpteOffset(time) => (0x54, smpte_bytes(time)),
        MetaMessage::TimeSignature(numerator, exponent, clocks, thirty_seconds) => {
            (0x58, vec![*numerator, *exponent, *clocks, *thirty_seconds])
        }
        MetaMessage::KeySignature(sharps, minor) => (0x59, vec![*sharps as u8, u8::from(*minor)]),
        MetaMessage::SequencerSpecific(data) => (0x7F, data.to_vec()),
        MetaMessage::Unknown(meta_type, data) => (*meta_type, data.to_vec()),
    }
}

/// Frame rate is packed into bits 5-6 of the hour byte.
fn smpte_bytes(time: &SmpteTime) -> Vec<u8> {
    let rate = match time.fps().as_int() {
        24 => 0,
        25 => 1,
        30 => 3,
        _ => 2,
    };
    vec![
        (rate << 5) | time.hour(),
        time.minute(),
        time.second(),
        time.frame(),
        time.subframe(),
    ]
}
