//! Standard MIDI File meta events.

use super::hex_dump;
use crate::error::BoundsError;
use crate::key::key_signature_name;

/// Labels for the text-like events 0x01-0x07.
const TEXT_EVENT_LABELS: [&str; 7] = [
    "Text Event: ",
    "Copyright Notice: ",
    "Sequence/Track Name: ",
    "Instrument Name: ",
    "Lyric: ",
    "Marker: ",
    "Cue Point: ",
];

pub(super) fn render(meta_type: u8, payload: &[u8]) -> Result<String, BoundsError> {
    let text = match meta_type {
        0x00 => {
            let number = fixed::<2>("Sequence Number", payload)?;
            format!("Sequence Number: {}", u16::from_be_bytes(number))
        }
        0x01..=0x07 => format!(
            "{}{}",
            TEXT_EVENT_LABELS[usize::from(meta_type - 1)],
            String::from_utf8_lossy(payload)
        ),
        0x20 => {
            let [channel] = fixed::<1>("MIDI Channel Prefix", payload)?;
            format!("MIDI Channel Prefix: {}", channel)
        }
        0x2F => "End of Track".to_string(),
        0x51 => {
            let [a, b, c] = fixed::<3>("Set Tempo", payload)?;
            let micros = u32::from_be_bytes([0, a, b, c]);
            format!("Set Tempo: {} bpm", format_bpm(tempo_to_bpm(micros)))
        }
        0x54 => {
            let [hours, minutes, seconds, frames, subframes] = fixed::<5>("SMPTE Offset", payload)?;
            format!(
                "SMTPE Offset: {}:{}:{}.{}.{}",
                hours, minutes, seconds, frames, subframes
            )
        }
        0x58 => {
            let [numerator, exponent, clocks, thirty_seconds] =
                fixed::<4>("Time Signature", payload)?;
            format!(
                "Time Signature: {}/{}, MIDI clocks per metronome tick: {}, 1/32 per 24 MIDI clocks: {}",
                numerator,
                1i32.wrapping_shl(u32::from(exponent)),
                clocks,
                thirty_seconds
            )
        }
        0x59 => {
            let [sharps, mode] = fixed::<2>("Key Signature", payload)?;
            let sharps = sharps as i8;
            let name =
                key_signature_name(sharps).ok_or(BoundsError::KeySignatureOutOfRange(sharps))?;
            let mode = if mode == 1 { "minor" } else { "major" };
            format!("Key Signature: {} {}", name, mode)
        }
        0x7F => format!("Sequencer-Specific Meta event: {}", hex_dump(payload)),
        _ => format!("unknown Meta event: {}", hex_dump(payload)),
    };
    Ok(text)
}

/// First `N` payload bytes; trailing bytes are ignored.
fn fixed<const N: usize>(event: &'static str, payload: &[u8]) -> Result<[u8; N], BoundsError> {
    payload
        .get(..N)
        .and_then(|bytes| <[u8; N]>::try_from(bytes).ok())
        .ok_or(BoundsError::Truncated {
            event,
            expected: N,
            actual: payload.len(),
        })
}

/// Microseconds per quarter note to BPM, rounded to two decimals.
fn tempo_to_bpm(micros: u32) -> f32 {
    let micros = if micros == 0 { 0.1 } else { micros as f32 };
    let bpm = 60_000_000.0 / micros;
    (bpm * 100.0).round() / 100.0
}

/// Whole numbers keep one fractional digit (`120.0`); from 10^7 up the
/// value switches to `6.0E7` notation.
fn format_bpm(bpm: f32) -> String {
    if bpm >= 1.0e7 {
        let text = format!("{:E}", bpm);
        return match text.split_once('E') {
            Some((mantissa, exponent)) if !mantissa.contains('.') => {
                format!("{}.0E{}", mantissa, exponent)
            }
            _ => text,
        };
    }
    if bpm.fract() == 0.0 {
        format!("{:.1}", bpm)
    } else {
        bpm.to_string()
    }
}
