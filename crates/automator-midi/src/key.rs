//! Key names for note bytes and key signatures.
//!
//! Octaves follow the `byte / 12 - 2` convention, so note 60 is `C3`.

const KEY_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Indexed by sharps/flats count + 7.
const KEY_SIGNATURES: [&str; 15] = [
    "Cb", "Gb", "Db", "Ab", "Eb", "Bb", "F", "C", "G", "D", "A", "E", "B", "F#", "C#",
];

/// Rendered for note bytes above 127.
pub const ILLEGAL_KEY: &str = "illegal value";

/// Pitch class and octave of a note byte, e.g. `C#4`.
pub fn key_name(key: u8) -> String {
    if key > 127 {
        return ILLEGAL_KEY.to_string();
    }
    let octave = i32::from(key / 12) - 2;
    format!("{}{}", KEY_NAMES[usize::from(key % 12)], octave)
}

/// Inverse of [`key_name`] split into its parts.
///
/// Returns `None` for unknown pitch classes and for results outside 0..=127.
pub fn key_number(pitch_class: &str, octave: i32) -> Option<u8> {
    let index = KEY_NAMES.iter().position(|name| *name == pitch_class)?;
    let number = octave
        .checked_add(2)?
        .checked_mul(12)?
        .checked_add(index as i32)?;
    u8::try_from(number).ok().filter(|n| *n <= 127)
}

/// Major-key name for a signed sharps (positive) or flats (negative) count.
pub fn key_signature_name(sharps: i8) -> Option<&'static str> {
    let index = usize::try_from(i16::from(sharps) + 7).ok()?;
    KEY_SIGNATURES.get(index).copied()
}
