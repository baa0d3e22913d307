//! Integration test modules for midi-automator
//!
//! - dispatch: live messages through the automator
//! - learn: MIDI learn, duplicates, reserved signatures
//! - persistence: trigger lists and MIDI file dumps on disk

pub mod dispatch;
pub mod learn;
pub mod persistence;
