//! Test helpers and fixtures for midi-automator integration tests

use midi_automator::prelude::*;

/// Signature of the built-in "open file" command in these tests.
pub const MASTER_SIGNATURE: &str = "channel 1: CONTROL CHANGE 102 value: 127";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn test_automator() -> MidiAutomator {
    MidiAutomator::builder()
        .stats()
        .reserve(MASTER_SIGNATURE)
        .build()
        .expect("Failed to create test automator")
}

pub fn cc(channel: u8, controller: u8, value: u8) -> RawMessage {
    RawMessage::from(ShortMessage::control_change(channel, controller, value))
}

/// Minimal format 0 MIDI file: one track, 480 ticks per beat.
pub fn smf_bytes(events: &[u8]) -> Vec<u8> {
    let mut data = b"MThd".to_vec();
    data.extend_from_slice(&[0x00, 0x00, 0x00, 0x06, 0x00, 0x00, 0x00, 0x01, 0x01, 0xE0]);
    data.extend_from_slice(b"MTrk");
    data.extend_from_slice(&(events.len() as u32).to_be_bytes());
    data.extend_from_slice(events);
    data
}
