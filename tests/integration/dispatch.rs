//! Live message dispatch tests

use crate::helpers::*;
use midi_automator::prelude::*;

#[test]
fn test_handle_decodes_and_matches() {
    init_tracing();

    let automator = MidiAutomator::builder()
        .triggers([
            "channel 16: CONTROL CHANGE 1 value: 127",
            "channel 16: CONTROL CHANGE 2 value: 127",
        ])
        .build()
        .unwrap();
    let ids: Vec<TriggerId> = automator.triggers().all().into_iter().map(|(id, _)| id).collect();

    let dispatch = automator.handle(&cc(15, 2, 127));
    assert_eq!(dispatch.signature, "channel 16: CONTROL CHANGE 2 value: 127");
    assert_eq!(dispatch.matched, vec![ids[1]]);
    assert_eq!(dispatch.learned, None);

    let dispatch = automator.handle(&cc(15, 2, 0));
    assert!(dispatch.matched.is_empty());
}

#[test]
fn test_handle_non_voice_messages() {
    let automator = test_automator();

    let dispatch = automator.handle(&RawMessage::from_bytes(&[0xF8]));
    assert_eq!(dispatch.signature, "Timing clock");
    assert!(dispatch.matched.is_empty());

    let dispatch = automator.handle(&RawMessage::from_bytes(&[0xF0, 0x7E, 0xF7]));
    assert_eq!(dispatch.signature, "Sysex message: F0 7E F7");

    let dispatch = automator.handle(&RawMessage::Unknown);
    assert_eq!(dispatch.signature, midi_automator::midi::UNKNOWN_MESSAGE);
}

#[test]
fn test_display_only_triggers_never_fire() {
    let automator = MidiAutomator::builder()
        .trigger("channel 1: NOTE ON C3")
        .build()
        .unwrap();

    let (_, trigger) = automator.triggers().all().remove(0);
    assert!(!trigger.is_triggerable());

    let dispatch = automator.handle(&RawMessage::from(ShortMessage::note_on(0, 60, 100)));
    assert_eq!(dispatch.signature, "channel 1: NOTE ON C3");
    assert!(dispatch.matched.is_empty());
}

#[test]
fn test_stats_count_handled_messages() {
    let automator = test_automator();
    for value in 0..10u8 {
        automator.handle(&cc(0, 7, value));
    }
    automator.handle(&RawMessage::from_bytes(&[0xC0, 5]));

    let snapshot = automator.stats().unwrap().snapshot();
    assert_eq!(snapshot.short_messages, 11);
    assert_eq!(snapshot.short_bytes, 32);
    assert_eq!(snapshot.total_messages, 11);
}

#[test]
fn test_stats_disabled_by_default() {
    let automator = MidiAutomator::builder().build().unwrap();
    assert!(automator.stats().is_none());
}

#[test]
fn test_shared_stats_between_automators() {
    let stats = std::sync::Arc::new(midi_automator::DecodeStats::new());
    let first = MidiAutomator::builder()
        .shared_stats(stats.clone())
        .build()
        .unwrap();
    let second = MidiAutomator::builder()
        .shared_stats(stats.clone())
        .build()
        .unwrap();

    first.handle(&cc(0, 1, 1));
    second.handle(&cc(1, 1, 1));
    assert_eq!(stats.snapshot().short_messages, 2);
}
