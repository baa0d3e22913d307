//! Trigger list and MIDI file persistence tests

use crate::helpers::*;
use midi_automator::prelude::*;

#[test]
fn test_save_and_load_triggers() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("triggers.txt");

    let automator = test_automator();
    automator.triggers().bind(&cc(15, 1, 127)).unwrap();
    automator.triggers().bind(&cc(15, 2, 127)).unwrap();
    automator
        .triggers()
        .bind(&RawMessage::from(ShortMessage::note_on(0, 60, 100)))
        .unwrap();
    automator.save_triggers(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    insta::assert_snapshot!(text, @r"
    channel 16: CONTROL CHANGE 1 value: 127
    channel 16: CONTROL CHANGE 2 value: 127
    channel 1: NOTE ON C3
    ");

    let restored = test_automator();
    assert_eq!(restored.load_triggers(&path).unwrap(), 3);
    assert_eq!(restored.triggers().signatures(), automator.triggers().signatures());
    assert_eq!(restored.handle(&cc(15, 2, 127)).matched.len(), 1);
}

#[test]
fn test_load_skips_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("triggers.txt");
    std::fs::write(
        &path,
        "channel 1: CONTROL CHANGE 7 value: 127\r\n\r\nnot a signature\n\n",
    )
    .unwrap();

    let automator = test_automator();
    assert_eq!(automator.load_triggers(&path).unwrap(), 2);

    let all = automator.triggers().all();
    assert!(all[0].1.is_triggerable());
    assert_eq!(all[1].1.signature(), "not a signature");
    assert!(!all[1].1.is_triggerable());
}

#[test]
fn test_signatures_with_trailing_space_survive_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("triggers.txt");

    let automator = MidiAutomator::builder()
        .triggers(["Cue Point: ", "Text Event: ", "channel 1: CONTROL CHANGE 7 value: 127"])
        .build()
        .unwrap();
    automator.save_triggers(&path).unwrap();

    let restored = test_automator();
    assert_eq!(restored.load_triggers(&path).unwrap(), 3);
    assert_eq!(
        restored.triggers().signatures(),
        vec!["Cue Point: ", "Text Event: ", "channel 1: CONTROL CHANGE 7 value: 127"]
    );
}

#[test]
fn test_load_missing_file() {
    let automator = test_automator();
    let err = automator
        .load_triggers("/nonexistent/automator/triggers.txt")
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_dump_file_counts_into_stats() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("song.mid");
    std::fs::write(
        &path,
        smf_bytes(&[
            0x00, 0xB0, 0x07, 0x64, // volume
            0x00, 0xC0, 0x05, // program change
            0x00, 0xFF, 0x2F, 0x00, // end of track
        ]),
    )
    .unwrap();

    let automator = test_automator();
    let dump = automator.dump_file(&path).unwrap();
    assert_eq!(
        dump.signatures().collect::<Vec<_>>(),
        vec![
            "channel 1: CONTROL CHANGE 7 value: 100",
            "channel 1: PROGRAM CHANGE 5",
            "End of Track",
        ]
    );

    let snapshot = automator.stats().unwrap().snapshot();
    assert_eq!(snapshot.short_messages, 2);
    assert_eq!(snapshot.meta_messages, 1);
}

#[test]
fn test_dump_file_rejects_garbage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.mid");
    std::fs::write(&path, b"not a midi file").unwrap();

    let err = test_automator().dump_file(&path).unwrap_err();
    assert!(matches!(err, Error::Midi(_)));
}
