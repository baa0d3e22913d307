//! MIDI learn integration tests

use crate::helpers::*;
use midi_automator::learn::Error as LearnError;
use midi_automator::prelude::*;

#[test]
fn test_learn_then_trigger() {
    init_tracing();
    let automator = test_automator();

    automator.triggers().start_learn(None);
    let dispatch = automator.handle(&cc(15, 1, 127));
    assert_eq!(dispatch.signature, "channel 16: CONTROL CHANGE 1 value: 127");
    assert!(dispatch.matched.is_empty());
    let id = dispatch.learned.unwrap().unwrap();

    let dispatch = automator.handle(&cc(15, 1, 127));
    assert_eq!(dispatch.matched, vec![id]);
    assert_eq!(dispatch.learned, None);
}

#[test]
fn test_learned_note_is_normalized() {
    let automator = test_automator();

    automator.triggers().start_learn(None);
    let dispatch = automator.handle(&RawMessage::from(ShortMessage::note_on(2, 64, 93)));
    assert_eq!(dispatch.signature, "channel 3: NOTE ON E3");
    let id = dispatch.learned.unwrap().unwrap();
    assert_eq!(
        automator.triggers().get(id).unwrap().signature(),
        "channel 3: NOTE ON E3"
    );

    automator.triggers().start_learn(None);
    let dispatch = automator.handle(&RawMessage::from(ShortMessage::note_on(2, 64, 12)));
    assert!(matches!(
        dispatch.learned,
        Some(Err(LearnError::DuplicateSignature { existing: Some(existing), .. })) if existing == id
    ));
}

#[test]
fn test_master_signature_cannot_be_learned() {
    let automator = test_automator();

    automator.triggers().start_learn(None);
    let dispatch = automator.handle(&cc(0, 102, 127));
    match dispatch.learned {
        Some(Err(LearnError::DuplicateSignature { signature, existing })) => {
            assert_eq!(signature, MASTER_SIGNATURE);
            assert_eq!(existing, None);
        }
        other => panic!("expected duplicate, got {other:?}"),
    }
    assert!(automator.triggers().is_empty());
    assert!(!automator.triggers().is_learning());
}

#[test]
fn test_build_rejects_reserved_trigger() {
    let result = MidiAutomator::builder()
        .reserve(MASTER_SIGNATURE)
        .trigger(MASTER_SIGNATURE)
        .build();

    match result {
        Err(Error::Learn(LearnError::DuplicateSignature { signature, .. })) => {
            assert_eq!(signature, MASTER_SIGNATURE)
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("reserved signature accepted"),
    }
}

#[test]
fn test_relearn_entry_keeps_id() {
    let automator = MidiAutomator::builder()
        .trigger("channel 1: CONTROL CHANGE 1 value: 127")
        .build()
        .unwrap();
    let (id, _) = automator.triggers().all().remove(0);

    automator.triggers().start_learn(Some(id));
    let dispatch = automator.handle(&cc(0, 2, 127));
    assert_eq!(dispatch.learned, Some(Ok(id)));

    assert!(automator.handle(&cc(0, 1, 127)).matched.is_empty());
    assert_eq!(automator.handle(&cc(0, 2, 127)).matched, vec![id]);
}

#[test]
fn test_clock_does_not_complete_learn() {
    let automator = test_automator();
    automator.triggers().start_learn(None);

    for _ in 0..24 {
        let dispatch = automator.handle(&RawMessage::from_bytes(&[0xF8]));
        assert_eq!(dispatch.learned, None);
    }
    assert!(automator.triggers().is_learning());

    automator.triggers().cancel_learn();
    assert!(automator.handle(&cc(0, 9, 9)).learned.is_none());
}

#[test]
fn test_learn_error_converts_to_umbrella_error() {
    fn learn(automator: &MidiAutomator, message: &RawMessage) -> Result<TriggerId> {
        Ok(automator.triggers().bind(message)?)
    }

    let automator = test_automator();
    learn(&automator, &cc(0, 20, 1)).unwrap();
    let err = learn(&automator, &cc(0, 20, 1)).unwrap_err();
    assert!(err.to_string().starts_with("Learn: MIDI signature"));
}
