use careconnect_core::models::severity::Severity;
use careconnect_instruments::error::InstrumentError;
use careconnect_instruments::instruments::gad7::Gad7;
use careconnect_instruments::instruments::phq9::Phq9;
use careconnect_instruments::instruments::pss10::Pss10;
use careconnect_instruments::score;
use careconnect_instruments::triage::needs_caution;

#[test]
fn self_harm_item_raises_caution_in_lowest_band() {
    let result = score("PHQ-9", &[0, 0, 0, 0, 0, 0, 0, 0, 3], None).unwrap();
    assert_eq!(result.total_score, 3);
    assert_eq!(result.severity, Severity::NoneMinimal);
    assert!(result.needs_caution);
}

#[test]
fn self_harm_item_at_one_is_enough() {
    let result = score("PHQ-9", &[0, 0, 0, 0, 0, 0, 0, 0, 1], Some(1)).unwrap();
    assert!(result.needs_caution);
}

#[test]
fn zero_self_harm_item_in_low_band_is_not_cautioned() {
    let result = score("PHQ-9", &[1, 1, 1, 0, 0, 0, 0, 0, 0], Some(0)).unwrap();
    assert!(!result.needs_caution);
}

#[test]
fn override_is_checkable_without_scoring() {
    assert!(needs_caution(&Phq9, Severity::NoneMinimal, Some(2)));
    assert!(!needs_caution(&Phq9, Severity::Mild, Some(0)));
    assert!(!needs_caution(&Phq9, Severity::Moderate, None));
    assert!(needs_caution(&Phq9, Severity::Severe, Some(0)));
    assert!(needs_caution(&Pss10, Severity::HighStress, None));
    // Instruments without a self-harm item ignore the answer.
    assert!(!needs_caution(&Gad7, Severity::Mild, Some(3)));
}

#[test]
fn separately_supplied_item9_must_match_vector() {
    let err = score("PHQ-9", &[0, 0, 0, 0, 0, 0, 0, 0, 0], Some(2)).unwrap_err();
    match err {
        InstrumentError::CrisisItemMismatch {
            item,
            supplied,
            recorded,
            ..
        } => {
            assert_eq!(item, 9);
            assert_eq!(supplied, 2);
            assert_eq!(recorded, 0);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn item9_for_instrument_without_one_is_rejected() {
    let err = score("GAD-7", &[0; 7], Some(0)).unwrap_err();
    assert!(matches!(err, InstrumentError::UnexpectedCrisisItem { .. }));
}

#[test]
fn answer_validation_precedes_item9_check() {
    let err = score("PHQ-9", &[0; 8], Some(1)).unwrap_err();
    assert!(matches!(err, InstrumentError::AnswerCount { .. }));
}
