//! Caution/crisis override.
//!
//! The caution flag is raised by a crisis severity band, or by any non-zero
//! answer on an instrument's self-harm item, whichever band the total lands in.

use careconnect_core::models::severity::Severity;

use crate::error::InstrumentError;
use crate::Instrument;

/// Whether a result must be flagged for caution.
///
/// `crisis_answer` is the raw answer to the instrument's self-harm item; it
/// is ignored for instruments without one.
pub fn needs_caution<I: Instrument + ?Sized>(
    instrument: &I,
    severity: Severity,
    crisis_answer: Option<i32>,
) -> bool {
    if severity.is_crisis() {
        return true;
    }
    instrument.crisis_item().is_some() && crisis_answer.is_some_and(|answer| answer > 0)
}

/// Pick the self-harm item answer for `answers`, rejecting a separately
/// supplied value that disagrees with the vector or has no item to refer to.
///
/// `answers` must already have been validated against the instrument.
pub fn resolve_crisis_answer<I: Instrument + ?Sized>(
    instrument: &I,
    answers: &[i32],
    supplied: Option<i32>,
) -> Result<Option<i32>, InstrumentError> {
    let Some(item) = instrument.crisis_item() else {
        return match supplied {
            Some(_) => Err(InstrumentError::UnexpectedCrisisItem {
                instrument_id: instrument.id().to_string(),
            }),
            None => Ok(None),
        };
    };

    let recorded = item.checked_sub(1).and_then(|i| answers.get(i)).copied();
    match (recorded, supplied) {
        (Some(recorded), Some(supplied)) if recorded != supplied => {
            Err(InstrumentError::CrisisItemMismatch {
                instrument_id: instrument.id().to_string(),
                item,
                supplied,
                recorded,
            })
        }
        (recorded, _) => Ok(recorded),
    }
}
