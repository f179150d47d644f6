use thiserror::Error;

use crate::scoring::ValidationError;

/// Rejected scoring input, or a malformed instrument definition.
///
/// Scoring never clamps or guesses: every variant is surfaced to the caller.
#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("{instrument_id}: expected {expected} answers, got {actual}")]
    AnswerCount {
        instrument_id: String,
        expected: usize,
        actual: usize,
    },

    #[error("{instrument_id}: {} answer(s) out of range", .errors.len())]
    InvalidAnswers {
        instrument_id: String,
        errors: Vec<ValidationError>,
    },

    #[error(
        "{instrument_id}: item {item} answer given separately as {supplied} but recorded as {recorded}"
    )]
    CrisisItemMismatch {
        instrument_id: String,
        item: usize,
        supplied: i32,
        recorded: i32,
    },

    #[error("{instrument_id} has no self-harm item, but one was supplied")]
    UnexpectedCrisisItem { instrument_id: String },

    #[error("{instrument_id}: score {score} is not covered by any severity band")]
    BandGap { instrument_id: String, score: u32 },

    #[error("{instrument_id}: score {score} is covered by more than one severity band")]
    BandOverlap { instrument_id: String, score: u32 },

    #[error("{instrument_id}: severity band {min}-{max} lies outside 0-{max_total}")]
    BandOutOfRange {
        instrument_id: String,
        min: u32,
        max: u32,
        max_total: u32,
    },
}
