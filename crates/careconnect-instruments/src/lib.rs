//! careconnect-instruments
//!
//! Screening instrument definitions and the scoring & triage engine.
//! Pure data and pure functions: no I/O, no logging, no shared mutable state.
//! Turns a raw answer vector into a total score, a severity band, a
//! recommendation tier, and a caution flag.

pub mod error;
pub mod instruments;
pub mod scoring;
pub mod triage;

use careconnect_core::models::severity::Severity;

use error::InstrumentError;
use scoring::{AnswerScale, Item, ScoreResult, SeverityBand, ValidationError};

/// Trait implemented by each screening instrument.
pub trait Instrument: Send + Sync {
    /// Canonical identifier (e.g., "PHQ-9", "PSS-10").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "PHQ-9 (Depression Screening)").
    fn name(&self) -> &str;

    /// Older identifiers still accepted on lookup.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// Response options shared by every item.
    fn scale(&self) -> &AnswerScale;

    /// Items in questionnaire order.
    fn items(&self) -> &[Item];

    /// Ordered cut-point bands covering `0..=max_total()`.
    fn bands(&self) -> &[SeverityBand];

    /// 1-based item whose non-zero answer signals self-harm ideation.
    fn crisis_item(&self) -> Option<usize> {
        None
    }

    fn item_count(&self) -> usize {
        self.items().len()
    }

    fn max_total(&self) -> u32 {
        self.item_count() as u32 * self.scale().max.max(0) as u32
    }

    fn reverse_scored_items(&self) -> Vec<usize> {
        self.items()
            .iter()
            .filter(|item| item.reverse_scored)
            .map(|item| item.number)
            .collect()
    }

    /// Check answer count and that every answer lies on the scale.
    fn validate_answers(&self, answers: &[i32]) -> Result<(), InstrumentError> {
        if answers.len() != self.item_count() {
            return Err(InstrumentError::AnswerCount {
                instrument_id: self.id().to_string(),
                expected: self.item_count(),
                actual: answers.len(),
            });
        }

        let range = self.scale().range();
        let errors: Vec<ValidationError> = self
            .items()
            .iter()
            .zip(answers)
            .filter(|(_, value)| !range.contains(**value))
            .map(|(item, &value)| ValidationError {
                item: item.number,
                value,
                expected_range: range,
                message: format!(
                    "{}: item {} answer {} is outside range [{}, {}]",
                    self.name(),
                    item.number,
                    value,
                    range.min,
                    range.max,
                ),
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(InstrumentError::InvalidAnswers {
                instrument_id: self.id().to_string(),
                errors,
            })
        }
    }

    /// Sum of item contributions, reverse-scored items contributing `max - raw`.
    fn total_score(&self, answers: &[i32]) -> Result<u32, InstrumentError> {
        self.validate_answers(answers)?;
        let max = self.scale().max;
        let total = self
            .items()
            .iter()
            .zip(answers)
            .map(|(item, &raw)| if item.reverse_scored { max - raw } else { raw })
            .sum::<i32>();
        Ok(total as u32)
    }

    /// Label of the first band containing `total`.
    fn severity_for(&self, total: u32) -> Option<Severity> {
        self.bands()
            .iter()
            .find(|band| band.contains(total))
            .map(|band| band.severity)
    }

    /// Verify the band table partitions `0..=max_total()` with no gaps and
    /// no overlaps.
    fn check_bands(&self) -> Result<(), InstrumentError> {
        let max_total = self.max_total();
        for band in self.bands() {
            if band.min > band.max || band.max > max_total {
                return Err(InstrumentError::BandOutOfRange {
                    instrument_id: self.id().to_string(),
                    min: band.min,
                    max: band.max,
                    max_total,
                });
            }
        }
        for score in 0..=max_total {
            match self.bands().iter().filter(|b| b.contains(score)).count() {
                0 => {
                    return Err(InstrumentError::BandGap {
                        instrument_id: self.id().to_string(),
                        score,
                    });
                }
                1 => {}
                _ => {
                    return Err(InstrumentError::BandOverlap {
                        instrument_id: self.id().to_string(),
                        score,
                    });
                }
            }
        }
        Ok(())
    }

    /// Score a complete answer vector.
    fn score(&self, answers: &[i32]) -> Result<ScoreResult, InstrumentError> {
        self.score_with_crisis_answer(answers, None)
    }

    /// Score a complete answer vector, cross-checking a separately captured
    /// crisis-item answer against the vector.
    fn score_with_crisis_answer(
        &self,
        answers: &[i32],
        crisis_answer: Option<i32>,
    ) -> Result<ScoreResult, InstrumentError> {
        let total_score = self.total_score(answers)?;
        let crisis_answer = triage::resolve_crisis_answer(self, answers, crisis_answer)?;

        let severity = self
            .severity_for(total_score)
            .ok_or_else(|| InstrumentError::BandGap {
                instrument_id: self.id().to_string(),
                score: total_score,
            })?;

        Ok(ScoreResult {
            instrument_id: self.id().to_string(),
            total_score,
            severity,
            recommendation_tier: severity.recommendation_tier(),
            needs_caution: triage::needs_caution(self, severity, crisis_answer),
        })
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::phq9::Phq9),
        Box::new(instruments::gad7::Gad7),
        Box::new(instruments::pss10::Pss10),
    ]
}

/// Look up an instrument by ID or alias.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments()
        .into_iter()
        .find(|i| i.id() == id || i.aliases().contains(&id))
}

/// Score answers for the instrument named by `instrument_id`.
///
/// `item9_answer` is the self-harm item answer when the caller captured it
/// separately from the vector; it must agree with the vector.
pub fn score(
    instrument_id: &str,
    answers: &[i32],
    item9_answer: Option<i32>,
) -> Result<ScoreResult, InstrumentError> {
    let instrument = get_instrument(instrument_id)
        .ok_or_else(|| InstrumentError::UnknownInstrument(instrument_id.to_string()))?;
    instrument.score_with_crisis_answer(answers, item9_answer)
}
