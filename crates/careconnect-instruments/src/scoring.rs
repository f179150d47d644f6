use careconnect_core::models::recommendation::RecommendationTier;
use careconnect_core::models::severity::Severity;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Inclusive range of raw answer values accepted for every item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerRange {
    pub min: i32,
    pub max: i32,
}

impl AnswerRange {
    pub fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// The response options shared by all items of an instrument.
///
/// Answers run from 0 to `max`; `labels[v]` is the wording shown for value `v`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerScale {
    pub max: i32,
    pub labels: Vec<String>,
}

impl AnswerScale {
    pub fn new(labels: &[&str]) -> Self {
        Self {
            max: labels.len() as i32 - 1,
            labels: labels.iter().map(|l| l.to_string()).collect(),
        }
    }

    pub fn range(&self) -> AnswerRange {
        AnswerRange {
            min: 0,
            max: self.max,
        }
    }

    pub fn label(&self, value: i32) -> Option<&str> {
        usize::try_from(value)
            .ok()
            .and_then(|v| self.labels.get(v))
            .map(String::as_str)
    }
}

/// A single questionnaire item.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    /// 1-based position in the questionnaire.
    pub number: usize,
    pub prompt: String,
    /// Phrased in the opposite sense to the rest of the scale; scored as `max - raw`.
    pub reverse_scored: bool,
}

/// Build numbered items from their prompts, flagging the given 1-based
/// positions as reverse-scored.
pub fn numbered_items(prompts: &[&str], reverse_scored: &[usize]) -> Vec<Item> {
    prompts
        .iter()
        .enumerate()
        .map(|(i, prompt)| Item {
            number: i + 1,
            prompt: prompt.to_string(),
            reverse_scored: reverse_scored.contains(&(i + 1)),
        })
        .collect()
}

/// An inclusive cut-point band mapping total scores to a severity label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeverityBand {
    pub min: u32,
    pub max: u32,
    pub severity: Severity,
}

impl SeverityBand {
    pub const fn new(min: u32, max: u32, severity: Severity) -> Self {
        Self { min, max, severity }
    }

    pub fn contains(&self, score: u32) -> bool {
        score >= self.min && score <= self.max
    }
}

/// Outcome of scoring one completed questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub instrument_id: String,
    pub total_score: u32,
    pub severity: Severity,
    pub recommendation_tier: RecommendationTier,
    pub needs_caution: bool,
}

/// One out-of-range answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    /// 1-based item number.
    pub item: usize,
    pub value: i32,
    pub expected_range: AnswerRange,
    pub message: String,
}
