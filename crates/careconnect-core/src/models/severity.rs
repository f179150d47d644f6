use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

use super::recommendation::RecommendationTier;

/// Clinical severity band label produced by an instrument's cut points.
///
/// The set is the union of every instrument's bands; a given instrument
/// only ever yields the labels in its own band table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Severity {
    #[serde(rename = "None/Minimal")]
    NoneMinimal,
    #[serde(rename = "Minimal")]
    Minimal,
    #[serde(rename = "Mild")]
    Mild,
    #[serde(rename = "Moderate")]
    Moderate,
    #[serde(rename = "Moderately Severe")]
    ModeratelySevere,
    #[serde(rename = "Severe")]
    Severe,
    #[serde(rename = "Low stress")]
    LowStress,
    #[serde(rename = "Moderate stress")]
    ModerateStress,
    #[serde(rename = "High stress")]
    HighStress,
}

impl Severity {
    pub const ALL: [Severity; 9] = [
        Severity::NoneMinimal,
        Severity::Minimal,
        Severity::Mild,
        Severity::Moderate,
        Severity::ModeratelySevere,
        Severity::Severe,
        Severity::LowStress,
        Severity::ModerateStress,
        Severity::HighStress,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Severity::NoneMinimal => "None/Minimal",
            Severity::Minimal => "Minimal",
            Severity::Mild => "Mild",
            Severity::Moderate => "Moderate",
            Severity::ModeratelySevere => "Moderately Severe",
            Severity::Severe => "Severe",
            Severity::LowStress => "Low stress",
            Severity::ModerateStress => "Moderate stress",
            Severity::HighStress => "High stress",
        }
    }

    /// Triage tier for this band.
    pub fn recommendation_tier(&self) -> RecommendationTier {
        match self {
            Severity::NoneMinimal | Severity::Minimal | Severity::LowStress | Severity::Mild => {
                RecommendationTier::SelfCare
            }
            Severity::Moderate | Severity::ModerateStress | Severity::ModeratelySevere => {
                RecommendationTier::Chatbot
            }
            Severity::Severe | Severity::HighStress => RecommendationTier::Counselor,
        }
    }

    /// Bands that force the caution flag on their own.
    pub fn is_crisis(&self) -> bool {
        matches!(self, Severity::Severe | Severity::HighStress)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Severity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|severity| severity.label() == s)
            .ok_or_else(|| CoreError::UnknownSeverity(s.to_string()))
    }
}
