use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Coarse triage outcome derived from a severity band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RecommendationTier {
    /// Self-guided care: breathing, journaling, mood tracking.
    SelfCare,
    /// Guided support through the chatbot and the resource hub.
    Chatbot,
    /// Escalate to a counselor or a helpline.
    Counselor,
}

impl RecommendationTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationTier::SelfCare => "self_care",
            RecommendationTier::Chatbot => "chatbot",
            RecommendationTier::Counselor => "counselor",
        }
    }

    /// Human-readable label shown next to a test result.
    pub fn label(&self) -> &'static str {
        match self {
            RecommendationTier::SelfCare => "Self-Care",
            RecommendationTier::Chatbot => "Chatbot & Resource Hub",
            RecommendationTier::Counselor => "Counselor or Helpline",
        }
    }
}

impl fmt::Display for RecommendationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecommendationTier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "self_care" => Ok(RecommendationTier::SelfCare),
            "chatbot" => Ok(RecommendationTier::Chatbot),
            "counselor" => Ok(RecommendationTier::Counselor),
            other => Err(CoreError::UnknownTier(other.to_string())),
        }
    }
}
