use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Urgency tag attached to a chat reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Urgency {
    Mild,
    Moderate,
    Severe,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Mild => "mild",
            Urgency::Moderate => "moderate",
            Urgency::Severe => "severe",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Urgency {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mild" => Ok(Urgency::Mild),
            "moderate" => Ok(Urgency::Moderate),
            "severe" => Ok(Urgency::Severe),
            other => Err(CoreError::UnknownUrgency(other.to_string())),
        }
    }
}
