use std::path::PathBuf;

use careconnect_core::models::urgency::Urgency;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("rule table I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("rules_version {found} is newer than this build supports ({supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("rule at position {0} has an empty id")]
    EmptyRuleId(usize),

    #[error("duplicate rule id: {0}")]
    DuplicateRule(String),

    #[error("rule '{0}' has no keywords")]
    NoKeywords(String),

    #[error("rule '{0}' has a blank keyword")]
    BlankKeyword(String),

    #[error("rule '{rule_id}' has distress level {level}, expected 1-10")]
    DistressOutOfRange { rule_id: String, level: u8 },

    #[error("severe rule '{rule_id}' is placed after non-severe rule '{after}'")]
    SevereRuleOutOfOrder { rule_id: String, after: String },

    #[error("fallback reply must be mild, got {0}")]
    FallbackUrgency(Urgency),
}
