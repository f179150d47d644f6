use std::collections::HashSet;

use careconnect_core::models::urgency::Urgency;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ChatError;

/// Valid distress levels recorded against a chat session.
pub const DISTRESS_LEVELS: std::ops::RangeInclusive<u8> = 1..=10;

/// One keyword rule: any keyword found in the message selects the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClassificationRule {
    pub id: String,
    pub keywords: Vec<String>,
    pub response: String,
    pub urgency: Urgency,
    /// Session distress level (1-10) the caller records for this match.
    pub distress_level: u8,
}

impl ClassificationRule {
    /// `text` must already be normalized with [`normalize`].
    pub fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|keyword| text.contains(keyword.as_str()))
    }
}

/// Reply used when no rule matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Fallback {
    pub response: String,
    pub urgency: Urgency,
    pub distress_level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClassificationResult {
    /// Id of the matching rule; `None` for the fallback reply.
    pub rule_id: Option<String>,
    pub message: String,
    pub urgency: Urgency,
    pub distress_level: u8,
}

impl ClassificationResult {
    pub fn is_crisis(&self) -> bool {
        self.urgency == Urgency::Severe
    }

    pub fn is_fallback(&self) -> bool {
        self.rule_id.is_none()
    }
}

/// Case-fold a message for keyword search. Typographic apostrophes are
/// folded to ASCII so "can’t" matches "can't".
pub fn normalize(text: &str) -> String {
    text.to_lowercase().replace('\u{2019}', "'")
}

/// Ordered keyword rules plus a fallback reply. First match wins.
///
/// Construct with [`RuleTable::new`], which normalizes keywords and rejects
/// tables where a severe rule could be shadowed by a milder one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleTable {
    pub(crate) rules: Vec<ClassificationRule>,
    pub(crate) fallback: Fallback,
}

impl RuleTable {
    pub fn new(rules: Vec<ClassificationRule>, fallback: Fallback) -> Result<Self, ChatError> {
        let rules = rules
            .into_iter()
            .map(|mut rule| {
                rule.keywords = rule.keywords.iter().map(|k| normalize(k)).collect();
                rule
            })
            .collect();
        let table = Self { rules, fallback };
        table.validate()?;
        Ok(table)
    }

    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }

    pub fn fallback(&self) -> &Fallback {
        &self.fallback
    }

    pub fn validate(&self) -> Result<(), ChatError> {
        let mut seen = HashSet::new();
        let mut first_non_severe: Option<&str> = None;

        for (position, rule) in self.rules.iter().enumerate() {
            if rule.id.trim().is_empty() {
                return Err(ChatError::EmptyRuleId(position));
            }
            if !seen.insert(rule.id.as_str()) {
                return Err(ChatError::DuplicateRule(rule.id.clone()));
            }
            if rule.keywords.is_empty() {
                return Err(ChatError::NoKeywords(rule.id.clone()));
            }
            if rule.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(ChatError::BlankKeyword(rule.id.clone()));
            }
            if !DISTRESS_LEVELS.contains(&rule.distress_level) {
                return Err(ChatError::DistressOutOfRange {
                    rule_id: rule.id.clone(),
                    level: rule.distress_level,
                });
            }

            match (rule.urgency, first_non_severe) {
                (Urgency::Severe, Some(after)) => {
                    return Err(ChatError::SevereRuleOutOfOrder {
                        rule_id: rule.id.clone(),
                        after: after.to_string(),
                    });
                }
                (Urgency::Severe, None) => {}
                (_, None) => first_non_severe = Some(rule.id.as_str()),
                (_, Some(_)) => {}
            }
        }

        if self.fallback.urgency != Urgency::Mild {
            return Err(ChatError::FallbackUrgency(self.fallback.urgency));
        }
        if !DISTRESS_LEVELS.contains(&self.fallback.distress_level) {
            return Err(ChatError::DistressOutOfRange {
                rule_id: "fallback".to_string(),
                level: self.fallback.distress_level,
            });
        }
        Ok(())
    }

    /// First rule with any keyword contained in `message`, if any.
    pub fn find_match(&self, message: &str) -> Option<&ClassificationRule> {
        let text = normalize(message);
        self.rules.iter().find(|rule| rule.matches(&text))
    }

    /// Pick the reply for `message`. Never fails: unmatched or empty text
    /// gets the fallback reply.
    pub fn classify(&self, message: &str) -> ClassificationResult {
        match self.find_match(message) {
            Some(rule) => ClassificationResult {
                rule_id: Some(rule.id.clone()),
                message: rule.response.clone(),
                urgency: rule.urgency,
                distress_level: rule.distress_level,
            },
            None => ClassificationResult {
                rule_id: None,
                message: self.fallback.response.clone(),
                urgency: self.fallback.urgency,
                distress_level: self.fallback.distress_level,
            },
        }
    }
}
