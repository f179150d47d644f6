//! careconnect-chat
//!
//! Keyword-based response classifier for the support chatbot.
//!
//! Free text is matched against an ordered table of keyword rules; the first
//! rule with any keyword present wins and its static template is returned
//! together with an urgency tag and a distress level. Text that matches no
//! rule gets the table's fallback reply.
//!
//! The classifier does not touch session state. When a reply comes back
//! with [`Urgency::Severe`](careconnect_core::models::urgency::Urgency) the
//! caller is expected to record the distress level on the chat session.

pub mod builtin;
pub mod config;
pub mod error;
pub mod rules;

use rules::ClassificationResult;

/// Classify `message` against the built-in rule table.
pub fn classify(message: &str) -> ClassificationResult {
    builtin::rules().classify(message)
}
