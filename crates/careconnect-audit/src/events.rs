use careconnect_chat::rules::ClassificationResult;
use careconnect_instruments::scoring::ScoreResult;
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::AuditError;

pub const ASSESSMENT_SCORED: &str = "assessment.scored";
pub const MESSAGE_CLASSIFIED: &str = "chat.message_classified";

/// A structured audit event for a triage decision.
///
/// Logged via `tracing`. Events with `escalate` set are logged at `warn`
/// so crisis signals stand out in the log stream.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub event_id: Uuid,
    pub occurred_at: jiff::Timestamp,
    pub action: String,
    pub resource_type: String,
    pub resource_id: String,
    pub user_sub: String,
    pub escalate: bool,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(
        action: impl Into<String>,
        resource_type: impl Into<String>,
        resource_id: impl Into<String>,
        user_sub: impl Into<String>,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: jiff::Timestamp::now(),
            action: action.into(),
            resource_type: resource_type.into(),
            resource_id: resource_id.into(),
            user_sub: user_sub.into(),
            escalate: false,
            details: None,
        }
    }

    /// Event for a scored questionnaire. Escalates when the caution flag is set.
    pub fn assessment_scored(
        user_sub: impl Into<String>,
        resource_id: impl Into<String>,
        result: &ScoreResult,
    ) -> Self {
        let mut event = Self::new(ASSESSMENT_SCORED, "assessment", resource_id, user_sub);
        event.escalate = result.needs_caution;
        event.with_details(json!({
            "instrument_id": result.instrument_id,
            "total_score": result.total_score,
            "severity": result.severity.label(),
            "recommendation_tier": result.recommendation_tier.as_str(),
            "needs_caution": result.needs_caution,
        }))
    }

    /// Event for a classified chat message. Escalates on a crisis reply.
    ///
    /// The message text is never copied into the event.
    pub fn message_classified(
        user_sub: impl Into<String>,
        resource_id: impl Into<String>,
        result: &ClassificationResult,
    ) -> Self {
        let mut event = Self::new(MESSAGE_CLASSIFIED, "chat_session", resource_id, user_sub);
        event.escalate = result.is_crisis();
        event.with_details(json!({
            "rule_id": result.rule_id,
            "urgency": result.urgency.as_str(),
            "distress_level": result.distress_level,
        }))
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn to_json(&self) -> Result<String, AuditError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Emit this audit event via tracing.
    pub fn emit(&self) {
        let details = self
            .details
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_default();

        if self.escalate {
            warn!(
                audit.event_id = %self.event_id,
                audit.action = %self.action,
                audit.resource_type = %self.resource_type,
                audit.resource_id = %self.resource_id,
                audit.user_sub = %self.user_sub,
                audit.details = %details,
                "audit event requires escalation"
            );
        } else {
            info!(
                audit.event_id = %self.event_id,
                audit.action = %self.action,
                audit.resource_type = %self.resource_type,
                audit.resource_id = %self.resource_id,
                audit.user_sub = %self.user_sub,
                audit.details = %details,
                "audit event"
            );
        }
    }
}
