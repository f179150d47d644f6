use std::io;
use std::sync::{Arc, Mutex};

use careconnect_audit::events::{ASSESSMENT_SCORED, AuditEvent, MESSAGE_CLASSIFIED};
use careconnect_chat::classify;
use careconnect_instruments::score;

/// In-memory log sink for a scoped `fmt` subscriber.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_logs(f: impl FnOnce()) -> String {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .with_max_level(tracing::Level::TRACE)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = logs.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn scored_assessment_with_self_harm_answer_escalates() {
    let result = score("PHQ-9", &[0, 0, 0, 0, 0, 0, 0, 0, 3], None).unwrap();
    let event = AuditEvent::assessment_scored("user-1", "test-42", &result);

    assert_eq!(event.action, ASSESSMENT_SCORED);
    assert_eq!(event.resource_type, "assessment");
    assert_eq!(event.resource_id, "test-42");
    assert!(event.escalate);

    let details = event.details.as_ref().unwrap();
    assert_eq!(details["severity"], "None/Minimal");
    assert_eq!(details["recommendation_tier"], "self_care");
    assert_eq!(details["needs_caution"], true);
    event.emit();
}

#[test]
fn mild_assessment_does_not_escalate() {
    let result = score("GAD-7", &[1, 0, 0, 0, 0, 0, 0], None).unwrap();
    let event = AuditEvent::assessment_scored("user-1", "test-43", &result);
    assert!(!event.escalate);
    event.emit();
}

#[test]
fn classified_message_omits_text() {
    let result = classify("I feel anxious but also want to die");
    let event = AuditEvent::message_classified("user-2", "session-7", &result);

    assert_eq!(event.action, MESSAGE_CLASSIFIED);
    assert!(event.escalate);
    let json = event.to_json().unwrap();
    assert!(json.contains("\"rule_id\":\"crisis\""));
    assert!(!json.contains("anxious"));
}

#[test]
fn fallback_reply_has_null_rule_id() {
    let result = classify("just saying hello");
    let event = AuditEvent::message_classified("user-2", "session-7", &result);
    assert!(!event.escalate);
    let details = event.details.unwrap();
    assert!(details["rule_id"].is_null());
    assert_eq!(details["urgency"], "mild");
}

#[test]
fn events_get_distinct_ids() {
    let a = AuditEvent::new("x", "y", "z", "u");
    let b = AuditEvent::new("x", "y", "z", "u");
    assert_ne!(a.event_id, b.event_id);
    assert!(a.details.is_none());
}

#[test]
fn escalated_event_logs_at_warn() {
    let result = score("PHQ-9", &[0, 0, 0, 0, 0, 0, 0, 0, 2], None).unwrap();
    let event = AuditEvent::assessment_scored("user-1", "test-44", &result);

    let logs = capture_logs(|| event.emit());
    assert!(logs.contains("WARN"), "{logs}");
    assert!(!logs.contains("INFO"), "{logs}");
    assert!(logs.contains("audit.action=assessment.scored"), "{logs}");
    assert!(logs.contains("audit.resource_id=test-44"), "{logs}");
}

#[test]
fn routine_event_logs_at_info() {
    let result = classify("I'm so worried about tomorrow");
    let event = AuditEvent::message_classified("user-3", "session-9", &result);
    assert!(!event.escalate);

    let logs = capture_logs(|| event.emit());
    assert!(logs.contains("INFO"), "{logs}");
    assert!(!logs.contains("WARN"), "{logs}");
    assert!(logs.contains("audit.action=chat.message_classified"), "{logs}");
}
