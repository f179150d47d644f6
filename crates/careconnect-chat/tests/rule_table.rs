use careconnect_chat::error::ChatError;
use careconnect_chat::rules::{ClassificationRule, Fallback, RuleTable, normalize};
use careconnect_core::models::urgency::Urgency;

fn rule(id: &str, keywords: &[&str], urgency: Urgency, distress_level: u8) -> ClassificationRule {
    ClassificationRule {
        id: id.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        response: format!("{id} reply"),
        urgency,
        distress_level,
    }
}

fn fallback() -> Fallback {
    Fallback {
        response: "default reply".to_string(),
        urgency: Urgency::Mild,
        distress_level: 2,
    }
}

#[test]
fn normalize_folds_case_and_apostrophes() {
    assert_eq!(normalize("Can\u{2019}t COPE"), "can't cope");
}

#[test]
fn keywords_are_normalized_on_construction() {
    let table = RuleTable::new(vec![rule("sleep", &["Insomnia"], Urgency::Mild, 4)], fallback())
        .unwrap();
    assert_eq!(table.rules()[0].keywords, vec!["insomnia"]);
    assert_eq!(table.classify("INSOMNIA again").rule_id.as_deref(), Some("sleep"));
}

#[test]
fn first_matching_rule_wins() {
    let table = RuleTable::new(
        vec![
            rule("first", &["rain"], Urgency::Mild, 3),
            rule("second", &["rain", "cloud"], Urgency::Mild, 4),
        ],
        fallback(),
    )
    .unwrap();
    let result = table.classify("rain and cloud");
    assert_eq!(result.rule_id.as_deref(), Some("first"));
    assert_eq!(result.message, "first reply");
    assert_eq!(table.find_match("cloud").map(|r| r.id.as_str()), Some("second"));
    assert!(table.find_match("sunshine").is_none());
}

#[test]
fn severe_rule_after_topical_rule_is_rejected() {
    let err = RuleTable::new(
        vec![
            rule("anxiety", &["anxious"], Urgency::Moderate, 7),
            rule("crisis", &["want to die"], Urgency::Severe, 10),
        ],
        fallback(),
    )
    .unwrap_err();
    match err {
        ChatError::SevereRuleOutOfOrder { rule_id, after } => {
            assert_eq!(rule_id, "crisis");
            assert_eq!(after, "anxiety");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn several_severe_rules_may_lead() {
    RuleTable::new(
        vec![
            rule("crisis", &["want to die"], Urgency::Severe, 10),
            rule("harm", &["hurt myself"], Urgency::Severe, 10),
            rule("anxiety", &["anxious"], Urgency::Moderate, 7),
        ],
        fallback(),
    )
    .unwrap();
}

#[test]
fn malformed_rules_are_rejected() {
    let cases = [
        (vec![rule("", &["x"], Urgency::Mild, 1)], "empty id"),
        (
            vec![
                rule("a", &["x"], Urgency::Mild, 1),
                rule("a", &["y"], Urgency::Mild, 1),
            ],
            "duplicate",
        ),
        (vec![rule("a", &[], Urgency::Mild, 1)], "no keywords"),
        (vec![rule("a", &["  "], Urgency::Mild, 1)], "blank keyword"),
        (vec![rule("a", &["x"], Urgency::Mild, 0)], "distress 0"),
        (vec![rule("a", &["x"], Urgency::Mild, 11)], "distress 11"),
    ];
    for (rules, case) in cases {
        assert!(RuleTable::new(rules, fallback()).is_err(), "{case}");
    }
}

#[test]
fn fallback_must_be_mild() {
    let mut severe_fallback = fallback();
    severe_fallback.urgency = Urgency::Moderate;
    let err = RuleTable::new(vec![], severe_fallback).unwrap_err();
    assert!(matches!(err, ChatError::FallbackUrgency(Urgency::Moderate)));
}

#[test]
fn empty_table_always_falls_back() {
    let table = RuleTable::new(vec![], fallback()).unwrap();
    let result = table.classify("anything at all");
    assert!(result.is_fallback());
    assert_eq!(result.message, "default reply");
}
