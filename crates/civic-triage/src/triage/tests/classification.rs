use super::common::raw_classification;
use crate::triage::domain::{Classification, IssueType, RawClassification};

#[test]
fn normalization_clamps_severity_into_domain() {
    let high = Classification::normalized(raw_classification("pothole", 42, 0.9));
    assert_eq!(high.severity, 10);

    let low = Classification::normalized(raw_classification("pothole", -3, 0.9));
    assert_eq!(low.severity, 1);
}

#[test]
fn normalization_clamps_confidence_and_people() {
    let mut raw = raw_classification("flooding", 6, 1.4);
    raw.estimated_affected_people = -25;

    let classification = Classification::normalized(raw);

    assert_eq!(classification.confidence, 1.0);
    assert_eq!(classification.estimated_affected_people, 0);
    assert_eq!(classification.issue_type, IssueType::Flooding);
}

#[test]
fn low_confidence_downgrades_to_unclear_issue() {
    let classification = Classification::normalized(raw_classification("pothole", 7, 0.59));
    assert_eq!(classification.issue_type, IssueType::UnclearIssue);

    let confident = Classification::normalized(raw_classification("pothole", 7, 0.6));
    assert_eq!(confident.issue_type, IssueType::Pothole);
}

#[test]
fn unknown_labels_parse_as_unclear_issue() {
    assert_eq!(IssueType::parse("sinkhole"), IssueType::UnclearIssue);
    assert_eq!(IssueType::parse(""), IssueType::UnclearIssue);
    assert_eq!(IssueType::parse("  Tree_Damage "), IssueType::TreeDamage);
}

#[test]
fn fallback_classification_is_conservative() {
    let fallback = Classification::fallback();
    assert_eq!(fallback.issue_type, IssueType::UnclearIssue);
    assert_eq!(fallback.severity, 1);
    assert_eq!(fallback.confidence, 0.0);
    assert!(!fallback.safety_risk);
    assert_eq!(fallback.estimated_affected_people, 0);
}

#[test]
fn raw_classification_deserializes_with_optional_fields() {
    let raw: RawClassification = serde_json::from_str(
        r#"{"issue_type": "graffiti", "severity": 4, "confidence": 0.8}"#,
    )
    .expect("minimal payload deserializes");

    let classification = Classification::normalized(raw);
    assert_eq!(classification.issue_type, IssueType::Graffiti);
    assert!(!classification.safety_risk);
}
