use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Categorical classification of a reported municipal problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    Pothole,
    IllegalWaste,
    BrokenStreetlight,
    Graffiti,
    Flooding,
    TrafficCongestion,
    DamagedSignage,
    TreeDamage,
    UnclearIssue,
}

impl IssueType {
    pub const fn label(self) -> &'static str {
        match self {
            IssueType::Pothole => "pothole",
            IssueType::IllegalWaste => "illegal_waste",
            IssueType::BrokenStreetlight => "broken_streetlight",
            IssueType::Graffiti => "graffiti",
            IssueType::Flooding => "flooding",
            IssueType::TrafficCongestion => "traffic_congestion",
            IssueType::DamagedSignage => "damaged_signage",
            IssueType::TreeDamage => "tree_damage",
            IssueType::UnclearIssue => "unclear_issue",
        }
    }

    /// Parse a classifier-provided label. Unknown or empty labels fall back
    /// to [`IssueType::UnclearIssue`]; classification output must never stall
    /// the triage pipeline.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pothole" => IssueType::Pothole,
            "illegal_waste" => IssueType::IllegalWaste,
            "broken_streetlight" => IssueType::BrokenStreetlight,
            "graffiti" => IssueType::Graffiti,
            "flooding" => IssueType::Flooding,
            "traffic_congestion" => IssueType::TrafficCongestion,
            "damaged_signage" => IssueType::DamagedSignage,
            "tree_damage" => IssueType::TreeDamage,
            _ => IssueType::UnclearIssue,
        }
    }
}

/// Untrusted classification payload as produced by the vision collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawClassification {
    pub issue_type: String,
    pub severity: i64,
    pub confidence: f64,
    #[serde(default)]
    pub safety_risk: bool,
    #[serde(default)]
    pub estimated_affected_people: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub recommended_action: String,
}

/// Sanitized classification consumed by the scorer and router.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub issue_type: IssueType,
    pub severity: u8,
    pub confidence: f64,
    pub safety_risk: bool,
    pub estimated_affected_people: u32,
    pub description: String,
    pub recommended_action: String,
}

/// Confidence below which a classification is downgraded to `unclear_issue`.
pub const MIN_CLASSIFIER_CONFIDENCE: f64 = 0.6;

impl Classification {
    /// Coerce an untrusted classifier payload into the documented domain:
    /// severity clamped to [1, 10], confidence to [0, 1], negative people
    /// counts to 0, and low-confidence issue types downgraded.
    pub fn normalized(raw: RawClassification) -> Self {
        let confidence = raw.confidence.clamp(0.0, 1.0);
        let issue_type = if confidence < MIN_CLASSIFIER_CONFIDENCE {
            IssueType::UnclearIssue
        } else {
            IssueType::parse(&raw.issue_type)
        };

        Self {
            issue_type,
            severity: raw.severity.clamp(1, 10) as u8,
            confidence,
            safety_risk: raw.safety_risk,
            estimated_affected_people: raw.estimated_affected_people.max(0) as u32,
            description: raw.description,
            recommended_action: raw.recommended_action,
        }
    }

    /// Documented default returned when the vision collaborator fails
    /// repeatedly.
    pub fn fallback() -> Self {
        Self {
            issue_type: IssueType::UnclearIssue,
            severity: 1,
            confidence: 0.0,
            safety_risk: false,
            estimated_affected_people: 0,
            description: "Unable to determine issue from the provided image.".to_string(),
            recommended_action: "Request a clearer photo or add textual context.".to_string(),
        }
    }
}

/// Geographic position of a report. Immutable once attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub district: Option<String>,
}

/// Gamification event kinds recorded against a reporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Submitted,
    Verified,
    Resolved,
    FirstInArea,
    StreakBonus,
}

/// Append-only log entry for a reporter's history. Never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEvent {
    pub report_id: String,
    pub event_type: EventType,
    pub occurred_at: DateTime<Utc>,
    #[serde(default)]
    pub location_hash: Option<String>,
}

/// Read projection of a report, supplied by the history store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub report_id: String,
    pub status: String,
    pub verified: bool,
    pub resolved: bool,
    pub submitted_at: DateTime<Utc>,
    /// Present when the report reached a resolved state; drives the
    /// fast-resolution badge without consulting the wall clock.
    #[serde(default)]
    pub resolved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location_hash: Option<String>,
}
