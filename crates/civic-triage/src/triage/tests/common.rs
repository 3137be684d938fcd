use chrono::{DateTime, TimeZone, Utc};

use crate::triage::domain::{EventType, IssueType, RawClassification, ReportEvent, ReportSummary};
use crate::triage::priority::{RecurrenceError, RecurrenceLookup};

pub(super) fn utc(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn event(report_id: &str, event_type: EventType, occurred_at: DateTime<Utc>) -> ReportEvent {
    ReportEvent {
        report_id: report_id.to_string(),
        event_type,
        occurred_at,
        location_hash: None,
    }
}

pub(super) fn submitted(report_id: &str, occurred_at: DateTime<Utc>) -> ReportEvent {
    event(report_id, EventType::Submitted, occurred_at)
}

pub(super) fn report(report_id: &str, verified: bool, resolved: bool) -> ReportSummary {
    ReportSummary {
        report_id: report_id.to_string(),
        status: if resolved { "resolved" } else { "pending" }.to_string(),
        verified,
        resolved,
        submitted_at: utc(2025, 8, 1, 9),
        resolved_at: None,
        location_hash: None,
    }
}

pub(super) fn raw_classification(issue_type: &str, severity: i64, confidence: f64) -> RawClassification {
    RawClassification {
        issue_type: issue_type.to_string(),
        severity,
        confidence,
        safety_risk: false,
        estimated_affected_people: 0,
        description: "reported via mobile app".to_string(),
        recommended_action: "dispatch inspection crew".to_string(),
    }
}

/// Recurrence collaborator returning a fixed nearby-report count.
pub(super) struct FixedRecurrence(pub(super) u32);

impl RecurrenceLookup for FixedRecurrence {
    fn nearby_count(
        &self,
        _issue_type: IssueType,
        _lat: f64,
        _lng: f64,
        _report_id: Option<&str>,
    ) -> Result<u32, RecurrenceError> {
        Ok(self.0)
    }
}

/// Recurrence collaborator whose queries always fail.
pub(super) struct BrokenRecurrence;

impl RecurrenceLookup for BrokenRecurrence {
    fn nearby_count(
        &self,
        _issue_type: IssueType,
        _lat: f64,
        _lng: f64,
        _report_id: Option<&str>,
    ) -> Result<u32, RecurrenceError> {
        Err(RecurrenceError::Query("analytics store timed out".to_string()))
    }
}
