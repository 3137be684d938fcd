use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::triage::domain::IssueType;

/// Maximum distance at which an earlier report counts as a recurrence.
pub const MAX_DISTANCE_METERS: f64 = 50.0;
/// How far back the recurrence window reaches.
pub const LOOKBACK_DAYS: i64 = 30;

const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance between two coordinates on a spherical Earth.
pub fn haversine_meters(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();
    EARTH_RADIUS_METERS * c
}

/// Map a nearby-report count to the recurrence factor fed into the weighted
/// sum.
pub fn count_to_factor(count: u32) -> u8 {
    match count {
        0 => 0,
        1..=2 => 3,
        3..=5 => 5,
        _ => 10,
    }
}

/// Raised by recurrence collaborators when no answer can be produced. The
/// scorer treats every variant as a degradation, never a failure.
#[derive(Debug, thiserror::Error)]
pub enum RecurrenceError {
    #[error("recurrence analytics unavailable: {0}")]
    Unavailable(String),
    #[error("recurrence query failed: {0}")]
    Query(String),
}

/// History of nearby same-type reports, supplied by an external analytics
/// store.
pub trait RecurrenceLookup: Send + Sync {
    /// Count same-type reports within [`MAX_DISTANCE_METERS`] of the given
    /// point submitted in the last [`LOOKBACK_DAYS`] days, excluding
    /// `report_id` itself.
    fn nearby_count(
        &self,
        issue_type: IssueType,
        lat: f64,
        lng: f64,
        report_id: Option<&str>,
    ) -> Result<u32, RecurrenceError>;
}

/// Collaborator for deployments without an analytics store. Always reports
/// itself unavailable so the scorer records an explicit degradation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRecurrenceData;

impl RecurrenceLookup for NoRecurrenceData {
    fn nearby_count(
        &self,
        _issue_type: IssueType,
        _lat: f64,
        _lng: f64,
        _report_id: Option<&str>,
    ) -> Result<u32, RecurrenceError> {
        Err(RecurrenceError::Unavailable(
            "recurrence analytics disabled".to_string(),
        ))
    }
}

/// Prior report recorded in a [`StaticRecurrenceIndex`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedReport {
    pub report_id: String,
    pub issue_type: IssueType,
    pub lat: f64,
    pub lng: f64,
    pub occurred_at: DateTime<Utc>,
}

/// In-memory recurrence index over a fixed snapshot of reports.
///
/// The window is anchored to an explicit `as_of` instant rather than the
/// wall clock so repeated lookups stay idempotent.
#[derive(Debug, Clone)]
pub struct StaticRecurrenceIndex {
    reports: Vec<RecordedReport>,
    as_of: DateTime<Utc>,
}

impl StaticRecurrenceIndex {
    pub fn new(reports: Vec<RecordedReport>, as_of: DateTime<Utc>) -> Self {
        Self { reports, as_of }
    }
}

impl RecurrenceLookup for StaticRecurrenceIndex {
    fn nearby_count(
        &self,
        issue_type: IssueType,
        lat: f64,
        lng: f64,
        report_id: Option<&str>,
    ) -> Result<u32, RecurrenceError> {
        let window_start = self.as_of - Duration::days(LOOKBACK_DAYS);
        let count = self
            .reports
            .iter()
            .filter(|report| report.issue_type == issue_type)
            .filter(|report| Some(report.report_id.as_str()) != report_id)
            .filter(|report| report.occurred_at >= window_start && report.occurred_at <= self.as_of)
            .filter(|report| {
                haversine_meters(lat, lng, report.lat, report.lng) <= MAX_DISTANCE_METERS
            })
            .count();
        Ok(count as u32)
    }
}

/// Reason a sub-factor fell back to its safe default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegradeReason {
    CollaboratorUnavailable,
    LookupFailed,
}

/// Outcome of the recurrence lookup, distinguishing measured data from a
/// degraded default so callers need not inspect logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecurrenceSignal {
    Measured { factor: u8 },
    Defaulted { reason: DegradeReason },
}

impl RecurrenceSignal {
    pub fn factor(&self) -> u8 {
        match self {
            RecurrenceSignal::Measured { factor } => *factor,
            RecurrenceSignal::Defaulted { .. } => 0,
        }
    }

    pub fn is_measured(&self) -> bool {
        matches!(self, RecurrenceSignal::Measured { .. })
    }
}
