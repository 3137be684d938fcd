//! Priority scoring: classification signals to a 0-100 urgency rating with
//! an itemized factor breakdown.

mod factors;
mod recurrence;

pub use recurrence::{
    count_to_factor, haversine_meters, DegradeReason, NoRecurrenceData, RecordedReport,
    RecurrenceError, RecurrenceLookup, RecurrenceSignal, StaticRecurrenceIndex, LOOKBACK_DAYS,
    MAX_DISTANCE_METERS,
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{Classification, IssueType};
use factors::{affected_population_factor, environmental_factor, round2};

const SEVERITY_WEIGHT: f64 = 0.35;
const SAFETY_WEIGHT: f64 = 0.30;
const POPULATION_WEIGHT: f64 = 0.20;
const ENVIRONMENTAL_WEIGHT: f64 = 0.10;
const RECURRENCE_WEIGHT: f64 = 0.05;

// Correctness invariant, not a tunable: the weights form a convex
// combination so the score stays within [0, 100].
pub(crate) const WEIGHT_SUM: f64 =
    SEVERITY_WEIGHT + SAFETY_WEIGHT + POPULATION_WEIGHT + ENVIRONMENTAL_WEIGHT + RECURRENCE_WEIGHT;

/// Inputs to a single scoring call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityInput {
    pub severity: i64,
    pub safety_risk: bool,
    pub estimated_affected_people: i64,
    pub issue_type: IssueType,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub report_id: Option<String>,
}

impl PriorityInput {
    pub fn from_classification(
        classification: &Classification,
        lat: f64,
        lng: f64,
        report_id: Option<String>,
    ) -> Self {
        Self {
            severity: i64::from(classification.severity),
            safety_risk: classification.safety_risk,
            estimated_affected_people: i64::from(classification.estimated_affected_people),
            issue_type: classification.issue_type,
            lat,
            lng,
            report_id,
        }
    }
}

/// Itemized scoring result. Derived data only; recompute rather than mutate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityBreakdown {
    pub severity: f64,
    pub safety_risk_factor: f64,
    pub affected_population_factor: f64,
    pub environmental_impact_factor: f64,
    pub recurrence_factor: f64,
    pub score: f64,
    /// Whether the recurrence factor was measured or fell back to 0.
    pub recurrence: RecurrenceSignal,
}

/// Scorer over an injected recurrence collaborator. Pure apart from that one
/// lookup; everything else is a synchronous weighted sum.
pub struct PriorityScorer<R = NoRecurrenceData> {
    recurrence: R,
}

impl PriorityScorer<NoRecurrenceData> {
    /// Scorer for deployments without recurrence analytics. The recurrence
    /// factor degrades to 0 on every call.
    pub fn offline() -> Self {
        Self::new(NoRecurrenceData)
    }
}

impl Default for PriorityScorer<NoRecurrenceData> {
    fn default() -> Self {
        Self::offline()
    }
}

impl<R: RecurrenceLookup> PriorityScorer<R> {
    pub fn new(recurrence: R) -> Self {
        Self { recurrence }
    }

    /// Calculate the weighted priority score for a report.
    ///
    /// Never fails: out-of-domain inputs are clamped and collaborator
    /// outages degrade the recurrence factor to 0.
    pub fn score(&self, input: &PriorityInput) -> PriorityBreakdown {
        debug_assert!((WEIGHT_SUM - 1.0).abs() < f64::EPSILON);

        let severity = (input.severity as f64).clamp(1.0, 10.0);
        let safety_factor = if input.safety_risk { 10u8 } else { 0 };
        let population_factor =
            affected_population_factor(input.estimated_affected_people.max(0) as u32);
        let environmental = environmental_factor(input.issue_type);
        let recurrence = self.recurrence_signal(input);

        let weighted_total = severity * SEVERITY_WEIGHT
            + f64::from(safety_factor) * SAFETY_WEIGHT
            + f64::from(population_factor) * POPULATION_WEIGHT
            + f64::from(environmental) * ENVIRONMENTAL_WEIGHT
            + f64::from(recurrence.factor()) * RECURRENCE_WEIGHT;

        let score = (weighted_total * 10.0).clamp(0.0, 100.0);
        let breakdown = PriorityBreakdown {
            severity: round2(severity),
            safety_risk_factor: f64::from(safety_factor),
            affected_population_factor: f64::from(population_factor),
            environmental_impact_factor: f64::from(environmental),
            recurrence_factor: f64::from(recurrence.factor()),
            score: round2(score),
            recurrence,
        };
        debug!(
            issue_type = input.issue_type.label(),
            score = breakdown.score,
            "priority score calculated"
        );
        breakdown
    }

    fn recurrence_signal(&self, input: &PriorityInput) -> RecurrenceSignal {
        match self.recurrence.nearby_count(
            input.issue_type,
            input.lat,
            input.lng,
            input.report_id.as_deref(),
        ) {
            Ok(count) => RecurrenceSignal::Measured {
                factor: count_to_factor(count),
            },
            Err(RecurrenceError::Unavailable(reason)) => {
                debug!(%reason, "recurrence factor defaulted to 0");
                RecurrenceSignal::Defaulted {
                    reason: DegradeReason::CollaboratorUnavailable,
                }
            }
            Err(RecurrenceError::Query(reason)) => {
                debug!(%reason, "recurrence lookup failed; defaulting to 0");
                RecurrenceSignal::Defaulted {
                    reason: DegradeReason::LookupFailed,
                }
            }
        }
    }
}
