use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use civic_triage::config::TriageConfig;
use civic_triage::triage::{
    estimate_cost, Classification, CostEstimate, DepartmentAssignment, DepartmentDirectory,
    DepartmentRouter, EscalationPolicy, Location, NoRecurrenceData, PriorityBreakdown,
    PriorityInput, PriorityScorer, RawClassification, RoutingContext,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// The three decision engines bundled for the request handlers. Holds no
/// per-request state; the directory cache inside the router is idempotent.
pub(crate) struct TriageEngines {
    scorer: PriorityScorer<NoRecurrenceData>,
    router: DepartmentRouter,
}

impl TriageEngines {
    pub(crate) fn from_config(config: &TriageConfig) -> Self {
        Self {
            scorer: PriorityScorer::offline(),
            router: DepartmentRouter::new(
                DepartmentDirectory::default(),
                EscalationPolicy::with_threshold(config.escalation_threshold),
            ),
        }
    }
}

impl Default for TriageEngines {
    fn default() -> Self {
        Self::from_config(&TriageConfig::default())
    }
}

/// One citizen report ready for triage: the raw classifier payload plus the
/// report's location.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TriageRequest {
    pub(crate) classification: RawClassification,
    pub(crate) location: Location,
    #[serde(default)]
    pub(crate) report_id: Option<String>,
}

/// Combined output of the scoring, routing, and cost engines for one report.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct TriageOutcome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) report_id: Option<String>,
    pub(crate) classification: Classification,
    pub(crate) priority: PriorityBreakdown,
    pub(crate) assignment: DepartmentAssignment,
    pub(crate) cost: CostEstimate,
}

/// Run the engines in sequence for one report. All sequencing lives here;
/// the engines themselves never call each other.
pub(crate) fn triage_report(engines: &TriageEngines, request: TriageRequest) -> TriageOutcome {
    let classification = Classification::normalized(request.classification);

    let priority = engines.scorer.score(&PriorityInput::from_classification(
        &classification,
        request.location.lat,
        request.location.lng,
        request.report_id.clone(),
    ));

    let assignment = engines.router.assign(
        classification.issue_type,
        &RoutingContext {
            district: request.location.district.clone(),
            priority_score: priority.score,
        },
    );

    let cost = estimate_cost(classification.issue_type);

    TriageOutcome {
        report_id: request.report_id,
        classification,
        priority,
        assignment,
        cost,
    }
}
