//! The three triage decision engines and their shared domain model.

pub mod costs;
pub mod domain;
pub mod priority;
pub mod reputation;
pub mod routing;

#[cfg(test)]
mod tests;

pub use costs::{estimate_cost, CostEstimate};
pub use domain::{
    Classification, EventType, IssueType, Location, RawClassification, ReportEvent, ReportSummary,
    MIN_CLASSIFIER_CONFIDENCE,
};
pub use priority::{
    NoRecurrenceData, PriorityBreakdown, PriorityInput, PriorityScorer, RecurrenceLookup,
    RecurrenceSignal,
};
pub use reputation::{summarize_profile, ProfileSnapshot};
pub use routing::{
    DepartmentAssignment, DepartmentDirectory, DepartmentRecord, DepartmentRouter,
    EscalationDirective, EscalationPolicy, RoutingContext,
};
