//! Decision engines for triaging citizen-submitted urban infrastructure
//! reports.
//!
//! Three engines, composed by a request-handling layer that lives elsewhere:
//! the [`triage::routing::DepartmentRouter`] maps an issue type and district
//! to responsible departments, the [`triage::priority::PriorityScorer`] turns
//! classification signals into an auditable 0-100 priority score, and
//! [`triage::reputation::summarize_profile`] derives a reporter's reputation,
//! streak, and badges from report history. The engines never call each other
//! and never fail outright: malformed input is clamped and missing
//! collaborators degrade to conservative defaults.

pub mod config;
pub mod telemetry;
pub mod triage;
