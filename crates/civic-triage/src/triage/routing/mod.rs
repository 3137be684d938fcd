//! Department routing: issue type + district to an ordered department list
//! and an optional emergency escalation.

mod directory;

pub use directory::{DepartmentDirectory, DepartmentRecord, DirectoryCache};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::domain::IssueType;
use directory::{normalize, resolve_department};

/// Static issue-type routes. An issue may route to several departments; the
/// order here is the priority order of responsibility.
fn issue_routes(issue_type: IssueType) -> &'static [&'static str] {
    match issue_type {
        IssueType::Pothole | IssueType::DamagedSignage => &["Roads & Transport Authority"],
        IssueType::IllegalWaste => &["Waste Management Department"],
        IssueType::BrokenStreetlight => &["Dubai Electricity & Water Authority"],
        IssueType::Graffiti => &["Community Development Authority"],
        IssueType::Flooding => &["Drainage & Irrigation"],
        IssueType::TrafficCongestion => &["Traffic Management Center"],
        IssueType::TreeDamage => &["Parks & Recreation"],
        IssueType::UnclearIssue => &[],
    }
}

/// District specialists, keyed by normalized district text.
fn district_specialists(normalized_district: &str) -> &'static [&'static str] {
    match normalized_district {
        "palm jumeirah" => &["Community Development Authority", "Parks & Recreation"],
        "jebel ali" => &["Waste Management Department"],
        "dubai marina" => &["Roads & Transport Authority"],
        "diera" => &["Drainage & Irrigation"],
        _ => &[],
    }
}

/// Emergency contact notified when a report's priority clears the threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EscalationPolicy {
    pub name: String,
    pub contact_email: String,
    pub phone: String,
    pub threshold: f64,
}

impl EscalationPolicy {
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }
}

impl Default for EscalationPolicy {
    fn default() -> Self {
        Self {
            name: "Emergency Response Taskforce".to_string(),
            contact_email: "emergency@dubai.gov.ae".to_string(),
            phone: "+971-4-000-0000".to_string(),
            threshold: 80.0,
        }
    }
}

/// Instruction to notify the emergency-response contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EscalationDirective {
    pub name: String,
    pub contact_email: String,
    pub phone: String,
    pub reason: String,
}

/// Per-report context consulted during routing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutingContext {
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub priority_score: f64,
}

/// Routing result: primary owner, ordered backups, and optional escalation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentAssignment {
    pub primary_department: Option<DepartmentRecord>,
    pub backup_departments: Vec<DepartmentRecord>,
    pub escalation: Option<EscalationDirective>,
    pub notes: Option<String>,
}

/// Stateless router over a department directory, with an injected resolution
/// cache so tests never leak state into each other.
pub struct DepartmentRouter {
    directory: DepartmentDirectory,
    cache: DirectoryCache,
    escalation: EscalationPolicy,
}

impl DepartmentRouter {
    pub fn new(directory: DepartmentDirectory, escalation: EscalationPolicy) -> Self {
        Self {
            directory,
            cache: DirectoryCache::new(),
            escalation,
        }
    }

    pub fn cache(&self) -> &DirectoryCache {
        &self.cache
    }

    /// Determine the municipal departments responsible for a reported issue.
    ///
    /// An empty resolved list is a valid terminal result requiring manual
    /// review, not an error.
    pub fn assign(&self, issue_type: IssueType, context: &RoutingContext) -> DepartmentAssignment {
        let district = context.district.as_deref();
        let departments = self.build_department_list(issue_type, district);

        if departments.is_empty() {
            warn!(
                issue_type = issue_type.label(),
                district = district.unwrap_or("-"),
                "no department match; flagging for manual review"
            );
            return DepartmentAssignment {
                primary_department: None,
                backup_departments: Vec::new(),
                escalation: None,
                notes: Some(format!(
                    "No department match for {}. Manual review required.",
                    issue_type.label()
                )),
            };
        }

        let escalation = if context.priority_score >= self.escalation.threshold {
            info!(
                score = context.priority_score,
                threshold = self.escalation.threshold,
                "priority cleared escalation threshold"
            );
            Some(EscalationDirective {
                name: self.escalation.name.clone(),
                contact_email: self.escalation.contact_email.clone(),
                phone: self.escalation.phone.clone(),
                reason: format!(
                    "Priority score {} exceeded threshold {}",
                    context.priority_score, self.escalation.threshold
                ),
            })
        } else {
            None
        };

        let notes = district
            .filter(|name| !district_specialists(&normalize(name)).is_empty())
            .map(|name| format!("District specialist added for {name}."));

        let mut departments = departments.into_iter();
        DepartmentAssignment {
            primary_department: departments.next(),
            backup_departments: departments.collect(),
            escalation,
            notes,
        }
    }

    /// Issue-route names first, then district specialists not already listed.
    /// De-duplicated by normalized name; first occurrence wins.
    fn build_department_list(
        &self,
        issue_type: IssueType,
        district: Option<&str>,
    ) -> Vec<DepartmentRecord> {
        let routed = issue_routes(issue_type);
        let specialists = district
            .map(|name| district_specialists(&normalize(name)))
            .unwrap_or(&[]);

        let mut combined: Vec<&str> = routed.to_vec();
        for &name in specialists {
            if !combined
                .iter()
                .any(|existing| normalize(existing) == normalize(name))
            {
                combined.push(name);
            }
        }

        combined
            .into_iter()
            .filter_map(|name| resolve_department(&self.directory, &self.cache, name))
            .collect()
    }
}

impl Default for DepartmentRouter {
    fn default() -> Self {
        Self::new(DepartmentDirectory::default(), EscalationPolicy::default())
    }
}
