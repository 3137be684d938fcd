use std::collections::HashSet;

use crate::triage::domain::IssueType;
use crate::triage::routing::{
    DepartmentDirectory, DepartmentRecord, DepartmentRouter, EscalationPolicy, RoutingContext,
};

fn context(district: Option<&str>, priority_score: f64) -> RoutingContext {
    RoutingContext {
        district: district.map(str::to_string),
        priority_score,
    }
}

#[test]
fn pothole_in_dubai_marina_escalates_above_threshold() {
    let router = DepartmentRouter::default();
    let assignment = router.assign(IssueType::Pothole, &context(Some("dubai marina"), 85.0));

    let primary = assignment.primary_department.expect("primary assigned");
    assert_eq!(primary.name, "Roads & Transport Authority");

    let escalation = assignment.escalation.expect("escalation emitted");
    assert_eq!(escalation.name, "Emergency Response Taskforce");
    assert!(escalation.reason.contains("85"));
    assert!(escalation.reason.contains("80"));

    let notes = assignment.notes.expect("district note present");
    assert!(notes.contains("dubai marina"));
}

#[test]
fn unclear_issue_yields_manual_review_terminal_state() {
    let router = DepartmentRouter::default();
    let assignment = router.assign(IssueType::UnclearIssue, &RoutingContext::default());

    assert!(assignment.primary_department.is_none());
    assert!(assignment.backup_departments.is_empty());
    assert!(assignment.escalation.is_none());
    let notes = assignment.notes.expect("manual review note");
    assert!(notes.contains("Manual review required"));
}

#[test]
fn department_lists_never_contain_duplicates() {
    let router = DepartmentRouter::default();
    let issue_types = [
        IssueType::Pothole,
        IssueType::IllegalWaste,
        IssueType::BrokenStreetlight,
        IssueType::Graffiti,
        IssueType::Flooding,
        IssueType::TrafficCongestion,
        IssueType::DamagedSignage,
        IssueType::TreeDamage,
    ];
    let districts = [
        None,
        Some("palm jumeirah"),
        Some("jebel ali"),
        Some("dubai marina"),
        Some("diera"),
    ];

    for issue_type in issue_types {
        for district in districts {
            let assignment = router.assign(issue_type, &context(district, 10.0));
            let mut ids = HashSet::new();
            for department in assignment
                .primary_department
                .iter()
                .chain(assignment.backup_departments.iter())
            {
                assert!(
                    ids.insert(department.id.clone()),
                    "duplicate department {} for {:?}/{:?}",
                    department.id,
                    issue_type,
                    district
                );
            }
        }
    }
}

#[test]
fn district_specialists_are_appended_after_issue_routes() {
    let router = DepartmentRouter::default();
    let assignment = router.assign(IssueType::Graffiti, &context(Some("palm jumeirah"), 20.0));

    let primary = assignment.primary_department.expect("primary assigned");
    assert_eq!(primary.name, "Community Development Authority");
    assert_eq!(assignment.backup_departments.len(), 1);
    assert_eq!(assignment.backup_departments[0].name, "Parks & Recreation");
}

#[test]
fn district_matching_normalizes_case_and_whitespace() {
    let router = DepartmentRouter::default();
    let assignment = router.assign(IssueType::Pothole, &context(Some("  Dubai Marina "), 10.0));

    let notes = assignment.notes.expect("district note present");
    assert!(notes.contains("Dubai Marina"));
    // Specialist duplicates the issue route, so no backup appears.
    assert!(assignment.backup_departments.is_empty());
}

#[test]
fn unknown_district_adds_no_specialists_or_notes() {
    let router = DepartmentRouter::default();
    let assignment = router.assign(IssueType::Pothole, &context(Some("atlantis"), 10.0));

    assert!(assignment.notes.is_none());
    assert!(assignment.backup_departments.is_empty());
    assert!(assignment.primary_department.is_some());
}

#[test]
fn no_escalation_below_threshold() {
    let router = DepartmentRouter::default();
    let assignment = router.assign(IssueType::Flooding, &context(None, 79.99));
    assert!(assignment.escalation.is_none());
}

#[test]
fn escalation_threshold_is_configurable() {
    let router = DepartmentRouter::new(
        DepartmentDirectory::default(),
        EscalationPolicy::with_threshold(50.0),
    );
    let assignment = router.assign(IssueType::Flooding, &context(None, 60.0));

    let escalation = assignment.escalation.expect("escalation emitted");
    assert!(escalation.reason.contains("60"));
    assert!(escalation.reason.contains("50"));
}

#[test]
fn unresolved_names_degrade_to_manual_review() {
    // A directory missing the routed department: the lookup miss is skipped,
    // leaving nothing to assign.
    let directory = DepartmentDirectory::new(vec![DepartmentRecord {
        id: "dept-parks".to_string(),
        name: "Parks & Recreation".to_string(),
        category: "Environment".to_string(),
        contact_email: "parks@dubai.gov.ae".to_string(),
        average_resolution_time: "30h".to_string(),
    }]);
    let router = DepartmentRouter::new(directory, EscalationPolicy::default());

    let assignment = router.assign(IssueType::Pothole, &RoutingContext::default());
    assert!(assignment.primary_department.is_none());
    assert!(assignment.notes.expect("note").contains("Manual review"));
}

#[test]
fn cold_and_warm_cache_return_identical_results() {
    let router = DepartmentRouter::default();
    let request = context(Some("palm jumeirah"), 85.0);

    assert!(router.cache().is_empty());
    let cold = router.assign(IssueType::Graffiti, &request);
    assert!(!router.cache().is_empty());
    let warm = router.assign(IssueType::Graffiti, &request);

    assert_eq!(cold, warm);

    router.cache().reset();
    let reset = router.assign(IssueType::Graffiti, &request);
    assert_eq!(cold, reset);
}
