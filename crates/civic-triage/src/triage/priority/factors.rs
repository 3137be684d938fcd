use crate::triage::domain::IssueType;

/// Step function over the estimated affected-people count. Bands are
/// inclusive at their lower bound and must not overlap.
pub(crate) fn affected_population_factor(people: u32) -> u8 {
    if people >= 1000 {
        10
    } else if people >= 201 {
        7
    } else if people >= 51 {
        5
    } else if people >= 1 {
        2
    } else {
        0
    }
}

/// Fixed environmental-impact weights per issue type.
pub(crate) fn environmental_factor(issue_type: IssueType) -> u8 {
    match issue_type {
        IssueType::IllegalWaste => 8,
        IssueType::Flooding => 7,
        IssueType::TreeDamage => 6,
        _ => 3,
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
