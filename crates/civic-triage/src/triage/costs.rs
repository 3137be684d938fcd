use serde::{Deserialize, Serialize};

use super::domain::IssueType;

/// Rough repair-cost range for a reported issue, in AED.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub issue_type: IssueType,
    pub cost_estimate_min: u32,
    pub cost_estimate_max: u32,
}

/// Static per-issue cost bands used for resident-facing expectations. Not an
/// engineering estimate.
pub fn estimate_cost(issue_type: IssueType) -> CostEstimate {
    let (low, high) = match issue_type {
        IssueType::Pothole => (2_500, 6_000),
        IssueType::IllegalWaste => (800, 3_000),
        IssueType::BrokenStreetlight => (400, 1_500),
        IssueType::Graffiti => (300, 1_200),
        IssueType::Flooding => (5_000, 12_000),
        IssueType::TrafficCongestion => (1_500, 5_000),
        IssueType::DamagedSignage => (700, 2_500),
        IssueType::TreeDamage => (1_000, 3_000),
        IssueType::UnclearIssue => (0, 0),
    };

    CostEstimate {
        issue_type,
        cost_estimate_min: low,
        cost_estimate_max: high,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flooding_is_the_costliest_band() {
        let estimate = estimate_cost(IssueType::Flooding);
        assert_eq!(estimate.cost_estimate_min, 5_000);
        assert_eq!(estimate.cost_estimate_max, 12_000);
    }

    #[test]
    fn unclear_issues_carry_no_cost() {
        let estimate = estimate_cost(IssueType::UnclearIssue);
        assert_eq!(estimate.cost_estimate_min, 0);
        assert_eq!(estimate.cost_estimate_max, 0);
    }

    #[test]
    fn every_band_is_ordered() {
        let issue_types = [
            IssueType::Pothole,
            IssueType::IllegalWaste,
            IssueType::BrokenStreetlight,
            IssueType::Graffiti,
            IssueType::Flooding,
            IssueType::TrafficCongestion,
            IssueType::DamagedSignage,
            IssueType::TreeDamage,
            IssueType::UnclearIssue,
        ];
        for issue_type in issue_types {
            let estimate = estimate_cost(issue_type);
            assert!(estimate.cost_estimate_min <= estimate.cost_estimate_max);
        }
    }
}
