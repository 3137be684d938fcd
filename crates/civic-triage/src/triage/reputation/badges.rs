use chrono::Duration;

use super::streak::has_streak;
use super::{STREAK_REQUIRED_REPORTS, STREAK_WINDOW_DAYS};
use crate::triage::domain::{EventType, ReportEvent, ReportSummary};

pub const FIRST_REPORTER: &str = "First Reporter";
pub const EAGLE_EYE: &str = "Eagle Eye";
pub const ECO_WARRIOR: &str = "Eco Warrior";
pub const LIGHTNING_STRIKE: &str = "Lightning Strike";
pub const STREAK_MASTER: &str = "Streak Master";

const EAGLE_EYE_VERIFIED_REPORTS: usize = 10;
const ECO_WARRIOR_REPUTATION: i64 = 1000;
const LIGHTNING_STRIKE_MAX_HOURS: i64 = 2;

/// Evaluate every badge rule independently. Emission order is fixed so the
/// output is deterministic; no rule excludes another.
pub fn assign_badges(
    reports: &[ReportSummary],
    events: &[ReportEvent],
    reputation: i64,
) -> Vec<String> {
    let mut badges = Vec::new();

    let verified_reports = reports.iter().filter(|report| report.verified).count();
    let fast_resolutions = reports
        .iter()
        .filter(|report| report.resolved)
        .filter(|report| {
            report
                .resolved_at
                .map(|resolved_at| {
                    resolved_at - report.submitted_at
                        <= Duration::hours(LIGHTNING_STRIKE_MAX_HOURS)
                })
                .unwrap_or(false)
        })
        .count();

    if !reports.is_empty() {
        badges.push(FIRST_REPORTER.to_string());
    }
    if verified_reports >= EAGLE_EYE_VERIFIED_REPORTS {
        badges.push(EAGLE_EYE.to_string());
    }
    if reputation >= ECO_WARRIOR_REPUTATION {
        badges.push(ECO_WARRIOR.to_string());
    }
    if fast_resolutions >= 1 {
        badges.push(LIGHTNING_STRIKE.to_string());
    }

    let submissions: Vec<_> = events
        .iter()
        .filter(|event| event.event_type == EventType::Submitted)
        .map(|event| event.occurred_at)
        .collect();
    if has_streak(&submissions, STREAK_REQUIRED_REPORTS, STREAK_WINDOW_DAYS) {
        badges.push(STREAK_MASTER.to_string());
    }

    badges
}
