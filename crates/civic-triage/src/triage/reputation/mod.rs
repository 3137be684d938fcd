//! Reporter gamification: reputation points, submission streaks, and badges,
//! recomputed from scratch on every call.

mod badges;
mod streak;

pub use badges::{
    assign_badges, EAGLE_EYE, ECO_WARRIOR, FIRST_REPORTER, LIGHTNING_STRIKE, STREAK_MASTER,
};
pub use streak::{current_streak, has_streak};

use serde::{Deserialize, Serialize};

use super::domain::{EventType, ReportEvent, ReportSummary};

/// Submissions required inside the window for the streak bonus and the
/// Streak Master badge. Both call sites share [`has_streak`] so they can
/// never diverge.
pub const STREAK_REQUIRED_REPORTS: usize = 5;
pub const STREAK_WINDOW_DAYS: i64 = 7;

const STREAK_BONUS_POINTS: i64 = 150;

/// Fixed point value awarded per event type.
pub fn event_points(event_type: EventType) -> i64 {
    match event_type {
        EventType::Submitted => 10,
        EventType::Verified => 25,
        EventType::Resolved => 50,
        EventType::FirstInArea => 100,
        EventType::StreakBonus => STREAK_BONUS_POINTS,
    }
}

/// Fully derived reporter profile. No incremental state is kept anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    pub reputation: i64,
    pub total_reports: usize,
    pub resolved_reports: usize,
    pub streak: u32,
    pub badges: Vec<String>,
}

/// Sum event points, plus the streak bonus exactly once if a qualifying
/// submission streak exists anywhere in the history.
pub fn calculate_reputation(events: &[ReportEvent]) -> i64 {
    let mut points = 0;
    let mut submissions = Vec::new();

    for event in events {
        points += event_points(event.event_type);
        if event.event_type == EventType::Submitted {
            submissions.push(event.occurred_at);
        }
    }

    if has_streak(&submissions, STREAK_REQUIRED_REPORTS, STREAK_WINDOW_DAYS) {
        points += STREAK_BONUS_POINTS;
    }

    points
}

/// Derive a reporter's profile from their report and event history. Pure
/// function of the two sequences; neither is assumed sorted.
pub fn summarize_profile(reports: &[ReportSummary], events: &[ReportEvent]) -> ProfileSnapshot {
    let reputation = calculate_reputation(events);
    let resolved_reports = reports.iter().filter(|report| report.resolved).count();

    ProfileSnapshot {
        reputation,
        total_reports: reports.len(),
        resolved_reports,
        streak: current_streak(events),
        badges: assign_badges(reports, events, reputation),
    }
}
