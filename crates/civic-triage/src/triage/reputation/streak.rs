use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::triage::domain::{EventType, ReportEvent};

/// Whether `required_reports` submissions exist with some anchor timestamp
/// `t0` such that at least `required_reports - 1` subsequent submissions
/// (scanned in ascending order) fall within `window_days` of `t0`.
///
/// Deliberately non-sliding: the scan for a given anchor stops at the first
/// timestamp beyond the window and later timestamps are not reconsidered for
/// that anchor; every timestamp is tried as an anchor instead. This matches
/// the behavior reporters have already been awarded under, so keep it even
/// though a sliding window would be the textbook formulation.
pub fn has_streak(
    timestamps: &[DateTime<Utc>],
    required_reports: usize,
    window_days: i64,
) -> bool {
    let mut ordered: Vec<DateTime<Utc>> = timestamps.to_vec();
    ordered.sort_unstable();
    let window = Duration::days(window_days);

    for (start_index, window_start) in ordered.iter().enumerate() {
        let mut count = 1;
        for next_stamp in &ordered[start_index + 1..] {
            if *next_stamp - *window_start <= window {
                count += 1;
                if count >= required_reports {
                    return true;
                }
            } else {
                break;
            }
        }
    }
    false
}

/// Count of consecutive calendar days with at least one submission, scanning
/// backward from the most recent submission day. Multiple submissions on one
/// day count once.
pub fn current_streak(events: &[ReportEvent]) -> u32 {
    let mut submission_days: Vec<NaiveDate> = events
        .iter()
        .filter(|event| event.event_type == EventType::Submitted)
        .map(|event| event.occurred_at.date_naive())
        .collect();
    submission_days.sort_unstable_by(|a, b| b.cmp(a));

    let Some(&latest) = submission_days.first() else {
        return 0;
    };

    let mut streak = 1;
    let mut last_date = latest;
    for &day in &submission_days[1..] {
        if last_date - day == Duration::days(1) {
            streak += 1;
            last_date = day;
        } else if last_date == day {
            continue;
        } else {
            break;
        }
    }
    streak
}
