//! Aggregate metrics over the dashboard document.
//!
//! Three scalar aggregates feed both the dashboard view and the notifier:
//! - **Recent study hours**: hours summed over a rolling trailing window
//! - **Average grade**: arithmetic mean of all recorded scores
//! - **Pending chores**: count of chores not yet done
//!
//! The study window is a rolling N-day lookback ending at the given date, not
//! a calendar week.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{Chore, Document, Grade, StudySession};

/// Length of the rolling study window, in days.
pub const STUDY_WINDOW_DAYS: u64 = 7;

/// Sum of session hours inside the trailing `days`-day window ending at
/// `today` (inclusive), i.e. sessions dated `today - (days - 1)` or later.
pub fn recent_study_hours(sessions: &[StudySession], today: NaiveDate, days: u64) -> f64 {
    let cutoff = today - chrono::Days::new(days.saturating_sub(1));
    sessions
        .iter()
        .filter(|s| s.date >= cutoff)
        .map(|s| s.hours)
        .sum()
}

/// Arithmetic mean of all grade scores; 0.0 for an empty list.
pub fn average_grade(grades: &[Grade]) -> f64 {
    if grades.is_empty() {
        return 0.0;
    }
    grades.iter().map(|g| g.score).sum::<f64>() / grades.len() as f64
}

/// Number of chores still pending.
pub fn pending_chores(chores: &[Chore]) -> usize {
    chores.iter().filter(|c| !c.done).count()
}

/// The aggregate triple rendered on the dashboard and consumed by the
/// notifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Hours studied in the rolling 7-day window ending today.
    pub recent_hours: f64,
    /// Mean of all grade scores (0.0 when no grades exist).
    pub average_grade: f64,
    /// Count of chores not yet done.
    pub pending_chores: usize,
}

impl DashboardSummary {
    /// Compute all three aggregates for `doc` as of `today`.
    pub fn compute(doc: &Document, today: NaiveDate) -> Self {
        Self {
            recent_hours: recent_study_hours(&doc.study_sessions, today, STUDY_WINDOW_DAYS),
            average_grade: average_grade(&doc.grades),
            pending_chores: pending_chores(&doc.chores),
        }
    }
}
