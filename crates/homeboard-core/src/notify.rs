//! Notification derivation.
//!
//! The one decision-making piece of the dashboard: a pure function mapping a
//! document through its thresholds into an ordered list of leveled messages.
//! Evaluation order is fixed (study, then grades, then chores), each check
//! contributing zero or one notification; when every check passes, a single
//! success notification stands in for silence.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{today_utc, Document};
use crate::stats::{average_grade, pending_chores, recent_study_hours, STUDY_WINDOW_DAYS};

/// Severity of a notification, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Success,
    Warning,
    Critical,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Level::Success => "success",
            Level::Warning => "warning",
            Level::Critical => "critical",
        };
        f.write_str(s)
    }
}

/// A single leveled dashboard alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: Level,
    pub message: String,
}

impl Notification {
    fn new(level: Level, message: String) -> Self {
        Self { level, message }
    }
}

/// Derive notifications for `doc` as of `today`.
///
/// Pure and total over a well-formed document. The three checks run in a
/// fixed order and are independent:
///
/// 1. Study ratio = recent hours / weekly goal (no alert when the goal is
///    zero). Below 50% of goal is critical, below 100% a warning.
/// 2. Average grade below 85% of the grade goal is critical, below the goal
///    itself a warning. The two are mutually exclusive by construction.
/// 3. Pending chores at or above the critical count is critical, at or above
///    the warning count a warning.
///
/// When no check fires, exactly one success notification is returned.
pub fn build_notifications(doc: &Document, today: NaiveDate) -> Vec<Notification> {
    let thresholds = &doc.thresholds;
    let hours = recent_study_hours(&doc.study_sessions, today, STUDY_WINDOW_DAYS);
    let avg_grade = average_grade(&doc.grades);
    let pending = pending_chores(&doc.chores);

    let mut notifications = Vec::new();

    let weekly_goal = thresholds.weekly_study_goal;
    let study_ratio = if weekly_goal != 0.0 {
        hours / weekly_goal
    } else {
        1.0
    };
    if study_ratio < 0.5 {
        notifications.push(Notification::new(
            Level::Critical,
            format!("Study time dangerously low: {hours:.1} / {weekly_goal} hrs this week."),
        ));
    } else if study_ratio < 1.0 {
        notifications.push(Notification::new(
            Level::Warning,
            format!("Study time below goal: {hours:.1} / {weekly_goal} hrs this week."),
        ));
    }

    let grade_goal = thresholds.grade_goal;
    let recovery = grade_goal * 0.85;
    if avg_grade < recovery {
        notifications.push(Notification::new(
            Level::Critical,
            format!("Grades slipping: avg {avg_grade:.1} below recovery threshold {recovery:.0}."),
        ));
    } else if avg_grade < grade_goal {
        notifications.push(Notification::new(
            Level::Warning,
            format!("Average grade {avg_grade:.1} is below goal of {grade_goal}."),
        ));
    }

    if pending >= thresholds.pending_chore_critical {
        notifications.push(Notification::new(
            Level::Critical,
            format!("{pending} chores pending — handle immediately to avoid escalation."),
        ));
    } else if pending >= thresholds.pending_chore_warning {
        notifications.push(Notification::new(
            Level::Warning,
            format!("{pending} chores still pending — clear them soon."),
        ));
    }

    if notifications.is_empty() {
        notifications.push(Notification::new(
            Level::Success,
            "All systems nominal — keep up the momentum!".to_string(),
        ));
    }

    notifications
}

/// [`build_notifications`] evaluated at today's UTC date.
pub fn build_notifications_now(doc: &Document) -> Vec<Notification> {
    build_notifications(doc, today_utc())
}
