//! Data model for the dashboard document.
//!
//! Everything the dashboard knows lives in a single [`Document`]:
//! - **Study sessions**: append-only log of (subject, hours, date)
//! - **Grades**: append-only log of (course, score)
//! - **Chores**: task list whose `done` flags are toggled in place
//! - **Thresholds**: the numeric boundaries driving notifications
//!
//! All user input is normalized rather than rejected: blank labels fall back
//! to placeholders, hours are floored at zero, and scores are clamped to
//! [0, 100]. Every field carries a serde default so a partially-written
//! document still parses.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single study session entry. Identity is positional; sessions are never
/// edited or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudySession {
    #[serde(default = "default_subject")]
    pub subject: String,
    /// Hours studied, always >= 0.
    #[serde(default)]
    pub hours: f64,
    /// Calendar date of the session (no time component).
    pub date: NaiveDate,
}

/// A recorded grade. Score is clamped to [0, 100] on entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    #[serde(default = "default_course")]
    pub course: String,
    #[serde(default)]
    pub score: f64,
}

/// A chore entry. `done` is the only mutable field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chore {
    #[serde(default = "default_task")]
    pub task: String,
    #[serde(default)]
    pub done: bool,
}

/// Notification thresholds.
///
/// Mutable only by editing the persisted document directly; no operation
/// updates them. Missing keys are restored to these defaults at parse time,
/// so the notifier never sees a partial set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Target study hours over the trailing 7-day window.
    #[serde(default = "default_weekly_study_goal")]
    pub weekly_study_goal: f64,
    /// Target average grade.
    #[serde(default = "default_grade_goal")]
    pub grade_goal: f64,
    /// Pending chore count at which a warning fires.
    #[serde(default = "default_pending_chore_warning")]
    pub pending_chore_warning: usize,
    /// Pending chore count at which a critical alert fires.
    #[serde(default = "default_pending_chore_critical")]
    pub pending_chore_critical: usize,
}

/// The aggregate persisted unit: all sessions, grades, chores, and thresholds.
/// Replaced wholesale on every save.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub study_sessions: Vec<StudySession>,
    #[serde(default)]
    pub grades: Vec<Grade>,
    #[serde(default)]
    pub chores: Vec<Chore>,
    #[serde(default)]
    pub thresholds: Thresholds,
}

// Default functions
fn default_subject() -> String {
    "General".into()
}
fn default_course() -> String {
    "Course".into()
}
fn default_task() -> String {
    "New chore".into()
}
fn default_weekly_study_goal() -> f64 {
    14.0
}
fn default_grade_goal() -> f64 {
    85.0
}
fn default_pending_chore_warning() -> usize {
    3
}
fn default_pending_chore_critical() -> usize {
    5
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            weekly_study_goal: default_weekly_study_goal(),
            grade_goal: default_grade_goal(),
            pending_chore_warning: default_pending_chore_warning(),
            pending_chore_critical: default_pending_chore_critical(),
        }
    }
}

/// Today's UTC calendar date.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Blank or whitespace-only labels fall back to a placeholder.
fn label_or(raw: &str, fallback: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Non-finite values collapse to zero before any range handling.
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

impl Document {
    /// The hard-coded starter document written on first run (and whenever the
    /// persisted file is unreadable).
    pub fn seed() -> Self {
        let today = today_utc();
        Self {
            study_sessions: vec![
                StudySession {
                    subject: "Math".into(),
                    hours: 1.5,
                    date: today,
                },
                StudySession {
                    subject: "Science".into(),
                    hours: 2.0,
                    date: today - chrono::Days::new(1),
                },
            ],
            grades: vec![
                Grade {
                    course: "Math".into(),
                    score: 92.0,
                },
                Grade {
                    course: "Science".into(),
                    score: 84.0,
                },
            ],
            chores: vec![
                Chore {
                    task: "Clean desk".into(),
                    done: false,
                },
                Chore {
                    task: "Take out trash".into(),
                    done: true,
                },
            ],
            thresholds: Thresholds::default(),
        }
    }

    /// Append a study session. Blank subject becomes "General", hours are
    /// floored at zero, and a missing date defaults to today.
    pub fn add_study_session(&mut self, subject: &str, hours: f64, date: Option<NaiveDate>) {
        self.study_sessions.push(StudySession {
            subject: label_or(subject, "General"),
            hours: finite_or_zero(hours).max(0.0),
            date: date.unwrap_or_else(today_utc),
        });
    }

    /// Append a grade. Blank course becomes "Course"; score is clamped to
    /// [0, 100].
    pub fn add_grade(&mut self, course: &str, score: f64) {
        self.grades.push(Grade {
            course: label_or(course, "Course"),
            score: finite_or_zero(score).clamp(0.0, 100.0),
        });
    }

    /// Append a pending chore. Blank task becomes "New chore".
    pub fn add_chore(&mut self, task: &str) {
        self.chores.push(Chore {
            task: label_or(task, "New chore"),
            done: false,
        });
    }

    /// Flip the `done` flag of the chore at `index`. Out-of-range indexes are
    /// a silent no-op. Returns whether a flip happened, so callers can skip
    /// the save when nothing changed.
    pub fn toggle_chore(&mut self, index: usize) -> bool {
        match self.chores.get_mut(index) {
            Some(chore) => {
                chore.done = !chore.done;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn add_study_session_normalizes_blank_subject() {
        let mut doc = Document::default();
        doc.add_study_session("   ", 2.0, None);
        assert_eq!(doc.study_sessions[0].subject, "General");
    }

    #[test]
    fn add_study_session_floors_negative_hours() {
        let mut doc = Document::default();
        doc.add_study_session("Math", -3.5, None);
        assert_eq!(doc.study_sessions[0].hours, 0.0);
    }

    #[test]
    fn add_study_session_defaults_date_to_today() {
        let mut doc = Document::default();
        doc.add_study_session("Math", 1.0, None);
        assert_eq!(doc.study_sessions[0].date, today_utc());
    }

    #[test]
    fn add_grade_clamps_score_into_range() {
        let mut doc = Document::default();
        doc.add_grade("Math", 150.0);
        doc.add_grade("Science", -10.0);
        assert_eq!(doc.grades[0].score, 100.0);
        assert_eq!(doc.grades[1].score, 0.0);
    }

    #[test]
    fn add_grade_coerces_nan_to_zero() {
        let mut doc = Document::default();
        doc.add_grade("Math", f64::NAN);
        assert_eq!(doc.grades[0].score, 0.0);
    }

    #[test]
    fn add_chore_starts_pending() {
        let mut doc = Document::default();
        doc.add_chore("");
        assert_eq!(doc.chores[0].task, "New chore");
        assert!(!doc.chores[0].done);
    }

    #[test]
    fn toggle_chore_flips_in_range() {
        let mut doc = Document::seed();
        assert!(!doc.chores[0].done);
        assert!(doc.toggle_chore(0));
        assert!(doc.chores[0].done);
        assert!(doc.toggle_chore(0));
        assert!(!doc.chores[0].done);
    }

    #[test]
    fn toggle_chore_out_of_range_is_noop() {
        let mut doc = Document::seed();
        let before = doc.clone();
        assert!(!doc.toggle_chore(99));
        assert_eq!(doc, before);
    }

    #[test]
    fn thresholds_default_when_keys_missing() {
        let doc: Document = serde_json::from_str(r#"{"thresholds": {}}"#).unwrap();
        assert_eq!(doc.thresholds.weekly_study_goal, 14.0);
        assert_eq!(doc.thresholds.grade_goal, 85.0);
        assert_eq!(doc.thresholds.pending_chore_warning, 3);
        assert_eq!(doc.thresholds.pending_chore_critical, 5);
    }

    #[test]
    fn document_parses_with_all_keys_missing() {
        let doc: Document = serde_json::from_str("{}").unwrap();
        assert!(doc.study_sessions.is_empty());
        assert!(doc.grades.is_empty());
        assert!(doc.chores.is_empty());
        assert_eq!(doc.thresholds, Thresholds::default());
    }

    #[test]
    fn seed_document_shape() {
        let doc = Document::seed();
        assert_eq!(doc.study_sessions.len(), 2);
        assert_eq!(doc.grades.len(), 2);
        assert_eq!(doc.chores.len(), 2);
        assert_eq!(doc.study_sessions[0].date, today_utc());
        assert_eq!(doc.chores.iter().filter(|c| c.done).count(), 1);
    }

    #[test]
    fn document_roundtrips_through_json() {
        let doc = Document::seed();
        let json = serde_json::to_string_pretty(&doc).unwrap();
        let parsed: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, doc);
    }

    proptest! {
        #[test]
        fn grade_score_always_lands_in_range(score in -1e6f64..1e6f64) {
            let mut doc = Document::default();
            doc.add_grade("Any", score);
            let stored = doc.grades[0].score;
            prop_assert!((0.0..=100.0).contains(&stored));
        }

        #[test]
        fn study_hours_never_negative(hours in -1e6f64..1e6f64) {
            let mut doc = Document::default();
            doc.add_study_session("Any", hours, None);
            prop_assert!(doc.study_sessions[0].hours >= 0.0);
        }
    }
}
