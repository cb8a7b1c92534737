//! Dashboard view command: entries, aggregates, and notifications.

use homeboard_core::model::today_utc;
use homeboard_core::{build_notifications, DashboardSummary, DataStore, Level};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let store = DataStore::open()?;
    let doc = store.load_or_seed()?;
    let today = today_utc();
    let summary = DashboardSummary::compute(&doc, today);
    let notifications = build_notifications(&doc, today);

    println!("Homeboard — {today}");
    println!();

    println!("Notifications:");
    for n in &notifications {
        let marker = match n.level {
            Level::Success => "ok",
            Level::Warning => "warn",
            Level::Critical => "crit",
        };
        println!("  [{marker}] {}", n.message);
    }
    println!();

    println!(
        "Study: {:.1} hrs in the last 7 days (goal {})",
        summary.recent_hours, doc.thresholds.weekly_study_goal
    );
    for s in &doc.study_sessions {
        println!("  {}  {:<12} {:.1} hrs", s.date, s.subject, s.hours);
    }
    println!();

    println!(
        "Grades: average {:.1} (goal {})",
        summary.average_grade, doc.thresholds.grade_goal
    );
    for g in &doc.grades {
        println!("  {:<12} {:.1}", g.course, g.score);
    }
    println!();

    println!("Chores: {} pending", summary.pending_chores);
    for (i, c) in doc.chores.iter().enumerate() {
        let mark = if c.done { "x" } else { " " };
        println!("  {i}. [{mark}] {}", c.task);
    }

    Ok(())
}
