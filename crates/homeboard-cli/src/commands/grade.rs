//! Grade commands for CLI.

use clap::Subcommand;
use homeboard_core::DataStore;

use super::parse_float_lenient;

#[derive(Subcommand)]
pub enum GradeAction {
    /// Record a grade
    Add {
        /// Course name (blank falls back to "Course")
        course: String,
        /// Score, clamped to 0-100; non-numeric input counts as 0
        #[arg(long, default_value = "0")]
        score: String,
    },
    /// List recorded grades
    List,
}

pub fn run(action: GradeAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = DataStore::open()?;

    match action {
        GradeAction::Add { course, score } => {
            let mut doc = store.load_or_seed()?;
            doc.add_grade(&course, parse_float_lenient(&score));
            store.save(&doc)?;
            if let Some(added) = doc.grades.last() {
                println!("Grade recorded: {} ({})", added.course, added.score);
            }
        }
        GradeAction::List => {
            let doc = store.load_or_seed()?;
            println!("{}", serde_json::to_string_pretty(&doc.grades)?);
        }
    }

    Ok(())
}
