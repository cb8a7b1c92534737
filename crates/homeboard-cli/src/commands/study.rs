//! Study session commands for CLI.

use chrono::NaiveDate;
use clap::Subcommand;
use homeboard_core::DataStore;

use super::parse_float_lenient;

#[derive(Subcommand)]
pub enum StudyAction {
    /// Record a study session
    Add {
        /// Subject studied (blank falls back to "General")
        subject: String,
        /// Hours studied; non-numeric input counts as 0
        #[arg(long, default_value = "0")]
        hours: String,
        /// Session date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// List recorded study sessions
    List,
}

pub fn run(action: StudyAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = DataStore::open()?;

    match action {
        StudyAction::Add {
            subject,
            hours,
            date,
        } => {
            let mut doc = store.load_or_seed()?;
            let date = date.and_then(|d| NaiveDate::parse_from_str(&d, "%Y-%m-%d").ok());
            doc.add_study_session(&subject, parse_float_lenient(&hours), date);
            store.save(&doc)?;
            if let Some(added) = doc.study_sessions.last() {
                println!(
                    "Study session recorded: {} ({} hrs on {})",
                    added.subject, added.hours, added.date
                );
            }
        }
        StudyAction::List => {
            let doc = store.load_or_seed()?;
            println!("{}", serde_json::to_string_pretty(&doc.study_sessions)?);
        }
    }

    Ok(())
}
