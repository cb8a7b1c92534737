//! Chore commands for CLI.

use clap::Subcommand;
use homeboard_core::DataStore;

#[derive(Subcommand)]
pub enum ChoreAction {
    /// Add a pending chore
    Add {
        /// Task description (blank falls back to "New chore")
        task: String,
    },
    /// Flip a chore's done flag by its list position
    Toggle {
        /// Zero-based position in the chore list
        index: usize,
    },
    /// List chores
    List,
}

pub fn run(action: ChoreAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = DataStore::open()?;

    match action {
        ChoreAction::Add { task } => {
            let mut doc = store.load_or_seed()?;
            doc.add_chore(&task);
            store.save(&doc)?;
            if let Some(added) = doc.chores.last() {
                println!("Chore added: {}", added.task);
            }
        }
        ChoreAction::Toggle { index } => {
            let mut doc = store.load_or_seed()?;
            if doc.toggle_chore(index) {
                store.save(&doc)?;
                if let Some(chore) = doc.chores.get(index) {
                    let state = if chore.done { "done" } else { "pending" };
                    println!("Chore '{}' is now {state}", chore.task);
                }
            } else {
                // Out-of-range is a silent no-op; nothing changed, nothing saved.
                println!("No chore at index {index}");
            }
        }
        ChoreAction::List => {
            let doc = store.load_or_seed()?;
            println!("{}", serde_json::to_string_pretty(&doc.chores)?);
        }
    }

    Ok(())
}
