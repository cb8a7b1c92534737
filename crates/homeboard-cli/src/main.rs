use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "homeboard-cli", version, about = "Homeboard CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard: entries, aggregates, and notifications
    Show,
    /// Study session management
    Study {
        #[command(subcommand)]
        action: commands::study::StudyAction,
    },
    /// Grade management
    Grade {
        #[command(subcommand)]
        action: commands::grade::GradeAction,
    },
    /// Chore management
    Chore {
        #[command(subcommand)]
        action: commands::chore::ChoreAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Show => commands::dashboard::run(),
        Commands::Study { action } => commands::study::run(action),
        Commands::Grade { action } => commands::grade::run(action),
        Commands::Chore { action } => commands::chore::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
