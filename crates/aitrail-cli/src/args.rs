use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "aitrail")]
#[command(about = "Summarize AI coding agent session trajectories", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize the trajectory logs in a session directory
    Summary {
        /// Session log directory
        dir: String,

        /// Narrow the summary to one conversation id
        #[arg(long)]
        conversation: Option<String>,

        /// Emit the summary as JSON instead of human-readable text
        #[arg(long)]
        json: bool,

        /// Skip git context resolution
        #[arg(long)]
        no_git: bool,
    },

    /// Inspect or record playbook usage for a session
    Playbooks {
        #[command(subcommand)]
        command: PlaybookCommands,
    },
}

#[derive(Subcommand)]
pub enum PlaybookCommands {
    /// Print the pattern ids recorded for a session
    List {
        session_id: String,

        /// Directory holding playbook usage files (defaults to the
        /// aitrail data directory)
        #[arg(long)]
        dir: Option<String>,
    },

    /// Record one pattern id for a session (no-op if already present)
    Add {
        session_id: String,
        pattern_id: String,

        /// Directory holding playbook usage files (defaults to the
        /// aitrail data directory)
        #[arg(long)]
        dir: Option<String>,
    },
}
