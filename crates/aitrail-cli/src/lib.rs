mod args;
mod handlers;

pub use args::{Cli, Commands, PlaybookCommands};

use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Summary {
            dir,
            conversation,
            json,
            no_git,
        } => handlers::summary::handle(&dir, conversation.as_deref(), json, no_git),
        Commands::Playbooks { command } => match command {
            PlaybookCommands::List { session_id, dir } => {
                handlers::playbooks::handle_list(&session_id, dir.as_deref())
            }
            PlaybookCommands::Add {
                session_id,
                pattern_id,
                dir,
            } => handlers::playbooks::handle_add(&session_id, &pattern_id, dir.as_deref()),
        },
    }
}
