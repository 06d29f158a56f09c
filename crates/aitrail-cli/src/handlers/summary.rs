use aitrail_core::{expand_tilde, playbook, resolve_git_context};
use aitrail_engine::{TrajectorySummary, build_summary, filter_collection, with_session_commits};
use aitrail_providers::read_session_dir;
use aitrail_types::SummaryContext;
use anyhow::Result;
use owo_colors::OwoColorize;

pub fn handle(dir: &str, conversation: Option<&str>, json: bool, no_git: bool) -> Result<()> {
    let session_dir = expand_tilde(dir);

    let mut collection = read_session_dir(&session_dir);
    if let Some(id) = conversation {
        collection = filter_collection(&collection, id);
    }

    let git = if no_git {
        None
    } else {
        Some(with_session_commits(
            resolve_git_context(None),
            &collection.shell,
        ))
    };

    // Playbook usage files live alongside the trajectory logs, keyed by
    // conversation id.
    let playbook_used = conversation.map(|id| playbook::load(id, &session_dir));

    let context = if git.is_some() || playbook_used.is_some() {
        Some(SummaryContext { git, playbook_used })
    } else {
        None
    };

    let summary = build_summary(&collection, context.as_ref());

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_human(&summary);
    }

    Ok(())
}

fn print_human(summary: &TrajectorySummary) {
    println!("{} {}", "Trail:".bold(), summary.ai_trail);

    if !summary.tool_usage.is_empty() {
        println!("\n{}", "Tool usage".bold());
        for usage in &summary.tool_usage {
            println!("  {} x{}", usage.name, usage.count);
        }
    }

    if !summary.edited_files.is_empty() {
        println!("\n{}", "Edited files".bold());
        for path in &summary.edited_files {
            println!("  {}", path);
        }
    }

    if !summary.shell_commands.is_empty() {
        println!("\n{}", "Shell commands".bold());
        for command in &summary.shell_commands {
            println!("  {}", command);
        }
    }

    if let Some(git) = &summary.git {
        println!("\n{}", "Git".bold());
        println!("  branch: {}  hash: {}", git.branch, git.hash);
        if let Some(commits) = &git.session_commits {
            println!("  session commits: {}", commits.join(", "));
        }
    }

    if let Some(playbooks) = &summary.playbook_used {
        println!("\n{}", "Playbooks used".bold());
        if playbooks.is_empty() {
            println!("  (none)");
        }
        for id in playbooks {
            println!("  {}", id);
        }
    }

    if !summary.steps.is_empty() {
        println!("\n{}", "Steps".bold());
        for step in &summary.steps {
            println!("  {}", step.dimmed());
        }
    }
}
