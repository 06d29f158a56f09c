use aitrail_core::{expand_tilde, playbook, resolve_data_path};
use anyhow::Result;
use std::path::PathBuf;

pub fn handle_list(session_id: &str, dir: Option<&str>) -> Result<()> {
    let dir = usage_dir(dir)?;
    for id in playbook::load(session_id, &dir) {
        println!("{}", id);
    }
    Ok(())
}

pub fn handle_add(session_id: &str, pattern_id: &str, dir: Option<&str>) -> Result<()> {
    let dir = usage_dir(dir)?;
    playbook::append(session_id, pattern_id, &dir)?;
    Ok(())
}

fn usage_dir(explicit: Option<&str>) -> Result<PathBuf> {
    match explicit {
        Some(dir) => Ok(expand_tilde(dir)),
        None => Ok(resolve_data_path(None)?.join("sessions")),
    }
}
