use std::path::Path;

use colored::Colorize;

use sw_engine::{BatchOutcome, Selection, play_batch};

pub fn run(file: &Path, selections: &[String], script: Option<&Path>) -> Result<(), String> {
    let story = super::load_story(file)?;

    let mut all: Vec<Selection> = match script {
        Some(path) => read_script(path)?,
        None => Vec::new(),
    };
    all.extend(selections.iter().map(String::as_str).map(Selection::parse));
    tracing::debug!(count = all.len(), file = %file.display(), "batch play");

    let outcome = play_batch(&story, all).map_err(|e| e.to_string())?;
    let line = outcome.to_string();
    match outcome {
        BatchOutcome::EndedNormally => println!("{}", line.green()),
        BatchOutcome::InProgress(_) => println!("{line}"),
        BatchOutcome::BrokenReference(_) => println!("{}", line.yellow()),
    }

    Ok(())
}

/// Read a JSON array of selections: numbers are zero-based, strings as typed.
fn read_script(path: &Path) -> Result<Vec<Selection>, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    serde_json::from_str(&json).map_err(|e| format!("invalid script {}: {e}", path.display()))
}
