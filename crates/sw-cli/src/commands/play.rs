use std::io;
use std::path::Path;

use colored::Colorize;

use sw_engine::{Ending, PlayConfig, run_interactive};

pub fn run(file: Option<&Path>, config: &PlayConfig) -> Result<(), String> {
    let story = match file {
        Some(path) => super::load_story(path)?,
        None => super::sample_story()?,
    };
    // findings are logged as warnings; play goes ahead regardless
    story.lint();

    let title = story.title().unwrap_or("Untitled story");
    println!("  {} {title}", "Playing".bold());
    println!("  Type a choice number or its text. Close input (Ctrl-D) to leave.");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let ending = run_interactive(&story, config, stdin.lock(), stdout.lock())
        .map_err(|e| e.to_string())?;

    if let Ending::BrokenReference(id) = &ending {
        eprintln!(
            "{}",
            format!("warning: the story points at missing scene '{id}'").yellow()
        );
    }

    Ok(())
}
