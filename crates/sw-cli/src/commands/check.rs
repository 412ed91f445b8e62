use std::path::Path;

use colored::Colorize;

pub fn run(file: &Path) -> Result<(), String> {
    let story = super::load_story(file)?;
    let issues = story.lint();

    for issue in &issues {
        println!("  {} {issue}", "warning:".yellow().bold());
    }

    let title = story.title().unwrap_or("Untitled story");
    if issues.is_empty() {
        println!("  All checks passed for '{title}'.");
    } else {
        println!(
            "  '{title}' is playable with {} warning{}.",
            issues.len(),
            if issues.len() == 1 { "" } else { "s" },
        );
    }
    println!(
        "  {} scenes, {} choices, starts at '{}'",
        story.scene_count(),
        story.choice_count(),
        story.start()
    );

    Ok(())
}
