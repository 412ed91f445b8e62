use std::path::Path;

pub fn run(output: Option<&Path>) -> Result<(), String> {
    let story = super::sample_story()?;

    if let Some(path) = output {
        story.save(path).map_err(|e| e.to_string())?;
        println!("  Wrote sample story to {}", path.display());
    } else {
        let json = story.to_json_pretty().map_err(|e| e.to_string())?;
        println!("{json}");
    }

    Ok(())
}
