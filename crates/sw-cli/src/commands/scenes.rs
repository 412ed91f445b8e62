use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(file: &Path) -> Result<(), String> {
    let story = super::load_story(file)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Scene", "Choices", "Leads to", "Text"]);

    for scene in story.scenes() {
        let id = if scene.id == *story.start() {
            format!("{} (start)", scene.id)
        } else {
            scene.id.to_string()
        };

        let leads_to = if scene.is_terminal() {
            "—".to_string()
        } else {
            scene
                .choices
                .values()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };

        let text = if scene.text.chars().count() > 60 {
            format!("{}...", scene.text.chars().take(57).collect::<String>())
        } else {
            scene.text.clone()
        };

        table.add_row(vec![id, scene.choices.len().to_string(), leads_to, text]);
    }

    println!("{table}");
    println!();
    println!("  {} scenes", story.scene_count());

    Ok(())
}
