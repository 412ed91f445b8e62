pub mod check;
pub mod play;
pub mod run;
pub mod sample;
pub mod scenes;

use std::path::Path;

use sw_core::{CoreError, Story};

/// Load and validate a story file.
fn load_story(path: &Path) -> Result<Story, String> {
    Story::load(path).map_err(|e| match e {
        // already names the path
        CoreError::Io { .. } => e.to_string(),
        _ => format!("{}: {e}", path.display()),
    })
}

/// The built-in sample story.
fn sample_story() -> Result<Story, String> {
    sw_core::sample::dark_room().map_err(|e| format!("sample story is invalid: {e}"))
}
