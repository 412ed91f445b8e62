//! Player-facing text for scenes, endings, and rejected selections.

use sw_core::Scene;

use crate::outcome::{Ending, InvalidSelection};

const RULE: &str = "------------------------------";

/// Scene text as shown on entry.
pub fn scene_text(scene: &Scene) -> String {
    format!("\n{}\n", scene.text)
}

/// The numbered option list for a scene.
pub fn options(scene: &Scene) -> String {
    let mut out = String::from("\nWhat do you do?\n");
    for (i, label) in scene.choices.keys().enumerate() {
        out.push_str(&format!("{}. {label}\n", i + 1));
    }
    out
}

/// Shown after entering a scene with no choices.
pub fn terminal_scene() -> String {
    "\nThe game has ended.\n".to_string()
}

/// Closing message for a session that ended by a choice or by the input.
pub fn ending(ending: &Ending) -> String {
    match ending {
        Ending::Completed => format!("\n{RULE}\nGame over.\n{RULE}\n"),
        Ending::BrokenReference(id) => format!("\nScene '{id}' not found. Ending game.\n"),
        Ending::InputClosed => "\nInput closed. Leaving the story.\n".to_string(),
        Ending::StepLimit => "\nStep limit reached. Leaving the story.\n".to_string(),
    }
}

/// Feedback for a selection that matched nothing.
pub fn invalid(invalid: &InvalidSelection, hints: bool) -> String {
    let mut out = String::from("Invalid choice. Try again.\n");
    if let Some(label) = invalid.suggestion.as_ref().filter(|_| hints) {
        out.push_str(&format!("Did you mean '{label}'?\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Selection;
    use sw_core::{END, SceneId};

    fn hall() -> Scene {
        Scene::new("hall", "You are in a narrow hall.")
            .with_choice("Climb the stairs", "treasure")
            .with_choice("Go back", "intro")
            .with_choice("Sit down and wait", END)
    }

    #[test]
    fn options_are_numbered_from_one() {
        insta::assert_snapshot!(options(&hall()).trim(), @r"
        What do you do?
        1. Climb the stairs
        2. Go back
        3. Sit down and wait
        ");
    }

    #[test]
    fn scene_text_starts_with_blank_line() {
        assert_eq!(scene_text(&hall()), "\nYou are in a narrow hall.\n");
    }

    #[test]
    fn endings_are_distinguishable() {
        insta::assert_snapshot!(ending(&Ending::Completed).trim(), @r"
        ------------------------------
        Game over.
        ------------------------------
        ");
        assert_eq!(
            ending(&Ending::BrokenReference(SceneId::new("attic"))),
            "\nScene 'attic' not found. Ending game.\n"
        );
        assert_ne!(terminal_scene(), ending(&Ending::Completed));
    }

    #[test]
    fn invalid_with_and_without_hint() {
        let invalid_sel = InvalidSelection {
            selection: Selection::Text("go bak".into()),
            options: 3,
            suggestion: Some("Go back".into()),
        };
        assert_eq!(
            invalid(&invalid_sel, true),
            "Invalid choice. Try again.\nDid you mean 'Go back'?\n"
        );
        assert_eq!(invalid(&invalid_sel, false), "Invalid choice. Try again.\n");
    }
}
