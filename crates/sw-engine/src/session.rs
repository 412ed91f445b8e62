//! Interactive play over a line-based input stream.

use std::io::{BufRead, Write};

use sw_core::Story;

use crate::config::PlayConfig;
use crate::error::EngineResult;
use crate::interpreter::Interpreter;
use crate::outcome::{Ending, Step};
use crate::render;

/// Play `story` by reading one selection per line from `input` and writing
/// the transcript to `output`, until the session ends.
///
/// Unmatched selections re-show the same scene. A closed input stream ends
/// the session with [`Ending::InputClosed`]. Only stream failures are errors.
pub fn run_interactive<R, W>(
    story: &Story,
    config: &PlayConfig,
    mut input: R,
    mut output: W,
) -> EngineResult<Ending>
where
    R: BufRead,
    W: Write,
{
    let mut interpreter = Interpreter::new(story);
    let mut buf = Vec::new();

    let ending = loop {
        let scene = interpreter.enter()?;
        output.write_all(render::scene_text(scene).as_bytes())?;

        if let Some(ending) = interpreter.ending() {
            output.write_all(render::terminal_scene().as_bytes())?;
            break ending.clone();
        }

        output.write_all(render::options(scene).as_bytes())?;
        output.write_all(config.prompt.as_bytes())?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            tracing::debug!(scene = %scene.id, "input closed");
            let ending = Ending::InputClosed;
            interpreter.finish(ending.clone());
            output.write_all(render::ending(&ending).as_bytes())?;
            break ending;
        }

        // undecodable bytes become an unmatched selection, not a fault
        let line = String::from_utf8_lossy(&buf);
        match interpreter.advance(&line)? {
            Step::Moved(_) => {
                if config.max_steps.is_some_and(|max| interpreter.steps() >= max) {
                    let ending = Ending::StepLimit;
                    interpreter.finish(ending.clone());
                    output.write_all(render::ending(&ending).as_bytes())?;
                    break ending;
                }
            }
            Step::Invalid(invalid) => {
                output.write_all(render::invalid(&invalid, config.hints).as_bytes())?;
            }
            Step::Ended(ending) => {
                output.write_all(render::ending(&ending).as_bytes())?;
                break ending;
            }
        }
    };

    output.flush()?;
    tracing::debug!(%ending, steps = interpreter.steps(), "session finished");
    Ok(ending)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use sw_core::{END, Scene, SceneId};

    fn play(story: &Story, config: &PlayConfig, input: &str) -> (Ending, String) {
        let mut out = Vec::new();
        let ending = run_interactive(story, config, Cursor::new(input), &mut out).unwrap();
        (ending, String::from_utf8(out).unwrap())
    }

    fn go_story() -> Story {
        Story::builder()
            .scene(Scene::new("start", "t1").with_choice("Go", "s2"))
            .scene(Scene::new("s2", "t2"))
            .build()
            .unwrap()
    }

    #[test]
    fn walk_to_terminal_scene() {
        let (ending, out) = play(&go_story(), &PlayConfig::default(), "1\n");
        assert_eq!(ending, Ending::Completed);
        assert_eq!(
            out,
            "\nt1\n\nWhat do you do?\n1. Go\n> \nt2\n\nThe game has ended.\n"
        );
    }

    #[test]
    fn invalid_input_reprompts_same_scene() {
        let (ending, out) = play(&go_story(), &PlayConfig::default(), "5\ngo\n");
        assert_eq!(ending, Ending::Completed);
        assert_eq!(out.matches("\nt1\n").count(), 2);
        assert!(out.contains("Invalid choice. Try again."));
        assert!(out.ends_with("The game has ended.\n"));
    }

    #[test]
    fn hint_follows_near_miss() {
        let story = Story::builder()
            .scene(Scene::new("start", "t").with_choice("Leave", END))
            .build()
            .unwrap();

        let (_, out) = play(&story, &PlayConfig::default(), "leav\n1\n");
        assert!(out.contains("Did you mean 'Leave'?"));

        let config = PlayConfig::default().with_hints(false);
        let (_, out) = play(&story, &config, "leav\n1\n");
        assert!(!out.contains("Did you mean"));
    }

    #[test]
    fn end_sentinel_prints_game_over() {
        let story = Story::builder()
            .scene(Scene::new("start", "t").with_choice("Leave", END))
            .build()
            .unwrap();
        let (ending, out) = play(&story, &PlayConfig::default(), "1\n");
        assert_eq!(ending, Ending::Completed);
        assert!(out.contains("Game over."));
        assert!(!out.contains("The game has ended."));
    }

    #[test]
    fn broken_reference_ends_gracefully() {
        let story = Story::builder()
            .scene(Scene::new("start", "t").with_choice("Go", "nowhere"))
            .build()
            .unwrap();
        let (ending, out) = play(&story, &PlayConfig::default(), "1\n");
        assert_eq!(ending, Ending::BrokenReference(SceneId::new("nowhere")));
        assert!(out.contains("Scene 'nowhere' not found. Ending game."));
        assert!(!out.contains("Game over."));
    }

    #[test]
    fn closed_input_ends_session() {
        let (ending, out) = play(&go_story(), &PlayConfig::default(), "");
        assert_eq!(ending, Ending::InputClosed);
        assert!(out.contains("Input closed."));

        // closing after some invalid attempts
        let (ending, _) = play(&go_story(), &PlayConfig::default(), "nope\n9\n");
        assert_eq!(ending, Ending::InputClosed);
    }

    #[test]
    fn start_scene_without_choices_needs_no_input() {
        let story = Story::builder()
            .scene(Scene::new("only", "Nothing to do."))
            .build()
            .unwrap();
        let (ending, out) = play(&story, &PlayConfig::default(), "");
        assert_eq!(ending, Ending::Completed);
        assert!(!out.contains("What do you do?"));
    }

    #[test]
    fn step_limit_stops_cycles() {
        let story = Story::builder()
            .scene(Scene::new("a", "A").with_choice("on", "b"))
            .scene(Scene::new("b", "B").with_choice("back", "a"))
            .build()
            .unwrap();
        let config = PlayConfig::default().with_max_steps(3);
        let input = "1\n".repeat(10);
        let (ending, out) = play(&story, &config, &input);
        assert_eq!(ending, Ending::StepLimit);
        assert_eq!(out.matches("What do you do?").count(), 3);
    }

    #[test]
    fn undecodable_line_is_retried() {
        let story = go_story();
        let mut out = Vec::new();
        let input: &[u8] = b"\xff\xfe\n1\n";
        let ending = run_interactive(&story, &PlayConfig::default(), input, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(ending, Ending::Completed);
        assert!(out.contains("Invalid choice. Try again."));
        assert_eq!(out.matches("\nt1\n").count(), 2);
    }

    #[test]
    fn custom_prompt() {
        let config = PlayConfig::default().with_prompt("choice: ");
        let (_, out) = play(&go_story(), &config, "1\n");
        assert!(out.contains("choice: "));
        assert!(!out.contains("> "));
    }

    #[test]
    fn sample_story_playthrough() {
        let story = sw_core::sample::dark_room().unwrap();
        // window, back to the room, north, climb, open the chest
        let input = "2\nreturn to the room\n1\n1\nOpen the chest\n";
        let (ending, out) = play(&story, &PlayConfig::default(), input);
        assert_eq!(ending, Ending::Completed);
        assert_eq!(out.matches("You wake up in a dark room.").count(), 2);
        assert!(out.contains("locked chest"));
    }
}
