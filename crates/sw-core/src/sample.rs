//! A small built-in story for trying the engine without a story file.

use crate::error::CoreResult;
use crate::scene::{END, Scene};
use crate::story::Story;

/// The dark-room story: four scenes, two endings, and a loop back to the start.
pub fn dark_room() -> CoreResult<Story> {
    Story::builder()
        .title("The Dark Room")
        .start_scene(
            Scene::new(
                "intro",
                "You wake up in a dark room. There is a door to the NORTH \
                 and a small window to the EAST.",
            )
            .with_choice("Go north through the door", "hall")
            .with_choice("Look through the window", "window"),
        )
        .scene(
            Scene::new(
                "hall",
                "You are in a narrow hall with faded portraits. A stairwell leads up.",
            )
            .with_choice("Climb the stairs", "treasure")
            .with_choice("Go back to the dark room", "intro"),
        )
        .scene(
            Scene::new(
                "window",
                "The window is small but open to a courtyard below. \
                 You could try to climb out.",
            )
            .with_choice("Climb out the window", END)
            .with_choice("Return to the room", "intro"),
        )
        .scene(
            Scene::new(
                "treasure",
                "At the top of the stairs you find a locked chest on a pedestal.",
            )
            .with_choice("Open the chest", END)
            .with_choice("Go back down", "hall"),
        )
        .build()
}
