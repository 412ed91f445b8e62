//! The story state machine.

use sw_core::{Destination, Scene, SceneId, Story};

use crate::error::{EngineError, EngineResult};
use crate::outcome::{Ending, InvalidSelection, Step};
use crate::selection::{Selection, suggest};

/// Where the interpreter currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayState {
    /// In a scene, waiting for a selection.
    At(SceneId),
    /// Finished; no further transitions.
    Ended(Ending),
}

/// Walks a [`Story`] one selection at a time.
///
/// The story is only borrowed; any number of interpreters can play the same
/// story.
#[derive(Debug, Clone)]
pub struct Interpreter<'s> {
    story: &'s Story,
    state: PlayState,
    steps: usize,
}

impl<'s> Interpreter<'s> {
    /// Start at the story's start scene.
    pub fn new(story: &'s Story) -> Self {
        Self {
            story,
            state: PlayState::At(story.start().clone()),
            steps: 0,
        }
    }

    /// The story being played.
    pub fn story(&self) -> &'s Story {
        self.story
    }

    /// Current state.
    pub fn state(&self) -> &PlayState {
        &self.state
    }

    /// How the session ended, once it has.
    pub fn ending(&self) -> Option<&Ending> {
        match &self.state {
            PlayState::Ended(ending) => Some(ending),
            PlayState::At(_) => None,
        }
    }

    /// Whether the session is over.
    pub fn is_ended(&self) -> bool {
        self.ending().is_some()
    }

    /// Number of scene transitions taken so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// The scene the player is in.
    pub fn current(&self) -> EngineResult<&'s Scene> {
        match &self.state {
            PlayState::At(id) => self
                .story
                .scene(id)
                .ok_or_else(|| EngineError::SceneMissing(id.clone())),
            PlayState::Ended(_) => Err(EngineError::AlreadyEnded),
        }
    }

    /// Enter the current scene.
    ///
    /// Entering a scene without choices ends the session; the scene is still
    /// returned so its text can be shown.
    pub fn enter(&mut self) -> EngineResult<&'s Scene> {
        let scene = self.current()?;
        if scene.is_terminal() {
            tracing::debug!(scene = %scene.id, "entered terminal scene");
            self.finish(Ending::Completed);
        }
        Ok(scene)
    }

    /// Apply one line of player input.
    pub fn advance(&mut self, input: &str) -> EngineResult<Step> {
        self.choose(&Selection::parse(input))
    }

    /// Apply a selection to the current scene.
    pub fn choose(&mut self, selection: &Selection) -> EngineResult<Step> {
        let scene = self.current()?;
        if scene.is_terminal() {
            self.finish(Ending::Completed);
            return Ok(Step::Ended(Ending::Completed));
        }

        let labels = scene.labels();
        let Some((label, dest)) = selection
            .position(&labels)
            .and_then(|i| scene.choices.get_index(i))
        else {
            let suggestion = match selection {
                Selection::Text(text) => suggest(&labels, text).map(str::to_string),
                _ => None,
            };
            tracing::debug!(scene = %scene.id, %selection, "selection did not match");
            return Ok(Step::Invalid(InvalidSelection {
                selection: selection.clone(),
                options: labels.len(),
                suggestion,
            }));
        };

        tracing::debug!(scene = %scene.id, choice = %label, to = %dest, "choice taken");
        let step = match dest {
            Destination::End => {
                self.finish(Ending::Completed);
                Step::Ended(Ending::Completed)
            }
            Destination::Scene(id) if self.story.contains(id) => {
                self.state = PlayState::At(id.clone());
                self.steps += 1;
                Step::Moved(id.clone())
            }
            Destination::Scene(id) => {
                tracing::warn!(
                    scene = %scene.id,
                    choice = %label,
                    target = %id,
                    "choice leads to unknown scene"
                );
                let ending = Ending::BrokenReference(id.clone());
                self.finish(ending.clone());
                Step::Ended(ending)
            }
        };
        Ok(step)
    }

    /// End the session, whatever state it is in.
    pub fn finish(&mut self, ending: Ending) {
        self.state = PlayState::Ended(ending);
    }
}
