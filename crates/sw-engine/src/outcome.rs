//! Results of stepping through a story.

use std::fmt;

use sw_core::SceneId;

use crate::selection::Selection;

/// How a play session finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ending {
    /// The end sentinel or a scene without choices was reached.
    Completed,
    /// A choice led to a scene that does not exist.
    BrokenReference(SceneId),
    /// The player's input stream closed.
    InputClosed,
    /// The configured step limit was reached.
    StepLimit,
}

impl Ending {
    /// Whether the story itself ended, as opposed to being cut short.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for Ending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed => write!(f, "completed"),
            Self::BrokenReference(id) => write!(f, "broken reference to '{id}'"),
            Self::InputClosed => write!(f, "input closed"),
            Self::StepLimit => write!(f, "step limit reached"),
        }
    }
}

/// A selection that matched none of the offered choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSelection {
    /// What the player selected.
    pub selection: Selection,
    /// How many options were offered.
    pub options: usize,
    /// The closest label, when one is similar enough.
    pub suggestion: Option<String>,
}

/// Result of one interpreter step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Moved to another scene.
    Moved(SceneId),
    /// The session is over.
    Ended(Ending),
    /// The selection did not resolve; the scene is unchanged.
    Invalid(InvalidSelection),
}

/// Final result of a batch playthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// The end sentinel was reached.
    EndedNormally,
    /// Play stopped at this scene without reaching the end sentinel.
    InProgress(SceneId),
    /// A choice led to a scene that does not exist.
    BrokenReference(SceneId),
}

impl fmt::Display for BatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndedNormally => write!(f, "ended normally"),
            Self::InProgress(id) => write!(f, "in progress at '{id}'"),
            Self::BrokenReference(id) => write!(f, "broken reference: '{id}'"),
        }
    }
}
