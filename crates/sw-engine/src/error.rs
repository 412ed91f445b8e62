//! Error types for the narrative engine.

use sw_core::SceneId;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Faults of the engine itself.
///
/// Bad player input and dangling choices are not errors; they surface as
/// [`Step::Invalid`](crate::Step::Invalid) and
/// [`Ending::BrokenReference`](crate::Ending::BrokenReference).
#[derive(Debug, Error)]
pub enum EngineError {
    /// The session already ended; no further input is accepted.
    #[error("the story has already ended")]
    AlreadyEnded,

    /// The interpreter stands on a scene the story does not contain.
    #[error("scene not found: {0}")]
    SceneMissing(SceneId),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
