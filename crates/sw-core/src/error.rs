use std::path::PathBuf;

use crate::scene::SceneId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when assembling or loading a story.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The designated start scene is not part of the story.
    #[error("start scene not found: \"{0}\"")]
    MissingStart(SceneId),

    /// The story has no scenes at all.
    #[error("story has no scenes")]
    EmptyStory,

    /// Two scenes were declared with the same ID.
    #[error("scene declared twice: \"{0}\"")]
    DuplicateScene(SceneId),

    /// The story file is not valid JSON or does not match the story format.
    #[error("invalid story file: {0}")]
    Parse(#[from] serde_json::Error),

    /// The story file could not be read or written.
    #[error("cannot access {}: {source}", path.display())]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}
