//! Core types for Scenewalk: scenes, choices, and the story graph.
//!
//! A [`Story`] is a directed graph of [`Scene`]s. Each scene carries the text
//! shown on entry and an ordered set of labeled choices leading to another
//! scene or to the end. Stories are assembled with a [`StoryBuilder`] or
//! loaded from JSON, and are validated once at construction.

/// Error types used throughout the crate.
pub mod error;
/// Graph diagnostics for story authors.
pub mod lint;
/// Built-in sample story.
pub mod sample;
/// Scenes, scene identifiers, and choice destinations.
pub mod scene;
/// The story graph, its builder, and the JSON story format.
pub mod story;

/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export lint findings.
pub use lint::Issue;
/// Re-export scene types.
pub use scene::{Destination, END, Scene, SceneId};
/// Re-export story types.
pub use story::{Story, StoryBuilder};
