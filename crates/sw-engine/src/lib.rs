//! Branching narrative interpreter for Scenewalk.
//!
//! Walks a [`sw_core::Story`] one selection at a time. Selections are
//! resolved by option number or by case-insensitive label text; unmatched
//! selections leave the player where they are, and choices pointing at
//! missing scenes end the session with a distinct outcome instead of a
//! crash. Stories can be played interactively over any line-based stream
//! or scripted with a list of selections.

/// Scripted playthroughs.
pub mod batch;
/// Interactive session configuration.
pub mod config;
/// Error types for the engine.
pub mod error;
/// The story state machine.
pub mod interpreter;
/// Step results and session endings.
pub mod outcome;
/// Player-facing text.
pub mod render;
/// Selection parsing and resolution.
pub mod selection;
/// Interactive play loop.
pub mod session;

pub use batch::play_batch;
pub use config::PlayConfig;
pub use error::{EngineError, EngineResult};
pub use interpreter::{Interpreter, PlayState};
pub use outcome::{BatchOutcome, Ending, InvalidSelection, Step};
pub use selection::Selection;
pub use session::run_interactive;
