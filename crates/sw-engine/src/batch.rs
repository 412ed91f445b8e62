//! Scripted playthroughs from a pre-supplied list of selections.

use sw_core::Story;

use crate::error::EngineResult;
use crate::interpreter::Interpreter;
use crate::outcome::{BatchOutcome, Ending, Step};
use crate::selection::Selection;

/// Play `story` using `selections` in order.
///
/// Integer selections are zero-based indices, numeric strings one-based
/// numbers, and other strings label text. Play stops at the current scene
/// when the selections run out, when a selection does not match, or when a
/// scene without choices is reached; only the end sentinel counts as
/// [`BatchOutcome::EndedNormally`].
pub fn play_batch<I>(story: &Story, selections: I) -> EngineResult<BatchOutcome>
where
    I: IntoIterator,
    I::Item: Into<Selection>,
{
    let mut interpreter = Interpreter::new(story);
    let mut selections = selections.into_iter().map(Into::into);

    loop {
        let scene = interpreter.current()?;
        if scene.is_terminal() {
            return Ok(BatchOutcome::InProgress(scene.id.clone()));
        }

        let Some(selection) = selections.next() else {
            return Ok(BatchOutcome::InProgress(scene.id.clone()));
        };

        match interpreter.choose(&selection)? {
            Step::Moved(_) => {}
            Step::Invalid(_) => {
                tracing::debug!(scene = %scene.id, %selection, "unmatched selection");
                return Ok(BatchOutcome::InProgress(scene.id.clone()));
            }
            Step::Ended(Ending::BrokenReference(id)) => {
                return Ok(BatchOutcome::BrokenReference(id));
            }
            Step::Ended(_) => return Ok(BatchOutcome::EndedNormally),
        }
    }
}
