use crate::error::{PathError, Result};
use crate::math::Vector3;
use crate::session::Session;

/// Translates a group of path points by a common displacement.
///
/// Backs the multi-select drag: the host accumulates a delta and applies it
/// to every selected index at once.
pub struct MoveSelection {
    indices: Vec<usize>,
    delta: Vector3,
}

impl MoveSelection {
    /// Creates a new `MoveSelection` operation.
    #[must_use]
    pub fn new(indices: Vec<usize>, delta: Vector3) -> Self {
        Self { indices, delta }
    }

    /// Executes the translation, pushing a history snapshot first.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidSelection`] when the selection is empty
    /// or names an absent/non-interactive point; the path and history are
    /// left untouched in that case.
    pub fn execute(&self, session: &mut Session) -> Result<()> {
        if self.indices.is_empty() {
            return Err(PathError::InvalidSelection("empty selection".into()).into());
        }
        for &index in &self.indices {
            if !session.path().is_interactive(index) {
                return Err(PathError::InvalidSelection(format!(
                    "point {index} is absent or not interactive"
                ))
                .into());
            }
        }

        session.snapshot();
        let path = session.path_mut();
        for &index in &self.indices {
            path.translate(index, &self.delta)?;
        }
        Ok(())
    }
}
