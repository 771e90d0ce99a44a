use crate::error::{PathError, Result};
use crate::math::Point3;
use crate::session::Session;

/// Moves a single path point to a new position (one-point drag).
pub struct MovePoint {
    index: usize,
    position: Point3,
}

impl MovePoint {
    /// Creates a new `MovePoint` operation.
    #[must_use]
    pub fn new(index: usize, position: Point3) -> Self {
        Self { index, position }
    }

    /// Executes the move, pushing a history snapshot first.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidSelection`] when the index is absent or
    /// names a non-interactive point; nothing is mutated in that case.
    pub fn execute(&self, session: &mut Session) -> Result<()> {
        if !session.path().is_interactive(self.index) {
            return Err(PathError::InvalidSelection(format!(
                "point {} is absent or not interactive",
                self.index
            ))
            .into());
        }
        session.snapshot();
        session.path_mut().set_position(self.index, self.position)?;
        Ok(())
    }
}
