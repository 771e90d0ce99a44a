use tracing::debug;

use crate::config::EngineConfig;
use crate::error::{HistoryError, PathError, Result};
use crate::path::{ArchPath, HistoryStack};

/// Expands a multi-selection to the full inclusive index range.
///
/// Selecting any two points auto-includes everything between them: for two
/// or more indices the result is `[min, max]` inclusive, in ascending
/// order. Fewer than two indices are returned unchanged.
#[must_use]
pub fn expand_selection_range(indices: &[usize]) -> Vec<usize> {
    if indices.len() < 2 {
        return indices.to_vec();
    }
    let mut min = indices[0];
    let mut max = indices[0];
    for &index in indices {
        min = min.min(index);
        max = max.max(index);
    }
    (min..=max).collect()
}

/// One editing session: the live path, its undo history, the engine
/// configuration, and the transient selection sets.
///
/// All mutating operations funnel through `&mut Session`, take their
/// snapshot before touching the path, and complete synchronously; a
/// multi-threaded host must serialize mutating calls itself
/// (single-writer), while read-only queries can run against a clone.
#[derive(Debug, Default)]
pub struct Session {
    path: ArchPath,
    history: HistoryStack,
    config: EngineConfig,
    selection: Vec<usize>,
    loop_picks: Vec<usize>,
}

impl Session {
    /// Creates a session with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::ConfigError`] when a parameter is out of
    /// range.
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate().map_err(crate::error::ArchwireError::from)?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// The current path.
    #[must_use]
    pub fn path(&self) -> &ArchPath {
        &self.path
    }

    pub(crate) fn path_mut(&mut self) -> &mut ArchPath {
        &mut self.path
    }

    /// The undo history.
    #[must_use]
    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Replaces the configuration after validating it.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::ConfigError`] when a parameter is out of
    /// range; the previous configuration stays in effect.
    pub fn set_config(&mut self, config: EngineConfig) -> Result<()> {
        config.validate().map_err(crate::error::ArchwireError::from)?;
        self.config = config;
        Ok(())
    }

    /// Pushes a deep snapshot of the current path onto the history.
    pub(crate) fn snapshot(&mut self) {
        self.history.push(&self.path);
    }

    /// Restores the most recent snapshot, discarding the current path.
    ///
    /// Selections are cleared: their indices belong to the replaced path.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::EmptyHistory`] (a reported no-op) when the
    /// history is empty.
    pub fn undo(&mut self) -> Result<()> {
        let Some(previous) = self.history.pop() else {
            return Err(HistoryError::EmptyHistory.into());
        };
        debug!(points = previous.len(), "undo: restored snapshot");
        self.path = previous;
        self.clear_transient_selections();
        Ok(())
    }

    /// Wipes the path and all transient selections.
    ///
    /// Takes a snapshot first, but only when there is something to lose.
    pub fn clear(&mut self) {
        if !self.path.is_empty() {
            self.snapshot();
        }
        self.path.clear();
        self.clear_transient_selections();
    }

    /// The multi-selection indices, ascending once expanded.
    #[must_use]
    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    /// The loop endpoint picks, in pick order (at most 3).
    #[must_use]
    pub fn loop_picks(&self) -> &[usize] {
        &self.loop_picks
    }

    /// Toggles a point in or out of the multi-selection.
    ///
    /// Once two or more points are selected the selection auto-expands to
    /// the full inclusive range between them.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidSelection`] for indices that are out of
    /// range or non-interactive.
    pub fn toggle_selection(&mut self, index: usize) -> Result<()> {
        self.check_interactive(index)?;
        if let Some(pos) = self.selection.iter().position(|&i| i == index) {
            self.selection.remove(pos);
        } else {
            self.selection.push(index);
            if self.selection.len() >= 2 {
                self.selection = expand_selection_range(&self.selection);
            }
        }
        Ok(())
    }

    /// Sets the multi-selection to the expanded range of `indices`.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidSelection`] for indices that are out of
    /// range or non-interactive; the previous selection is kept.
    pub fn select_range(&mut self, indices: &[usize]) -> Result<&[usize]> {
        for &index in indices {
            self.check_interactive(index)?;
        }
        self.selection = expand_selection_range(indices);
        Ok(&self.selection)
    }

    /// Toggles a point in or out of the three-point loop pick set.
    ///
    /// Picking a fourth point evicts the oldest pick.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidSelection`] for indices that are out of
    /// range or non-interactive.
    pub fn toggle_loop_pick(&mut self, index: usize) -> Result<()> {
        self.check_interactive(index)?;
        if let Some(pos) = self.loop_picks.iter().position(|&i| i == index) {
            self.loop_picks.remove(pos);
        } else {
            if self.loop_picks.len() >= 3 {
                self.loop_picks.remove(0);
            }
            self.loop_picks.push(index);
        }
        Ok(())
    }

    /// Clears the multi-selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Clears the loop pick set.
    pub fn clear_loop_picks(&mut self) {
        self.loop_picks.clear();
    }

    pub(crate) fn clear_transient_selections(&mut self) {
        self.selection.clear();
        self.loop_picks.clear();
    }

    fn check_interactive(&self, index: usize) -> Result<()> {
        if self.path.is_interactive(index) {
            Ok(())
        } else {
            Err(PathError::InvalidSelection(format!(
                "point {index} is absent or not interactive"
            ))
            .into())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::path::{PathPoint, PointTag};

    fn session_with_points(n: usize) -> Session {
        let mut session = Session::new();
        #[allow(clippy::cast_precision_loss)]
        session.path_mut().replace(
            (0..n)
                .map(|i| PathPoint::new(Point3::new(i as f64, 0.0, 0.0)))
                .collect(),
        );
        session
    }

    #[test]
    fn expand_range_fills_gaps() {
        assert_eq!(expand_selection_range(&[5, 2]), vec![2, 3, 4, 5]);
        assert_eq!(expand_selection_range(&[3]), vec![3]);
        assert!(expand_selection_range(&[]).is_empty());
    }

    #[test]
    fn undo_restores_pre_mutation_state() {
        let mut session = session_with_points(2);
        session.snapshot();
        session
            .path_mut()
            .set_position(0, Point3::new(42.0, 0.0, 0.0))
            .unwrap();

        session.undo().unwrap();
        assert_eq!(session.path().get(0).unwrap().position.x, 0.0);
    }

    #[test]
    fn restored_path_does_not_alias_the_snapshot() {
        let mut session = session_with_points(1);
        session.snapshot();
        session.snapshot();
        session
            .path_mut()
            .set_position(0, Point3::new(7.0, 0.0, 0.0))
            .unwrap();

        session.undo().unwrap();
        // Mutating the restored path must not touch the remaining snapshot.
        session
            .path_mut()
            .set_position(0, Point3::new(8.0, 0.0, 0.0))
            .unwrap();
        session.undo().unwrap();
        assert_eq!(session.path().get(0).unwrap().position.x, 0.0);
    }

    #[test]
    fn undo_on_empty_history_is_a_reported_noop() {
        let mut session = session_with_points(2);
        let before = session.path().clone();
        assert!(session.undo().is_err());
        assert_eq!(*session.path(), before);
    }

    #[test]
    fn clear_snapshots_only_when_nonempty() {
        let mut session = Session::new();
        session.clear();
        assert!(session.history().is_empty());

        let mut session = session_with_points(3);
        session.clear();
        assert_eq!(session.history().len(), 1);
        assert!(session.path().is_empty());
    }

    #[test]
    fn selecting_two_points_fills_the_range_between() {
        let mut session = session_with_points(6);
        session.toggle_selection(1).unwrap();
        session.toggle_selection(4).unwrap();
        assert_eq!(session.selection(), &[1, 2, 3, 4]);
    }

    #[test]
    fn loop_pick_evicts_oldest_beyond_three() {
        let mut session = session_with_points(6);
        for i in [0, 2, 4, 5] {
            session.toggle_loop_pick(i).unwrap();
        }
        assert_eq!(session.loop_picks(), &[2, 4, 5]);
    }

    #[test]
    fn loop_internal_points_are_not_pickable() {
        let mut session = Session::new();
        session.path_mut().replace(vec![
            PathPoint::new(Point3::origin()),
            PathPoint::tagged(Point3::new(1.0, 0.0, 0.0), PointTag::LoopInternal),
        ]);
        assert!(session.toggle_loop_pick(1).is_err());
        assert!(session.toggle_selection(1).is_err());
        assert!(session.toggle_selection(0).is_ok());
    }

    #[test]
    fn invalid_config_is_rejected_and_kept_out() {
        let mut session = Session::new();
        let bad = EngineConfig {
            control_point_cap: 1,
            ..EngineConfig::default()
        };
        assert!(session.set_config(bad).is_err());
        assert_eq!(session.config().control_point_cap, 10);
    }
}
