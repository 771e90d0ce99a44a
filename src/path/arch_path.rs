use crate::error::PathError;
use crate::math::{Point3, Vector3};

use super::point::{PathPoint, PointTag};

/// The ordered wire centerline.
///
/// Insertion order is traversal order. The sequence is mutated only through
/// a fixed set of edits: append at an end, splice-replace a range, move an
/// element, or wholesale replacement; every structural insertion stores its
/// own copy of the incoming points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArchPath {
    points: Vec<PathPoint>,
}

impl ArchPath {
    /// Creates an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a path of `Free` points from bare positions.
    #[must_use]
    pub fn from_positions(positions: Vec<Point3>) -> Self {
        Self {
            points: positions.into_iter().map(PathPoint::new).collect(),
        }
    }

    /// Number of points on the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` when the path has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The path points in traversal order.
    #[must_use]
    pub fn points(&self) -> &[PathPoint] {
        &self.points
    }

    /// Returns the point at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PathPoint> {
        self.points.get(index)
    }

    /// The bare positions in traversal order (for smoothing and export).
    #[must_use]
    pub fn positions(&self) -> Vec<Point3> {
        self.points.iter().map(|p| p.position).collect()
    }

    /// First point of the path.
    #[must_use]
    pub fn first(&self) -> Option<&PathPoint> {
        self.points.first()
    }

    /// Last point of the path.
    #[must_use]
    pub fn last(&self) -> Option<&PathPoint> {
        self.points.last()
    }

    /// Appends a point at the back.
    pub fn push_back(&mut self, point: PathPoint) {
        self.points.push(point);
    }

    /// Prepends a point at the front.
    pub fn push_front(&mut self, point: PathPoint) {
        self.points.insert(0, point);
    }

    /// Replaces the whole path.
    pub fn replace(&mut self, points: Vec<PathPoint>) {
        self.points = points;
    }

    /// Replaces everything strictly between `keep_start` and `keep_end`
    /// with `replacement`, preserving the kept endpoints and the overall
    /// direction.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidSelection`] unless
    /// `keep_start < keep_end < len`.
    pub fn splice_between(
        &mut self,
        keep_start: usize,
        keep_end: usize,
        replacement: Vec<PathPoint>,
    ) -> Result<(), PathError> {
        if keep_start >= keep_end || keep_end >= self.points.len() {
            return Err(PathError::InvalidSelection(format!(
                "splice range ({keep_start}, {keep_end}) invalid for path of {}",
                self.points.len()
            )));
        }
        self.points.splice(keep_start + 1..keep_end, replacement);
        Ok(())
    }

    /// Moves the point at `index` to `position`, keeping its tag.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidSelection`] when the index is out of
    /// range.
    pub fn set_position(&mut self, index: usize, position: Point3) -> Result<(), PathError> {
        let point = self.point_mut(index)?;
        point.position = position;
        Ok(())
    }

    /// Translates the point at `index` by `delta`.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidSelection`] when the index is out of
    /// range.
    pub fn translate(&mut self, index: usize, delta: &Vector3) -> Result<(), PathError> {
        let point = self.point_mut(index)?;
        point.position += *delta;
        Ok(())
    }

    /// Whether the point at `index` exists and responds to interaction.
    #[must_use]
    pub fn is_interactive(&self, index: usize) -> bool {
        self.points
            .get(index)
            .is_some_and(|p| p.tag.is_interactive())
    }

    /// Removes all points.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Iterates over indices whose points carry the given tag.
    pub fn indices_with_tag(&self, tag: PointTag) -> impl Iterator<Item = usize> + '_ {
        self.points
            .iter()
            .enumerate()
            .filter(move |(_, p)| p.tag == tag)
            .map(|(i, _)| i)
    }

    fn point_mut(&mut self, index: usize) -> Result<&mut PathPoint, PathError> {
        let len = self.points.len();
        self.points.get_mut(index).ok_or_else(|| {
            PathError::InvalidSelection(format!("index {index} out of range for path of {len}"))
        })
    }
}
