use crate::error::PathError;
use crate::math::Point3;

/// An ordered, logically circular sequence of contact points produced by
/// one plane/surface proximity query.
///
/// The ring is stored as a flat sequence; circularity is realized with
/// modular index arithmetic rather than a linked structure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactRing {
    points: Vec<Point3>,
}

impl ContactRing {
    /// Creates a ring from an already-ordered point sequence.
    #[must_use]
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }

    /// Number of points on the ring.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` when the ring holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The ordered ring points.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Returns the shorter of the two arcs connecting ring indices `start`
    /// and `end`.
    ///
    /// Arc length is measured in cyclic index distance (mod ring length);
    /// equal-length arcs resolve to the forward direction
    /// (`start → start+1 → … → end`). The result always begins with
    /// `ring[start]` and ends with `ring[end]`, even when no interior
    /// points exist.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidSelection`] when either index is out of
    /// range.
    pub fn arc_between(&self, start: usize, end: usize) -> Result<Vec<Point3>, PathError> {
        let n = self.points.len();
        if start >= n || end >= n {
            return Err(PathError::InvalidSelection(format!(
                "ring indices ({start}, {end}) out of range for ring of {n}"
            )));
        }

        let forward = (end + n - start) % n;
        let backward = (start + n - end) % n;

        let interior: Vec<Point3> = if forward <= backward {
            (1..forward)
                .map(|step| self.points[(start + step) % n])
                .collect()
        } else {
            (1..backward)
                .map(|step| self.points[(start + n - step) % n])
                .collect()
        };

        let mut arc = Vec::with_capacity(interior.len() + 2);
        arc.push(self.points[start]);
        arc.extend(interior);
        arc.push(self.points[end]);
        Ok(arc)
    }
}
