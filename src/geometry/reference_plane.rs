use crate::error::{GeometryError, PathError, Result};
use crate::math::{Point3, Vector3};

use super::plane::Plane;

/// Draft control points for defining a reference plane.
///
/// Collects up to three surface points; once complete the plane can be
/// derived, and re-derived again whenever a control point is dragged. The
/// set is transient working data for the plane-definition mode and is
/// discarded when the mode exits.
#[derive(Debug, Clone, Default)]
pub struct PlaneControlSet {
    points: Vec<Point3>,
}

impl PlaneControlSet {
    /// Creates an empty control set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of control points collected so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` when no control points have been placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns `true` once all three control points are placed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.points.len() == 3
    }

    /// The control points placed so far.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Adds a control point. Points beyond the third are ignored; returns
    /// whether the point was accepted.
    pub fn push(&mut self, point: Point3) -> bool {
        if self.is_complete() {
            return false;
        }
        self.points.push(point);
        true
    }

    /// Moves an existing control point (draft adjustment by dragging).
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidSelection`] when the index is out of
    /// range.
    pub fn move_point(&mut self, index: usize, position: Point3) -> Result<()> {
        let len = self.points.len();
        let slot = self.points.get_mut(index).ok_or_else(|| {
            PathError::InvalidSelection(format!(
                "control point {index} out of range for set of {len}"
            ))
        })?;
        *slot = position;
        Ok(())
    }

    /// Removes all control points.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Derives the plane through the current control points.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InsufficientPoints`] while the set is
    /// incomplete, or [`GeometryError::DegeneratePlane`] when the three
    /// points are collinear.
    pub fn derive_plane(&self) -> Result<Plane> {
        if !self.is_complete() {
            return Err(PathError::InsufficientPoints {
                needed: 3,
                got: self.points.len(),
            }
            .into());
        }
        Ok(Plane::from_three_points(
            &self.points[0],
            &self.points[1],
            &self.points[2],
        )?)
    }

    /// Confirms the draft into an immutable [`ReferencePlane`].
    ///
    /// # Errors
    ///
    /// Same conditions as [`PlaneControlSet::derive_plane`].
    pub fn confirm(&self, visible: bool) -> Result<ReferencePlane> {
        if !self.is_complete() {
            return Err(PathError::InsufficientPoints {
                needed: 3,
                got: self.points.len(),
            }
            .into());
        }
        Ok(ReferencePlane::from_control_points(
            [self.points[0], self.points[1], self.points[2]],
            visible,
        )?)
    }
}

/// A confirmed reference plane: the three defining control points, the
/// derived plane, and the host-facing visibility flag.
///
/// The control points are kept (in their original order) so that the same
/// normal re-derives deterministically after persistence round-trips.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePlane {
    control_points: [Point3; 3],
    plane: Plane,
    visible: bool,
}

impl ReferencePlane {
    /// Builds a reference plane from its three control points; the first
    /// control point anchors the plane.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegeneratePlane`] when the control points
    /// are collinear.
    pub fn from_control_points(
        control_points: [Point3; 3],
        visible: bool,
    ) -> std::result::Result<Self, GeometryError> {
        let plane = Plane::from_three_points(
            &control_points[0],
            &control_points[1],
            &control_points[2],
        )?;
        Ok(Self {
            control_points,
            plane,
            visible,
        })
    }

    /// Rebuilds a persisted reference plane, re-deriving the normal from
    /// the control points and re-anchoring at the stored anchor position.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegeneratePlane`] when the stored control
    /// points are collinear.
    pub fn restore(
        control_points: [Point3; 3],
        anchor: Point3,
        visible: bool,
    ) -> std::result::Result<Self, GeometryError> {
        let restored = Self::from_control_points(control_points, visible)?;
        Ok(Self {
            plane: restored.plane.with_anchor(anchor),
            ..restored
        })
    }

    /// The three control points, in definition order.
    #[must_use]
    pub fn control_points(&self) -> &[Point3; 3] {
        &self.control_points
    }

    /// The derived plane.
    #[must_use]
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// The plane normal (shorthand for `plane().normal()`).
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        self.plane.normal()
    }

    /// Whether the host currently displays the plane.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Sets the host-facing visibility flag.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
