use crate::error::GeometryError;
use crate::math::{Point3, Vector3, TOLERANCE};

/// Cross-product magnitude below which three points are treated as
/// collinear when constructing a plane.
pub const COLLINEAR_EPSILON: f64 = 1e-6;

/// An infinite plane in 3D space, defined by an anchor point and a unit
/// normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    anchor: Point3,
    normal: Vector3,
}

impl Plane {
    /// Creates a plane from an anchor point and a normal vector.
    ///
    /// The normal is normalized on construction.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the normal is zero-length.
    pub fn new(anchor: Point3, normal: Vector3) -> Result<Self, GeometryError> {
        let len = normal.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector);
        }
        Ok(Self {
            anchor,
            normal: normal / len,
        })
    }

    /// Creates the plane through three points.
    ///
    /// The normal is `normalize(cross(p2 − p1, p3 − p1))`; `p1` becomes the
    /// anchor.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegeneratePlane`] when the points are
    /// collinear (cross-product magnitude below [`COLLINEAR_EPSILON`]).
    pub fn from_three_points(
        p1: &Point3,
        p2: &Point3,
        p3: &Point3,
    ) -> Result<Self, GeometryError> {
        let cross = (p2 - p1).cross(&(p3 - p1));
        let len = cross.norm();
        if len < COLLINEAR_EPSILON {
            return Err(GeometryError::DegeneratePlane);
        }
        Ok(Self {
            anchor: *p1,
            normal: cross / len,
        })
    }

    /// Returns the anchor point of the plane.
    #[must_use]
    pub fn anchor(&self) -> &Point3 {
        &self.anchor
    }

    /// Returns the unit normal of the plane.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Signed distance from `point` to the plane (positive on the normal
    /// side).
    #[must_use]
    pub fn signed_distance(&self, point: &Point3) -> f64 {
        (point - self.anchor).dot(&self.normal)
    }

    /// Returns the same plane re-anchored at `anchor`.
    #[must_use]
    pub fn with_anchor(&self, anchor: Point3) -> Self {
        Self {
            anchor,
            normal: self.normal,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn xy_plane_normal_points_up() {
        let plane = Plane::from_three_points(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1.0, 0.0, 0.0),
            &Point3::new(0.0, 1.0, 0.0),
        )
        .unwrap();
        assert_relative_eq!(plane.normal().z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn collinear_points_are_rejected() {
        let result = Plane::from_three_points(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1.0, 0.0, 0.0),
            &Point3::new(2.0, 0.0, 0.0),
        );
        assert!(matches!(result, Err(GeometryError::DegeneratePlane)));
    }

    #[test]
    fn signed_distance_has_sign_and_magnitude() {
        let plane = Plane::new(Point3::origin(), Vector3::new(0.0, 0.0, 2.0)).unwrap();
        assert_relative_eq!(
            plane.signed_distance(&Point3::new(5.0, -3.0, 1.5)),
            1.5,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            plane.signed_distance(&Point3::new(0.0, 0.0, -0.25)),
            -0.25,
            epsilon = 1e-12
        );
    }

    #[test]
    fn zero_normal_is_rejected() {
        assert!(matches!(
            Plane::new(Point3::origin(), Vector3::zeros()),
            Err(GeometryError::ZeroVector)
        ));
    }
}
