use crate::error::GeometryError;
use crate::math::{Point2, Point3, Vector3};

use super::plane::COLLINEAR_EPSILON;

/// An orthonormal 2D frame embedded in a plane.
///
/// `u` and `v` are unit in-plane axes; 2D coordinates are dot products
/// against them, with `origin` as the 2D origin. Used by the quadratic
/// fitter to reduce a 3D fit to the plane of its input points.
#[derive(Debug, Clone, Copy)]
pub struct PlaneFrame {
    origin: Point3,
    u: Vector3,
    v: Vector3,
}

impl PlaneFrame {
    /// Builds an in-plane frame anchored at `origin`.
    ///
    /// `u` is `primary` with its component along `normal` removed. When that
    /// projection is near zero (the primary chord is parallel to the
    /// normal, or degenerate), `secondary` is projected instead. `v` is
    /// `normal × u`.
    ///
    /// `normal` must be unit length.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] when neither direction has a
    /// usable in-plane component.
    pub fn in_plane(
        origin: Point3,
        normal: &Vector3,
        primary: &Vector3,
        secondary: &Vector3,
    ) -> Result<Self, GeometryError> {
        let mut u = primary - normal * primary.dot(normal);
        if u.norm() < COLLINEAR_EPSILON {
            u = secondary - normal * secondary.dot(normal);
        }
        let len = u.norm();
        if len < COLLINEAR_EPSILON {
            return Err(GeometryError::ZeroVector);
        }
        let u = u / len;
        let v = normal.cross(&u).normalize();

        Ok(Self { origin, u, v })
    }

    /// Projects a 3D point into frame coordinates.
    #[must_use]
    pub fn project(&self, point: &Point3) -> Point2 {
        let d = point - self.origin;
        Point2::new(d.dot(&self.u), d.dot(&self.v))
    }

    /// Maps frame coordinates back into 3D.
    #[must_use]
    pub fn unproject(&self, x: f64, y: f64) -> Point3 {
        self.origin + self.u * x + self.v * y
    }
}
