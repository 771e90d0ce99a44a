pub mod cluster;
pub mod solve;
pub mod spline;
pub mod tour;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 3x3 matrix type.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Offsets a picked surface point away from the surface along its normal.
///
/// Wire centerlines sit one wire radius off the scanned surface, so every
/// clicked point is pushed out by `wire_radius` before it enters the path.
#[must_use]
pub fn offset_point(surface_point: &Point3, normal: &Vector3, wire_radius: f64) -> Point3 {
    let len = normal.norm();
    if len < TOLERANCE {
        return *surface_point;
    }
    surface_point + normal * (wire_radius / len)
}
