use crate::math::spline::sample_spline;
use crate::math::Point3;
use crate::session::Session;

/// Densifies the current path into a smooth output curve.
///
/// A read-only query: the session path is untouched and no snapshot is
/// taken. The sample count comes from the session configuration.
#[derive(Debug, Default)]
pub struct SmoothPath;

impl SmoothPath {
    /// Creates a new `SmoothPath` query.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Evaluates the smoothed curve through the current path points.
    ///
    /// Paths with fewer than two points are returned as-is.
    #[must_use]
    pub fn execute(&self, session: &Session) -> Vec<Point3> {
        sample_spline(
            &session.path().positions(),
            session.config().smooth_sample_count,
        )
    }
}
