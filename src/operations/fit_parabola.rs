use tracing::warn;

use crate::error::{GeometryError, Result};
use crate::geometry::{Plane, PlaneFrame};
use crate::math::solve::solve_3x3;
use crate::math::spline::sample_spline;
use crate::math::{Matrix3, Point3, Vector3};
use crate::path::PathPoint;
use crate::session::Session;

/// Replaces the path with a quadratic curve fitted through three picked
/// points.
///
/// The quadratic `y = a·x² + b·x + c` is fitted in a 2D frame constructed
/// on the fly in the plane of the three points, then sampled back into 3D.
/// Degenerate inputs (collinear points, coincident projected x-coordinates)
/// fall back to the generic spline interpolant through the same points, so
/// the operation still succeeds with a different curve shape.
pub struct FitParabola {
    p1: Point3,
    p2: Point3,
    p3: Point3,
}

impl FitParabola {
    /// Creates a new `FitParabola` operation over the three picked points,
    /// in pick order.
    #[must_use]
    pub fn new(p1: Point3, p2: Point3, p3: Point3) -> Self {
        Self { p1, p2, p3 }
    }

    /// Executes the fit, pushing a history snapshot before replacing the
    /// path.
    ///
    /// Sample count comes from the session configuration
    /// (`smooth_sample_count`).
    ///
    /// # Errors
    ///
    /// Never fails: degenerate geometry is recovered via the spline
    /// fallback and reported as a degraded-path event.
    pub fn execute(&self, session: &mut Session) -> Result<()> {
        let count = session.config().smooth_sample_count.max(2);

        let samples = match self.fit(count) {
            Ok(samples) => samples,
            Err(error) => {
                warn!(%error, "quadratic fit degenerate, using spline interpolant");
                sample_spline(&[self.p1, self.p2, self.p3], count)
            }
        };

        session.snapshot();
        session.clear_transient_selections();
        session
            .path_mut()
            .replace(samples.into_iter().map(PathPoint::new).collect());
        Ok(())
    }

    fn fit(&self, count: usize) -> std::result::Result<Vec<Point3>, GeometryError> {
        let plane = Plane::from_three_points(&self.p1, &self.p2, &self.p3)?;
        let frame = PlaneFrame::in_plane(
            self.p1,
            plane.normal(),
            &(self.p3 - self.p1),
            &(self.p2 - self.p1),
        )?;

        // p1 projects to the frame origin; only p2 and p3 need computing.
        let q2 = frame.project(&self.p2);
        let q3 = frame.project(&self.p3);

        let a = Matrix3::new(
            0.0,
            0.0,
            1.0,
            q2.x * q2.x,
            q2.x,
            1.0,
            q3.x * q3.x,
            q3.x,
            1.0,
        );
        let b = Vector3::new(0.0, q2.y, q3.y);
        let coeff = solve_3x3(&a, &b)?;

        let mut out = Vec::with_capacity(count);
        for i in 0..count {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f64 / (count - 1) as f64;
            let x = t * q3.x;
            let y = coeff.x * x * x + coeff.y * x + coeff.z;
            out.push(frame.unproject(x, y));
        }
        Ok(out)
    }
}
