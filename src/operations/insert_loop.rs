use nalgebra::{Rotation3, Unit};
use tracing::warn;

use crate::error::{GeometryError, PathError, Result};
use crate::geometry::plane::COLLINEAR_EPSILON;
use crate::math::spline::sample_spline;
use crate::math::Point3;
use crate::path::{PathPoint, PointTag};
use crate::session::Session;

/// Number of subdivisions of the semicircular loop arc.
pub const LOOP_ARC_POINTS: usize = 16;

/// Extra offset of the loop arms along ŷ, away from the tissue surface.
pub const ARM_CLEARANCE: f64 = 1.0;

/// Splices a U-shaped loop into the path between two chosen points.
///
/// The three picked indices mark the loop's start, its bulge target (the
/// bottom of the U), and its end. Everything strictly between the outermost
/// two indices is replaced by the generated loop sequence: two raised
/// arm-top points joined by a semicircular arc, bulging toward the middle
/// pick.
pub struct InsertLoop {
    start: usize,
    mid: usize,
    end: usize,
}

impl InsertLoop {
    /// Creates a new `InsertLoop` operation from the three picked path
    /// indices, in pick order.
    #[must_use]
    pub fn new(start: usize, mid: usize, end: usize) -> Self {
        Self { start, mid, end }
    }

    /// Executes the splice, pushing a history snapshot first.
    ///
    /// Collinear picks fall back to splicing the generic spline
    /// interpolant through the three picked positions (reported as a
    /// degraded-path event); the operation still succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidSelection`] when the indices are not
    /// three distinct interactive path points; the path and history are
    /// left untouched in that case.
    pub fn execute(&self, session: &mut Session) -> Result<()> {
        let picks = [self.start, self.mid, self.end];
        if picks[0] == picks[1] || picks[0] == picks[2] || picks[1] == picks[2] {
            return Err(
                PathError::InvalidSelection("loop picks must be distinct".into()).into(),
            );
        }

        let (p_start, p_mid, p_end) = {
            let path = session.path();
            let pick = |index: usize| {
                path.get(index)
                    .filter(|p| p.tag.is_interactive())
                    .map(|p| p.position)
                    .ok_or_else(|| {
                        PathError::InvalidSelection(format!(
                            "point {index} is absent or not interactive"
                        ))
                    })
            };
            (pick(self.start)?, pick(self.mid)?, pick(self.end)?)
        };

        let loop_points = match build_loop(&p_start, &p_mid, &p_end) {
            Ok(points) => points,
            Err(error) => {
                warn!(%error, "loop picks degenerate, splicing spline interpolant");
                sample_spline(&[p_start, p_mid, p_end], LOOP_ARC_POINTS + 1)
                    .into_iter()
                    .map(PathPoint::new)
                    .collect()
            }
        };

        let lo = picks.iter().copied().min().unwrap_or(self.start);
        let hi = picks.iter().copied().max().unwrap_or(self.end);

        session.snapshot();
        session.clear_transient_selections();
        session.path_mut().splice_between(lo, hi, loop_points)?;
        Ok(())
    }
}

/// Generates the loop point sequence between `p_start` and `p_end`,
/// bulging toward `p_mid`.
///
/// Geometry: x̂ runs along the base chord, ŷ is the in-plane perpendicular
/// oriented toward `p_mid`, and the arc sweeps −π..0 about the loop axis
/// (x̂ × ŷ) around the midpoint of the two arm tops. The arc's midpoint
/// sample keeps the interactive `LoopEndpoint` tag; the other interior
/// samples are hidden `LoopInternal` points.
fn build_loop(
    p_start: &Point3,
    p_mid: &Point3,
    p_end: &Point3,
) -> std::result::Result<Vec<PathPoint>, GeometryError> {
    let v1 = p_mid - p_start;
    let v2 = p_end - p_start;
    let cross = v1.cross(&v2);
    if cross.norm() < COLLINEAR_EPSILON {
        return Err(GeometryError::DegeneratePlane);
    }
    let normal = cross.normalize();

    let span = p_end - p_start;
    let x_hat = span.normalize();
    let mut y_hat = normal.cross(&x_hat).normalize();

    let base_mid = Point3::from((p_start.coords + p_end.coords) / 2.0);
    let to_mid = p_mid - base_mid;
    if y_hat.dot(&to_mid) < 0.0 {
        y_hat = -y_hat;
    }

    // Height of the arms: bulge reach along ŷ minus half the base chord.
    // Negative for very flat picks; the arc may then cut the base, which is
    // accepted degenerate output rather than an error.
    let height = to_mid.dot(&y_hat).abs() - span.norm() / 2.0;
    let rise = y_hat * (height + ARM_CLEARANCE);

    let arm_start = p_start + rise;
    let arm_end = p_end + rise;
    let center = Point3::from((arm_start.coords + arm_end.coords) / 2.0);
    let start_vec = arm_start - center;
    let axis = Unit::new_normalize(x_hat.cross(&y_hat));

    let mut points = Vec::with_capacity(LOOP_ARC_POINTS + 1);
    points.push(PathPoint::tagged(arm_start, PointTag::LoopEndpoint));

    let apex_index = LOOP_ARC_POINTS / 2;
    for i in 1..LOOP_ARC_POINTS {
        #[allow(clippy::cast_precision_loss)]
        let angle = -std::f64::consts::PI * (i as f64) / (LOOP_ARC_POINTS as f64);
        let rotation = Rotation3::from_axis_angle(&axis, angle);
        let tag = if i == apex_index {
            PointTag::LoopEndpoint
        } else {
            PointTag::LoopInternal
        };
        points.push(PathPoint::tagged(center + rotation * start_vec, tag));
    }

    points.push(PathPoint::tagged(arm_end, PointTag::LoopEndpoint));
    Ok(points)
}
