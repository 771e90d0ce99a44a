use crate::error::{PathError, Result};
use crate::geometry::ContactRing;
use crate::math::spline::{resample_control_points, sample_spline};
use crate::path::PathPoint;
use crate::session::Session;

/// Replaces the path with a smooth curve traced along a contact-ring
/// segment.
///
/// The shorter arc between the two picked ring indices is thinned to the
/// configured control-point cap, densified with the Catmull-Rom smoother,
/// and committed as the new path.
pub struct TraceRingSegment<'a> {
    ring: &'a ContactRing,
    start: usize,
    end: usize,
}

impl<'a> TraceRingSegment<'a> {
    /// Creates a new `TraceRingSegment` operation between two ring
    /// indices.
    #[must_use]
    pub fn new(ring: &'a ContactRing, start: usize, end: usize) -> Self {
        Self { ring, start, end }
    }

    /// Executes the trace, pushing a history snapshot before replacing the
    /// path. Returns the number of points committed.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidSelection`] for out-of-range ring
    /// indices and [`PathError::InsufficientPoints`] when the arc yields
    /// fewer than two points; the path and history are untouched on error.
    pub fn execute(&self, session: &mut Session) -> Result<usize> {
        let arc = self.ring.arc_between(self.start, self.end)?;
        if arc.len() < 2 {
            return Err(PathError::InsufficientPoints {
                needed: 2,
                got: arc.len(),
            }
            .into());
        }

        let capped = resample_control_points(&arc, session.config().control_point_cap);
        let sampled = sample_spline(&capped, session.config().smooth_sample_count);

        session.snapshot();
        session.clear_transient_selections();
        session
            .path_mut()
            .replace(sampled.iter().copied().map(PathPoint::new).collect());
        Ok(sampled.len())
    }
}
