use crate::error::Result;
use crate::math::Point3;
use crate::path::PathPoint;
use crate::session::Session;

/// Appends a picked point at the nearest end of the path.
///
/// The wire grows from whichever end is closer to the new point: it is
/// prepended when at least as close to the first path point as to the
/// last, appended otherwise. An empty path simply receives the point.
pub struct AppendPoint {
    point: Point3,
}

impl AppendPoint {
    /// Creates a new `AppendPoint` operation.
    #[must_use]
    pub fn new(point: Point3) -> Self {
        Self { point }
    }

    /// Executes the append, pushing a history snapshot first.
    ///
    /// # Errors
    ///
    /// Currently infallible; returns `Result` like every mutating
    /// operation.
    pub fn execute(&self, session: &mut Session) -> Result<()> {
        session.snapshot();
        let path = session.path_mut();
        let new_point = PathPoint::new(self.point);

        if let (Some(first), Some(last)) = (path.first(), path.last()) {
            let to_first = (first.position - self.point).norm();
            let to_last = (last.position - self.point).norm();
            if to_first <= to_last {
                path.push_front(new_point);
            } else {
                path.push_back(new_point);
            }
        } else {
            path.push_back(new_point);
        }
        Ok(())
    }
}
