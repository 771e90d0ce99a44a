use tracing::info;

use crate::geometry::{ContactRing, Plane};
use crate::math::cluster::cluster_points;
use crate::math::tour::nearest_neighbor_order;
use crate::math::{Point3, Vector3};

/// Default absolute plane distance within which a surface sample counts as
/// a contact candidate, in length-units.
pub const DEFAULT_PLANE_TOLERANCE: f64 = 0.5;

/// Default clustering radius collapsing a multi-vertex contact patch into
/// one point, in length-units.
pub const DEFAULT_CLUSTER_RADIUS: f64 = 1.0;

/// One sample of the host's surface mesh: a position and its surface
/// normal.
///
/// The host owns the mesh and produces these in arbitrary order; the
/// normal is carried for pick-offset use and is not consumed by the
/// extraction itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSample {
    pub position: Point3,
    pub normal: Vector3,
}

impl SurfaceSample {
    /// Creates a new surface sample.
    #[must_use]
    pub fn new(position: Point3, normal: Vector3) -> Self {
        Self { position, normal }
    }
}

/// Extracts the ordered ring of contact points where a reference plane
/// meets the scanned surface.
///
/// Pipeline: filter samples by absolute signed distance to the plane,
/// collapse contact patches by clustering, then order the survivors with
/// the nearest-neighbor tour heuristic.
pub struct ExtractContacts<'a> {
    samples: &'a [SurfaceSample],
    plane: &'a Plane,
    tolerance: f64,
    cluster_radius: f64,
}

impl<'a> ExtractContacts<'a> {
    /// Creates a new extraction over the given samples and reference
    /// plane, with the default tolerance and clustering radius.
    #[must_use]
    pub fn new(samples: &'a [SurfaceSample], plane: &'a Plane) -> Self {
        Self {
            samples,
            plane,
            tolerance: DEFAULT_PLANE_TOLERANCE,
            cluster_radius: DEFAULT_CLUSTER_RADIUS,
        }
    }

    /// Overrides the plane-distance tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Overrides the clustering radius.
    #[must_use]
    pub fn with_cluster_radius(mut self, cluster_radius: f64) -> Self {
        self.cluster_radius = cluster_radius;
        self
    }

    /// Runs the extraction, returning the ordered contact ring.
    #[must_use]
    pub fn execute(&self) -> ContactRing {
        let candidates: Vec<Point3> = self
            .samples
            .iter()
            .filter(|s| self.plane.signed_distance(&s.position).abs() <= self.tolerance)
            .map(|s| s.position)
            .collect();

        let clustered = cluster_points(&candidates, self.cluster_radius);
        let ordered = nearest_neighbor_order(&clustered);
        info!(
            candidates = candidates.len(),
            contacts = ordered.len(),
            "extracted contact ring"
        );
        ContactRing::new(ordered)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn flat_sample(x: f64, y: f64, z: f64) -> SurfaceSample {
        SurfaceSample::new(Point3::new(x, y, z), Vector3::new(0.0, 0.0, 1.0))
    }

    fn xy_plane() -> Plane {
        Plane::new(Point3::origin(), Vector3::new(0.0, 0.0, 1.0)).unwrap()
    }

    #[test]
    fn filters_by_plane_distance() {
        let plane = xy_plane();
        let samples = vec![
            flat_sample(0.0, 0.0, 0.2),
            flat_sample(5.0, 0.0, -0.4),
            flat_sample(9.0, 0.0, 2.0), // too far
        ];
        let ring = ExtractContacts::new(&samples, &plane).execute();
        assert_eq!(ring.len(), 2);
    }

    #[test]
    fn clusters_contact_patches() {
        let plane = xy_plane();
        // Two tight patches 10 units apart.
        let samples = vec![
            flat_sample(0.0, 0.0, 0.0),
            flat_sample(0.2, 0.0, 0.1),
            flat_sample(0.4, 0.0, -0.1),
            flat_sample(10.0, 0.0, 0.0),
            flat_sample(10.2, 0.0, 0.2),
        ];
        let ring = ExtractContacts::new(&samples, &plane).execute();
        assert_eq!(ring.len(), 2);
        assert!((ring.points()[0].x - 0.2).abs() < 1e-9);
        assert!((ring.points()[1].x - 10.1).abs() < 1e-9);
    }

    #[test]
    fn orders_the_ring_by_proximity() {
        let plane = xy_plane();
        // Scrambled points along a line; clustering radius keeps them apart.
        let samples = vec![
            flat_sample(0.0, 0.0, 0.0),
            flat_sample(6.0, 0.0, 0.0),
            flat_sample(2.0, 0.0, 0.0),
            flat_sample(4.0, 0.0, 0.0),
        ];
        let ring = ExtractContacts::new(&samples, &plane)
            .with_cluster_radius(0.5)
            .execute();
        let xs: Vec<f64> = ring.points().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 2.0, 4.0, 6.0]);
    }

    #[test]
    fn custom_tolerance_widens_the_band() {
        let plane = xy_plane();
        let samples = vec![flat_sample(0.0, 0.0, 1.5), flat_sample(4.0, 0.0, 0.0)];
        let default_ring = ExtractContacts::new(&samples, &plane).execute();
        assert_eq!(default_ring.len(), 1);
        let wide_ring = ExtractContacts::new(&samples, &plane)
            .with_tolerance(2.0)
            .execute();
        assert_eq!(wide_ring.len(), 2);
    }
}
