use super::Point3;

/// Orders an unordered point set into a traversal path.
///
/// Nearest-neighbor heuristic: starts at the first input point and
/// repeatedly appends the remaining point closest to the last placed one.
/// Ties go to the first-encountered candidate (stable scan order). The
/// result is a permutation of the input; it approximates, but does not
/// guarantee, the shortest connecting tour.
///
/// O(n²), acceptable for the tens-to-low-hundreds of points produced by
/// contact extraction. Inputs of length ≤ 2 are returned unchanged.
#[must_use]
pub fn nearest_neighbor_order(points: &[Point3]) -> Vec<Point3> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let mut remaining = points.to_vec();
    let mut ordered = Vec::with_capacity(points.len());

    let mut current = remaining.remove(0);
    ordered.push(current);

    while !remaining.is_empty() {
        let mut closest = 0;
        let mut min_dist = (remaining[0] - current).norm();
        for (i, candidate) in remaining.iter().enumerate().skip(1) {
            let dist = (candidate - current).norm();
            if dist < min_dist {
                min_dist = dist;
                closest = i;
            }
        }
        current = remaining.remove(closest);
        ordered.push(current);
    }

    ordered
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn short_inputs_are_unchanged() {
        assert!(nearest_neighbor_order(&[]).is_empty());
        let two = vec![Point3::new(5.0, 0.0, 0.0), Point3::new(0.0, 0.0, 0.0)];
        assert_eq!(nearest_neighbor_order(&two), two);
    }

    #[test]
    fn orders_scrambled_collinear_points() {
        let pts = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ];
        let ordered = nearest_neighbor_order(&pts);
        let xs: Vec<f64> = ordered.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn result_is_a_permutation_of_the_input() {
        let pts = vec![
            Point3::new(4.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 2.0),
            Point3::new(-3.0, 5.0, 1.0),
            Point3::new(2.0, 2.0, 2.0),
            Point3::new(4.0, 1.0, 0.0), // duplicate must survive
        ];
        let ordered = nearest_neighbor_order(&pts);
        assert_eq!(ordered.len(), pts.len());
        for p in &pts {
            let in_count = pts.iter().filter(|q| *q == p).count();
            let out_count = ordered.iter().filter(|q| *q == p).count();
            assert_eq!(in_count, out_count);
        }
    }

    #[test]
    fn starts_at_first_input_point() {
        let pts = vec![
            Point3::new(10.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(11.0, 0.0, 0.0),
        ];
        let ordered = nearest_neighbor_order(&pts);
        assert_eq!(ordered[0], pts[0]);
        assert!((ordered[1].x - 11.0).abs() < 1e-12);
    }
}
