use super::Point3;

/// Tangent scale of the uniform Catmull-Rom evaluation.
///
/// 0.5 is the classic Catmull-Rom tangent; the wire renderer upstream was
/// tuned against this value, so it is fixed rather than configurable.
const SPLINE_TENSION: f64 = 0.5;

/// Evaluates one cubic Hermite segment from `p1` to `p2`.
///
/// Tangents are the Catmull-Rom choice: `m1 = (p2 - p0) * tension`,
/// `m2 = (p3 - p1) * tension`.
#[must_use]
pub fn catmull_rom_point(p0: &Point3, p1: &Point3, p2: &Point3, p3: &Point3, t: f64) -> Point3 {
    let m1 = (p2 - p0) * SPLINE_TENSION;
    let m2 = (p3 - p1) * SPLINE_TENSION;

    let t2 = t * t;
    let t3 = t2 * t;
    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + t;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;

    Point3::from(p1.coords * h00 + m1 * h10 + p2.coords * h01 + m2 * h11)
}

/// Samples a non-closed Catmull-Rom spline through `control` at
/// `sample_count` evenly spaced parameter values covering the full curve.
///
/// Endpoint tangents come from reflected phantom points (`2·p[0] − p[1]`
/// and `2·p[n−1] − p[n−2]`), so the curve passes through the first and last
/// control points without wrapping.
///
/// Returns exactly `sample_count` points for `sample_count ≥ 2` (smaller
/// requests are raised to 2); inputs with fewer than 2 control points are
/// returned unchanged.
#[must_use]
pub fn sample_spline(control: &[Point3], sample_count: usize) -> Vec<Point3> {
    if control.len() < 2 {
        return control.to_vec();
    }

    let sample_count = sample_count.max(2);
    let n = control.len();
    let segments = n - 1;

    let start_phantom = Point3::from(control[0].coords * 2.0 - control[1].coords);
    let end_phantom = Point3::from(control[n - 1].coords * 2.0 - control[n - 2].coords);

    let mut out = Vec::with_capacity(sample_count);
    for i in 0..sample_count {
        #[allow(clippy::cast_precision_loss)]
        let t = i as f64 / (sample_count - 1) as f64;
        #[allow(clippy::cast_precision_loss)]
        let scaled = t * segments as f64;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let seg = (scaled.floor() as usize).min(segments - 1);
        #[allow(clippy::cast_precision_loss)]
        let local = scaled - seg as f64;

        let p1 = control[seg];
        let p2 = control[seg + 1];
        let p0 = if seg == 0 {
            start_phantom
        } else {
            control[seg - 1]
        };
        let p3 = if seg + 2 < n {
            control[seg + 2]
        } else {
            end_phantom
        };

        out.push(catmull_rom_point(&p0, &p1, &p2, &p3, local));
    }

    out
}

/// Uniformly thins `points` down to at most `cap` control points.
///
/// Keeps the first and last point exactly; interior survivors are picked at
/// evenly spaced (rounded) indices. Inputs already within the cap, or caps
/// below 2, are returned unchanged.
#[must_use]
pub fn resample_control_points(points: &[Point3], cap: usize) -> Vec<Point3> {
    if points.len() <= cap || cap < 2 {
        return points.to_vec();
    }

    #[allow(clippy::cast_precision_loss)]
    let step = (points.len() - 1) as f64 / (cap - 1) as f64;
    (0..cap)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let index = (i as f64 * step).round() as usize;
            points[index.min(points.len() - 1)]
        })
        .collect()
}
