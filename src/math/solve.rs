use crate::error::GeometryError;

use super::{Matrix3, Vector3};

/// Determinant magnitude below which a 3x3 system is treated as singular.
pub const DET_EPSILON: f64 = 1e-9;

/// Solves the linear system `A * x = b` for a 3x3 coefficient matrix.
///
/// Uses Cramer's rule: each unknown is the ratio of the determinant of `A`
/// with the corresponding column replaced by `b` to the determinant of `A`.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateSystem`] when `|det(A)|` is below
/// [`DET_EPSILON`].
pub fn solve_3x3(a: &Matrix3, b: &Vector3) -> Result<Vector3, GeometryError> {
    let det = a.determinant();
    if det.abs() < DET_EPSILON {
        return Err(GeometryError::DegenerateSystem);
    }

    let mut ax = *a;
    ax.set_column(0, b);
    let mut ay = *a;
    ay.set_column(1, b);
    let mut az = *a;
    az.set_column(2, b);

    Ok(Vector3::new(
        ax.determinant() / det,
        ay.determinant() / det,
        az.determinant() / det,
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn solve_identity() {
        let a = Matrix3::identity();
        let b = Vector3::new(1.0, 2.0, 3.0);
        let x = solve_3x3(&a, &b).unwrap();
        assert!((x - b).norm() < 1e-12);
    }

    #[test]
    fn solve_general_system() {
        // x + y + z = 6, 2y + 5z = -4, 2x + 5y - z = 27 → (5, 3, -2)
        let a = Matrix3::new(1.0, 1.0, 1.0, 0.0, 2.0, 5.0, 2.0, 5.0, -1.0);
        let b = Vector3::new(6.0, -4.0, 27.0);
        let x = solve_3x3(&a, &b).unwrap();
        assert!((x - Vector3::new(5.0, 3.0, -2.0)).norm() < 1e-9);
    }

    #[test]
    fn singular_matrix_is_rejected() {
        // Two identical rows.
        let a = Matrix3::new(1.0, 2.0, 3.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        let b = Vector3::new(1.0, 1.0, 1.0);
        assert!(matches!(
            solve_3x3(&a, &b),
            Err(GeometryError::DegenerateSystem)
        ));
    }
}
