//! Approximate comparison functions that automatically use [`EPSILON`].

pub use cgmath::AbsDiffEq;
use cgmath::{InnerSpace, Matrix3, Quaternion, Vector3};

/// Tolerance for comparing coordinates and rotations.
pub const EPSILON: f32 = 1e-4;

/// Compares two numbers, but considers them equal if they are separated by less
/// than `EPSILON`.
pub fn approx_eq(a: f32, b: f32) -> bool {
    // use native float equality to handle infinities
    a == b || a.abs_diff_eq(&b, EPSILON)
}

/// Compares two vectors componentwise, considering them equal if every
/// component is within `EPSILON`.
pub fn vectors_approx_eq(a: Vector3<f32>, b: Vector3<f32>) -> bool {
    a == b || a.abs_diff_eq(&b, EPSILON)
}

/// Returns whether two unit quaternions represent approximately the same
/// rotation. `q` and `-q` are considered equal.
pub fn rotations_approx_eq(a: Quaternion<f32>, b: Quaternion<f32>) -> bool {
    a.dot(b).abs() >= 1.0 - EPSILON
}

/// Returns the rotation that permutes the coordinate axes (possibly with sign
/// changes) closest to `q`. For a rotation that is already within floating
/// point error of a multiple of 90 degrees about each axis, this removes the
/// error.
pub fn snap_rotation(q: Quaternion<f32>) -> Quaternion<f32> {
    let m = Matrix3::from(q.normalize());
    let snapped = Matrix3::from_cols(
        m.x.map(f32::round),
        m.y.map(f32::round),
        m.z.map(f32::round),
    );
    Quaternion::from(snapped).normalize()
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use cgmath::{Rad, Rotation3};

    use super::*;

    #[test]
    fn test_snap_rotation_removes_drift() {
        let quarter = Quaternion::from_axis_angle(Vector3::unit_y(), Rad(FRAC_PI_2));
        let drifted = Quaternion::from_axis_angle(Vector3::unit_y(), Rad(FRAC_PI_2 + 0.05));
        assert!(!rotations_approx_eq(quarter, drifted));
        assert!(rotations_approx_eq(quarter, snap_rotation(drifted)));

        let rotated = snap_rotation(drifted) * Vector3::unit_x();
        assert_eq!(rotated.map(f32::round), Vector3::new(0.0, 0.0, -1.0));
        assert!(vectors_approx_eq(rotated, Vector3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(1.0, 1.0 + EPSILON / 2.0));
        assert!(!approx_eq(1.0, 1.0 + EPSILON * 2.0));
        assert!(approx_eq(f32::INFINITY, f32::INFINITY));
        assert!(!approx_eq(f32::NAN, f32::NAN));

        let v = Vector3::new(1.0, -2.0, 3.0);
        assert!(vectors_approx_eq(v, v + Vector3::new(0.0, EPSILON / 2.0, 0.0)));
        assert!(!vectors_approx_eq(v, v + Vector3::new(0.0, 0.0, EPSILON * 2.0)));
    }

    #[test]
    fn test_rotations_ignore_quaternion_sign() {
        let q = Quaternion::from_axis_angle(Vector3::unit_x(), Rad(FRAC_PI_2));
        assert!(rotations_approx_eq(q, -q));
    }
}
