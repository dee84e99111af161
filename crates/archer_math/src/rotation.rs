//! Euler-angle rotation.
//!
//! Convention: angles `(x, y, z)` in radians are applied as intrinsic rotations
//! about X, then Y, then Z, i.e. `R = Rz · Ry · Rx` acting on column vectors.
//! Written out, this is the direction-cosine matrix
//!
//! ```text
//! | cy·cz   sx·sy·cz − cx·sz   cx·sy·cz + sx·sz |
//! | cy·sz   sx·sy·sz + cx·cz   cx·sy·sz − sx·cz |
//! | −sy     sx·cy              cx·cy            |
//! ```

use glam::{Mat3, Vec3};

/// Build the composed rotation matrix for Euler angles `rotation` (radians).
pub fn rotation_matrix(rotation: Vec3) -> Mat3 {
    Mat3::from_rotation_z(rotation.z)
        * Mat3::from_rotation_y(rotation.y)
        * Mat3::from_rotation_x(rotation.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn assert_vec_eq(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-5, "expected {:?}, got {:?}", b, a);
    }

    #[test]
    fn test_matches_direction_cosine_matrix() {
        let (x, y, z) = (0.3_f32, -0.7_f32, 1.1_f32);
        let (sx, cx) = x.sin_cos();
        let (sy, cy) = y.sin_cos();
        let (sz, cz) = z.sin_cos();

        let expected = [
            [cy * cz, sx * sy * cz - cx * sz, cx * sy * cz + sx * sz],
            [cy * sz, sx * sy * sz + cx * cz, cx * sy * sz - sx * cz],
            [-sy, sx * cy, cx * cy],
        ];

        let m = rotation_matrix(Vec3::new(x, y, z));
        for (row, expected_row) in expected.iter().enumerate() {
            for (col, expected_value) in expected_row.iter().enumerate() {
                let actual = m.col(col)[row];
                assert!(
                    (actual - expected_value).abs() < 1e-6,
                    "m[{row}][{col}] = {actual}, expected {expected_value}"
                );
            }
        }
    }

    #[test]
    fn test_single_axis_rotations() {
        // Pitch: +Y tips towards +Z
        assert_vec_eq(rotation_matrix(Vec3::new(FRAC_PI_2, 0.0, 0.0)) * Vec3::Y, Vec3::Z);
        // Yaw: the default view direction -Z turns to -X
        assert_vec_eq(rotation_matrix(Vec3::new(0.0, FRAC_PI_2, 0.0)) * Vec3::NEG_Z, Vec3::NEG_X);
        // Roll: +X turns to +Y
        assert_vec_eq(rotation_matrix(Vec3::new(0.0, 0.0, FRAC_PI_2)) * Vec3::X, Vec3::Y);
    }

    #[test]
    fn test_composition_order() {
        // X is applied first: Y -> Z under Rx, then Z -> X under Ry.
        // The opposite order would leave Y at Z.
        let m = rotation_matrix(Vec3::new(FRAC_PI_2, FRAC_PI_2, 0.0));
        assert_vec_eq(m * Vec3::Y, Vec3::X);
    }

    #[test]
    fn test_rotation_preserves_length() {
        let m = rotation_matrix(Vec3::new(1.3, -0.4, 2.2));
        let v = Vec3::new(3.0, -1.0, 2.0);
        assert!(((m * v).length() - v.length()).abs() < 1e-5);
    }
}
