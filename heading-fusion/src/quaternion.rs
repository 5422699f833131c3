//! Unit quaternions derived from rotation-vector sensor samples.
//!
//! A rotation-vector sensor reports the device attitude as the rotation axis
//! scaled by the sine of half the rotation angle: `(x, y, z) = axis * sin(θ/2)`.
//! The missing scalar part is recovered as `w = sqrt(1 - x² - y² - z²)`, giving
//! the unit quaternion `(w, x, y, z)`.
//!
//! Noisy fused samples occasionally carry a magnitude slightly above one, where
//! the square root has no real value. In that case the scalar part is pinned to
//! zero and the imaginary components are passed through untouched. The result
//! is deliberately **not** renormalized; the caller sees exactly what the
//! sensor reported, with a zero scalar marking the sample as out of range.

use heading_core::constants::ROTATION_VECTOR_LENGTH;
use heading_core::{HeadingError, HeadingResult, RotationMatrix3};

/// A quaternion with scalar part first: `w + xi + yj + zk`.
///
/// Built from rotation-vector samples via
/// [`from_rotation_vector`](Self::from_rotation_vector); unit magnitude for
/// in-range samples, unnormalized pass-through for out-of-range ones.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Quaternion {
    /// The identity rotation `(1, 0, 0, 0)`.
    pub fn identity() -> Self {
        Self {
            w: 1.0,
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Derives the unit quaternion from a rotation-vector sample.
    ///
    /// The slice must contain at least three elements; a fourth element (some
    /// sensors append an estimated heading accuracy) is ignored. A zero vector
    /// yields the identity. A vector with squared magnitude above one yields a
    /// zero scalar part with the imaginary components unchanged.
    ///
    /// ```
    /// use heading_fusion::Quaternion;
    ///
    /// let q = Quaternion::from_rotation_vector(&[0.52, -0.336, -0.251]).unwrap();
    /// assert!((q.w - 0.744_112_2).abs() < 1e-6);
    /// assert_eq!(q.x, 0.52);
    /// ```
    pub fn from_rotation_vector(rotation_vector: &[f64]) -> HeadingResult<Self> {
        if rotation_vector.len() < ROTATION_VECTOR_LENGTH {
            return Err(HeadingError::parameter(
                "Quaternion::from_rotation_vector",
                &format!(
                    "rotation vector must have at least 3 elements, got {}",
                    rotation_vector.len()
                ),
            ));
        }
        let (x, y, z) = (rotation_vector[0], rotation_vector[1], rotation_vector[2]);
        let w_squared = 1.0 - (x * x + y * y + z * z);
        let w = if w_squared > 0.0 {
            libm::sqrt(w_squared)
        } else {
            0.0
        };
        Ok(Self { w, x, y, z })
    }

    /// Returns the components as `[w, x, y, z]`.
    pub fn to_array(&self) -> [f64; 4] {
        [self.w, self.x, self.y, self.z]
    }

    /// Returns the quaternion magnitude.
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// Expands the quaternion to the equivalent rotation matrix.
    ///
    /// For a unit quaternion this is a proper rotation; for the out-of-range
    /// pass-through case the result is correspondingly scaled.
    pub fn rotation_matrix(&self) -> RotationMatrix3 {
        let (q0, q1, q2, q3) = (self.w, self.x, self.y, self.z);
        let sq_q1 = 2.0 * q1 * q1;
        let sq_q2 = 2.0 * q2 * q2;
        let sq_q3 = 2.0 * q3 * q3;
        let q1_q2 = 2.0 * q1 * q2;
        let q3_q0 = 2.0 * q3 * q0;
        let q1_q3 = 2.0 * q1 * q3;
        let q2_q0 = 2.0 * q2 * q0;
        let q2_q3 = 2.0 * q2 * q3;
        let q1_q0 = 2.0 * q1 * q0;

        RotationMatrix3::from_array([
            1.0 - sq_q2 - sq_q3,
            q1_q2 - q3_q0,
            q1_q3 + q2_q0,
            q1_q2 + q3_q0,
            1.0 - sq_q1 - sq_q3,
            q2_q3 - q1_q0,
            q1_q3 - q2_q0,
            q2_q3 + q1_q0,
            1.0 - sq_q1 - sq_q2,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_in_range_sample() {
        let q = Quaternion::from_rotation_vector(&[0.52, -0.336, -0.251]).unwrap();
        assert_abs_diff_eq!(q.w, 0.744_112_253_189_086_9, epsilon = 1e-6);
        assert_eq!(q.x, 0.52);
        assert_eq!(q.y, -0.336);
        assert_eq!(q.z, -0.251);
        assert_abs_diff_eq!(q.magnitude(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_second_golden_sample() {
        let q = Quaternion::from_rotation_vector(&[-0.325, -0.562, -0.25]).unwrap();
        assert_abs_diff_eq!(q.w, 0.718_352_973_461_151_1, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_vector_is_identity() {
        let q = Quaternion::from_rotation_vector(&[0.0, 0.0, 0.0]).unwrap();
        assert_eq!(q, Quaternion::identity());
        assert_eq!(q.to_array(), [1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_out_of_range_sample_passes_through() {
        let big = 3.40282e38;
        let q = Quaternion::from_rotation_vector(&[big, big, big]).unwrap();
        assert_eq!(q.w, 0.0);
        assert_eq!(q.x, big);
        assert_eq!(q.y, big);
        assert_eq!(q.z, big);
    }

    #[test]
    fn test_magnitude_exactly_one_pins_scalar_to_zero() {
        let q = Quaternion::from_rotation_vector(&[1.0, 0.0, 0.0]).unwrap();
        assert_eq!(q.w, 0.0);
        assert_eq!(q.x, 1.0);
    }

    #[test]
    fn test_fourth_element_ignored() {
        let q = Quaternion::from_rotation_vector(&[0.1, 0.2, 0.3, 0.9]).unwrap();
        let reference = Quaternion::from_rotation_vector(&[0.1, 0.2, 0.3]).unwrap();
        assert_eq!(q, reference);
    }

    #[test]
    fn test_too_short_rejected() {
        let err = Quaternion::from_rotation_vector(&[0.1, 0.2]).unwrap_err();
        assert_eq!(err.code(), 401);

        let err = Quaternion::from_rotation_vector(&[]).unwrap_err();
        assert!(err.is_parameter());
    }

    #[test]
    fn test_identity_matrix_expansion() {
        let m = Quaternion::identity().rotation_matrix();
        assert_eq!(m, RotationMatrix3::identity());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let q = Quaternion::from_rotation_vector(&[0.52, -0.336, -0.251]).unwrap();
        let json = serde_json::to_string(&q).unwrap();
        let back: Quaternion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, q);
    }

    #[test]
    fn test_half_turn_about_z() {
        // Rotation vector for 180 degrees about Z: axis * sin(90 deg).
        let q = Quaternion::from_rotation_vector(&[0.0, 0.0, 1.0]).unwrap();
        let m = q.rotation_matrix();
        assert_abs_diff_eq!(m.get(0, 0), -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(m.get(1, 1), -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(m.get(2, 2), 1.0, epsilon = 1e-12);
    }
}
