//! Orientation angles and dip angle from previously built matrices.
//!
//! Once a rotation matrix exists ([`crate::rotation_and_inclination`] or
//! [`crate::rotation_from_vector`]), the familiar compass quantities fall out
//! of individual entries:
//!
//! - **azimuth**: rotation about the vertical axis, 0 at magnetic north,
//!   increasing as the device turns east;
//! - **pitch**: rotation about the lateral axis, negative when the top edge
//!   tips up;
//! - **roll**: rotation about the longitudinal axis, positive when the right
//!   edge tips down.
//!
//! All angles are in radians. The matrix is taken at face value: nothing here
//! checks orthonormality, and NaN entries propagate into the angles.

use heading_core::constants::ROTATION_MATRIX_LENGTH;
use heading_core::{HeadingError, HeadingResult};

/// Extracts azimuth, pitch and roll (radians, in that order) from a flattened
/// row-major rotation matrix.
///
/// The slice must contain at least nine elements; extras are ignored. Only
/// five entries participate:
///
/// ```text
/// azimuth = atan2(m[1], m[4])
/// pitch   = atan2(-m[7], sqrt(m[1]² + m[4]²))
/// roll    = atan2(-m[6], m[8])
/// ```
///
/// The pitch form is the numerically robust equivalent of `asin(-m[7])` for a
/// proper rotation and stays finite for arbitrarily scaled input.
///
/// ```
/// use heading_fusion::{orientation_angles, rotation_and_inclination};
///
/// let (rotation, _) = rotation_and_inclination(&[0.0, 0.0, 9.81], &[0.0, 20.0, -40.0]).unwrap();
/// let [azimuth, pitch, roll] = orientation_angles(rotation.as_slice()).unwrap();
/// assert!(azimuth.abs() < 1e-9 && pitch.abs() < 1e-9 && roll.abs() < 1e-9);
/// ```
pub fn orientation_angles(rotation_matrix: &[f64]) -> HeadingResult<[f64; 3]> {
    if rotation_matrix.len() < ROTATION_MATRIX_LENGTH {
        return Err(HeadingError::parameter(
            "orientation_angles",
            &format!(
                "rotation matrix must have at least 9 elements, got {}",
                rotation_matrix.len()
            ),
        ));
    }
    let m = &rotation_matrix[..ROTATION_MATRIX_LENGTH];

    let azimuth = libm::atan2(m[1], m[4]);
    let pitch = libm::atan2(-m[7], libm::sqrt(m[1] * m[1] + m[4] * m[4]));
    let roll = libm::atan2(-m[6], m[8]);
    Ok([azimuth, pitch, roll])
}

/// Extracts the geomagnetic dip angle (radians) from a flattened inclination
/// matrix.
///
/// The dip is the angle by which the field dips below the horizontal plane,
/// read from the sine/cosine pair the inclination matrix stores in its middle
/// row: `atan2(m[5], m[4])`. The slice must contain at least nine elements.
pub fn geomagnetic_dip(inclination_matrix: &[f64]) -> HeadingResult<f64> {
    if inclination_matrix.len() < ROTATION_MATRIX_LENGTH {
        return Err(HeadingError::parameter(
            "geomagnetic_dip",
            &format!(
                "inclination matrix must have at least 9 elements, got {}",
                inclination_matrix.len()
            ),
        ));
    }
    Ok(libm::atan2(inclination_matrix[5], inclination_matrix[4]))
}
