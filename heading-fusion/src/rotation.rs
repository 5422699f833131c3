//! Device attitude from accelerometer and magnetometer samples.
//!
//! The accelerometer reports gravity in device coordinates; the magnetometer
//! reports the geomagnetic field in the same frame. Those two directions pin
//! down the device's attitude completely, and
//! [`rotation_and_inclination`] turns them into the pair of matrices the rest
//! of the stack works with:
//!
//! - the **rotation matrix**, whose rows are the world's east, north and up
//!   directions expressed in device coordinates, and
//! - the **inclination matrix**, a rotation about the east axis by the dip
//!   angle of the geomagnetic field (the angle by which the field dips below
//!   the horizontal plane).
//!
//! Devices with a gyroscope-fused rotation-vector sensor skip the raw samples
//! and go straight from the fused rotation vector to a matrix with
//! [`rotation_from_vector`].
//!
//! # Degenerate Samples
//!
//! A device in free fall reports a near-zero gravity vector; near the magnetic
//! poles the field is close to parallel with gravity. In both cases the frame
//! is genuinely undefined and the construction produces NaN entries rather
//! than an error or an arbitrary fallback. Use
//! [`RotationMatrix3::defined_entries`] to observe which entries survived.
//!
//! ```
//! use heading_fusion::rotation_and_inclination;
//!
//! let (rotation, _) = rotation_and_inclination(&[0.0, 0.0, 0.0], &[30.0, 25.0, 41.0]).unwrap();
//! assert!(rotation.defined_entries().iter().any(|e| e.is_none()));
//! ```

use heading_core::constants::ROTATION_VECTOR_LENGTH;
use heading_core::{HeadingError, HeadingResult, RotationMatrix3, Vector3};

use crate::quaternion::Quaternion;

/// Builds the rotation and inclination matrices from a gravity sample and a
/// geomagnetic field sample, both in device coordinates.
///
/// Both slices must contain exactly three elements. The returned rotation
/// matrix has rows east, north, up; the inclination matrix rotates about east
/// by the dip angle and feeds [`geomagnetic_dip`](crate::geomagnetic_dip).
///
/// Degenerate samples (zero gravity, field parallel to gravity, non-finite
/// values) produce NaN entries, never an error.
///
/// ```
/// use heading_fusion::rotation_and_inclination;
///
/// let gravity = [9.0, 9.0, 9.0];
/// let geomagnetic = [30.0, 25.0, 41.0];
/// let (rotation, inclination) = rotation_and_inclination(&gravity, &geomagnetic).unwrap();
///
/// assert!(rotation.is_orthonormal(1e-9));
/// assert_eq!(inclination.get(0, 0), 1.0);
/// ```
pub fn rotation_and_inclination(
    gravity: &[f64],
    geomagnetic: &[f64],
) -> HeadingResult<(RotationMatrix3, RotationMatrix3)> {
    if gravity.len() != ROTATION_VECTOR_LENGTH {
        return Err(HeadingError::parameter(
            "rotation_and_inclination",
            &format!("gravity must have 3 elements, got {}", gravity.len()),
        ));
    }
    if geomagnetic.len() != ROTATION_VECTOR_LENGTH {
        return Err(HeadingError::parameter(
            "rotation_and_inclination",
            &format!("geomagnetic must have 3 elements, got {}", geomagnetic.len()),
        ));
    }

    let g = Vector3::from_array([gravity[0], gravity[1], gravity[2]]);
    let b = Vector3::from_array([geomagnetic[0], geomagnetic[1], geomagnetic[2]]);

    let east = b.cross(&g).normalize();
    let up = g.normalize();
    let north = up.cross(&east);
    let rotation = RotationMatrix3::from_rows(east, north, up);

    // Dip angle of the field: its projections onto north and up, scaled by
    // the field magnitude, give the cosine and sine directly.
    let inv_b = 1.0 / b.magnitude();
    let c = b.dot(&north) * inv_b;
    let s = b.dot(&up) * inv_b;
    let inclination = RotationMatrix3::from_array([1.0, 0.0, 0.0, 0.0, c, s, 0.0, -s, c]);

    Ok((rotation, inclination))
}

/// Builds a rotation matrix from a rotation-vector sensor sample.
///
/// The rotation vector is the rotation axis scaled by the sine of half the
/// rotation angle, as reported by gyroscope-fused attitude sensors. The
/// vector is promoted to a unit quaternion
/// ([`Quaternion::from_rotation_vector`]) and expanded to a matrix. A zero
/// vector yields the identity.
///
/// Fewer than three elements is a parameter error; trailing elements are
/// ignored.
pub fn rotation_from_vector(rotation_vector: &[f64]) -> HeadingResult<RotationMatrix3> {
    let q = Quaternion::from_rotation_vector(rotation_vector).map_err(|_| {
        HeadingError::parameter(
            "rotation_from_vector",
            &format!(
                "rotation vector must have at least 3 elements, got {}",
                rotation_vector.len()
            ),
        )
    })?;
    Ok(q.rotation_matrix())
}
