//! Angle variation between two successive rotation matrices.
//!
//! Given the attitude at two sample times, [`angle_variation`] reports how far
//! the device turned about each axis in between: the yaw, pitch and roll of
//! the relative rotation, in radians.
//!
//! The middle channel is read with `asin`, not the robust `atan2` form used
//! for absolute orientation. For two proper rotations the relative pitch entry
//! stays within `[-1, 1]` and `asin` is exact; for mismatched or badly scaled
//! inputs it leaves the domain and the pitch comes back NaN while yaw and roll
//! stay finite. That asymmetry is part of the contract — it flags the sample
//! pair as inconsistent without hiding the other two channels.

use heading_core::constants::ROTATION_MATRIX_LENGTH;
use heading_core::{HeadingError, HeadingResult, RotationMatrix3};

/// Computes the per-axis rotation (radians) between two attitudes.
///
/// Both slices must contain at least nine elements (extras are ignored). The
/// relative rotation is `previous * current`, and the angles are read from it
/// the same way absolute orientation angles are, except for the `asin` pitch:
///
/// ```text
/// [atan2(rd[1], rd[4]), asin(-rd[7]), atan2(-rd[6], rd[8])]
/// ```
pub fn angle_variation(current: &[f64], previous: &[f64]) -> HeadingResult<[f64; 3]> {
    if current.len() < ROTATION_MATRIX_LENGTH {
        return Err(HeadingError::parameter(
            "angle_variation",
            &format!(
                "current matrix must have at least 9 elements, got {}",
                current.len()
            ),
        ));
    }
    if previous.len() < ROTATION_MATRIX_LENGTH {
        return Err(HeadingError::parameter(
            "angle_variation",
            &format!(
                "previous matrix must have at least 9 elements, got {}",
                previous.len()
            ),
        ));
    }

    let current = RotationMatrix3::from_slice(current)?;
    let previous = RotationMatrix3::from_slice(previous)?;
    let rd = (previous * current).to_array();

    Ok([
        libm::atan2(rd[1], rd[4]),
        libm::asin(-rd[7]),
        libm::atan2(-rd[6], rd[8]),
    ])
}
