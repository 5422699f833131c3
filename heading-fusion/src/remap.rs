//! Remapping a rotation matrix onto a different device axis convention.
//!
//! A rotation matrix built from sensor samples is expressed in the natural
//! orientation of the device. When the screen rotates, or when the device is
//! mounted sideways (car holders, head-mounted frames), the application wants
//! the same attitude expressed with a different pair of axes playing the role
//! of "right" and "top". [`remap_coordinate_system`] performs that relabeling.
//!
//! The remap is a signed permutation of matrix columns: no arithmetic beyond
//! sign flips touches the entries, so extreme or infinite magnitudes pass
//! through exactly as they came in.
//!
//! # Choosing Axes
//!
//! `axis_x` and `axis_y` name the device axes that should become world X and
//! world Y after the remap. The third axis is implied: it is the remaining
//! base axis, signed so the result stays right-handed. Mapping both arguments
//! to the same base axis leaves no valid third axis and is rejected up front.
//!
//! ```
//! use heading_fusion::{remap_coordinate_system, Axis};
//!
//! // Landscape rotation: device X becomes world Y, device Y points along -X.
//! let matrix = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
//! let remapped = remap_coordinate_system(&matrix, Axis::Y, Axis::MinusX).unwrap();
//! assert_eq!(remapped.len(), 9);
//! ```

use heading_core::constants::{ROTATION_MATRIX_LENGTH, ROTATION_MATRIX_LENGTH_4X4};
use heading_core::{HeadingError, HeadingResult};

/// A signed device axis used to describe a remap target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Y,
    Z,
    MinusX,
    MinusY,
    MinusZ,
}

impl Axis {
    /// The base axis index: 0 for X, 1 for Y, 2 for Z, ignoring sign.
    pub fn index(self) -> usize {
        match self {
            Axis::X | Axis::MinusX => 0,
            Axis::Y | Axis::MinusY => 1,
            Axis::Z | Axis::MinusZ => 2,
        }
    }

    /// Whether this is a negated axis.
    pub fn is_negated(self) -> bool {
        matches!(self, Axis::MinusX | Axis::MinusY | Axis::MinusZ)
    }

    fn from_parts(index: usize, negated: bool) -> Self {
        match (index, negated) {
            (0, false) => Axis::X,
            (1, false) => Axis::Y,
            (2, false) => Axis::Z,
            (0, true) => Axis::MinusX,
            (1, true) => Axis::MinusY,
            (2, true) => Axis::MinusZ,
            _ => unreachable!("axis index is always 0-2"),
        }
    }

    /// The implied third axis for a remap, signed to keep the frame
    /// right-handed.
    pub fn third_axis(axis_x: Axis, axis_y: Axis) -> Axis {
        let x = axis_x.index();
        let y = axis_y.index();
        let z = 3 - x - y;
        // (x, y, z) must be an even permutation of (0, 1, 2) once signs are
        // stripped; if it is odd, the implied axis flips.
        let parity_flip = x != (z + 1) % 3 || y != (z + 2) % 3;
        Axis::from_parts(z, axis_x.is_negated() ^ axis_y.is_negated() ^ parity_flip)
    }
}

/// Relabels the axes of a flattened rotation matrix.
///
/// Accepts a 9-element (3x3) or 16-element (4x4, rows of four) matrix.
/// `axis_x` and `axis_y` name the device axes that become world X and Y; they
/// must differ in base axis. For 4x4 input only the leading 3x3 block
/// participates and the outer ring is carried through identity (zeros with a
/// trailing one).
pub fn remap_coordinate_system(
    matrix: &[f64],
    axis_x: Axis,
    axis_y: Axis,
) -> HeadingResult<Vec<f64>> {
    if axis_x.index() == axis_y.index() {
        return Err(HeadingError::parameter(
            "remap_coordinate_system",
            &format!("axes must differ, both map to base axis {}", axis_x.index()),
        ));
    }
    let length = matrix.len();
    if length != ROTATION_MATRIX_LENGTH && length != ROTATION_MATRIX_LENGTH_4X4 {
        return Err(HeadingError::parameter(
            "remap_coordinate_system",
            &format!("matrix must have 9 or 16 elements, got {}", length),
        ));
    }

    let axis_z = Axis::third_axis(axis_x, axis_y);
    let targets = [axis_x, axis_y, axis_z];
    let row_length = if length == ROTATION_MATRIX_LENGTH_4X4 {
        4
    } else {
        3
    };

    let mut out = vec![0.0; length];
    for row in 0..3 {
        let offset = row * row_length;
        for (column, target) in targets.iter().enumerate() {
            let value = matrix[offset + column];
            out[offset + target.index()] = if target.is_negated() { -value } else { value };
        }
    }
    if length == ROTATION_MATRIX_LENGTH_4X4 {
        out[3] = 0.0;
        out[7] = 0.0;
        out[11] = 0.0;
        out[12] = 0.0;
        out[13] = 0.0;
        out[14] = 0.0;
        out[15] = 1.0;
    }
    Ok(out)
}
