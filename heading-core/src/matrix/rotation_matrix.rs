//! 3x3 rotation matrices relating the device frame to the world frame.
//!
//! The central object of orientation math: a rotation matrix `R` such that a
//! vector in device coordinates maps to world coordinates (east, north, up)
//! through `R * v`. The fusion crate builds these from accelerometer and
//! magnetometer samples, extracts orientation angles from them, remaps them
//! between screen orientations, and compares successive ones to measure how the
//! device turned.
//!
//! # Storage Layout
//!
//! Elements are stored row-major as a flat `[f64; 9]`, matching the order in
//! which sensor APIs exchange matrices:
//!
//! ```text
//! | m[0] m[1] m[2] |
//! | m[3] m[4] m[5] |
//! | m[6] m[7] m[8] |
//! ```
//!
//! # Undefined Entries
//!
//! A matrix built from degenerate sensor input (device in free fall, field
//! parallel to gravity) carries NaN entries rather than being an error.
//! [`defined_entries`](RotationMatrix3::defined_entries) renders that state at
//! the API boundary: each entry becomes `Some(value)` or `None`.

use crate::{HeadingError, HeadingResult, Vector3};
use std::fmt;

/// A 3x3 matrix in row-major order.
///
/// For well-formed sensor input the matrix is a proper rotation (orthonormal
/// rows, determinant +1); degenerate input produces NaN entries instead.
///
/// ```
/// use heading_core::RotationMatrix3;
///
/// let identity = RotationMatrix3::identity();
/// assert_eq!(identity.get(0, 0), 1.0);
/// assert_eq!(identity.get(0, 1), 0.0);
/// assert!(identity.is_orthonormal(1e-12));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationMatrix3 {
    elements: [f64; 9],
}

impl RotationMatrix3 {
    /// Returns the identity matrix.
    pub fn identity() -> Self {
        Self {
            elements: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
        }
    }

    /// Creates a matrix from a flat row-major array.
    #[inline]
    pub fn from_array(elements: [f64; 9]) -> Self {
        Self { elements }
    }

    /// Creates a matrix from the first nine elements of a slice.
    ///
    /// Trailing elements are ignored so callers can pass 4x4-padded buffers.
    /// Fewer than nine elements is a parameter error.
    pub fn from_slice(data: &[f64]) -> HeadingResult<Self> {
        if data.len() < 9 {
            return Err(HeadingError::parameter(
                "RotationMatrix3::from_slice",
                &format!("expected at least 9 elements, got {}", data.len()),
            ));
        }
        let mut elements = [0.0; 9];
        elements.copy_from_slice(&data[..9]);
        Ok(Self { elements })
    }

    /// Creates a matrix with the given row vectors.
    pub fn from_rows(top: Vector3, middle: Vector3, bottom: Vector3) -> Self {
        Self {
            elements: [
                top.x, top.y, top.z, middle.x, middle.y, middle.z, bottom.x, bottom.y, bottom.z,
            ],
        }
    }

    /// Returns the element at the given row and column (each 0-2).
    ///
    /// Panics if either index is out of bounds; use direct `as_slice` access
    /// for flat iteration.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < 3 && col < 3, "matrix index out of bounds");
        self.elements[row * 3 + col]
    }

    /// Returns the given row as a vector.
    pub fn row(&self, row: usize) -> Vector3 {
        assert!(row < 3, "matrix row out of bounds");
        Vector3::new(
            self.elements[row * 3],
            self.elements[row * 3 + 1],
            self.elements[row * 3 + 2],
        )
    }

    /// Returns the elements as a flat row-major slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64; 9] {
        &self.elements
    }

    /// Returns the elements as a flat row-major array.
    #[inline]
    pub fn to_array(&self) -> [f64; 9] {
        self.elements
    }

    /// Returns the transpose.
    ///
    /// For a proper rotation this is also the inverse.
    pub fn transpose(&self) -> Self {
        let m = &self.elements;
        Self {
            elements: [m[0], m[3], m[6], m[1], m[4], m[7], m[2], m[5], m[8]],
        }
    }

    /// Renders each entry as `Some(value)` or `None` if it is NaN.
    ///
    /// This is how a degenerate build (free fall, parallel field and gravity)
    /// surfaces at the API boundary: the computation never fails, but the
    /// undefined entries are explicit.
    ///
    /// ```
    /// use heading_core::RotationMatrix3;
    ///
    /// let m = RotationMatrix3::from_array([f64::NAN; 9]);
    /// assert!(m.defined_entries().iter().all(|e| e.is_none()));
    /// ```
    pub fn defined_entries(&self) -> [Option<f64>; 9] {
        let mut out = [None; 9];
        for (slot, &value) in out.iter_mut().zip(self.elements.iter()) {
            if !value.is_nan() {
                *slot = Some(value);
            }
        }
        out
    }

    /// Returns `true` if every entry is finite.
    pub fn is_finite(&self) -> bool {
        self.elements.iter().all(|v| v.is_finite())
    }

    /// Checks that the rows form an orthonormal basis within `tolerance`.
    ///
    /// Every matrix built from non-degenerate sensor input satisfies this;
    /// it is primarily a test and debugging aid.
    pub fn is_orthonormal(&self, tolerance: f64) -> bool {
        let rows = [self.row(0), self.row(1), self.row(2)];
        for i in 0..3 {
            if (rows[i].magnitude() - 1.0).abs() > tolerance {
                return false;
            }
            for j in (i + 1)..3 {
                if rows[i].dot(&rows[j]).abs() > tolerance {
                    return false;
                }
            }
        }
        true
    }
}

/// Matrix * Matrix composition (the left matrix acts last).
impl std::ops::Mul for RotationMatrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let a = &self.elements;
        let b = &rhs.elements;
        let mut out = [0.0; 9];
        for row in 0..3 {
            for col in 0..3 {
                out[row * 3 + col] = a[row * 3] * b[col]
                    + a[row * 3 + 1] * b[3 + col]
                    + a[row * 3 + 2] * b[6 + col];
            }
        }
        Self { elements: out }
    }
}

/// Matrix * Vector: device coordinates to world coordinates.
impl std::ops::Mul<Vector3> for RotationMatrix3 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        let m = &self.elements;
        Vector3::new(
            m[0] * v.x + m[1] * v.y + m[2] * v.z,
            m[3] * v.x + m[4] * v.y + m[5] * v.z,
            m[6] * v.x + m[7] * v.y + m[8] * v.z,
        )
    }
}

/// m[(row, col)] indexing (panics if out of bounds)
impl std::ops::Index<(usize, usize)> for RotationMatrix3 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(row < 3 && col < 3, "matrix index out of bounds");
        &self.elements[row * 3 + col]
    }
}

impl fmt::Display for RotationMatrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.elements;
        writeln!(f, "[{:.9}, {:.9}, {:.9}]", m[0], m[1], m[2])?;
        writeln!(f, "[{:.9}, {:.9}, {:.9}]", m[3], m[4], m[5])?;
        write!(f, "[{:.9}, {:.9}, {:.9}]", m[6], m[7], m[8])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_identity() {
        let m = RotationMatrix3::identity();
        assert_eq!(m.get(0, 0), 1.0);
        assert_eq!(m.get(1, 1), 1.0);
        assert_eq!(m.get(2, 2), 1.0);
        assert_eq!(m.get(0, 1), 0.0);
        assert!(m.is_orthonormal(0.0));
    }

    #[test]
    fn test_from_slice_truncates() {
        let data: Vec<f64> = (1..=16).map(f64::from).collect();
        let m = RotationMatrix3::from_slice(&data).unwrap();
        assert_eq!(m.to_array(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    }

    #[test]
    fn test_from_slice_too_short() {
        let err = RotationMatrix3::from_slice(&[1.0; 8]).unwrap_err();
        assert_eq!(err.code(), 401);
    }

    #[test]
    fn test_from_rows_and_row() {
        let m = RotationMatrix3::from_rows(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(4.0, 5.0, 6.0),
            Vector3::new(7.0, 8.0, 9.0),
        );
        assert_eq!(m.to_array(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(m.row(1), Vector3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_transpose() {
        let m = RotationMatrix3::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let t = m.transpose();
        assert_eq!(t.to_array(), [1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 9.0]);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_multiply() {
        let a = RotationMatrix3::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let identity = RotationMatrix3::identity();
        assert_eq!(a * identity, a);
        assert_eq!(identity * a, a);

        let b = RotationMatrix3::from_array([2.0; 9]);
        let product = b * a;
        // Every row of b is [2, 2, 2], so each product row is 2 * column sums.
        assert_eq!(product.to_array()[0], 24.0);
        assert_eq!(product.to_array()[1], 30.0);
        assert_eq!(product.to_array()[2], 36.0);
    }

    #[test]
    fn test_matrix_vector_product() {
        let m = RotationMatrix3::from_array([0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
        let v = m * Vector3::new(1.0, 0.0, 0.0);
        assert_eq!(v, Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_defined_entries() {
        let mut elements = [1.0; 9];
        elements[4] = f64::NAN;
        let m = RotationMatrix3::from_array(elements);
        let defined = m.defined_entries();
        assert_eq!(defined[0], Some(1.0));
        assert_eq!(defined[4], None);
        assert!(!m.is_finite());

        // Infinity is defined, just not finite.
        elements[4] = f64::INFINITY;
        let m = RotationMatrix3::from_array(elements);
        assert_eq!(m.defined_entries()[4], Some(f64::INFINITY));
        assert!(!m.is_finite());
    }

    #[test]
    fn test_is_orthonormal() {
        assert!(RotationMatrix3::identity().is_orthonormal(1e-15));

        let scaled = RotationMatrix3::from_array([2.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
        assert!(!scaled.is_orthonormal(1e-6));

        let skewed = RotationMatrix3::from_array([1.0, 0.1, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
        assert!(!skewed.is_orthonormal(1e-6));
    }

    #[test]
    fn test_indexing() {
        let m = RotationMatrix3::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(1, 2)], 6.0);
        assert_eq!(m[(2, 1)], 8.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let m = RotationMatrix3::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let json = serde_json::to_string(&m).unwrap();
        let back: RotationMatrix3 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn test_rotation_inverse_is_transpose() {
        // 90 degrees about Z.
        let m = RotationMatrix3::from_array([0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
        let product = m * m.transpose();
        for (i, &v) in product.as_slice().iter().enumerate() {
            let expected = if i % 4 == 0 { 1.0 } else { 0.0 };
            assert_abs_diff_eq!(v, expected, epsilon = 1e-15);
        }
    }
}
