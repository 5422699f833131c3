//! 3D Cartesian vectors for sensor readings and derived directions.
//!
//! Raw sensor samples arrive as triples in the device coordinate frame:
//! accelerometer output (gravity plus linear acceleration, in m/s²),
//! magnetometer output (the geomagnetic field, in µT), gyroscope-integrated
//! rotation vectors. [`Vector3`] is the common carrier for all of them and for
//! the intermediate directions (east, north, up) built while deriving a device
//! attitude.
//!
//! # Device Coordinate Convention
//!
//! The device frame follows the usual mobile-sensor convention: when the device
//! lies face-up on a table, +X points right, +Y points toward the top edge, and
//! +Z points out of the screen toward the sky.
//!
//! # Degenerate Input
//!
//! Sensor data can be garbage: a free-falling device reports a near-zero gravity
//! vector, a saturated magnetometer reports infinities. None of the operations
//! here guard against that. [`normalize`](Vector3::normalize) divides by the
//! magnitude whatever it is, so a zero vector normalizes to NaN components and an
//! infinite one to NaN or zero per IEEE 754. Downstream code relies on exactly
//! this: the NaN sentinel flows through matrix construction and marks the result
//! as undefined without ever raising an error.
//!
//! ```
//! use heading_core::Vector3;
//!
//! let falling = Vector3::zeros();
//! assert!(falling.normalize().x.is_nan());
//! ```

use crate::{HeadingError, HeadingResult};
use std::fmt;

/// A 3D Cartesian vector in the device coordinate frame.
///
/// Components are public for direct access when performance matters:
/// - `x`: toward the right edge of the device
/// - `y`: toward the top edge of the device
/// - `z`: out of the screen
///
/// # Construction
///
/// ```
/// use heading_core::Vector3;
///
/// // Direct construction
/// let gravity = Vector3::new(0.0, 0.0, 9.81);
///
/// // From a sensor sample slice (length checked)
/// let geomagnetic = Vector3::from_slice(&[30.0, 25.0, 41.0]).unwrap();
///
/// // From an array
/// let v = Vector3::from_array([1.0, 2.0, 3.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// Creates a new vector from x, y, z components.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the zero vector `[0, 0, 0]`.
    #[inline]
    pub fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Creates a vector from a `[f64; 3]` array.
    #[inline]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Creates a vector from the first three elements of a slice.
    ///
    /// Sensor APIs hand data around as flat slices; extra trailing elements
    /// (reserved fields, accuracy channels) are ignored. A slice shorter than
    /// three elements is a parameter error.
    pub fn from_slice(data: &[f64]) -> HeadingResult<Self> {
        if data.len() < 3 {
            return Err(HeadingError::parameter(
                "Vector3::from_slice",
                &format!("expected at least 3 elements, got {}", data.len()),
            ));
        }
        Ok(Self::new(data[0], data[1], data[2]))
    }

    /// Returns the Euclidean length (L2 norm) of the vector.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// Returns the squared magnitude.
    ///
    /// Faster than [`magnitude`](Self::magnitude) when you only need to
    /// compare lengths.
    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Returns a unit vector pointing in the same direction.
    ///
    /// No guard for degenerate input: a zero vector divides to NaN components,
    /// which is the sentinel for "this direction is undefined". See the module
    /// docs.
    ///
    /// ```
    /// use heading_core::Vector3;
    ///
    /// let v = Vector3::new(3.0, 4.0, 0.0);
    /// assert_eq!(v.normalize(), Vector3::new(0.6, 0.8, 0.0));
    /// ```
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        Self::new(self.x / mag, self.y / mag, self.z / mag)
    }

    /// Computes the dot product (inner product) with another vector.
    ///
    /// For unit vectors this equals the cosine of the angle between them,
    /// which is how the inclination matrix extracts the dip angle of the
    /// geomagnetic field.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product with another vector.
    ///
    /// The result is perpendicular to both inputs, with direction given by the
    /// right-hand rule. Crossing the geomagnetic field with gravity yields the
    /// east direction; crossing up with east yields north.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Returns the components as a `[f64; 3]` array.
    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns `true` if every component is finite (not NaN, not infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Vector + Vector
impl std::ops::Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// Vector - Vector
impl std::ops::Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Vector * scalar
impl std::ops::Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

/// scalar * Vector
impl std::ops::Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        vec * self
    }
}

/// Vector / scalar
impl std::ops::Div<f64> for Vector3 {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

/// -Vector
impl std::ops::Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// v[i] indexing (panics if i > 2)
impl std::ops::Index<usize> for Vector3 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of bounds: {}", index),
        }
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector3({:.9}, {:.9}, {:.9})", self.x, self.y, self.z)
    }
}
