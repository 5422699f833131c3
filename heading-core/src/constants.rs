#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

/// Number of elements in a flattened 3x3 rotation matrix.
pub const ROTATION_MATRIX_LENGTH: usize = 9;

/// Number of elements in a flattened 4x4 rotation matrix.
pub const ROTATION_MATRIX_LENGTH_4X4: usize = 16;

/// Number of elements in a rotation vector (axis scaled by sin of the half angle).
pub const ROTATION_VECTOR_LENGTH: usize = 3;

/// Number of elements in a quaternion (scalar part first).
pub const QUATERNION_LENGTH: usize = 4;
