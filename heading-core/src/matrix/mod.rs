//! Vector and matrix primitives shared by the fusion and geomagnetic crates.

mod rotation_matrix;
mod vector3;

pub use rotation_matrix::RotationMatrix3;
pub use vector3::Vector3;
