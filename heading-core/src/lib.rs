//! Shared numeric primitives for sensor orientation math.
//!
//! This crate holds the types every other crate in the workspace builds on:
//! [`Vector3`] for sensor samples and derived directions, [`RotationMatrix3`]
//! for device attitudes, the unified [`HeadingError`] type, and the math
//! constants of the domain.
//!
//! Higher-level operations live in `heading-fusion` (attitude construction,
//! orientation angles, coordinate remapping) and `heading-geomag` (the
//! geomagnetic field model).

pub mod constants;
pub mod errors;
pub mod matrix;

pub use errors::{HeadingError, HeadingResult, PARAMETER_ERROR_CODE, SERVICE_ERROR_CODE};
pub use matrix::{RotationMatrix3, Vector3};
