//! Device attitude math on top of raw sensor samples.
//!
//! This crate turns accelerometer, magnetometer and rotation-vector samples
//! into the quantities applications actually use:
//!
//! - [`rotation_and_inclination`]: rotation + inclination matrices from
//!   gravity and geomagnetic samples
//! - [`rotation_from_vector`] / [`Quaternion`]: attitude from a fused
//!   rotation-vector sensor
//! - [`orientation_angles`]: azimuth, pitch, roll from a rotation matrix
//! - [`remap_coordinate_system`]: relabel device axes for screen rotation
//! - [`angle_variation`]: per-axis rotation between two attitudes
//! - [`geomagnetic_dip`]: dip angle from an inclination matrix
//! - [`altitude_from_pressure`]: barometric altitude
//!
//! Everything is a plain synchronous function over `f64` slices, returning
//! `Result` only for malformed arguments. Numerically degenerate sensor data
//! flows through under IEEE 754 rules and surfaces as NaN, never as an error
//! (see the `heading-core` docs).

pub mod altitude;
pub mod angle_change;
pub mod orientation;
pub mod quaternion;
pub mod remap;
pub mod rotation;

pub use altitude::altitude_from_pressure;
pub use angle_change::angle_variation;
pub use orientation::{geomagnetic_dip, orientation_angles};
pub use quaternion::Quaternion;
pub use remap::{remap_coordinate_system, Axis};
pub use rotation::{rotation_and_inclination, rotation_from_vector};

pub use heading_core::{HeadingError, HeadingResult, RotationMatrix3, Vector3};
