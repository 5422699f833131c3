//! Geomagnetic field model (WMM2020) for compass correction.
//!
//! A magnetometer measures the field where the device actually is; turning
//! that into a bearing relative to geographic north requires knowing what the
//! field *should* look like there. This crate evaluates the World Magnetic
//! Model: given a geodetic [`GeoCoordinate`] and a timestamp, it produces the
//! predicted field vector and its derived quantities — declination,
//! inclination, horizontal and total intensity.
//!
//! The model is a degree-12 spherical-harmonic expansion over a frozen
//! coefficient set with linear secular variation from the 2020 base epoch.
//! Evaluation is pure math over the embedded tables: no I/O, no shared state,
//! bit-identical results for identical inputs.
//!
//! ```
//! use heading_geomag::{GeoCoordinate, GeomagneticField};
//!
//! let home = GeoCoordinate::at_sea_level(47.6, -122.3);
//! let field = GeomagneticField::new(&home, 1_580_486_400_000);
//!
//! // Seattle's declination is around +15 degrees east.
//! assert!(field.declination() > 10.0 && field.declination() < 20.0);
//! ```

pub mod coefficients;
pub mod coordinate;
pub mod field;
pub mod geodetic;
pub mod legendre;

pub use coordinate::GeoCoordinate;
pub use field::GeomagneticField;
