//! Barometric altitude from atmospheric pressure.
//!
//! The standard-atmosphere inversion used by pressure sensors everywhere:
//!
//! ```text
//! altitude = 44330 * (1 - (p / p0)^(1/5.255))
//! ```
//!
//! where `p0` is the sea-level reference pressure and `p` the measured
//! pressure, both in the same unit (typically hPa). 44330 m is the height at
//! which the model atmosphere reaches zero pressure, and 5.255 the combined
//! gas-constant/lapse-rate exponent.
//!
//! Inputs are taken at face value. Zero or negative pressures have no physical
//! meaning but still produce the IEEE-defined result of the formula: a zero
//! reference pressure sends the ratio to infinity and the altitude to negative
//! infinity, a zero measured pressure lands exactly on the 44330 m ceiling.

/// Altitude (meters) at which the standard atmosphere reaches zero pressure.
pub const ZERO_PRESSURE_ALTITUDE: f64 = 44330.0;

/// Exponent applied to the pressure ratio, as `1 / PRESSURE_EXPONENT`.
pub const PRESSURE_EXPONENT: f64 = 5.255;

/// Converts a pressure reading to altitude above the reference level, in
/// meters.
///
/// Never fails; degenerate inputs follow IEEE 754 through the formula.
///
/// ```
/// use heading_fusion::altitude_from_pressure;
///
/// // Measured pressure equal to the reference: sea level.
/// assert_eq!(altitude_from_pressure(1013.25, 1013.25), 0.0);
///
/// // Lower pressure, positive altitude.
/// assert!(altitude_from_pressure(1013.25, 900.0) > 0.0);
/// ```
pub fn altitude_from_pressure(sea_level_pressure: f64, pressure: f64) -> f64 {
    ZERO_PRESSURE_ALTITUDE
        * (1.0 - libm::pow(pressure / sea_level_pressure, 1.0 / PRESSURE_EXPONENT))
}
