//! WMM2020 spherical-harmonic coefficients.
//!
//! The World Magnetic Model describes Earth's main magnetic field as a
//! spherical-harmonic expansion of degree and order 12. Each harmonic has a
//! pair of Gauss coefficients g(n, m) and h(n, m), frozen at a base epoch,
//! plus a linear secular-variation rate that extrapolates the field forward
//! (or backward) in time:
//!
//! ```text
//! g(n, m, t) = g(n, m) + (t - base) * dg(n, m)
//! ```
//!
//! Tables are indexed `[degree][order]`, padded with zeros above the diagonal
//! so every row has thirteen entries.

/// Degree and order of the harmonic expansion.
pub const MAX_EXPANSION_DEGREE: usize = 12;

/// Base epoch of the coefficient set: 2020-02-01T00:00:00Z in Unix
/// milliseconds.
pub const WMM_BASE_TIME_MILLIS: i64 = 1_580_486_400_000;

/// Milliseconds per model year (365 days, matching how the coefficient
/// tables were fitted for interpolation).
pub const MILLIS_PER_YEAR: f64 = 365.0 * 24.0 * 60.0 * 60.0 * 1000.0;

/// Main-field Gauss coefficients g(n, m) in nanotesla, indexed `[n][m]`,
/// valid at the base epoch. Unused entries (m > n) are zero.
pub const GAUSS_COEFFICIENT_G: [[f64; 13]; 13] = [
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [-29404.5, -1450.7, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [-2500.0, 2982.0, 1676.8, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [1363.9, -2381.0, 1236.2, 525.7, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [903.1, 809.4, 86.2, -309.4, 47.9, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [-234.4, 363.1, 187.8, -140.7, -151.2, 13.7, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [65.9, 65.6, 73.0, -121.5, -36.2, 13.5, -64.7, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [80.6, -76.8, -8.3, 56.5, 15.8, 6.4, -7.2, 9.8, 0.0, 0.0, 0.0, 0.0, 0.0],
    [23.6, 9.8, -17.5, -0.4, -21.1, 15.3, 13.7, -16.5, -0.3, 0.0, 0.0, 0.0, 0.0],
    [5.0, 8.2, 2.9, -1.4, -1.1, -13.3, 1.1, 8.9, -9.3, -11.9, 0.0, 0.0, 0.0],
    [-1.9, -6.2, -0.1, 1.7, -0.9, 0.6, -0.9, 1.9, 1.4, -2.4, -3.9, 0.0, 0.0],
    [3.0, -1.4, -2.5, 2.4, -0.9, 0.3, -0.7, -0.1, 1.4, -0.6, 0.2, 3.1, 0.0],
    [-2.0, -0.1, 0.5, 1.3, -1.2, 0.7, 0.3, 0.5, -0.2, -0.5, 0.1, -1.1, -0.3],
];

/// Main-field Gauss coefficients h(n, m) in nanotesla, indexed `[n][m]`.
/// h(n, 0) is identically zero.
pub const GAUSS_COEFFICIENT_H: [[f64; 13]; 13] = [
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 4652.9, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, -2991.6, -734.8, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, -82.2, 241.8, -542.9, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 282.0, -158.4, 199.8, -350.1, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 47.7, 208.4, -121.3, 32.2, 99.1, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, -19.1, 25.0, 52.7, -64.4, 9.0, 68.1, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, -51.4, -16.8, 2.3, 23.5, -2.2, -27.2, -1.9, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 8.4, -15.3, 12.8, -11.8, 14.9, 3.6, -6.9, 2.8, 0.0, 0.0, 0.0, 0.0],
    [0.0, -23.3, 11.1, 9.8, -5.1, -6.2, 7.8, 0.4, -1.5, 9.7, 0.0, 0.0, 0.0],
    [0.0, 3.4, -0.2, 3.5, 4.8, -8.6, -0.1, -4.2, -3.4, -0.1, -8.8, 0.0, 0.0],
    [0.0, 0.0, 2.6, -0.5, -0.4, 0.6, -0.2, -1.7, -1.6, -3.0, -2.0, -2.6, 0.0],
    [0.0, -1.2, 0.5, 1.3, -1.8, 0.1, 0.7, -0.1, 0.6, 0.2, -0.9, 0.0, 0.5],
];

/// Secular variation of g(n, m), in nanotesla per year.
pub const SECULAR_VARIATION_G: [[f64; 13]; 13] = [
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [6.7, 7.7, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [-11.5, -7.1, -2.2, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [2.8, -6.2, 3.4, -12.2, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [-1.1, -1.6, -6.0, 5.4, -5.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [-0.3, 0.6, -0.7, 0.1, 1.2, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [-0.6, -0.4, 0.5, 1.4, -1.4, 0.0, 0.8, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [-0.1, -0.3, -0.1, 0.7, 0.2, -0.5, -0.8, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [-0.1, 0.1, -0.1, 0.5, -0.1, 0.4, 0.5, 0.0, 0.4, 0.0, 0.0, 0.0, 0.0],
    [-0.1, -0.2, 0.0, 0.4, -0.3, 0.0, 0.3, 0.0, 0.0, -0.4, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.2, -0.1, -0.2, 0.0, -0.1, -0.2, -0.1, 0.0, 0.0, 0.0],
    [0.0, -0.1, 0.0, 0.0, 0.0, -0.1, 0.0, 0.0, -0.1, -0.1, -0.1, -0.1, 0.0],
    [0.0, 0.0, 0.0, 0.1, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.1, -0.1],
];

/// Secular variation of h(n, m), in nanotesla per year.
pub const SECULAR_VARIATION_H: [[f64; 13]; 13] = [
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, -25.1, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, -30.2, -23.9, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 5.7, -1.0, 1.1, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 0.2, 6.9, 3.7, -5.6, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 0.1, 2.5, -0.9, 3.0, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 0.1, -1.8, -1.4, 0.9, 0.1, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 0.5, 0.6, -0.7, -0.2, -1.2, 0.2, 0.3, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, -0.3, 0.7, -0.2, 0.5, -0.3, -0.5, 0.4, 0.1, 0.0, 0.0, 0.0, 0.0],
    [0.0, -0.3, 0.2, -0.4, 0.4, 0.1, 0.0, -0.2, 0.5, 0.2, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.1, -0.3, 0.1, -0.2, 0.1, 0.0, -0.1, 0.2, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.1, 0.0, 0.2, 0.0, 0.0, 0.1, 0.0, -0.1, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, -0.1, 0.1, 0.0, 0.0, 0.0, 0.1, 0.0, 0.0, 0.1, -0.1],
];
