//! Geomagnetic field evaluation at a position and time.

use chrono::{DateTime, Utc};

use heading_core::constants::{DEG_TO_RAD, HALF_PI, RAD_TO_DEG};

use crate::coefficients::{
    GAUSS_COEFFICIENT_G, GAUSS_COEFFICIENT_H, MAX_EXPANSION_DEGREE, MILLIS_PER_YEAR,
    SECULAR_VARIATION_G, SECULAR_VARIATION_H, WMM_BASE_TIME_MILLIS,
};
use crate::coordinate::GeoCoordinate;
use crate::geodetic::{geodetic_to_geocentric, EARTH_REFERENCE_RADIUS_KM};
use crate::legendre::{schmidt_quasi_norm_factors, LegendreTable};

/// Highest latitude magnitude the evaluation accepts, in degrees.
const LATITUDE_MAX: f64 = 90.0;

/// Offset keeping the evaluation away from the exact poles, where the
/// east-west basis direction is singular.
const POLE_PRECISION_DEG: f64 = 1e-5;

/// The geomagnetic field vector at a position and time, with its derived
/// compass quantities.
///
/// Construction never fails. Latitude is folded into `[-90, 90]` (non-finite
/// latitudes land at the north pole bound); longitude and altitude are taken
/// as-is, so a non-finite value there turns every output NaN rather than
/// producing a plausible-looking wrong answer.
///
/// ```
/// use heading_geomag::{GeoCoordinate, GeomagneticField};
///
/// // Northern Norway at the model base epoch.
/// let coordinate = GeoCoordinate::at_sea_level(80.0, 0.0);
/// let field = GeomagneticField::new(&coordinate, 1_580_486_400_000);
///
/// assert!(field.total_intensity() > 50_000.0); // strong polar field, in nT
/// assert!(field.inclination() > 80.0);         // nearly straight down
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeomagneticField {
    x: f64,
    y: f64,
    z: f64,
}

impl GeomagneticField {
    /// Evaluates the field at a geodetic coordinate and a Unix timestamp in
    /// milliseconds.
    ///
    /// The model carries a single linear secular-variation table, so accuracy
    /// degrades gracefully away from the base epoch; timestamps decades out
    /// still evaluate rather than erroring.
    pub fn new(coordinate: &GeoCoordinate, time_millis: i64) -> Self {
        let latitude_deg = fold_latitude(coordinate.latitude);
        let geocentric = geodetic_to_geocentric(
            latitude_deg,
            coordinate.longitude,
            coordinate.altitude / 1000.0,
        );

        let theta_rad = HALF_PI - geocentric.latitude_rad;
        let legendre = LegendreTable::new(MAX_EXPANSION_DEGREE, theta_rad);
        let schmidt = schmidt_quasi_norm_factors(MAX_EXPANSION_DEGREE);

        // (reference / r)^(n + 2) for every degree in the expansion.
        let mut radius_power = [0.0; MAX_EXPANSION_DEGREE + 3];
        radius_power[0] = 1.0;
        radius_power[1] = EARTH_REFERENCE_RADIUS_KM / geocentric.radius_km;
        for i in 2..radius_power.len() {
            radius_power[i] = radius_power[i - 1] * radius_power[1];
        }

        // sin(m * lon) and cos(m * lon) by angle addition, avoiding repeated
        // trigonometry for the higher orders.
        let mut sin_m_lon = [0.0; MAX_EXPANSION_DEGREE + 1];
        let mut cos_m_lon = [0.0; MAX_EXPANSION_DEGREE + 1];
        cos_m_lon[0] = 1.0;
        let (sin_lon, cos_lon) = libm::sincos(geocentric.longitude_rad);
        sin_m_lon[1] = sin_lon;
        cos_m_lon[1] = cos_lon;
        for m in 2..=MAX_EXPANSION_DEGREE {
            let half = m >> 1;
            sin_m_lon[m] =
                sin_m_lon[m - half] * cos_m_lon[half] + cos_m_lon[m - half] * sin_m_lon[half];
            cos_m_lon[m] =
                cos_m_lon[m - half] * cos_m_lon[half] - sin_m_lon[m - half] * sin_m_lon[half];
        }

        let inverse_cos_latitude = 1.0 / libm::cos(geocentric.latitude_rad);
        let years_since_base = (time_millis - WMM_BASE_TIME_MILLIS) as f64 / MILLIS_PER_YEAR;

        // Accumulate the field in geocentric north/east/down components.
        let mut gc_x = 0.0;
        let mut gc_y = 0.0;
        let mut gc_z = 0.0;
        for n in 1..=MAX_EXPANSION_DEGREE {
            for m in 0..=n {
                let g = GAUSS_COEFFICIENT_G[n][m] + years_since_base * SECULAR_VARIATION_G[n][m];
                let h = GAUSS_COEFFICIENT_H[n][m] + years_since_base * SECULAR_VARIATION_H[n][m];

                let term = radius_power[n + 2] * schmidt[n][m];
                gc_x += term * (g * cos_m_lon[m] + h * sin_m_lon[m]) * legendre.p_deriv[n][m];
                gc_y += term
                    * (m as f64)
                    * (g * sin_m_lon[m] - h * cos_m_lon[m])
                    * legendre.p[n][m]
                    * inverse_cos_latitude;
                gc_z -= (n + 1) as f64
                    * term
                    * (g * cos_m_lon[m] + h * sin_m_lon[m])
                    * legendre.p[n][m];
            }
        }

        // Rotate from geocentric back to geodetic north/down.
        let latitude_diff_rad = latitude_deg * DEG_TO_RAD - geocentric.latitude_rad;
        let (sin_diff, cos_diff) = libm::sincos(latitude_diff_rad);
        Self {
            x: gc_x * cos_diff + gc_z * sin_diff,
            y: gc_y,
            z: gc_z * cos_diff - gc_x * sin_diff,
        }
    }

    /// Evaluates the field at a [`chrono`] UTC instant.
    pub fn at(coordinate: &GeoCoordinate, time: DateTime<Utc>) -> Self {
        Self::new(coordinate, time.timestamp_millis())
    }

    /// Northward component of the field, in nanotesla.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Eastward component of the field, in nanotesla.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Downward component of the field, in nanotesla.
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Declination in degrees: the angle from geographic north to the
    /// horizontal field direction, positive east.
    pub fn declination(&self) -> f64 {
        RAD_TO_DEG * libm::atan2(self.y, self.x)
    }

    /// Inclination (dip) in degrees: the angle of the field below the
    /// horizontal plane, positive down.
    pub fn inclination(&self) -> f64 {
        RAD_TO_DEG * libm::atan2(self.z, self.horizontal_intensity())
    }

    /// Magnitude of the horizontal field component, in nanotesla.
    pub fn horizontal_intensity(&self) -> f64 {
        libm::sqrt(self.x * self.x + self.y * self.y)
    }

    /// Magnitude of the full field vector, in nanotesla.
    pub fn total_intensity(&self) -> f64 {
        libm::sqrt(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}

/// Folds latitude into the working range, keeping clear of the exact poles.
///
/// `min`/`max` ignore a NaN operand, so a NaN latitude resolves to the north
/// pole bound rather than poisoning the fold.
fn fold_latitude(latitude_deg: f64) -> f64 {
    latitude_deg
        .min(LATITUDE_MAX - POLE_PRECISION_DEG)
        .max(-LATITUDE_MAX + POLE_PRECISION_DEG)
}
