//! Geodetic to geocentric coordinate conversion on the WGS84 ellipsoid.
//!
//! Map latitude is geodetic: the angle between the local ellipsoid normal and
//! the equatorial plane. The harmonic expansion wants geocentric coordinates,
//! measured from Earth's center. The two differ by up to ~0.2 degrees at
//! mid-latitudes, enough to matter for declination.

/// WGS84 semi-major axis (equatorial radius) in kilometers.
pub const EARTH_MAJOR_AXIS_RADIUS_KM: f64 = 6378.137;

/// WGS84 semi-minor axis (polar radius) in kilometers.
pub const EARTH_MINOR_AXIS_RADIUS_KM: f64 = 6356.7523142;

/// Reference radius of the harmonic expansion, in kilometers.
pub const EARTH_REFERENCE_RADIUS_KM: f64 = 6371.2;

/// A position in geocentric coordinates: latitude and longitude in radians,
/// distance from Earth's center in kilometers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeocentricCoordinate {
    pub latitude_rad: f64,
    pub longitude_rad: f64,
    pub radius_km: f64,
}

/// Converts a geodetic position (degrees, altitude in kilometers above the
/// ellipsoid) to geocentric coordinates.
///
/// Non-finite inputs flow through the trigonometry and produce non-finite
/// outputs; no validation happens here.
pub fn geodetic_to_geocentric(
    latitude_deg: f64,
    longitude_deg: f64,
    altitude_km: f64,
) -> GeocentricCoordinate {
    let a2 = EARTH_MAJOR_AXIS_RADIUS_KM * EARTH_MAJOR_AXIS_RADIUS_KM;
    let b2 = EARTH_MINOR_AXIS_RADIUS_KM * EARTH_MINOR_AXIS_RADIUS_KM;

    let latitude_rad = latitude_deg * heading_core::constants::DEG_TO_RAD;
    let (sin_lat, cos_lat) = libm::sincos(latitude_rad);
    let tan_lat = sin_lat / cos_lat;

    // Distance scale of the ellipsoid normal at this latitude.
    let normal = libm::sqrt(a2 * cos_lat * cos_lat + b2 * sin_lat * sin_lat);

    let geocentric_latitude_rad = libm::atan(
        tan_lat * (normal * altitude_km + b2) / (normal * altitude_km + a2),
    );

    let radius_squared = altitude_km * altitude_km
        + 2.0 * altitude_km * normal
        + (a2 * a2 * cos_lat * cos_lat + b2 * b2 * sin_lat * sin_lat)
            / (a2 * cos_lat * cos_lat + b2 * sin_lat * sin_lat);

    GeocentricCoordinate {
        latitude_rad: geocentric_latitude_rad,
        longitude_rad: longitude_deg * heading_core::constants::DEG_TO_RAD,
        radius_km: libm::sqrt(radius_squared),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_equator_is_unchanged() {
        let gc = geodetic_to_geocentric(0.0, 45.0, 0.0);
        assert_abs_diff_eq!(gc.latitude_rad, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(gc.radius_km, EARTH_MAJOR_AXIS_RADIUS_KM, epsilon = 1e-9);
        assert_abs_diff_eq!(
            gc.longitude_rad,
            45.0 * heading_core::constants::DEG_TO_RAD,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_geocentric_latitude_below_geodetic() {
        // At mid-latitudes the geocentric latitude is smaller by up to ~0.2 deg.
        let gc = geodetic_to_geocentric(45.0, 0.0, 0.0);
        let geodetic_rad = 45.0 * heading_core::constants::DEG_TO_RAD;
        assert!(gc.latitude_rad < geodetic_rad);
        let diff_deg = (geodetic_rad - gc.latitude_rad) * heading_core::constants::RAD_TO_DEG;
        assert!(diff_deg > 0.1 && diff_deg < 0.3, "diff: {}", diff_deg);
    }

    #[test]
    fn test_near_pole_radius() {
        let gc = geodetic_to_geocentric(89.99999, 0.0, 0.0);
        assert_abs_diff_eq!(gc.radius_km, EARTH_MINOR_AXIS_RADIUS_KM, epsilon = 1e-3);
    }

    #[test]
    fn test_altitude_grows_radius() {
        let surface = geodetic_to_geocentric(30.0, 10.0, 0.0);
        let aloft = geodetic_to_geocentric(30.0, 10.0, 100.0);
        assert_abs_diff_eq!(aloft.radius_km - surface.radius_km, 100.0, epsilon = 0.05);
    }

    #[test]
    fn test_non_finite_propagates() {
        let gc = geodetic_to_geocentric(45.0, f64::INFINITY, 0.0);
        assert!(gc.longitude_rad.is_infinite());

        let gc = geodetic_to_geocentric(45.0, 0.0, f64::NAN);
        assert!(gc.radius_km.is_nan());
        assert!(gc.latitude_rad.is_nan());
    }
}
