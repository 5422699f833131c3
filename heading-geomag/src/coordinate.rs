//! Geodetic position input for the field model.

/// A geodetic position: latitude and longitude in degrees, altitude in meters
/// above the WGS84 ellipsoid.
///
/// The domain is deliberately unbounded. Callers may pass out-of-range or
/// non-finite values; the model folds latitude into its working range and
/// lets everything else propagate through the math (see
/// [`GeomagneticField`](crate::GeomagneticField)).
///
/// With the `serde` feature enabled, deserialization rejects unknown field
/// names, so a misspelled `"lattitude"` key fails loudly instead of silently
/// defaulting.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct GeoCoordinate {
    /// Geodetic latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
    /// Altitude in meters above the ellipsoid.
    #[cfg_attr(feature = "serde", serde(default))]
    pub altitude: f64,
}

impl GeoCoordinate {
    /// Creates a coordinate from latitude and longitude in degrees and
    /// altitude in meters.
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }

    /// Creates a coordinate at the ellipsoid surface.
    pub fn at_sea_level(latitude: f64, longitude: f64) -> Self {
        Self::new(latitude, longitude, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction() {
        let c = GeoCoordinate::new(80.0, 0.0, 100_000.0);
        assert_eq!(c.latitude, 80.0);
        assert_eq!(c.longitude, 0.0);
        assert_eq!(c.altitude, 100_000.0);

        let surface = GeoCoordinate::at_sea_level(-80.0, 240.0);
        assert_eq!(surface.altitude, 0.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize() {
        let c: GeoCoordinate =
            serde_json::from_str(r#"{"latitude": 80.0, "longitude": 0.0, "altitude": 0.0}"#)
                .unwrap();
        assert_eq!(c, GeoCoordinate::new(80.0, 0.0, 0.0));

        // Altitude defaults to the surface.
        let c: GeoCoordinate =
            serde_json::from_str(r#"{"latitude": 0.0, "longitude": 120.0}"#).unwrap();
        assert_eq!(c.altitude, 0.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<GeoCoordinate, _> =
            serde_json::from_str(r#"{"latitude": 80.0, "longitude": 0.0, "lattitude": 1.0}"#);
        assert!(result.is_err());
    }
}
