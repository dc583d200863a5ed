#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Latitude of the reference antenna (radians)
const fn default_latitude_rad() -> f64 {
    0.88779580846
}

/// Longitude of the reference antenna (radians)
const fn default_longitude_rad() -> f64 {
    0.08226562731
}

/// Height of the reference antenna above the ellipsoid (meters)
const fn default_height_m() -> f64 {
    114.562
}

/// Static receiver antenna, expressed as geodetic coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeodeticPosition {
    /// Latitude (radians)
    #[cfg_attr(
        feature = "serde",
        serde(alias = "lat", default = "default_latitude_rad")
    )]
    pub latitude_rad: f64,

    /// Longitude (radians)
    #[cfg_attr(
        feature = "serde",
        serde(alias = "lon", default = "default_longitude_rad")
    )]
    pub longitude_rad: f64,

    /// Height above the ellipsoid (meters)
    #[cfg_attr(feature = "serde", serde(alias = "height", default = "default_height_m"))]
    pub height_m: f64,
}

impl Default for GeodeticPosition {
    fn default() -> Self {
        Self {
            latitude_rad: default_latitude_rad(),
            longitude_rad: default_longitude_rad(),
            height_m: default_height_m(),
        }
    }
}

impl std::fmt::Display for GeodeticPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "lat={:.6}°, lon={:.6}°, h={:.3}m",
            self.latitude_rad.to_degrees(),
            self.longitude_rad.to_degrees(),
            self.height_m
        )
    }
}

impl GeodeticPosition {
    /// Builds a new [GeodeticPosition] from latitude and longitude in radians
    /// and height in meters.
    pub fn new(latitude_rad: f64, longitude_rad: f64, height_m: f64) -> Self {
        Self {
            latitude_rad,
            longitude_rad,
            height_m,
        }
    }

    /// Builds a new [GeodeticPosition] from latitude and longitude in decimal degrees
    /// and height in meters.
    pub fn from_degrees(latitude_ddeg: f64, longitude_ddeg: f64, height_m: f64) -> Self {
        Self::new(latitude_ddeg.to_radians(), longitude_ddeg.to_radians(), height_m)
    }
}
