use crate::constants::{
    EARTH_ECCENTRICITY_SQUARED_WGS84, EARTH_SEMI_MAJOR_AXIS_WGS84_M, EARTH_SEMI_MINOR_AXIS_WGS84_M,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reference [Ellipsoid] used to express geodetic coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ellipsoid {
    /// Semi-major axis (meters)
    #[cfg_attr(feature = "serde", serde(alias = "a"))]
    pub semi_major_axis_m: f64,

    /// Semi-minor axis (meters)
    #[cfg_attr(feature = "serde", serde(alias = "b"))]
    pub semi_minor_axis_m: f64,

    /// First eccentricity squared
    #[cfg_attr(feature = "serde", serde(alias = "e2"))]
    pub eccentricity_squared: f64,
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}

impl std::fmt::Display for Ellipsoid {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "a={}m, b={}m, e²={:e}",
            self.semi_major_axis_m, self.semi_minor_axis_m, self.eccentricity_squared
        )
    }
}

impl Ellipsoid {
    /// World Geodetic System 1984
    pub const WGS84: Self = Self {
        semi_major_axis_m: EARTH_SEMI_MAJOR_AXIS_WGS84_M,
        semi_minor_axis_m: EARTH_SEMI_MINOR_AXIS_WGS84_M,
        eccentricity_squared: EARTH_ECCENTRICITY_SQUARED_WGS84,
    };

    /// Builds an [Ellipsoid] from both axes (meters), deriving
    /// the eccentricity.
    pub fn from_axes(semi_major_axis_m: f64, semi_minor_axis_m: f64) -> Self {
        let ratio = semi_minor_axis_m / semi_major_axis_m;
        Self {
            semi_major_axis_m,
            semi_minor_axis_m,
            eccentricity_squared: 1.0 - ratio * ratio,
        }
    }

    /// Second eccentricity squared
    pub fn second_eccentricity_squared(&self) -> f64 {
        self.eccentricity_squared / (1.0 - self.eccentricity_squared)
    }

    /// Prime vertical radius of curvature (meters) at given latitude (radians)
    pub fn prime_vertical_radius(&self, latitude_rad: f64) -> f64 {
        let sin_lat = latitude_rad.sin();
        self.semi_major_axis_m / (1.0 - self.eccentricity_squared * sin_lat * sin_lat).sqrt()
    }
}

#[cfg(test)]
mod test {
    use super::Ellipsoid;

    #[test]
    fn wgs84_from_axes() {
        let wgs84 = Ellipsoid::from_axes(6378137.0, 6356752.3142);
        assert!((wgs84.eccentricity_squared - Ellipsoid::WGS84.eccentricity_squared).abs() < 1.0E-10);
        assert!((wgs84.second_eccentricity_squared() - 6.73949674228E-3).abs() < 1.0E-10);
    }

    #[test]
    fn prime_vertical_radius() {
        let wgs84 = Ellipsoid::WGS84;
        assert_eq!(wgs84.prime_vertical_radius(0.0), wgs84.semi_major_axis_m);
        // polar radius of curvature a²/b
        let polar = wgs84.prime_vertical_radius(std::f64::consts::FRAC_PI_2);
        let expected = wgs84.semi_major_axis_m.powi(2) / wgs84.semi_minor_axis_m;
        assert!((polar - expected).abs() < 1.0E-2);
    }
}
