//! Geodetic / ECEF conversions
use crate::{
    cfg::{Ellipsoid, GeodeticPosition},
    prelude::Vector3,
};

/// Converts [GeodeticPosition] to ECEF coordinates (meters), using the
/// closed form ellipsoidal transform:
/// - X = (N + h) cos φ cos λ
/// - Y = (N + h) cos φ sin λ
/// - Z = (N (1 - e²) + h) sin φ
///
/// where N is the prime vertical radius of curvature.
pub fn geodetic_to_ecef(geodetic: &GeodeticPosition, ellipsoid: &Ellipsoid) -> Vector3<f64> {
    let (sin_lat, cos_lat) = geodetic.latitude_rad.sin_cos();
    let (sin_lon, cos_lon) = geodetic.longitude_rad.sin_cos();

    let n = ellipsoid.prime_vertical_radius(geodetic.latitude_rad);
    let h = geodetic.height_m;

    Vector3::new(
        (n + h) * cos_lat * cos_lon,
        (n + h) * cos_lat * sin_lon,
        (n * (1.0 - ellipsoid.eccentricity_squared) + h) * sin_lat,
    )
}

/// Converts ECEF coordinates (meters) to [GeodeticPosition], iterating on
/// latitude until it converges below 1E-14 rad.
pub fn ecef_to_geodetic(ecef: &Vector3<f64>, ellipsoid: &Ellipsoid) -> GeodeticPosition {
    const MAX_ITERATIONS: usize = 16;

    let (x, y, z) = (ecef[0], ecef[1], ecef[2]);
    let e2 = ellipsoid.eccentricity_squared;

    let p = (x * x + y * y).sqrt();
    let longitude_rad = y.atan2(x);

    if p < 1.0E-9 {
        // polar axis
        let latitude_rad = std::f64::consts::FRAC_PI_2.copysign(z);
        let height_m = z.abs() - ellipsoid.semi_minor_axis_m;
        return GeodeticPosition::new(latitude_rad, longitude_rad, height_m);
    }

    let mut latitude_rad = z.atan2(p * (1.0 - e2));
    let mut height_m = 0.0;

    for _ in 0..MAX_ITERATIONS {
        let n = ellipsoid.prime_vertical_radius(latitude_rad);
        height_m = p / latitude_rad.cos() - n;

        let next = z.atan2(p * (1.0 - e2 * n / (n + height_m)));
        let converged = (next - latitude_rad).abs() < 1.0E-14;
        latitude_rad = next;

        if converged {
            break;
        }
    }

    GeodeticPosition::new(latitude_rad, longitude_rad, height_m)
}

/// [Position] of a static antenna, known in both coordinate systems.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Position {
    /// ECEF coordinates in meters
    ecef: Vector3<f64>,
    /// Geodetic coordinates
    geodetic: GeodeticPosition,
}

impl Position {
    /// Builds new [Position] from ECEF coordinates expressed in meters.
    pub fn from_ecef(ecef: Vector3<f64>, ellipsoid: &Ellipsoid) -> Self {
        Self {
            ecef,
            geodetic: ecef_to_geodetic(&ecef, ellipsoid),
        }
    }

    /// Builds new [Position] from [GeodeticPosition]
    pub fn from_geo(geodetic: GeodeticPosition, ellipsoid: &Ellipsoid) -> Self {
        Self {
            geodetic,
            ecef: geodetic_to_ecef(&geodetic, ellipsoid),
        }
    }

    /// Returns ECEF coordinates (meters)
    pub fn ecef(&self) -> Vector3<f64> {
        self.ecef
    }

    /// Returns [GeodeticPosition]
    pub fn geodetic(&self) -> GeodeticPosition {
        self.geodetic
    }
}
