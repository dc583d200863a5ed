use hifitime::{Duration, Unit};

/// WGS84 Earth Frame Ellipsoid semi-major axis (meters)
pub const EARTH_SEMI_MAJOR_AXIS_WGS84_M: f64 = 6378137.0_f64;

/// WGS84 Earth Frame Ellipsoid semi-minor axis (meters)
pub const EARTH_SEMI_MINOR_AXIS_WGS84_M: f64 = 6356752.3142_f64;

/// WGS84 first eccentricity squared
pub const EARTH_ECCENTRICITY_SQUARED_WGS84: f64 = 6.69437999014E-3;

/// Number of samples contributing to one interpolation window
pub const STENCIL_SIZE: usize = 9;

/// Samples on either side of the window center
pub const STENCIL_HALF_WIDTH: usize = STENCIL_SIZE / 2;

/// Nominal SP3 sampling interval (15')
pub fn sp3_nominal_interval() -> Duration {
    15.0 * Unit::Minute
}
