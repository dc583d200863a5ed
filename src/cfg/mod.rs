use thiserror::Error;

#[cfg(feature = "serde")]
use serde::Deserialize;

use crate::{constants::sp3_nominal_interval, prelude::Duration};

mod ellipsoid;
mod policy;
mod receiver;

pub use ellipsoid::Ellipsoid;
pub use policy::BoundaryPolicy;
pub use receiver::GeodeticPosition;

/// Configuration Error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("unknown boundary policy")]
    UnknownBoundaryPolicy,
    #[error("sampling interval must be strictly positive")]
    InvalidSamplingInterval,
    #[error("invalid ellipsoid definition")]
    InvalidEllipsoid,
    #[error("receiver coordinates are not finite")]
    InvalidReceiver,
}

fn default_sampling_interval() -> Duration {
    sp3_nominal_interval()
}

/// [Config] gathers every run-wide parameter. It is immutable once built
/// and handed over to the engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct Config {
    /// Static receiver antenna
    #[cfg_attr(feature = "serde", serde(default))]
    pub receiver: GeodeticPosition,

    /// Reference [Ellipsoid] the receiver coordinates are expressed against
    #[cfg_attr(feature = "serde", serde(default))]
    pub ellipsoid: Ellipsoid,

    /// Nominal ephemeris sampling interval. The interpolation stencil
    /// assumes every sample is spaced by exactly this amount.
    #[cfg_attr(feature = "serde", serde(default = "default_sampling_interval"))]
    pub sampling_interval: Duration,

    /// Series boundary handling
    #[cfg_attr(feature = "serde", serde(default))]
    pub boundary: BoundaryPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            receiver: GeodeticPosition::default(),
            ellipsoid: Ellipsoid::default(),
            sampling_interval: default_sampling_interval(),
            boundary: BoundaryPolicy::default(),
        }
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "receiver: {} ", self.receiver)?;
        write!(f, "ellipsoid: {} ", self.ellipsoid)?;
        write!(f, "interval: {} ", self.sampling_interval)?;
        write!(f, "boundary: {}", self.boundary)
    }
}

impl Config {
    /// Copies and returns [Config] with updated receiver position
    pub fn with_receiver(&self, receiver: GeodeticPosition) -> Self {
        let mut s = self.clone();
        s.receiver = receiver;
        s
    }

    /// Copies and returns [Config] with updated [Ellipsoid]
    pub fn with_ellipsoid(&self, ellipsoid: Ellipsoid) -> Self {
        let mut s = self.clone();
        s.ellipsoid = ellipsoid;
        s
    }

    /// Copies and returns [Config] with updated nominal sampling interval
    pub fn with_sampling_interval(&self, interval: Duration) -> Self {
        let mut s = self.clone();
        s.sampling_interval = interval;
        s
    }

    /// Copies and returns [Config] with updated [BoundaryPolicy]
    pub fn with_boundary(&self, boundary: BoundaryPolicy) -> Self {
        let mut s = self.clone();
        s.boundary = boundary;
        s
    }

    /// Verifies this [Config] is physically meaningful.
    pub fn validate(&self) -> Result<(), Error> {
        if self.sampling_interval.to_seconds() <= 0.0 {
            return Err(Error::InvalidSamplingInterval);
        }

        let e2 = self.ellipsoid.eccentricity_squared;
        if !(self.ellipsoid.semi_major_axis_m > 0.0) || !(0.0..1.0).contains(&e2) {
            return Err(Error::InvalidEllipsoid);
        }

        let rx = &self.receiver;
        if !rx.latitude_rad.is_finite() || !rx.longitude_rad.is_finite() || !rx.height_m.is_finite()
        {
            return Err(Error::InvalidReceiver);
        }

        Ok(())
    }
}
