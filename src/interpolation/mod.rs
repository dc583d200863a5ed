//! Fixed stencil (9 samples) polynomial interpolation of ephemeris series
use log::{debug, warn};

mod coefficients;
mod locator;
mod matrix;

pub use coefficients::{CoefficientArena, CoefficientSet};
pub use locator::nearest_sample;
pub use matrix::{transform_matrix, TransformMatrix};

use crate::{
    cfg::BoundaryPolicy,
    constants::STENCIL_HALF_WIDTH,
    ephemeris::EphemerisSeries,
    error::Error,
    prelude::{Duration, Epoch, Vector3, SV},
};

/// Maximal normalized offset covered by the stencil
const MAX_STENCIL_OFFSET: f64 = STENCIL_HALF_WIDTH as f64;

/// Interpolated satellite position
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct InterpolatedPosition {
    /// Query [Epoch]
    pub epoch: Epoch,
    /// ECEF position (kilometers)
    pub position_km: Vector3<f64>,
    /// Offset to the window center, in sampling intervals
    pub offset: f64,
    /// True when `offset` lies outside the stencil: accuracy is not guaranteed
    pub extrapolated: bool,
}

/// [Interpolator] gathers the read only state of one satellite:
/// its [EphemerisSeries] and the [CoefficientArena] built from it.
/// It may be shared between threads to evaluate many epochs concurrently.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolator {
    series: EphemerisSeries,
    arena: CoefficientArena,
    interval: Duration,
    boundary: BoundaryPolicy,
}

impl Interpolator {
    /// Builds a new [Interpolator] from an [EphemerisSeries] sampled at
    /// the nominal `interval`.
    pub fn new(
        series: EphemerisSeries,
        interval: Duration,
        boundary: BoundaryPolicy,
    ) -> Result<Self, Error> {
        series.validate_sampling(interval)?;
        let arena = CoefficientArena::build(&series)?;
        Ok(Self {
            series,
            arena,
            interval,
            boundary,
        })
    }

    /// Satellite
    pub fn sv(&self) -> SV {
        self.series.sv()
    }

    /// [EphemerisSeries] this [Interpolator] was built from
    pub fn series(&self) -> &EphemerisSeries {
        &self.series
    }

    /// [CoefficientArena] of this satellite
    pub fn arena(&self) -> &CoefficientArena {
        &self.arena
    }

    /// Returns the index of the sample the evaluation window is centered on.
    /// The window covers samples `center - 4 ..= center + 4`.
    pub fn window_center(&self, t: Epoch) -> Result<usize, Error> {
        let nearest = nearest_sample(self.series.samples(), t);

        let first = STENCIL_HALF_WIDTH;
        let last = self.series.len() - 1 - STENCIL_HALF_WIDTH;

        if (first..=last).contains(&nearest) {
            return Ok(nearest);
        }

        match self.boundary {
            BoundaryPolicy::Reject => Err(Error::OutOfInterpolationRange(t)),
            BoundaryPolicy::Clamp => Ok(nearest.clamp(first, last)),
        }
    }

    /// Interpolates the satellite position at `t`.
    pub fn interpolate(&self, t: Epoch) -> Result<InterpolatedPosition, Error> {
        let center = self.window_center(t)?;
        let start = center - STENCIL_HALF_WIDTH;

        let coefs = self
            .arena
            .get(start)
            .ok_or(Error::OutOfInterpolationRange(t))?;

        let t_ref = self.series.samples()[center].epoch;
        let (position_km, offset) = coefs.evaluate(t - t_ref, self.interval);

        let extrapolated = offset.abs() > MAX_STENCIL_OFFSET;
        if extrapolated {
            warn!(
                "{} ({}) - extrapolating {:.3} intervals away from {}",
                t,
                self.sv(),
                offset,
                t_ref
            );
        } else {
            debug!(
                "{} ({}) - x_km={} y_km={} z_km={} t={:.3}",
                t,
                self.sv(),
                position_km[0],
                position_km[1],
                position_km[2],
                offset
            );
        }

        Ok(InterpolatedPosition {
            epoch: t,
            position_km,
            offset,
            extrapolated,
        })
    }
}
