//! Geometric range and pseudo range residuals
use itertools::{EitherOrBoth, Itertools};

use crate::{
    interpolation::InterpolatedPosition,
    position::Position,
    prelude::{Epoch, Vector3},
};

/// Geometric range (meters) between a satellite position expressed in kilometers
/// and a receiver position expressed in meters, in the same ECEF frame.
/// NaN coordinates propagate to the result.
pub fn geometric_range_m(sv_position_km: &Vector3<f64>, rx_ecef_m: &Vector3<f64>) -> f64 {
    (sv_position_km * 1.0E3 - rx_ecef_m).norm()
}

/// Geometric range at one [Epoch]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RangeSample {
    /// Query [Epoch]
    pub epoch: Epoch,
    /// Geometric range (meters), may be NaN when the interpolation was invalid
    pub range_m: f64,
    /// Satellite position was extrapolated
    pub extrapolated: bool,
}

impl RangeSample {
    /// Returns true when this range may be compared to a pseudo range.
    pub fn is_valid(&self) -> bool {
        self.range_m.is_finite() && !self.extrapolated
    }
}

/// Computes one [RangeSample] per [InterpolatedPosition] towards the static
/// receiver [Position], preserving input order.
pub fn ranges(positions: &[InterpolatedPosition], receiver: &Position) -> Vec<RangeSample> {
    let rx_ecef_m = receiver.ecef();
    positions
        .iter()
        .map(|pos| RangeSample {
            epoch: pos.epoch,
            range_m: geometric_range_m(&pos.position_km, &rx_ecef_m),
            extrapolated: pos.extrapolated,
        })
        .collect()
}

/// Pairs geometric ranges with pseudo range measurements (both in chronological
/// order) by [Epoch] and returns pseudo range - geometric range, in meters.
/// Epochs present on a single side are dropped. The residual is None when
/// either quantity is not a finite number.
pub fn residuals(ranges: &[RangeSample], pseudo_ranges: &[(Epoch, f64)]) -> Vec<(Epoch, Option<f64>)> {
    ranges
        .iter()
        .merge_join_by(pseudo_ranges.iter(), |rng, (t, _)| rng.epoch.cmp(t))
        .filter_map(|pair| match pair {
            EitherOrBoth::Both(rng, (t, pr)) => {
                let residual = pr - rng.range_m;
                Some((*t, if residual.is_finite() { Some(residual) } else { None }))
            },
            _ => None,
        })
        .collect()
}
