#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

extern crate gnss_rs as gnss;

// private modules
mod cfg;
mod constants;
mod engine;
mod ephemeris;
mod error;
mod fetch;
mod interpolation;
mod position;
mod range;
mod time;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::cfg::{BoundaryPolicy, Config, Ellipsoid, GeodeticPosition};
    pub use crate::constants::{sp3_nominal_interval, STENCIL_HALF_WIDTH, STENCIL_SIZE};
    pub use crate::engine::Engine;
    pub use crate::ephemeris::{DailyEphemeris, EphemerisSample, EphemerisSeries, PositionRecord};
    pub use crate::error::{Error, ParsingError};
    pub use crate::fetch::{EphemerisFetcher, LocalArchive};
    pub use crate::interpolation::{
        nearest_sample, transform_matrix, CoefficientArena, CoefficientSet, InterpolatedPosition,
        Interpolator, TransformMatrix,
    };
    pub use crate::position::{ecef_to_geodetic, geodetic_to_ecef, Position};
    pub use crate::range::{geometric_range_m, ranges, residuals, RangeSample};
    pub use crate::time::{DayTriplet, GpsDay};
    // re-export
    pub use gnss::prelude::{Constellation, SV};
    pub use hifitime::{Duration, Epoch, TimeScale};
    pub use nalgebra::Vector3;
}

// pub export
pub use error::Error;
