//! Ephemeris interpolation and geometric range engine
use std::{collections::HashMap, path::Path, sync::OnceLock};

use log::{error, info};

use crate::{
    cfg::Config,
    ephemeris::{DailyEphemeris, EphemerisSeries},
    error::Error,
    fetch::EphemerisFetcher,
    interpolation::{InterpolatedPosition, Interpolator},
    position::Position,
    prelude::{Epoch, SV},
    range::{ranges, RangeSample},
    time::{DayTriplet, GpsDay},
};

/// [Engine] computes geometric ranges from a static receiver to satellites
/// described by consecutive daily ephemeris files.
/// Daily files are parsed once, each satellite [Interpolator] is built
/// on first request and reused for every following query. Queries only
/// require a shared reference: one [Engine] may serve several threads.
pub struct Engine {
    /// Engine parametrization
    cfg: Config,
    /// Static receiver [Position]
    receiver: Position,
    /// Daily files, in chronological order
    days: Vec<DailyEphemeris>,
    /// Per satellite state, built once
    interpolators: HashMap<SV, OnceLock<Interpolator>>,
}

impl Engine {
    /// Creates a new [Engine] from daily ephemeris, that must be
    /// provided in chronological order.
    pub fn new(cfg: &Config, days: Vec<DailyEphemeris>) -> Result<Self, Error> {
        cfg.validate()?;

        let receiver = Position::from_geo(cfg.receiver, &cfg.ellipsoid);
        let rx_ecef = receiver.ecef();

        info!("{}", cfg);
        info!(
            "receiver ecef: x={:.3}m y={:.3}m z={:.3}m",
            rx_ecef[0], rx_ecef[1], rx_ecef[2]
        );

        let interpolators = days
            .iter()
            .flat_map(|day| day.satellites())
            .map(|sv| (sv, OnceLock::new()))
            .collect();

        Ok(Self {
            cfg: cfg.clone(),
            receiver,
            days,
            interpolators,
        })
    }

    /// Creates a new [Engine] from local daily files, in chronological order.
    pub fn from_files<P: AsRef<Path>>(cfg: &Config, paths: &[P]) -> Result<Self, Error> {
        let days = paths
            .iter()
            .map(|path| DailyEphemeris::from_file(path))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(cfg, days)
    }

    /// Creates a new [Engine] covering this [GpsDay] and both surrounding days,
    /// retrieved through the [EphemerisFetcher].
    pub fn from_fetcher<F: EphemerisFetcher>(
        cfg: &Config,
        fetcher: &F,
        day: GpsDay,
    ) -> Result<Self, Error> {
        let triplet = DayTriplet::new(day);
        let paths = triplet
            .days()
            .map(|day| fetcher.fetch_day(day))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_files(cfg, &paths)
    }

    /// [Config] in use
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Static receiver [Position]
    pub fn receiver(&self) -> &Position {
        &self.receiver
    }

    /// Satellites described by at least one of the daily files
    pub fn satellites(&self) -> Vec<SV> {
        let mut svs = self.interpolators.keys().copied().collect::<Vec<_>>();
        svs.sort();
        svs
    }

    /// Returns the [Interpolator] of this satellite, building it on first request.
    /// Failures are not retained: a failing satellite fails every request.
    pub fn interpolator(&self, sv: SV) -> Result<&Interpolator, Error> {
        let cell = self
            .interpolators
            .get(&sv)
            .ok_or(Error::SatelliteNotFound(sv))?;

        if let Some(interpolator) = cell.get() {
            return Ok(interpolator);
        }

        let series = EphemerisSeries::from_days(sv, &self.days)?;
        let interpolator =
            Interpolator::new(series, self.cfg.sampling_interval, self.cfg.boundary)?;

        // concurrent builds are identical, first one wins
        Ok(cell.get_or_init(|| interpolator))
    }

    /// Builds the [Interpolator] of every satellite ahead of time.
    /// Returns the satellites that could not be prepared.
    pub fn prepare(&self) -> Vec<(SV, Error)> {
        self.satellites()
            .into_iter()
            .filter_map(|sv| match self.interpolator(sv) {
                Ok(_) => None,
                Err(e) => {
                    error!("{} - preparation failed: {}", sv, e);
                    Some((sv, e))
                },
            })
            .collect()
    }

    /// Interpolates positions of this satellite, for each query [Epoch].
    pub fn positions(&self, sv: SV, epochs: &[Epoch]) -> Result<Vec<InterpolatedPosition>, Error> {
        let interpolator = self.interpolator(sv)?;
        epochs
            .iter()
            .map(|t| interpolator.interpolate(*t))
            .collect()
    }

    /// Computes the geometric range to this satellite, for each query [Epoch].
    /// Output preserves the input order.
    pub fn ranges(&self, sv: SV, epochs: &[Epoch]) -> Result<Vec<RangeSample>, Error> {
        let positions = self.positions(sv, epochs)?;
        Ok(ranges(&positions, &self.receiver))
    }

    /// Processes several requests independently: a failing request does not
    /// prevent processing the others. One result per request, in request order,
    /// even when a satellite is requested more than once.
    pub fn batch(&self, requests: &[(SV, Vec<Epoch>)]) -> Vec<(SV, Result<Vec<RangeSample>, Error>)> {
        requests
            .iter()
            .map(|(sv, epochs)| {
                let result = self.ranges(*sv, epochs);
                if let Err(e) = &result {
                    error!("{} - aborted: {}", sv, e);
                }
                (*sv, result)
            })
            .collect()
    }
}
