use itertools::Itertools;
use log::{debug, info};

use crate::{
    ephemeris::{DailyEphemeris, PositionRecord},
    error::Error,
    prelude::{Duration, Epoch, Vector3, SV},
};

/// One [EphemerisSample]: satellite position at a given [Epoch].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EphemerisSample {
    /// Sampling [Epoch]
    pub epoch: Epoch,
    /// ECEF position (kilometers)
    pub position_km: Vector3<f64>,
}

impl EphemerisSample {
    pub fn new(epoch: Epoch, position_km: Vector3<f64>) -> Self {
        Self { epoch, position_km }
    }
}

/// [EphemerisSeries] is the continuous, time ordered, position time series
/// of one satellite. It is built once and is read only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct EphemerisSeries {
    sv: SV,
    samples: Vec<EphemerisSample>,
}

impl EphemerisSeries {
    /// Builds [EphemerisSeries] of this satellite from consecutive daily files,
    /// provided in chronological order.
    /// Daily products overlap by one sample at midnight: the leading record of a
    /// day is dropped when it duplicates the last record of the previous day.
    pub fn from_days(sv: SV, days: &[DailyEphemeris]) -> Result<Self, Error> {
        let mut epochs = Vec::<Epoch>::new();
        let mut records = Vec::<&PositionRecord>::new();

        for day in days.iter() {
            let boundary = epochs.last().copied();

            for (nth, epoch) in day.epochs.iter().enumerate() {
                if nth == 0 && Some(*epoch) == boundary {
                    debug!("{} - dropped duplicate epoch", epoch);
                    continue;
                }
                epochs.push(*epoch);
            }

            for (nth, rec) in day.sv_records(sv).enumerate() {
                if nth == 0 && Some(rec.epoch) == boundary {
                    debug!("{} ({}) - dropped duplicate position", rec.epoch, sv);
                    continue;
                }
                records.push(rec);
            }
        }

        if records.is_empty() {
            return Err(Error::SatelliteNotFound(sv));
        }

        if epochs.len() != records.len() {
            return Err(Error::DataAlignment {
                sv,
                epochs: epochs.len(),
                positions: records.len(),
            });
        }

        // each position must be published under its own epoch
        if epochs
            .iter()
            .zip(records.iter())
            .any(|(epoch, rec)| *epoch != rec.epoch)
        {
            return Err(Error::DataAlignment {
                sv,
                epochs: epochs.len(),
                positions: records.len(),
            });
        }

        let samples = records
            .iter()
            .map(|rec| EphemerisSample::new(rec.epoch, rec.position_km))
            .collect::<Vec<_>>();

        let s = Self::from_samples(sv, samples)?;

        info!(
            "{} - {} samples from {} daily files ({} to {})",
            sv,
            s.len(),
            days.len(),
            s.samples[0].epoch,
            s.samples[s.len() - 1].epoch,
        );

        Ok(s)
    }

    /// Builds [EphemerisSeries] from [EphemerisSample]s that must be expressed
    /// in strictly increasing chronological order.
    pub fn from_samples(sv: SV, samples: Vec<EphemerisSample>) -> Result<Self, Error> {
        if samples.is_empty() {
            return Err(Error::EmptySeries);
        }

        if let Some((_, later)) = samples
            .iter()
            .tuple_windows()
            .find(|(prev, next)| next.epoch <= prev.epoch)
        {
            return Err(Error::NonMonotonicEpochs(later.epoch));
        }

        Ok(Self { sv, samples })
    }

    /// Verifies every sample is spaced by exactly the nominal `interval`,
    /// which is what the interpolation stencil assumes.
    pub fn validate_sampling(&self, interval: Duration) -> Result<(), Error> {
        for (prev, next) in self.samples.iter().tuple_windows() {
            let dt = next.epoch - prev.epoch;
            if dt != interval {
                return Err(Error::SamplingMismatch {
                    epoch: next.epoch,
                    expected: interval,
                    found: dt,
                });
            }
        }
        Ok(())
    }

    /// Satellite described by this series
    pub fn sv(&self) -> SV {
        self.sv
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false: an [EphemerisSeries] holds at least one sample.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns all [EphemerisSample]s
    pub fn samples(&self) -> &[EphemerisSample] {
        &self.samples
    }

    /// Returns nth [EphemerisSample]
    pub fn get(&self, nth: usize) -> Option<&EphemerisSample> {
        self.samples.get(nth)
    }

    /// Iterates sampling [Epoch]s
    pub fn epochs(&self) -> impl Iterator<Item = Epoch> + '_ {
        self.samples.iter().map(|s| s.epoch)
    }

    /// First and last sampling [Epoch]
    pub fn time_span(&self) -> (Epoch, Epoch) {
        (self.samples[0].epoch, self.samples[self.len() - 1].epoch)
    }
}
