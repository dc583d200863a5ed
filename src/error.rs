use thiserror::Error;

use crate::{
    cfg::Error as ConfigError,
    prelude::{Duration, Epoch, SV},
};

/// Errors raised while parsing SP3 content.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParsingError {
    #[error("invalid epoch year \"{0}\"")]
    EpochYear(String),

    #[error("invalid epoch month \"{0}\"")]
    EpochMonth(String),

    #[error("invalid epoch day \"{0}\"")]
    EpochDay(String),

    #[error("invalid epoch hours \"{0}\"")]
    EpochHours(String),

    #[error("invalid epoch minutes \"{0}\"")]
    EpochMinutes(String),

    #[error("invalid epoch seconds \"{0}\"")]
    EpochSeconds(String),

    /// Epoch header does not describe a valid calendar date
    #[error("failed to build epoch from \"{0}\"")]
    Epoch(String),

    #[error("invalid satellite identifier \"{0}\"")]
    SV(String),

    #[error("invalid coordinate \"{0}\"")]
    Coordinate(String),

    /// Position record found before any epoch header
    #[error("position record prior any epoch: \"{0}\"")]
    OrphanPosition(String),
}

#[derive(Debug, Error)]
pub enum Error {
    /// Epoch headers and position records of one satellite do not line up:
    /// the input is either truncated or malformed.
    #[error("{sv}: data alignment error ({epochs} epochs, {positions} positions)")]
    DataAlignment {
        sv: SV,
        epochs: usize,
        positions: usize,
    },

    /// Requested satellite has no position record in any of the daily files.
    #[error("{0}: satellite not found")]
    SatelliteNotFound(SV),

    /// The retrieval collaborator could not provide the requested daily file.
    #[error("failed to retrieve week {week} day {day}: {reason}")]
    Retrieval { week: u32, day: u8, reason: String },

    #[error("parsing error: {0}")]
    Parsing(#[from] ParsingError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The interpolation stencil requires at least 9 samples.
    #[error("{sv}: not enough samples ({samples}) to form a single window")]
    NotEnoughSamples { sv: SV, samples: usize },

    /// Epochs must be strictly increasing once days are concatenated.
    #[error("non monotonic epoch {0}")]
    NonMonotonicEpochs(Epoch),

    /// The transform matrix assumes evenly spaced samples at the nominal interval.
    #[error("sampling mismatch at {epoch}: expected {expected}, got {found}")]
    SamplingMismatch {
        epoch: Epoch,
        expected: Duration,
        found: Duration,
    },

    /// Nearest sample lies within the first or last 4 samples of the series.
    #[error("{0} is out of interpolation range")]
    OutOfInterpolationRange(Epoch),

    /// GPS day of week is counted from 0 (Sunday) to 6 (Saturday).
    #[error("invalid day of week {0}")]
    InvalidDayOfWeek(u8),

    #[error("empty ephemeris series")]
    EmptySeries,

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
