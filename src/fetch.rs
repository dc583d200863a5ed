use std::path::{Path, PathBuf};

use log::debug;

use crate::{error::Error, time::GpsDay};

/// Any ephemeris archive should implement the [EphemerisFetcher] trait.
/// Network access, transfer protocols and decompression of `.Z` archives
/// are left to the implementer: we only expect a local path to a readable
/// daily SP3 file in return.
pub trait EphemerisFetcher {
    /// Provide the local path to the daily ephemeris file for this
    /// GPS `week` and `day` of week (0 = Sunday).
    ///
    /// Any network, permission or format issue should be reported as
    /// [Error::Retrieval]. Retrying is up to the implementer: we never retry.
    fn fetch(&self, week: u32, day: u8) -> Result<PathBuf, Error>;

    /// Provide the local path for this [GpsDay].
    fn fetch_day(&self, day: GpsDay) -> Result<PathBuf, Error> {
        self.fetch(day.week, day.day)
    }
}

/// [LocalArchive] resolves daily products from a local directory, using the
/// combined MGEX product naming: `com{week}{day}.sp3`.
/// When built with the `flate2` feature, `.sp3.gz` files are accepted as well.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalArchive {
    root: PathBuf,
    prefix: String,
}

impl LocalArchive {
    /// Builds a new [LocalArchive] from its root directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            prefix: "com".to_string(),
        }
    }

    /// Copies and returns [LocalArchive] with a different product prefix
    /// (for example "igs" or "gbm").
    pub fn with_prefix(&self, prefix: &str) -> Self {
        let mut s = self.clone();
        s.prefix = prefix.to_string();
        s
    }

    /// Returns the file name of the daily product
    pub fn file_name(&self, week: u32, day: u8) -> String {
        format!("{}{}{}.sp3", self.prefix, week, day)
    }

    fn candidates(&self, week: u32, day: u8) -> Vec<PathBuf> {
        let name = self.file_name(week, day);
        let mut candidates = vec![self.root.join(&name)];
        if cfg!(feature = "flate2") {
            candidates.push(self.root.join(format!("{}.gz", name)));
        }
        candidates
    }
}

impl EphemerisFetcher for LocalArchive {
    fn fetch(&self, week: u32, day: u8) -> Result<PathBuf, Error> {
        let day_of_week = GpsDay::new(week, day)?;

        for path in self.candidates(week, day_of_week.day) {
            if path.is_file() {
                debug!("{} - resolved {}", day_of_week, path.display());
                return Ok(path);
            }
        }

        Err(Error::Retrieval {
            week,
            day,
            reason: format!(
                "{} not found in {}",
                self.file_name(week, day),
                self.root.display()
            ),
        })
    }
}
