//! GPS calendar helpers used to select the daily ephemeris files
use crate::{
    error::Error,
    prelude::{Epoch, TimeScale},
};

const NANOSECONDS_PER_DAY: u64 = 86_400 * 1_000_000_000;

/// Days in one GPS week
pub const DAYS_PER_WEEK: u8 = 7;

/// [GpsDay] identifies one daily ephemeris product by its GPS week counter
/// and its day of week (0 = Sunday .. 6 = Saturday).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GpsDay {
    /// GPS week counter
    pub week: u32,
    /// Day of week, 0 is Sunday
    pub day: u8,
}

impl std::fmt::Display for GpsDay {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.week, self.day)
    }
}

impl GpsDay {
    /// Builds a new [GpsDay], day of week must lie within 0..=6.
    pub fn new(week: u32, day: u8) -> Result<Self, Error> {
        if day >= DAYS_PER_WEEK {
            return Err(Error::InvalidDayOfWeek(day));
        }
        Ok(Self { week, day })
    }

    /// Returns the [GpsDay] this [Epoch] belongs to, in GPST.
    pub fn from_epoch(t: Epoch) -> Self {
        let (week, nanos) = t.to_time_scale(TimeScale::GPST).to_time_of_week();
        Self {
            week,
            day: (nanos / NANOSECONDS_PER_DAY) as u8,
        }
    }

    /// Returns the day prior to this one, crossing the week boundary
    /// if need be. There is no day prior to week 0 day 0.
    pub fn previous(&self) -> Option<Self> {
        if self.day == 0 {
            let week = self.week.checked_sub(1)?;
            Some(Self {
                week,
                day: DAYS_PER_WEEK - 1,
            })
        } else {
            Some(Self {
                week: self.week,
                day: self.day - 1,
            })
        }
    }

    /// Returns the day following this one, crossing the week boundary
    /// if need be.
    pub fn next(&self) -> Self {
        if self.day == DAYS_PER_WEEK - 1 {
            Self {
                week: self.week + 1,
                day: 0,
            }
        } else {
            Self {
                week: self.week,
                day: self.day + 1,
            }
        }
    }

    /// Returns midnight of this day, in GPST.
    pub fn start(&self) -> Epoch {
        Epoch::from_time_of_week(
            self.week,
            self.day as u64 * NANOSECONDS_PER_DAY,
            TimeScale::GPST,
        )
    }
}

/// [DayTriplet] gathers the daily products surrounding the day of interest,
/// so interpolation windows never run short across midnight.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DayTriplet {
    /// Day prior, when it exists
    pub previous: Option<GpsDay>,
    /// Day of interest
    pub current: GpsDay,
    /// Day after
    pub next: GpsDay,
}

impl DayTriplet {
    /// Builds the [DayTriplet] surrounding `current`.
    pub fn new(current: GpsDay) -> Self {
        Self {
            previous: current.previous(),
            current,
            next: current.next(),
        }
    }

    /// Iterates the days in chronological order.
    pub fn days(&self) -> impl Iterator<Item = GpsDay> + '_ {
        self.previous
            .into_iter()
            .chain([self.current, self.next])
    }
}
