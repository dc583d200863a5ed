//! Precise (SP3) ephemeris loading
mod parsing;
mod series;

pub use parsing::{DailyEphemeris, PositionRecord};
pub use series::{EphemerisSample, EphemerisSeries};
