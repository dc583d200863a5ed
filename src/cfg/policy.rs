use crate::cfg::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [BoundaryPolicy] decides what happens to query epochs whose nearest
/// ephemeris sample lies within the first or last 4 samples of the series,
/// where no centered 9 samples window exists.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BoundaryPolicy {
    /// [BoundaryPolicy::Reject] refuses to evaluate and reports the epoch
    /// as out of interpolation range. This is our default mode.
    #[cfg_attr(feature = "serde", serde(alias = "reject", alias = "Reject"))]
    #[default]
    Reject,

    /// [BoundaryPolicy::Clamp] evaluates the closest fully interior window.
    /// The normalized offset may then exceed the stencil, in which case
    /// the result is flagged as extrapolated.
    #[cfg_attr(feature = "serde", serde(alias = "clamp", alias = "Clamp"))]
    Clamp,
}

impl std::str::FromStr for BoundaryPolicy {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "clamp" => Ok(Self::Clamp),
            _ => Err(Error::UnknownBoundaryPolicy),
        }
    }
}

impl std::fmt::Display for BoundaryPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reject => write!(f, "reject"),
            Self::Clamp => write!(f, "clamp"),
        }
    }
}
