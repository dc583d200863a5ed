use crate::{ephemeris::EphemerisSample, prelude::Epoch};

/// Returns the index of the sample closest in time to `t`.
/// When two samples are equally close, the earlier one is selected.
/// Samples must be in chronological order and cannot be empty.
pub fn nearest_sample(samples: &[EphemerisSample], t: Epoch) -> usize {
    // first sample at or after t
    let after = samples.partition_point(|s| s.epoch < t);

    if after == 0 {
        return 0;
    }

    if after == samples.len() {
        return samples.len() - 1;
    }

    let before = after - 1;

    let dt_before = t - samples[before].epoch;
    let dt_after = samples[after].epoch - t;

    if dt_after < dt_before {
        after
    } else {
        before
    }
}
