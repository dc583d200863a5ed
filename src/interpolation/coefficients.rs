use log::info;
use nalgebra::SMatrix;

use crate::{
    constants::STENCIL_SIZE,
    ephemeris::{EphemerisSample, EphemerisSeries},
    error::Error,
    interpolation::matrix::transform_matrix,
    prelude::{Duration, Vector3},
};

/// [CoefficientSet] of one window: 9 monomial coefficients (rows,
/// ascending powers) per Cartesian axis (columns).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CoefficientSet {
    coefficients: SMatrix<f64, STENCIL_SIZE, 3>,
}

impl CoefficientSet {
    /// Builds the [CoefficientSet] of this window of 9 consecutive samples.
    pub(crate) fn from_window(window: &[EphemerisSample]) -> Self {
        debug_assert_eq!(window.len(), STENCIL_SIZE, "invalid window size");
        let positions =
            SMatrix::<f64, STENCIL_SIZE, 3>::from_fn(|nth, axis| window[nth].position_km[axis]);
        Self {
            coefficients: transform_matrix() * positions,
        }
    }

    /// Returns the 9 coefficients of this axis (0=x, 1=y, 2=z), ascending powers.
    pub fn axis(&self, axis: usize) -> [f64; STENCIL_SIZE] {
        let mut coefs = [0.0_f64; STENCIL_SIZE];
        for (k, c_k) in coefs.iter_mut().enumerate() {
            *c_k = self.coefficients[(k, axis)];
        }
        coefs
    }

    /// Evaluates the polynomials at normalized offset `t`, expressed in sampling
    /// intervals from the window center. Accuracy is only guaranteed within [-4, 4].
    pub fn eval(&self, t: f64) -> Vector3<f64> {
        let mut acc = Vector3::<f64>::zeros();
        for k in (0..STENCIL_SIZE).rev() {
            acc = acc * t + self.coefficients.row(k).transpose();
        }
        acc
    }

    /// Evaluates the polynomials `dt` away from the window center, for this
    /// sampling `interval`. Returns the position (kilometers) and the normalized offset.
    pub fn evaluate(&self, dt: Duration, interval: Duration) -> (Vector3<f64>, f64) {
        let t = dt.to_seconds() / interval.to_seconds();
        (self.eval(t), t)
    }
}

/// [CoefficientArena] stores one [CoefficientSet] per window of the series,
/// addressed by the index of the first sample of the window. Windows slide by
/// one sample: a series of N samples gives N - 8 windows.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientArena {
    windows: Vec<CoefficientSet>,
}

impl CoefficientArena {
    /// Builds the [CoefficientArena] of this [EphemerisSeries].
    pub fn build(series: &EphemerisSeries) -> Result<Self, Error> {
        if series.len() < STENCIL_SIZE {
            return Err(Error::NotEnoughSamples {
                sv: series.sv(),
                samples: series.len(),
            });
        }

        let windows = series
            .samples()
            .windows(STENCIL_SIZE)
            .map(CoefficientSet::from_window)
            .collect::<Vec<_>>();

        info!("{} - {} interpolation windows", series.sv(), windows.len());

        Ok(Self { windows })
    }

    /// Number of windows
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// [CoefficientSet] of the window starting at sample `start`
    pub fn get(&self, start: usize) -> Option<&CoefficientSet> {
        self.windows.get(start)
    }
}
