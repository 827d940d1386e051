use crate::error::PsmcPlotError;
use serde::{Deserialize, Serialize};

/// Per-site, per-generation mutation rate.
///
/// This is a newtype wrapper for [`f64`](std::primitive::f64).
///
/// Together with the report's estimated theta and the
/// [`BinSize`](crate::BinSize), it determines the baseline effective
/// size `N0 = theta / (4 * mu) / s`.
///
/// # Examples
///
/// ```
/// let mu = psmcplot::MutationRate::try_from(2.5e-8).unwrap();
/// assert_eq!(mu, 2.5e-8);
/// ```
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "f64")]
#[repr(transparent)]
pub struct MutationRate(f64);

impl MutationRate {
    fn validate<F>(&self, f: F) -> Result<(), PsmcPlotError>
    where
        F: std::ops::FnOnce(String) -> PsmcPlotError,
    {
        if !self.0.is_finite() || self.0 <= 0.0 {
            Err(f(format!("mutation rate must be > 0.0, got: {}", self.0)))
        } else {
            Ok(())
        }
    }
}

impl TryFrom<f64> for MutationRate {
    type Error = PsmcPlotError;
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        let rv = Self(value);
        rv.validate(PsmcPlotError::ValueError)?;
        Ok(rv)
    }
}

impl_newtype_traits!(MutationRate);
