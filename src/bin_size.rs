use crate::error::PsmcPlotError;
use serde::{Deserialize, Serialize};

/// The number of consecutive sites PSMC collapsed into one bin
/// (the `-s` option of the upstream tool, usually 100).
///
/// This is a newtype wrapper for [`f64`](std::primitive::f64).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "f64")]
#[repr(transparent)]
pub struct BinSize(f64);

impl BinSize {
    fn validate<F>(&self, f: F) -> Result<(), PsmcPlotError>
    where
        F: std::ops::FnOnce(String) -> PsmcPlotError,
    {
        if !self.0.is_finite() || self.0 <= 0.0 {
            Err(f(format!("bin size must be > 0.0, got: {}", self.0)))
        } else {
            Ok(())
        }
    }
}

impl TryFrom<f64> for BinSize {
    type Error = PsmcPlotError;
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        let rv = Self(value);
        rv.validate(PsmcPlotError::ValueError)?;
        Ok(rv)
    }
}

impl_newtype_traits!(BinSize);
