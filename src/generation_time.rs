use crate::error::PsmcPlotError;
use serde::{Deserialize, Serialize};

/// Generation time in years.
///
/// This is a newtype wrapper for [`f64`](std::primitive::f64).
///
/// Used to convert the report's scaled coalescent times into years
/// when plotting with [`Scaling::EffectiveSize`](crate::Scaling).
///
/// # Examples
///
/// ```
/// let g = psmcplot::GenerationTime::try_from(25.0).unwrap();
/// assert_eq!(g, 25.0);
/// ```
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "f64")]
#[repr(transparent)]
pub struct GenerationTime(f64);

impl GenerationTime {
    fn validate<F>(&self, f: F) -> Result<(), PsmcPlotError>
    where
        F: std::ops::FnOnce(String) -> PsmcPlotError,
    {
        if !self.0.is_finite() || self.0 <= 0.0 {
            Err(f(format!("generation time must be > 0.0, got: {}", self.0)))
        } else {
            Ok(())
        }
    }
}

impl TryFrom<f64> for GenerationTime {
    type Error = PsmcPlotError;
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        let rv = Self(value);
        rv.validate(PsmcPlotError::ValueError)?;
        Ok(rv)
    }
}

impl_newtype_traits!(GenerationTime);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reject_non_positive() {
        assert!(GenerationTime::try_from(0.0).is_err());
        assert!(GenerationTime::try_from(-1.0).is_err());
        assert!(GenerationTime::try_from(f64::NAN).is_err());
        assert!(GenerationTime::try_from(f64::INFINITY).is_err());
    }

    #[test]
    fn yaml_scalar() {
        let g: GenerationTime = serde_yaml::from_str("25").unwrap();
        assert_eq!(g, 25.0);
        assert!(serde_yaml::from_str::<GenerationTime>("-3").is_err());
    }
}
