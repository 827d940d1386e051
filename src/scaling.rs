//! Rescale a report block into biologically interpretable units.

use serde::{Deserialize, Serialize};

use crate::bin_size::BinSize;
use crate::generation_time::GenerationTime;
use crate::mutation_rate::MutationRate;
use crate::report::Block;

/// How the trajectory axes are scaled.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum Scaling {
    /// x in years, y as effective population size `N_e`.
    #[default]
    EffectiveSize,
    /// x as pairwise sequence divergence (`2 mu T`), y as population
    /// size scaled in units of `4 mu N_e x 10^3`.
    MutationScaled,
}

impl std::fmt::Display for Scaling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scaling::EffectiveSize => write!(f, "effective-size"),
            Scaling::MutationScaled => write!(f, "mutation-scaled"),
        }
    }
}

/// A rescaled trajectory ready for plotting.
#[derive(Clone, Debug)]
pub struct Trajectory {
    /// `(x, y)` pairs in the units selected by the [`Scaling`].
    pub points: Vec<(f64, f64)>,
    /// The baseline effective size `theta / (4 * mu) / s`.
    pub n0: f64,
}

/// Rescale one block of the report.
///
/// For [`Scaling::EffectiveSize`] the transform is
/// `x = g * 2 * N0 * t_k`, `y = N0 * lambda_k` with
/// `N0 = theta / (4 * mu) / s`; for [`Scaling::MutationScaled`] it is
/// `x = t_k * theta / s`, `y = lambda_k * theta / s * 1e3`.
///
/// # Examples
///
/// ```
/// let text = "
/// RD 0
/// RS\t0\t0.01\t2.0\t0\t0
/// PA 4+5*3+4 0.001
/// ";
/// let report = psmcplot::loads(text).unwrap();
/// let block = report.final_blocks().unwrap()[0];
/// let trajectory = psmcplot::scale_block(
///     block,
///     psmcplot::GenerationTime::try_from(25.0).unwrap(),
///     psmcplot::MutationRate::try_from(2.5e-8).unwrap(),
///     psmcplot::BinSize::try_from(100.0).unwrap(),
///     psmcplot::Scaling::EffectiveSize,
/// );
/// assert_eq!(trajectory.n0, 100.0);
/// assert_eq!(trajectory.points[0], (25.0 * 2.0 * 100.0 * 0.01, 200.0));
/// ```
pub fn scale_block(
    block: &Block,
    generation_time: GenerationTime,
    mutation_rate: MutationRate,
    bin_size: BinSize,
    scaling: Scaling,
) -> Trajectory {
    let theta = block.theta();
    let g = f64::from(generation_time);
    let mu = f64::from(mutation_rate);
    let s = f64::from(bin_size);
    let n0 = theta / (4.0 * mu) / s;

    let points = block
        .segments()
        .iter()
        .map(|seg| match scaling {
            Scaling::EffectiveSize => (g * 2.0 * n0 * seg.time, n0 * seg.lambda),
            Scaling::MutationScaled => (seg.time * theta / s, seg.lambda * theta / s * 1e3),
        })
        .collect();

    Trajectory { points, n0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Report;

    fn toy_report() -> Report {
        "RD 0\nRS\t0\t0.0\t1.0\t0\t0\nRS\t1\t0.5\t3.0\t0\t0\nPA 4+5*3+4 0.008\n"
            .parse()
            .unwrap()
    }

    #[test]
    fn mutation_scaled_transform() {
        let report = toy_report();
        let block = report.final_blocks().unwrap()[0];
        let trajectory = scale_block(
            block,
            GenerationTime::try_from(25.0).unwrap(),
            MutationRate::try_from(2.0e-8).unwrap(),
            BinSize::try_from(100.0).unwrap(),
            Scaling::MutationScaled,
        );
        // x = t * theta / s, y = lambda * theta / s * 1e3
        assert_eq!(trajectory.points[1].0, 0.5 * 0.008 / 100.0);
        assert_eq!(trajectory.points[1].1, 3.0 * 0.008 / 100.0 * 1e3);
    }

    #[test]
    fn effective_size_baseline() {
        let report = toy_report();
        let block = report.final_blocks().unwrap()[0];
        let trajectory = scale_block(
            block,
            GenerationTime::try_from(30.0).unwrap(),
            MutationRate::try_from(2.0e-8).unwrap(),
            BinSize::try_from(100.0).unwrap(),
            Scaling::EffectiveSize,
        );
        // N0 = theta / (4 mu) / s = 0.008 / 8e-8 / 100 = 1000
        assert_eq!(trajectory.n0, 1000.0);
        assert_eq!(trajectory.points[1], (30.0 * 2.0 * 1000.0 * 0.5, 3000.0));
    }
}
