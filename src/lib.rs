//! Parse, rescale, and plot output from the PSMC
//! demographic-inference tool.
//!
//! A PSMC run writes a semi-structured text report. This crate
//! extracts the population-size trajectory of the final EM
//! iteration, rescales it into interpretable units (years against
//! effective population size, or mutation-scaled units), and renders
//! step plots of one or more samples, with bootstrap replicates
//! drawn translucently behind each primary curve.
//!
//! Entry points:
//!
//! * [`loads`] / [`load`] — parse a report from a string or file,
//! * [`scale_block`] — apply one of the two unit transforms,
//! * [`Figure`] — assemble and render a plot,
//! * [`PlotJob`] — a whole figure described as a YAML document,
//! * [`read_parameter_file`] — the legacy whitespace parameter file.

mod macros;

mod bin_size;
mod color;
mod error;
mod figure;
mod generation_time;
mod job;
mod mutation_rate;
mod report;
mod scaling;
mod track;

pub use bin_size::BinSize;
pub use color::LineColor;
pub use error::PsmcPlotError;
pub use figure::{step_points, Figure, PlotOptions};
pub use generation_time::GenerationTime;
pub use job::PlotJob;
pub use mutation_rate::MutationRate;
pub use report::{Block, Report, Segment};
pub use scaling::{scale_block, Scaling, Trajectory};
pub use track::{read_parameter_file, read_parameter_str, Track};

/// Parse a PSMC report from a string.
///
/// ```
/// let text = "
/// RD 0
/// RS\t0\t0.0\t1.0\t0\t0
/// PA 4+5*3+4 0.002
/// ";
/// let report = psmcplot::loads(text).unwrap();
/// assert_eq!(report.final_blocks().unwrap().len(), 1);
/// ```
pub fn loads(text: &str) -> Result<Report, PsmcPlotError> {
    text.parse()
}

/// Parse a PSMC report from a file path.
pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Report, PsmcPlotError> {
    Report::from_file(path)
}
