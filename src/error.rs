use thiserror::Error;

/// Error type for this crate.
///
/// The enum fields correspond to the different stages of turning a
/// PSMC report into a figure: reading the report, reading per-sample
/// options, validating low-level values, and rendering.
///
/// # Example
///
/// A report with no `RD` block cannot be plotted:
///
/// ```
/// let report = psmcplot::loads("MM n_iterations:20,\n").unwrap();
/// assert!(matches!(
///     report.final_blocks(),
///     Err(psmcplot::PsmcPlotError::ReportError(_))
/// ));
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PsmcPlotError {
    /// Errors in the PSMC report itself
    #[error("{0}")]
    ReportError(String),
    /// Errors in a parameter file or job document
    #[error("{0}")]
    OptionsError(String),
    /// Errors related to low-level values
    #[error("{0}")]
    ValueError(String),
    /// Errors raised while rendering a figure
    #[error("{0}")]
    PlotError(String),
    #[error(transparent)]
    /// Errors coming from `std::io`.
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    /// Errors coming from `serde_yaml`.
    YamlError(#[from] serde_yaml::Error),
}
