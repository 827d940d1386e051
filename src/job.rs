//! A YAML job document describing a whole figure.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::PsmcPlotError;
use crate::figure::{Figure, PlotOptions};
use crate::scaling::Scaling;
use crate::track::Track;

/// A batch plotting job.
///
/// # Examples
///
/// ```
/// let yaml = "
/// title: whale PSMC
/// scaling: effective-size
/// output: whales.png
/// x_range: [1e4, 1e8]
/// transparency: 0.15
/// show_lgm: true
/// tracks:
///  - path: minke.psmc
///    generation_time: 25
///    mutation_rate: 2.5e-8
///    bin_size: 100
///    label: minke
///    color: steelblue
/// ";
/// let job = psmcplot::PlotJob::from_str(yaml).unwrap();
/// assert_eq!(job.tracks().len(), 1);
/// assert_eq!(job.options().x_range, Some((1e4, 1e8)));
/// ```
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlotJob {
    #[serde(default = "default_title")]
    title: String,
    #[serde(default)]
    scaling: Scaling,
    #[serde(default = "default_output")]
    output: PathBuf,
    #[serde(default)]
    x_range: Option<(f64, f64)>,
    #[serde(default)]
    y_range: Option<(f64, f64)>,
    #[serde(default = "default_transparency")]
    transparency: f64,
    #[serde(default = "default_true")]
    x_log: bool,
    #[serde(default)]
    y_log: bool,
    #[serde(default)]
    show_lgm: bool,
    tracks: Vec<Track>,
}

fn default_title() -> String {
    "PSMC estimate on real data".to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("psmc_plot.png")
}

fn default_transparency() -> f64 {
    0.1
}

fn default_true() -> bool {
    true
}

impl PlotJob {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(yaml: &str) -> Result<Self, PsmcPlotError> {
        let job: PlotJob = serde_yaml::from_str(yaml)?;
        job.validate()?;
        Ok(job)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PsmcPlotError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_str(&text)
    }

    fn validate(&self) -> Result<(), PsmcPlotError> {
        if self.tracks.is_empty() {
            return Err(PsmcPlotError::OptionsError(
                "job has no tracks".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.transparency) {
            return Err(PsmcPlotError::OptionsError(format!(
                "transparency must be within [0, 1], got: {}",
                self.transparency
            )));
        }
        Ok(())
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Figure options from this job. A `[0, 0]` range counts as
    /// unset and falls back to the per-scaling defaults.
    pub fn options(&self) -> PlotOptions {
        PlotOptions {
            title: self.title.clone(),
            scaling: self.scaling,
            x_range: self.x_range.filter(|r| *r != (0.0, 0.0)),
            y_range: self.y_range.filter(|r| *r != (0.0, 0.0)),
            transparency: self.transparency,
            x_log: self.x_log,
            y_log: self.y_log,
            show_lgm: self.show_lgm,
        }
    }

    /// Assemble the figure and write it to the job's output path.
    pub fn render(&self) -> Result<PathBuf, PsmcPlotError> {
        let mut figure = Figure::new(self.options());
        for track in &self.tracks {
            figure.add_track(track.clone())?;
        }
        figure.render_to_file(&self.output)?;
        Ok(self.output.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::PlotJob;
    use crate::scaling::Scaling;

    #[test]
    fn minimal_job_defaults() {
        let yaml = "
tracks:
 - path: a.psmc
   generation_time: 25
   mutation_rate: 2.5e-8
   bin_size: 100
   label: a
";
        let job = PlotJob::from_str(yaml).unwrap();
        let options = job.options();
        assert_eq!(options.scaling, Scaling::EffectiveSize);
        assert!(options.x_log);
        assert!(!options.y_log);
        assert_eq!(job.output().to_str(), Some("psmc_plot.png"));
    }

    #[test]
    fn zero_range_counts_as_unset() {
        let yaml = "
x_range: [0, 0]
tracks:
 - path: a.psmc
   generation_time: 25
   mutation_rate: 2.5e-8
   bin_size: 100
   label: a
";
        let job = PlotJob::from_str(yaml).unwrap();
        assert_eq!(job.options().x_range, None);
    }

    #[test]
    fn bad_jobs_are_rejected() {
        assert!(PlotJob::from_str("tracks: []").is_err());
        let yaml = "
transparency: 1.5
tracks:
 - path: a.psmc
   generation_time: 25
   mutation_rate: 2.5e-8
   bin_size: 100
   label: a
";
        assert!(PlotJob::from_str(yaml).is_err());
        // Validation runs inside deserialization for low-level values.
        let yaml = "
tracks:
 - path: a.psmc
   generation_time: -25
   mutation_rate: 2.5e-8
   bin_size: 100
   label: a
";
        assert!(PlotJob::from_str(yaml).is_err());
    }
}
