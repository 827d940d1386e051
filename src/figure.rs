//! Render rescaled trajectories as a step plot.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use crate::error::PsmcPlotError;
use crate::report::Report;
use crate::scaling::{scale_block, Scaling, Trajectory};
use crate::track::Track;

/// Shaded Last Glacial Maximum interval, years before present.
const LGM_YEARS: (f64, f64) = (19_000.0, 26_500.0);

const FIGURE_SIZE: (u32, u32) = (1024, 768);

/// Figure-wide options.
#[derive(Clone, Debug)]
pub struct PlotOptions {
    /// Figure caption.
    pub title: String,
    /// How both axes are scaled.
    pub scaling: Scaling,
    /// `(min, max)` of the x axis; per-scaling defaults when unset.
    pub x_range: Option<(f64, f64)>,
    /// `(min, max)` of the y axis; per-scaling defaults when unset.
    pub y_range: Option<(f64, f64)>,
    /// Alpha applied to bootstrap replicate curves.
    pub transparency: f64,
    /// Draw the x axis in log10.
    pub x_log: bool,
    /// Draw the y axis in log10.
    pub y_log: bool,
    /// Shade the Last Glacial Maximum (effective-size scaling only).
    pub show_lgm: bool,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            title: "PSMC estimate on real data".to_string(),
            scaling: Scaling::default(),
            x_range: None,
            y_range: None,
            transparency: 0.1,
            x_log: true,
            y_log: false,
            show_lgm: false,
        }
    }
}

impl PlotOptions {
    /// Axis bounds after filling unset ranges with the per-scaling
    /// defaults.
    pub fn resolved_ranges(&self) -> ((f64, f64), (f64, f64)) {
        let (x_default, y_default) = match self.scaling {
            Scaling::EffectiveSize => ((1e3, 1e7), (0.0, 5e4)),
            Scaling::MutationScaled => ((1e-6, 1e-2), (0.0, 5e0)),
        };
        (
            self.x_range.unwrap_or(x_default),
            self.y_range.unwrap_or(y_default),
        )
    }

    fn axis_labels(&self) -> (&'static str, &'static str) {
        match self.scaling {
            Scaling::EffectiveSize => ("Years", "Effective population size"),
            Scaling::MutationScaled => (
                "Time (scaled in units of 2uT)",
                "Population size (scaled in units of 4uNe x 10^3)",
            ),
        }
    }
}

struct TrackCurves {
    track: Track,
    primary: Trajectory,
    replicates: Vec<Trajectory>,
}

/// A step-plot figure assembled from one or more tracks.
///
/// Each track contributes its primary curve (opaque, in the legend)
/// and any bootstrap replicates found in the same report (drawn
/// first, at [`PlotOptions::transparency`]).
pub struct Figure {
    options: PlotOptions,
    curves: Vec<TrackCurves>,
}

impl Figure {
    pub fn new(options: PlotOptions) -> Self {
        Self {
            options,
            curves: vec![],
        }
    }

    pub fn options(&self) -> &PlotOptions {
        &self.options
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Load the track's report from disk and add its curves.
    pub fn add_track(&mut self, track: Track) -> Result<(), PsmcPlotError> {
        let report = Report::from_file(&track.path)?;
        self.add_report(track, &report)
    }

    /// Add curves for an already-parsed report.
    pub fn add_report(&mut self, track: Track, report: &Report) -> Result<(), PsmcPlotError> {
        let blocks = report.final_blocks()?;
        let mut trajectories = blocks.iter().map(|block| {
            scale_block(
                block,
                track.generation_time,
                track.mutation_rate,
                track.bin_size,
                self.options.scaling,
            )
        });
        let primary = trajectories.next().ok_or_else(|| {
            PsmcPlotError::ReportError(format!(
                "{}: report contains no complete RD block",
                track.path.display()
            ))
        })?;
        let replicates = trajectories.collect();
        self.curves.push(TrackCurves {
            track,
            primary,
            replicates,
        });
        Ok(())
    }

    /// Render to a PNG file.
    pub fn render_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PsmcPlotError> {
        let path = path.as_ref();
        let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
        self.draw(&root)?;
        info!(path = %path.display(), tracks = self.curves.len(), "wrote figure");
        Ok(())
    }

    /// Render into an RGB888 buffer of `width * height * 3` bytes,
    /// for in-process previews.
    pub fn render_into_rgb(&self, size: (u32, u32)) -> Result<Vec<u8>, PsmcPlotError> {
        let mut buffer = vec![0u8; size.0 as usize * size.1 as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, size).into_drawing_area();
            self.draw(&root)?;
        }
        Ok(buffer)
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), PsmcPlotError> {
        if self.curves.is_empty() {
            return Err(PsmcPlotError::PlotError(
                "nothing to plot: no tracks were added".to_string(),
            ));
        }
        let opt = &self.options;
        let ((x_min, x_max), (y_min, y_max)) = opt.resolved_ranges();
        let (x0, x1) = (tf(x_min, opt.x_log), tf(x_max, opt.x_log));
        let (y0, y1) = (tf(y_min, opt.y_log), tf(y_max, opt.y_log));
        if !(x0 < x1) || !(y0 < y1) {
            return Err(PsmcPlotError::PlotError(format!(
                "degenerate axis range: x {x_min}..{x_max}, y {y_min}..{y_max}"
            )));
        }
        if !x0.is_finite() || !x1.is_finite() || !y0.is_finite() || !y1.is_finite() {
            return Err(PsmcPlotError::PlotError(format!(
                "log scale needs positive axis bounds: x {x_min}..{x_max}, y {y_min}..{y_max}"
            )));
        }

        root.fill(&WHITE).map_err(plot_err)?;

        let (x_desc, y_desc) = opt.axis_labels();
        let mut chart = ChartBuilder::on(root)
            .caption(&opt.title, ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(70)
            .build_cartesian_2d(x0..x1, y0..y1)
            .map_err(plot_err)?;

        let x_log = opt.x_log;
        let y_log = opt.y_log;
        chart
            .configure_mesh()
            .x_desc(x_desc)
            .y_desc(y_desc)
            .x_label_formatter(&move |v| axis_label(*v, x_log))
            .y_label_formatter(&move |v| axis_label(*v, y_log))
            .draw()
            .map_err(plot_err)?;

        if opt.show_lgm && opt.scaling == Scaling::EffectiveSize {
            let band_lo = tf(LGM_YEARS.0, opt.x_log).max(x0);
            let band_hi = tf(LGM_YEARS.1, opt.x_log).min(x1);
            if band_lo < band_hi {
                chart
                    .draw_series(std::iter::once(Rectangle::new(
                        [(band_lo, y0), (band_hi, y1)],
                        RGBColor(100, 149, 237).mix(0.25).filled(),
                    )))
                    .map_err(plot_err)?;
            }
        }

        for curve in &self.curves {
            let (r, g, b) = curve.track.color.rgb();
            let color = RGBColor(r, g, b);

            // Replicates first, primary included at low alpha, then
            // the primary again on top.
            let faint = color.mix(opt.transparency);
            for trajectory in std::iter::once(&curve.primary).chain(curve.replicates.iter()) {
                let points = step_points(&transformed(trajectory, opt));
                chart
                    .draw_series(LineSeries::new(points, faint))
                    .map_err(plot_err)?;
            }

            let points = step_points(&transformed(&curve.primary, opt));
            chart
                .draw_series(LineSeries::new(points, &color))
                .map_err(plot_err)?
                .label(curve.track.label.clone())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(plot_err)?;

        root.present().map_err(plot_err)?;
        Ok(())
    }
}

/// Expand `(x, y)` samples into the vertices of a pre-step polyline:
/// the interval `(x[i-1], x[i]]` takes the value `y[i]`.
pub fn step_points(points: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let mut out = Vec::with_capacity(points.len() * 2);
    let mut iter = points.iter();
    if let Some(&(x0, y0)) = iter.next() {
        out.push((x0, y0));
        let mut prev_x = x0;
        for &(x, y) in iter {
            out.push((prev_x, y));
            out.push((x, y));
            prev_x = x;
        }
    }
    out
}

fn transformed(trajectory: &Trajectory, opt: &PlotOptions) -> Vec<(f64, f64)> {
    trajectory
        .points
        .iter()
        .filter(|(x, y)| (!opt.x_log || *x > 0.0) && (!opt.y_log || *y > 0.0))
        .map(|&(x, y)| (tf(x, opt.x_log), tf(y, opt.y_log)))
        .collect()
}

fn tf(value: f64, log: bool) -> f64 {
    if log {
        value.log10()
    } else {
        value
    }
}

fn axis_label(value: f64, log: bool) -> String {
    if log {
        return format!("1e{}", value.round() as i64);
    }
    if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= 1e4 || value.abs() < 1e-2 {
        format!("{value:.0e}")
    } else {
        format!("{value}")
    }
}

fn plot_err<E: std::fmt::Display>(e: E) -> PsmcPlotError {
    PsmcPlotError::PlotError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_expansion_is_pre() {
        let points = vec![(0.0, 1.0), (2.0, 3.0), (4.0, 2.0)];
        assert_eq!(
            step_points(&points),
            vec![
                (0.0, 1.0),
                (0.0, 3.0),
                (2.0, 3.0),
                (2.0, 2.0),
                (4.0, 2.0)
            ]
        );
    }

    #[test]
    fn default_ranges_follow_scaling() {
        let mut options = PlotOptions::default();
        assert_eq!(options.resolved_ranges(), ((1e3, 1e7), (0.0, 5e4)));
        options.scaling = Scaling::MutationScaled;
        assert_eq!(options.resolved_ranges(), ((1e-6, 1e-2), (0.0, 5e0)));
        options.x_range = Some((1.0, 2.0));
        assert_eq!(options.resolved_ranges().0, (1.0, 2.0));
    }

    #[test]
    fn log_tick_labels() {
        assert_eq!(axis_label(4.0, true), "1e4");
        assert_eq!(axis_label(-6.0, true), "1e-6");
        assert_eq!(axis_label(50_000.0, false), "5e4");
        assert_eq!(axis_label(0.0, false), "0");
    }
}
