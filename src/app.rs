use egui::TextureHandle;
use tracing::{error, info};

use psmcplot::{Figure, LineColor, PlotOptions, Scaling, Track};

use crate::ui;

/// Defaults shown as initial entry text, matching the original form.
pub struct TrackForm {
    pub path: String,
    pub generation_time: String,
    pub mutation_rate: String,
    pub bin_size: String,
    pub label: String,
    pub color: String,
}

impl Default for TrackForm {
    fn default() -> Self {
        Self {
            path: String::new(),
            generation_time: "25".into(),
            mutation_rate: "2.5e-8".into(),
            bin_size: "100".into(),
            label: "my_sample".into(),
            color: "red".into(),
        }
    }
}

pub struct PlotForm {
    pub x_min: String,
    pub x_max: String,
    pub y_min: String,
    pub y_max: String,
    pub transparency: String,
    pub plot_name: String,
    pub x_log: bool,
    pub y_log: bool,
    pub show_lgm: bool,
}

impl Default for PlotForm {
    fn default() -> Self {
        Self {
            x_min: "1e3".into(),
            x_max: "1e7".into(),
            y_min: "0".into(),
            y_max: "1e6".into(),
            transparency: "0.15".into(),
            plot_name: "my_PSMC_plot".into(),
            x_log: true,
            y_log: false,
            show_lgm: true,
        }
    }
}

pub struct App {
    pub track_form: TrackForm,
    pub plot_form: PlotForm,
    pub param_path: String,
    pub tracks: Vec<Track>,
    pub status: String,
    pub preview: Option<TextureHandle>,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, args: crate::Args) -> Self {
        cc.egui_ctx.set_pixels_per_point(1.25);

        let mut app = Self {
            track_form: TrackForm::default(),
            plot_form: PlotForm::default(),
            param_path: String::new(),
            tracks: vec![],
            status: String::new(),
            preview: None,
        };
        if let Some(path) = args.params {
            app.param_path = path.display().to_string();
            app.import_parameter_file();
        }
        app
    }

    pub fn import_parameter_file(&mut self) {
        match psmcplot::read_parameter_file(&self.param_path) {
            Ok(tracks) => {
                self.tracks = tracks;
                self.status = format!("Current PSMC entries:\n{}", self.entry_summary());
            }
            Err(e) => {
                error!(error = %e, "failed to import parameter file");
                self.status = format!("Could not import parameter file: {e}");
            }
        }
    }

    pub fn save_options(&mut self) {
        match self.track_from_form() {
            Ok(track) => {
                self.tracks.push(track);
                self.status = format!("Current PSMC entries:\n{}", self.entry_summary());
            }
            Err(msg) => self.status = msg,
        }
    }

    pub fn clear_options(&mut self) {
        self.tracks.clear();
        self.track_form = TrackForm::default();
        self.status = "All PSMC entries have been cleared.".to_string();
    }

    pub fn plot(&mut self, ctx: &egui::Context) {
        if self.tracks.is_empty() {
            self.status = "There are no PSMC entries available, nothing to plot.".to_string();
            return;
        }
        match self.render() {
            Ok((png, rgb, size)) => {
                ui::preview::update(ctx, &mut self.preview, &rgb, size);
                info!(path = %png, "plotted from desktop form");
                self.status = format!(
                    "Plotted image from the following PSMC entries:\n{}\nSaved plot as {png}.",
                    self.entry_summary()
                );
            }
            Err(e) => {
                error!(error = %e, "plotting failed");
                self.status = format!("Oops, there was an error: {e}");
            }
        }
    }

    fn render(&self) -> anyhow::Result<(String, Vec<u8>, (u32, u32))> {
        let options = self.plot_options()?;
        let mut figure = Figure::new(options);
        for track in &self.tracks {
            figure.add_track(track.clone())?;
        }
        let png = format!("{}.png", self.plot_form.plot_name.trim());
        figure.render_to_file(&png)?;
        let size = (800u32, 600u32);
        let rgb = figure.render_into_rgb(size)?;
        Ok((png, rgb, size))
    }

    fn plot_options(&self) -> anyhow::Result<PlotOptions> {
        let f = &self.plot_form;
        let x_range = (
            entry_f64(&f.x_min, "X axis minimum")?,
            entry_f64(&f.x_max, "X axis maximum")?,
        );
        let y_range = (
            entry_f64(&f.y_min, "Y axis minimum")?,
            entry_f64(&f.y_max, "Y axis maximum")?,
        );
        Ok(PlotOptions {
            scaling: Scaling::EffectiveSize,
            x_range: Some(x_range).filter(|r| *r != (0.0, 0.0)),
            y_range: Some(y_range).filter(|r| *r != (0.0, 0.0)),
            transparency: entry_f64(&f.transparency, "Bootstrap transparency")?,
            x_log: f.x_log,
            y_log: f.y_log,
            show_lgm: f.show_lgm,
            ..PlotOptions::default()
        })
    }

    fn track_from_form(&self) -> Result<Track, String> {
        let form = &self.track_form;
        if !std::path::Path::new(form.path.trim()).is_file() {
            return Err(
                "Please provide a valid path to a PSMC file or import a parameter file."
                    .to_string(),
            );
        }
        let color: LineColor = form
            .color
            .trim()
            .parse()
            .map_err(|e| format!("Line color: {e}"))?;
        Ok(Track {
            path: form.path.trim().into(),
            generation_time: form_value(&form.generation_time, "Generation time")?,
            mutation_rate: form_value(&form.mutation_rate, "Mutation rate")?,
            bin_size: form_value(&form.bin_size, "Bin size")?,
            label: form.label.trim().to_string(),
            color,
        })
    }

    fn entry_summary(&self) -> String {
        self.tracks
            .iter()
            .map(|t| {
                format!(
                    "{} (g={}, mu={}, s={}, {}, {})",
                    t.path.display(),
                    t.generation_time,
                    t.mutation_rate,
                    t.bin_size,
                    t.label,
                    t.color
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn form_value<T>(text: &str, name: &str) -> Result<T, String>
where
    T: TryFrom<f64, Error = psmcplot::PsmcPlotError>,
{
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| format!("{name}: not a number: {text:?}"))?;
    T::try_from(value).map_err(|e| format!("{name}: {e}"))
}

fn entry_f64(text: &str, name: &str) -> anyhow::Result<f64> {
    text.trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("{name}: not a number: {text:?}"))
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::form::main_window(ctx, self);
    }
}
