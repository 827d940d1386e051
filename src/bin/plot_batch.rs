//! Batch driver: render a figure from a YAML job or a legacy
//! parameter file without opening the desktop form.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use psmcplot::{Figure, PlotJob, PlotOptions, Scaling};

#[derive(Parser, Debug)]
#[command(author, version, about = "Plot PSMC output from the command line")]
struct Args {
    /// YAML job document describing tracks and plot options
    #[arg(long, conflicts_with = "params")]
    job: Option<PathBuf>,

    /// Legacy whitespace-delimited parameter file
    #[arg(long)]
    params: Option<PathBuf>,

    /// Output PNG path (overrides the job's output)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Axis scaling: effective-size or mutation-scaled
    #[arg(long, default_value = "effective-size")]
    scaling: String,

    /// Figure caption
    #[arg(long)]
    title: Option<String>,

    /// X axis bounds, e.g. --x-range 1e3 1e7
    #[arg(long, num_args = 2, value_names = ["MIN", "MAX"])]
    x_range: Option<Vec<f64>>,

    /// Y axis bounds
    #[arg(long, num_args = 2, value_names = ["MIN", "MAX"])]
    y_range: Option<Vec<f64>>,

    /// Alpha for bootstrap replicate curves
    #[arg(long, default_value_t = 0.1)]
    transparency: f64,

    /// Draw the x axis linearly instead of log10
    #[arg(long)]
    linear_x: bool,

    /// Draw the y axis in log10
    #[arg(long)]
    log_y: bool,

    /// Shade the Last Glacial Maximum band
    #[arg(long)]
    lgm: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    if let Some(job_path) = &args.job {
        let job = PlotJob::from_file(job_path)
            .with_context(|| format!("reading job {}", job_path.display()))?;
        let output = match &args.output {
            Some(path) => {
                let mut figure = Figure::new(job.options());
                for track in job.tracks() {
                    figure.add_track(track.clone())?;
                }
                figure.render_to_file(path)?;
                path.clone()
            }
            None => job.render()?,
        };
        println!("wrote {}", output.display());
        return Ok(());
    }

    let Some(params_path) = &args.params else {
        bail!("either --job or --params is required");
    };
    let tracks = psmcplot::read_parameter_file(params_path)
        .with_context(|| format!("reading parameter file {}", params_path.display()))?;
    if tracks.is_empty() {
        bail!("{}: no tracks found", params_path.display());
    }

    let scaling = match args.scaling.as_str() {
        "effective-size" => Scaling::EffectiveSize,
        "mutation-scaled" => Scaling::MutationScaled,
        other => bail!("unknown scaling: {other:?} (expected effective-size or mutation-scaled)"),
    };
    let pair = |range: &Option<Vec<f64>>| range.as_ref().map(|r| (r[0], r[1]));
    let options = PlotOptions {
        title: args
            .title
            .clone()
            .unwrap_or_else(|| PlotOptions::default().title),
        scaling,
        x_range: pair(&args.x_range).filter(|r| *r != (0.0, 0.0)),
        y_range: pair(&args.y_range).filter(|r| *r != (0.0, 0.0)),
        transparency: args.transparency,
        x_log: !args.linear_x,
        y_log: args.log_y,
        show_lgm: args.lgm,
    };

    let mut figure = Figure::new(options);
    for track in tracks {
        figure.add_track(track)?;
    }
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from("psmc_plot.png"));
    figure.render_to_file(&output)?;
    println!("wrote {}", output.display());
    Ok(())
}
