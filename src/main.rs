// Entry point: launches the desktop form.
mod app;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Desktop form for plotting PSMC output")]
pub struct Args {
    /// Parameter file to preload (path, generation time, mutation
    /// rate, bin size, label, optional color per line)
    #[arg(long)]
    pub params: Option<PathBuf>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 700.0]),
        ..Default::default()
    };

    eframe::run_native(
        "PlotMyPSMC",
        native_options,
        Box::new(|cc| Ok(Box::new(app::App::new(cc, args)))),
    )
}
