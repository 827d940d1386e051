use std::path::PathBuf;

use psmcplot::{Figure, PlotJob, PlotOptions, Scaling, Track};

const REPORT: &str = "\
MM n_iterations:1,
RD 1
RS\t0\t0.000000\t1.000000\t0\t0
RS\t1\t0.010000\t2.000000\t0\t0
RS\t2\t0.050000\t1.500000\t0\t0
RS\t3\t0.200000\t0.800000\t0\t0
PA 4+5*3+4 0.004
";

fn write_report(tag: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("psmcplot_{tag}_{}.psmc", std::process::id()));
    std::fs::write(&path, REPORT).unwrap();
    path
}

fn track(path: PathBuf) -> Track {
    Track {
        path,
        generation_time: 25.0.try_into().unwrap(),
        mutation_rate: 1.0e-8.try_into().unwrap(),
        bin_size: 100.0.try_into().unwrap(),
        label: "sample".to_string(),
        color: "steelblue".parse().unwrap(),
    }
}

#[test]
fn job_renders_a_png() {
    let report_path = write_report("job");
    let output = std::env::temp_dir().join(format!("psmcplot_job_{}.png", std::process::id()));
    let yaml = format!(
        "
title: integration test
scaling: effective-size
output: {}
show_lgm: true
tracks:
 - path: {}
   generation_time: 25
   mutation_rate: 1.0e-8
   bin_size: 100
   label: sample
   color: red
",
        output.display(),
        report_path.display()
    );

    let job = PlotJob::from_str(&yaml).unwrap();
    let written = job.render().unwrap();
    assert_eq!(written, output);

    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    std::fs::remove_file(&report_path).unwrap();
    std::fs::remove_file(&output).unwrap();
}

#[test]
fn figure_renders_into_a_buffer() {
    let report_path = write_report("buffer");
    let mut figure = Figure::new(PlotOptions {
        scaling: Scaling::MutationScaled,
        x_log: false,
        ..PlotOptions::default()
    });
    figure.add_track(track(report_path.clone())).unwrap();

    let size = (400u32, 300u32);
    let rgb = figure.render_into_rgb(size).unwrap();
    assert_eq!(rgb.len(), 400 * 300 * 3);
    // The canvas is white-filled; the curve and mesh must have
    // touched at least one pixel.
    assert!(rgb.chunks(3).any(|px| px != [255, 255, 255]));

    std::fs::remove_file(&report_path).unwrap();
}

#[test]
fn log_y_with_zero_lower_bound_is_an_error() {
    // The default y range starts at 0, whose log10 is -inf.
    let report_path = write_report("logy");
    let mut figure = Figure::new(PlotOptions {
        y_log: true,
        ..PlotOptions::default()
    });
    figure.add_track(track(report_path.clone())).unwrap();

    let err = figure.render_into_rgb((100, 100)).unwrap_err();
    match err {
        psmcplot::PsmcPlotError::PlotError(msg) => {
            assert!(msg.contains("positive axis bounds"), "{msg}");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    std::fs::remove_file(&report_path).unwrap();
}

#[test]
fn empty_figure_refuses_to_render() {
    let figure = Figure::new(PlotOptions::default());
    assert!(figure.is_empty());
    assert!(matches!(
        figure.render_into_rgb((100, 100)),
        Err(psmcplot::PsmcPlotError::PlotError(_))
    ));
}

#[test]
fn missing_report_is_an_io_error() {
    let mut figure = Figure::new(PlotOptions::default());
    let err = figure
        .add_track(track(PathBuf::from("/nonexistent/sample.psmc")))
        .unwrap_err();
    assert!(matches!(err, psmcplot::PsmcPlotError::IoError(_)));
}
