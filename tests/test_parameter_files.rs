#[test]
fn parameter_file_round_trip() {
    let text = "\
# sample sheet for the manuscript figure
sample_A.psmc 25 2.5e-8 100 sample_A red
sample_B.psmc 29.3 1.2e-8 100 \"sample B (coastal)\" #336699

sample_C.psmc 25 2.5e-8 100 sample_C
";
    let tracks = psmcplot::read_parameter_str(text).unwrap();
    assert_eq!(tracks.len(), 3);

    assert_eq!(tracks[0].path.to_str(), Some("sample_A.psmc"));
    assert_eq!(tracks[0].generation_time, 25.0);
    assert_eq!(tracks[0].mutation_rate, 2.5e-8);
    assert_eq!(tracks[0].bin_size, 100.0);
    assert_eq!(tracks[0].label, "sample_A");
    assert_eq!(tracks[0].color.rgb(), (255, 0, 0));

    assert_eq!(tracks[1].label, "sample B (coastal)");
    assert_eq!(tracks[1].color.rgb(), (0x33, 0x66, 0x99));

    // Omitted color gets a random one; the rest must still parse.
    assert_eq!(tracks[2].label, "sample_C");
}

#[test]
fn read_from_disk() {
    let path = std::env::temp_dir().join(format!("psmcplot_params_{}.txt", std::process::id()));
    std::fs::write(&path, "a.psmc 25 2.5e-8 100 a blue\n").unwrap();
    let tracks = psmcplot::read_parameter_file(&path).unwrap();
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].color.rgb(), (0, 0, 255));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn missing_file_is_an_io_error() {
    let err = psmcplot::read_parameter_file("/nonexistent/params.txt").unwrap_err();
    assert!(matches!(err, psmcplot::PsmcPlotError::IoError(_)));
}

#[test]
fn bad_color_is_an_error() {
    let err = psmcplot::read_parameter_str("a.psmc 25 2.5e-8 100 a chartreuse-ish\n").unwrap_err();
    assert!(matches!(err, psmcplot::PsmcPlotError::ValueError(_)));
}
