use psmcplot::{BinSize, GenerationTime, MutationRate, Scaling};

const REPORT: &str = "\
MM n_iterations:5,
RD 5
RS\t0\t0.000000\t1.000000\t0\t0
RS\t1\t0.010000\t2.000000\t0\t0
RS\t2\t0.100000\t0.500000\t0\t0
PA 4+5*3+4 0.004
";

#[test]
fn effective_size_pipeline() {
    let report = psmcplot::loads(REPORT).unwrap();
    let block = report.final_blocks().unwrap()[0];

    let trajectory = psmcplot::scale_block(
        block,
        GenerationTime::try_from(25.0).unwrap(),
        MutationRate::try_from(1.0e-8).unwrap(),
        BinSize::try_from(100.0).unwrap(),
        Scaling::EffectiveSize,
    );

    // N0 = 0.004 / (4e-8) / 100 = 1000
    assert_eq!(trajectory.n0, 1000.0);
    // x = 25 * 2 * 1000 * t, y = 1000 * lambda
    assert_eq!(trajectory.points[0], (0.0, 1000.0));
    assert_eq!(trajectory.points[1], (500.0, 2000.0));
    assert_eq!(trajectory.points[2], (5000.0, 500.0));
}

#[test]
fn mutation_scaled_pipeline() {
    let report = psmcplot::loads(REPORT).unwrap();
    let block = report.final_blocks().unwrap()[0];

    let trajectory = psmcplot::scale_block(
        block,
        GenerationTime::try_from(25.0).unwrap(),
        MutationRate::try_from(1.0e-8).unwrap(),
        BinSize::try_from(100.0).unwrap(),
        Scaling::MutationScaled,
    );

    // x = t * theta / s, y = lambda * theta / s * 1e3
    assert_eq!(trajectory.points[1].0, 0.01 * 0.004 / 100.0);
    assert_eq!(trajectory.points[1].1, 2.0 * 0.004 / 100.0 * 1e3);
}

#[test]
fn generation_time_only_affects_the_time_axis() {
    let report = psmcplot::loads(REPORT).unwrap();
    let block = report.final_blocks().unwrap()[0];
    let mu = MutationRate::try_from(1.0e-8).unwrap();
    let s = BinSize::try_from(100.0).unwrap();

    let short = psmcplot::scale_block(
        block,
        GenerationTime::try_from(10.0).unwrap(),
        mu,
        s,
        Scaling::EffectiveSize,
    );
    let long = psmcplot::scale_block(
        block,
        GenerationTime::try_from(30.0).unwrap(),
        mu,
        s,
        Scaling::EffectiveSize,
    );

    for (a, b) in short.points.iter().zip(long.points.iter()) {
        assert_eq!(a.0 * 3.0, b.0);
        assert_eq!(a.1, b.1);
    }
}
