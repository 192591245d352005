use hero_life::{LifeConfig, LifeEngine, XorShift32};

#[test]
fn perf_smoke_step() {
    // Full-HD hero at the default cell size.
    let mut engine = LifeEngine::new(&LifeConfig::default(), Box::new(XorShift32::new(42)));
    engine.initialize(1920, 1080);
    assert_eq!(engine.grid().size(), 192 * 108);

    let mut total_ms = 0.0;
    for _ in 0..20 {
        let report = engine.step();
        assert!(report.step_ms >= 0.0);
        total_ms += report.step_ms;
    }
    assert_eq!(engine.generation(), 20);
    assert!(total_ms.is_finite());
}
