mod asyoutype_tests;
mod dispatch_tests;
mod region_code;

static ONCE: std::sync::Once = std::sync::Once::new();

/// Tests share the process-wide engine; logging is initialized once so
/// classification traces show up under `--nocapture`.
fn setup_logging() {
    ONCE.call_once(|| {
        colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .init()
    });
}
