use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

pub fn init_test_environment() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .from_env_lossy();

    // Every test calls this; only the first one installs the subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_test_writer()
        .try_init();
}
