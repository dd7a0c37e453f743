use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_ENV: &str = "LHDIAG_LOG";

/// Diagnostics go to stderr so stdout stays a clean report.
pub fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::WARN.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    // a second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
