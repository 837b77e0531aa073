use crate::config::{Config, LogFormat};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Configure and initialize logging for the application
///
/// Events are written to stderr so command output on stdout stays clean.
pub fn setup_logging(config: &Config) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let base_level = &config.log_level;
        EnvFilter::new(format!(
            "warn,stackpilot_common={base_level},stackpilot_probe={base_level}"
        ))
    });

    let builder = FmtSubscriber::builder()
        .with_target(true)
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = match config.log_format {
        LogFormat::Pretty => tracing::subscriber::set_global_default(builder.pretty().finish()),
        LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish()),
    };
    result.expect("setting default subscriber failed");
}
