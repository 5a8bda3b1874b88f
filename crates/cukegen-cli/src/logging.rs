//! Structured logging with environment variable configuration.
//!
//! Logs are written to stderr so that generated expressions on stdout can be
//! piped straight into other tools.

use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

fn filter_from_config(config: &CliConfig) -> EnvFilter {
    EnvFilter::new(config.log_level.as_filter_str())
}

/// Install the stderr subscriber used by the `cukegen` binary.
///
/// The level comes from `config.log_level`, which already folds
/// `--log-level` over `CUKEGEN_LOG_LEVEL`. Lines are compact and untimed so a
/// `--log-level trace` run reads as a per-sentence list of selected
/// candidates next to the expressions printed on stdout.
///
/// Calling this again after a subscriber is installed has no effect.
pub fn init_logging(config: &CliConfig) {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .without_time()
        .with_env_filter(filter_from_config(config))
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
