//! Logging initialization

/// Initialize env_logger with a default level.
///
/// `RUST_LOG` overrides the defaults; `debug` wins over `quiet`.
pub fn init_logging(quiet: bool, debug: bool) {
    let default_level = if debug {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .init();
}
