use env_logger::{Builder, Env, Target};

/// Initializes the logger for the command-line clients.
///
/// Verbosity comes from `RUST_LOG` (default `warn`). Records go to standard
/// error, leaving standard output to the client's results.
pub fn init() {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Stderr)
        .format_timestamp_secs()
        .init();
}
