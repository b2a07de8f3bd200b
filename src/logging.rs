//! Subscriber setup shared by the command-line tools.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive string, e.g. `hanoi_tower=trace`.
pub const LOG_ENV: &str = "HANOI_LOG";

/// Install a stderr `fmt` subscriber.
///
/// `HANOI_LOG` wins when set; otherwise `verbosity` picks the level (0 = warn, 1 = debug,
/// 2+ = trace). Calling this twice is harmless.
pub fn init(verbosity: u8) {
    let fallback = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
