use slog::Logger;
use sloggers::Build;

/// Return a logger suitable for test usage.
///
/// Logs are discarded unless the crate is built with the `test_logger` feature, e.g.:
///
/// ```bash
/// cargo test -p list_codec --features 'logging/test_logger'
/// ```
///
/// in which case every record at `Debug` or above is written to the terminal.
pub fn test_logger() -> Logger {
    if cfg!(feature = "test_logger") {
        sloggers::terminal::TerminalLoggerBuilder::new()
            .level(sloggers::types::Severity::Debug)
            .build()
            .expect("Should build test_logger")
    } else {
        null_logger()
    }
}

/// Return a logger that drops every record.
///
/// Used as the default logger of components that accept an optional `Logger`.
pub fn null_logger() -> Logger {
    Logger::root(slog::Discard, slog::o!())
}
