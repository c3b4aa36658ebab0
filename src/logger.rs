use log::{LevelFilter, SetLoggerError};

pub fn verbosity_to_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        _ => LevelFilter::Trace,
    }
}

/// Logs go to stderr, so that the results on stdout stay clean.
/// It fails if a logger is already installed.
pub fn init_logger(verbosity: u8) -> Result<(), SetLoggerError> {
    env_logger::Builder::new()
        .filter_level(verbosity_to_level(verbosity))
        .target(env_logger::Target::Stderr)
        .try_init()
}
