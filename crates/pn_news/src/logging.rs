use std::str::FromStr;
use std::sync::Once;
use pn_core::{Error, Result};
use tracing::Level;

static INIT: Once = Once::new();

/// Parses `trace`, `debug`, `info`, `warn` or `error`, case-insensitively.
pub fn parse_level(level: &str) -> Result<Level> {
    Level::from_str(level.trim())
        .map_err(|_| Error::Config(format!("invalid log level '{}'", level)))
}

/// Installs the fmt subscriber once per process. Later calls, or calls after
/// another subscriber was set, do nothing.
pub fn init_logging(level: Level) {
    if !tracing::dispatcher::has_been_set() {
        INIT.call_once(|| {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_target(false)
                .init();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug").unwrap(), Level::DEBUG);
        assert_eq!(parse_level(" WARN ").unwrap(), Level::WARN);
        assert!(matches!(parse_level("loud"), Err(Error::Config(_))));
    }

    #[test]
    fn test_init_logging_twice() {
        init_logging(Level::INFO);
        init_logging(Level::DEBUG);
        tracing::info!("still logging");
    }
}
