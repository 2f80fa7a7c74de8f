//! utilities used across themegen
use tracing::level_filters::LevelFilter;

/// convert a string into a log level filter
///
/// accepts full names and the usual short forms (`d`, `dbg`, `wrn`, ...). anything unknown maps
/// to [`LevelFilter::ERROR`].
pub fn string_to_log_level(lvl: &str) -> LevelFilter {
    match lvl.trim().to_lowercase().as_str() {
        "d" | "debug" | "dbg" => LevelFilter::DEBUG,
        "t" | "trace" | "trc" => LevelFilter::TRACE,
        "e" | "error" | "err" => LevelFilter::ERROR,
        "i" | "info" | "inf" => LevelFilter::INFO,
        "w" | "warn" | "wrn" => LevelFilter::WARN,
        "off" | "none" => LevelFilter::OFF,
        _ => LevelFilter::ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_levels() {
        assert_eq!(string_to_log_level("DEBUG"), LevelFilter::DEBUG);
        assert_eq!(string_to_log_level("wrn"), LevelFilter::WARN);
        assert_eq!(string_to_log_level("off"), LevelFilter::OFF);
        assert_eq!(string_to_log_level("shouting"), LevelFilter::ERROR);
    }
}
