//! logging stuff
use {
    crate::{config::options::LoggingFormat, getopt, utils::string_to_log_level},
    color_eyre::Result,
    tracing::{debug, level_filters::LevelFilter, subscriber},
    tracing_subscriber::FmtSubscriber,
};

/// setup logging
///
/// logs go to stderr so they never mix with themes printed on stdout. `verbosity` raises the
/// configured level, one step per `-v`.
pub fn setup(verbosity: u8) -> Result<()> {
    if !getopt!(logging.enable) {
        return Ok(());
    }

    let mut max_level = string_to_log_level(&getopt!(logging.level));
    for _ in 0..verbosity {
        max_level = raise(max_level);
    }

    let subscriber = FmtSubscriber::builder()
        .with_writer(std::io::stderr)
        .with_max_level(max_level)
        .with_ansi(getopt!(logging.ansi))
        .with_line_number(getopt!(logging.line_numbers))
        .with_target(getopt!(logging.event_targets));

    match getopt!(logging.format) {
        LoggingFormat::Pretty => {
            subscriber::set_global_default(subscriber.pretty().finish())?;
        }
        LoggingFormat::Compact => {
            subscriber::set_global_default(subscriber.compact().finish())?;
        }
    }

    debug!(%max_level, "logging setup successfully");
    Ok(())
}

/// levels from quietest to loudest
const LADDER: [LevelFilter; 6] = [
    LevelFilter::OFF,
    LevelFilter::ERROR,
    LevelFilter::WARN,
    LevelFilter::INFO,
    LevelFilter::DEBUG,
    LevelFilter::TRACE,
];

/// one level more verbose
fn raise(level: LevelFilter) -> LevelFilter {
    let pos = LADDER.iter().position(|l| *l == level).unwrap_or(0);
    LADDER[(pos + 1).min(LADDER.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raise() {
        assert_eq!(raise(LevelFilter::WARN), LevelFilter::INFO);
        assert_eq!(raise(LevelFilter::TRACE), LevelFilter::TRACE);
        assert_eq!(raise(LevelFilter::OFF), LevelFilter::ERROR);
    }
}
