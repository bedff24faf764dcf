//! Stderr logger for the `log` facade.

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::error::ShellError;
use crate::flags::Flags;

pub struct ShellLogger;

static LOGGER: ShellLogger = ShellLogger;

impl Log for ShellLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let tag = match record.level() {
            Level::Error => "error",
            Level::Warn => "warn",
            Level::Info => "info",
            Level::Debug => "debug",
            Level::Trace => "trace",
        };
        eprintln!("[myshell {} {}] {}", tag, record.target(), record.args());
    }

    fn flush(&self) {}
}

/// Pick the log level from the command-line flags.
///
/// `--quiet` wins over `--debug`.
pub fn level_for(flags: &Flags) -> LevelFilter {
    if flags.is_set("quiet") {
        LevelFilter::Off
    } else if flags.is_set("debug") {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Install the logger. Only the first call in a process succeeds.
pub fn init(level: LevelFilter) -> Result<(), ShellError> {
    log::set_logger(&LOGGER).map_err(|_| ShellError::LoggerInit)?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(values: &[&str]) -> Flags {
        let mut flags = Flags::new();
        let args: Vec<String> = values.iter().map(|s| s.to_string()).collect();
        flags.parse(&args).unwrap();
        flags
    }

    #[test]
    fn test_level_for_flags() {
        assert_eq!(level_for(&flags(&[])), LevelFilter::Warn);
        assert_eq!(level_for(&flags(&["-d"])), LevelFilter::Debug);
        assert_eq!(level_for(&flags(&["-d", "-q"])), LevelFilter::Off);
    }
}
