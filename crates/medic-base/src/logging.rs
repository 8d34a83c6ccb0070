use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// Environment variable that overrides the build-mode default level.
pub const LEVEL_ENV: &str = "MEDIC_LOG";

/// Where log lines end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    Stdout,
    /// One `YYYY-MM-DD.log` file per day inside the directory.
    Directory(PathBuf),
}

/// Logger configuration.
///
/// Defaults to stdout at `Debug` in debug builds and `Info` in release builds.
#[derive(Debug, Clone)]
pub struct LogConfig {
    sink: LogSink,
    level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            sink: LogSink::Stdout,
            level: default_level(),
        }
    }
}

impl LogConfig {
    /// Default configuration with the level taken from `MEDIC_LOG` when set
    /// to something parseable.
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var(LEVEL_ENV).ok().as_deref().and_then(parse_level) {
            Some(level) => config.with_level(level),
            None => config,
        }
    }

    pub fn with_sink(mut self, sink: LogSink) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    pub fn sink(&self) -> &LogSink {
        &self.sink
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }
}

fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Parse a level name (`off`, `error`, `warn`, `info`, `debug`, `trace`),
/// ignoring case and surrounding whitespace.
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse::<LevelFilter>().ok()
}

struct DailyFile {
    dir: PathBuf,
    date: String,
    file: File,
}

impl DailyFile {
    fn open(dir: &Path) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let date = format_today();
        let file = open_day(dir, &date)?;
        Ok(Self {
            dir: dir.to_path_buf(),
            date,
            file,
        })
    }

    fn write_line(&mut self, line: &str) {
        let today = format_today();
        if today != self.date {
            match open_day(&self.dir, &today) {
                Ok(file) => {
                    self.file = file;
                    self.date = today;
                }
                // keep writing to yesterday's file
                Err(e) => eprintln!("cannot roll log file in {:?}: {}", self.dir, e),
            }
        }
        if let Err(e) = writeln!(self.file, "{}", line) {
            eprintln!("cannot write log file: {}", e);
            eprintln!("{}", line);
        }
    }
}

fn open_day(dir: &Path, date: &str) -> io::Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(format!("{}.log", date)))
}

enum Target {
    Stdout,
    Daily(Mutex<DailyFile>),
}

struct MedicLogger {
    target: Target,
}

impl Log for MedicLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(
            record.level(),
            record.file().unwrap_or("unknown"),
            record.line().unwrap_or(0),
            record.args(),
        );
        match &self.target {
            Target::Stdout => println!("{}", line),
            Target::Daily(file) => file
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .write_line(&line),
        }
    }

    fn flush(&self) {
        match &self.target {
            Target::Stdout => {
                io::stdout().flush().ok();
            }
            Target::Daily(file) => {
                file.lock()
                    .unwrap_or_else(|e| e.into_inner())
                    .file
                    .flush()
                    .ok();
            }
        }
    }
}

/// Format one log line: `timestamp [LEVEL] [thread:id] file:line - message`.
pub fn format_line(level: Level, file: &str, line: u32, message: impl fmt::Display) -> String {
    format!(
        "{} [{}] [thread:{:?}] {}:{} - {}",
        format_timestamp(),
        level,
        std::thread::current().id(),
        file,
        line,
        message
    )
}

fn unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Current UTC time as `YYYY-MM-DDTHH:MM:SS`.
pub fn format_timestamp() -> String {
    let secs = unix_seconds();
    let (year, month, day) = civil_from_days((secs / 86400) as i64);
    let rem = secs % 86400;
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
        year,
        month,
        day,
        rem / 3600,
        (rem % 3600) / 60,
        rem % 60
    )
}

/// Current UTC date as `YYYY-MM-DD`.
pub fn format_today() -> String {
    let (year, month, day) = civil_from_days((unix_seconds() / 86400) as i64);
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Days since 1970-01-01 to (year, month, day), Howard Hinnant's algorithm.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = (z - era * 146097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe as i64 + era * 400 + if month <= 2 { 1 } else { 0 };
    (year, month, day)
}

/// Install the global logger described by `config`.
///
/// Only the first call per process installs a logger; later calls are
/// ignored. Fails only when the log directory cannot be created or opened.
pub fn init_logger(config: &LogConfig) -> io::Result<()> {
    let target = match config.sink() {
        LogSink::Stdout => Target::Stdout,
        LogSink::Directory(dir) => Target::Daily(Mutex::new(DailyFile::open(dir)?)),
    };
    let logger: &'static MedicLogger = Box::leak(Box::new(MedicLogger { target }));
    if log::set_logger(logger).is_ok() {
        log::set_max_level(config.level());
    }
    Ok(())
}

/// Install a stdout logger using `MEDIC_LOG` or the build-mode default level.
pub fn init_stdout_logger() {
    // stdout needs no I/O setup, so this cannot fail
    let _ = init_logger(&LogConfig::from_env());
}

/// Log at error level, flush stdout and exit with status 1.
#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)*) => {{
        $crate::log::error!($($arg)*);
        {
            use std::io::Write;
            let _ = std::io::stdout().flush();
        }
        std::process::exit(1)
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_civil_from_days_epoch() {
        assert_eq!(civil_from_days(0), (1970, 1, 1));
    }

    #[test]
    fn test_civil_from_days_leap_day() {
        assert_eq!(civil_from_days(11016), (2000, 2, 29));
    }

    #[test]
    fn test_civil_from_days_new_year() {
        // 2025-01-01
        assert_eq!(civil_from_days(20089), (2025, 1, 1));
    }

    #[test]
    fn test_timestamp_shape() {
        let ts = format_timestamp();
        assert_eq!(ts.len(), 19);
        assert_eq!(&ts[10..11], "T");
        assert_eq!(&ts[13..14], ":");
    }
}
