use chrono::Local;
use once_cell::sync::Lazy;
use std::{
    fmt,
    fs::OpenOptions,
    io::Write,
    path::PathBuf,
    sync::Mutex,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Warn,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        };
        write!(f, "{}", tag)
    }
}

/// Log file target. `None` until [`init_logger`] runs; the terminal owns
/// stdout, so nothing is ever printed.
static LOG_FILE: Lazy<Mutex<Option<PathBuf>>> = Lazy::new(|| Mutex::new(None));

fn format_line(level: Level, message: &str) -> String {
    format!(
        "[{}] {} - {}",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        level,
        message
    )
}

fn log(level: Level, message: &str) {
    let Ok(target) = LOG_FILE.lock() else {
        return;
    };
    let Some(path) = target.as_ref() else {
        return;
    };
    // write failures are dropped
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = writeln!(file, "{}", format_line(level, message));
    }
}

pub fn init_logger(log_path: PathBuf) {
    if let Ok(mut target) = LOG_FILE.lock() {
        *target = Some(log_path);
    }
}

pub fn log_info(message: &str) {
    log(Level::Info, message);
}

pub fn log_warning(message: &str) {
    log(Level::Warn, message);
}

pub fn log_error(message: &str) {
    log(Level::Error, message);
}
