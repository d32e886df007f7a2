//! Process-wide log sinks
//!
//! Access and info lines share one sink, errors and warnings another. Each
//! sink is a console stream unless a file path is configured.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use super::level::Level;

static LOG_WRITER: OnceLock<LogWriter> = OnceLock::new();

enum Sink {
    Stdout,
    Stderr,
    File(Mutex<File>),
}

impl Sink {
    fn open(path: Option<&str>, console: Self) -> io::Result<Self> {
        match path {
            Some(path) => Ok(Self::File(Mutex::new(append_to(path)?))),
            None => Ok(console),
        }
    }

    fn write_line(&self, line: &str) {
        match self {
            Self::Stdout => println!("{line}"),
            Self::Stderr => eprintln!("{line}"),
            Self::File(file) => {
                // A poisoned or failing log file must not take a request down
                if let Ok(mut f) = file.lock() {
                    let _ = writeln!(f, "{line}");
                }
            }
        }
    }
}

pub struct LogWriter {
    level: Level,
    access: Sink,
    error: Sink,
}

impl LogWriter {
    fn new(
        level: Level,
        access_log_file: Option<&str>,
        error_log_file: Option<&str>,
    ) -> io::Result<Self> {
        Ok(Self {
            level,
            access: Sink::open(access_log_file, Sink::Stdout)?,
            error: Sink::open(error_log_file, Sink::Stderr)?,
        })
    }

    pub const fn level(&self) -> Level {
        self.level
    }

    pub fn write_access(&self, message: &str) {
        self.access.write_line(message);
    }

    /// Lifecycle and info lines land next to the access log.
    pub fn write_info(&self, message: &str) {
        self.access.write_line(message);
    }

    pub fn write_error(&self, message: &str) {
        self.error.write_line(message);
    }
}

/// Opens `path` for appending, creating missing parent directories.
fn append_to(path: &str) -> io::Result<File> {
    if let Some(dir) = Path::new(path).parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global writer. Fails if a log file cannot be opened or the
/// writer is already installed.
pub fn init(
    level: Level,
    access_log_file: Option<&str>,
    error_log_file: Option<&str>,
) -> io::Result<()> {
    let writer = LogWriter::new(level, access_log_file, error_log_file)?;
    LOG_WRITER
        .set(writer)
        .map_err(|_| io::Error::new(io::ErrorKind::AlreadyExists, "logger already initialised"))
}

pub fn get() -> Option<&'static LogWriter> {
    LOG_WRITER.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_sinks_append_lines() {
        let dir = std::env::temp_dir().join(format!("author_catalog_logs_{}", std::process::id()));
        let access = dir.join("access.log");
        let error = dir.join("nested").join("error.log");

        let writer = LogWriter::new(Level::Warn, access.to_str(), error.to_str()).unwrap();
        assert_eq!(writer.level(), Level::Warn);
        writer.write_access("GET /authors 200");
        writer.write_error("[ERROR] Failed to retrieve authors");
        writer.write_error("[ERROR] again");

        assert_eq!(std::fs::read_to_string(&access).unwrap(), "GET /authors 200\n");
        assert_eq!(std::fs::read_to_string(&error).unwrap().lines().count(), 2);
        std::fs::remove_dir_all(dir).unwrap();
    }
}
