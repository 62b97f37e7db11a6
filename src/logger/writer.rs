//! Log sinks
//!
//! Routes log lines to stdout/stderr or to append-only files, behind a
//! process-wide writer initialized once at startup.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

static WRITER: OnceLock<LogWriter> = OnceLock::new();

/// Destination for one log stream
enum LogSink {
    Stdout,
    Stderr,
    File(Mutex<File>),
}

impl LogSink {
    fn write_line(&self, line: &str) {
        match self {
            Self::Stdout => println!("{line}"),
            Self::Stderr => eprintln!("{line}"),
            Self::File(file) => {
                if let Ok(mut f) = file.lock() {
                    let _ = writeln!(f, "{line}");
                }
            }
        }
    }
}

/// Process-wide log writer with separate access and error streams
pub struct LogWriter {
    access: LogSink,
    error: LogSink,
}

impl LogWriter {
    fn new(access_log_file: Option<&str>, error_log_file: Option<&str>) -> io::Result<Self> {
        let access = match access_log_file {
            Some(path) => LogSink::File(Mutex::new(open_append(path)?)),
            None => LogSink::Stdout,
        };
        let error = match error_log_file {
            Some(path) => LogSink::File(Mutex::new(open_append(path)?)),
            None => LogSink::Stderr,
        };
        Ok(Self { access, error })
    }

    pub fn write_access(&self, line: &str) {
        self.access.write_line(line);
    }

    pub fn write_error(&self, line: &str) {
        self.error.write_line(line);
    }
}

/// Open a log file for appending, creating parent directories as needed
fn open_append(path: &str) -> io::Result<File> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Initialize the global writer; call once at startup
pub fn init(access_log_file: Option<&str>, error_log_file: Option<&str>) -> io::Result<()> {
    let writer = LogWriter::new(access_log_file, error_log_file)?;
    WRITER.set(writer).map_err(|_| {
        io::Error::new(io::ErrorKind::AlreadyExists, "Log writer already initialized")
    })
}

/// Get the global writer, if initialized
pub fn get() -> Option<&'static LogWriter> {
    WRITER.get()
}
