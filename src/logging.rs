//! Logging sink for the command-line host.
//!
//! The library only talks to the `log` facade. The binary installs
//! `env_logger`, writing to `<stem>.log` beside the glossary and, with
//! `--verbose`, to stderr as well.

use chrono::Local;
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::error::GlossaryError;
use crate::paths;

const LINE_TIME_FORMAT: &str = "%m/%d/%Y %I:%M:%S %p";

/// Writer that copies every log line to stderr when echo is on
pub(crate) struct LogWriter<W: Write> {
    sink: W,
    echo: bool,
}

impl<W: Write> LogWriter<W> {
    pub(crate) fn new(sink: W, echo: bool) -> Self {
        Self { sink, echo }
    }
}

impl<W: Write> Write for LogWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.sink.write_all(buf)?;
        if self.echo {
            // stderr is best-effort
            let _ = io::stderr().write_all(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }
}

/// Install the global logger for the glossary at `glossary_path`
pub fn init(glossary_path: &Path, verbose: bool) -> Result<(), GlossaryError> {
    let log_path = paths::log_path_for(glossary_path);

    if let Some(parent) = log_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| GlossaryError::PersistenceError(e.to_string()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|e| {
            GlossaryError::PersistenceError(format!("Failed to open {:?}: {}", log_path, e))
        })?;

    let default_level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] {}",
                Local::now().format(LINE_TIME_FORMAT),
                record.level(),
                record.args()
            )
        })
        .target(Target::Pipe(Box::new(LogWriter::new(file, verbose))))
        .try_init()
        .map_err(|e| GlossaryError::PersistenceError(e.to_string()))
}

#[cfg(test)]
#[path = "logging_test.rs"]
mod tests;
