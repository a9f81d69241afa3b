use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use flume::{Receiver, Sender};
use log::{LevelFilter, Log, Metadata, Record};

use crate::{config::LoggerConfig, consts::CACHE_DIR, consts::LOG_FILE_HEADER};

enum LogMessage {
    Line(String),
    Flush(Sender<()>),
}

/// A [`Log`] that hands formatted records to a writer thread.
pub struct FileLogger {
    level: LevelFilter,
    sender: Sender<LogMessage>,
}

impl FileLogger {
    /// Truncates `path` and spawns the thread writing to it.
    pub fn open(path: &Path, level: LevelFilter) -> std::io::Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = File::create(path)?;
        file.write_all(LOG_FILE_HEADER.as_bytes())?;
        let (sender, receiver) = flume::unbounded::<LogMessage>();
        std::thread::spawn(move || write_loop(file, receiver));
        Ok(Self { level, sender })
    }
}

fn write_loop(mut file: File, receiver: Receiver<LogMessage>) {
    let mut buffer = String::new();
    while let Ok(message) = receiver.recv() {
        let mut next = Some(message);
        while let Some(message) = next.take() {
            match message {
                LogMessage::Line(line) => {
                    buffer.push_str(&line);
                    buffer.push('\n');
                }
                LogMessage::Flush(done) => {
                    write_buffer(&mut file, &mut buffer);
                    let _ = file.flush();
                    let _ = done.send(());
                }
            }
            next = receiver.try_recv().ok();
        }
        write_buffer(&mut file, &mut buffer);
    }
}

fn write_buffer(file: &mut File, buffer: &mut String) {
    if !buffer.is_empty() {
        // Nowhere left to report a failing log file.
        let _ = file.write_all(buffer.as_bytes());
        buffer.clear();
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] {}: {}", record.level(), record.target(), record.args());
        let _ = self.sender.send(LogMessage::Line(line));
    }

    /// Blocks until every record sent so far is written.
    fn flush(&self) {
        let (done, wait) = flume::bounded(1);
        if self.sender.send(LogMessage::Flush(done)).is_ok() {
            let _ = wait.recv();
        }
    }
}

/// Path of the log file when the config doesn't name one.
pub fn default_log_path() -> PathBuf {
    CACHE_DIR.join("log.txt")
}

/// Installs the global logger as configured.
pub fn init(config: &LoggerConfig) -> std::io::Result<()> {
    if !config.enabled {
        return Ok(());
    }
    let path = config.file.clone().unwrap_or_else(default_log_path);
    let logger = FileLogger::open(&path, config.level)?;
    log::set_boxed_logger(Box::new(logger))
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    log::set_max_level(config.level);
    Ok(())
}
