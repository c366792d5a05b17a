use std::io;
use std::path::PathBuf;

/// Errors that end the program
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("cannot open log file {}: {source}", .path.display())]
    LogFile { path: PathBuf, source: io::Error },
    #[error("failed to set up logging: {0}")]
    Logging(String),
    #[error("invalid configuration: {0}")]
    Config(String),
}
