//! Unified application error type.
//! All modules (data, stats, session, cli, config) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Input closed while waiting for an answer")]
    InputClosed,

    // ---------------------------
    // Data source
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Data file not found: {}", .0.display())]
    DataFileNotFound(PathBuf),

    #[error("Column '{}' is missing in {}", .column, .file.display())]
    MissingColumn { file: PathBuf, column: String },

    #[error("Invalid timestamp at line {line}: '{value}'")]
    InvalidTimestamp { line: u64, value: String },

    #[error("Invalid number in column '{column}' at line {line}: '{value}'")]
    InvalidNumber {
        line: u64,
        column: String,
        value: String,
    },

    // ---------------------------
    // Selection
    // ---------------------------
    #[error("Invalid {kind}: '{value}'")]
    InvalidSelection { kind: &'static str, value: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type AppResult<T> = Result<T, AppError>;
