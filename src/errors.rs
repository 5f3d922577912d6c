//! Unified application error type.
//! All modules (tcx, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

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

    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Output file {} already exists, pass --force to replace it", .0.display())]
    OutputExists(PathBuf),

    // ---------------------------
    // Document errors
    // ---------------------------
    #[error("Malformed XML in {file}: {message}")]
    Xml { file: String, message: String },

    #[error("Missing required element '{path}' in {file}")]
    MissingField { file: String, path: String },

    #[error("Serialization error: {0}")]
    Serialize(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid timestamp format: '{0}'")]
    InvalidTimestamp(String),

    #[error("Invalid timestamp '{value}' at '{path}' in {file}")]
    Format {
        file: String,
        path: String,
        value: String,
    },

    #[error("Invalid number '{value}' at '{path}' in {file}")]
    InvalidNumber {
        file: String,
        path: String,
        value: String,
    },

    #[error("Invalid break definition: {0}")]
    InvalidBreak(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
