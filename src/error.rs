//! Error types for wordlist generation.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while validating input or writing a wordlist.
#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    InvalidAreaCode(String),

    #[error("{0}")]
    InvalidLimit(String),

    #[error("Flush threshold must be a positive number of phone numbers, got {0}.")]
    InvalidFlushThreshold(usize),

    #[error("Output path must be a file, not a directory: {}", .0.display())]
    OutputIsDirectory(PathBuf),
}

pub type Result<T> = std::result::Result<T, WordlistError>;
