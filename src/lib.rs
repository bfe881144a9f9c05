// Clippy allows for the whole crate
#![allow(clippy::should_implement_trait)]

//! PhoneSmith: phone-number wordlist generation.
//!
//! This library renders every 7-digit local number of an area code into
//! ten fixed textual formats and writes them as a newline-delimited
//! wordlist.
//!
//! # Features
//!
//! - **Deterministic output**: ten lines per number, ascending order
//! - **Bounded memory**: output is buffered per block of numbers, never
//!   per file, so the full 10M-number space streams in constant memory
//! - **Any sink**: generation writes to any [`std::io::Write`]
//!
//! # Example
//!
//! ```rust,no_run
//! use phonesmith::{AreaCode, GenerateCommand, GenerateConfig};
//! use std::path::Path;
//!
//! let area_code = AreaCode::parse("555").unwrap();
//! let cmd = GenerateCommand::new(area_code, GenerateConfig::default());
//! let stats = cmd.run_to_path(Path::new("555-wordlist.txt")).unwrap();
//! println!("{}", stats);
//! ```

pub mod area_code;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod output;
pub mod writer;

// Re-export commonly used types
pub use area_code::AreaCode;
pub use commands::{generate, GenerateCommand, GenerateConfig, GenerateStats};
pub use error::{Result, WordlistError};
pub use format::{format_numbers, LocalNumber};
pub use output::{default_output_path, resolve_output_path};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
