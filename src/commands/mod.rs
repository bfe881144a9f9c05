//! Command implementations for PhoneSmith.

pub mod generate;

pub use generate::{generate, GenerateCommand, GenerateConfig, GenerateStats};
