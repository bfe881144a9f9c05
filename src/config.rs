//! Runtime configuration constants for PhoneSmith.
//!
//! Nothing here is read implicitly by the generator: the defaults are
//! handed to [`GenerateConfig`](crate::commands::GenerateConfig) by the
//! caller so every run is fully determined by its inputs.

/// Lines emitted per local number, one per output format.
pub const LINES_PER_NUMBER: usize = 10;

/// Width of a zero-padded local number.
pub const LOCAL_NUMBER_DIGITS: usize = 7;

/// Size of the full local-number space (0000000..=9999999).
pub const MAX_LIMIT: u32 = 10_000_000;

/// Numbers generated when no limit is given.
pub const DEFAULT_LIMIT: u32 = MAX_LIMIT;

/// Numbers buffered between writes (10,000 lines).
pub const DEFAULT_FLUSH_THRESHOLD: usize = 1_000;

/// Count specification (parses 5K, 1M, 100, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpec {
    pub count: u64,
}

impl SizeSpec {
    /// Parse a count from a string (e.g., "1K", "10M", "100").
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_uppercase();
        if s.is_empty() {
            return None;
        }

        let (num_part, multiplier) = if let Some(n) = s.strip_suffix('K') {
            (n, 1_000u64)
        } else if let Some(n) = s.strip_suffix('M') {
            (n, 1_000_000u64)
        } else {
            (s.as_str(), 1u64)
        };

        num_part
            .parse::<u64>()
            .ok()
            .and_then(|n| n.checked_mul(multiplier))
            .map(|count| Self { count })
    }
}

/// Format a count using K/M suffixes when it divides evenly.
pub fn format_count(count: u64) -> String {
    if count >= 1_000_000 && count % 1_000_000 == 0 {
        format!("{}M", count / 1_000_000)
    } else if count >= 1_000 && count % 1_000 == 0 {
        format!("{}K", count / 1_000)
    } else {
        count.to_string()
    }
}
