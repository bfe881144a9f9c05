//! Generate a phone-number wordlist for one area code.
//!
//! Enumerates local numbers `0..limit` in ascending order, renders each one
//! into the ten fixed formats and streams the result to a sink through a
//! bounded [`WordlistWriter`]. The flush threshold only changes memory
//! footprint and write granularity, never the bytes produced.
//!
//! A failed write aborts the run immediately. Blocks already written stay
//! in the sink; there is no rollback.

use crate::area_code::AreaCode;
use crate::config::{format_count, DEFAULT_FLUSH_THRESHOLD, DEFAULT_LIMIT, MAX_LIMIT};
use crate::error::{Result, WordlistError};
use crate::format::LocalNumber;
use crate::writer::{WordlistWriter, WriteCounters};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Configuration for the generate command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateConfig {
    /// Local numbers to generate, starting from 0000000 (exclusive bound).
    pub limit: u32,
    /// Numbers buffered between writes.
    pub flush_every: usize,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            flush_every: DEFAULT_FLUSH_THRESHOLD,
        }
    }
}

impl GenerateConfig {
    /// Check the limit and threshold before any output is created.
    pub fn validate(&self) -> Result<()> {
        if self.limit == 0 {
            return Err(WordlistError::InvalidLimit(
                "Limit must be a positive integer.".to_string(),
            ));
        }
        check_limit(self.limit)?;
        if self.flush_every == 0 {
            return Err(WordlistError::InvalidFlushThreshold(self.flush_every));
        }
        Ok(())
    }
}

fn check_limit(limit: u32) -> Result<()> {
    if limit > MAX_LIMIT {
        return Err(WordlistError::InvalidLimit(format!(
            "Limit must not exceed {} (all 7-digit numbers), got {}.",
            MAX_LIMIT, limit
        )));
    }
    Ok(())
}

/// Statistics from a generate run.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct GenerateStats {
    pub numbers: u64,
    pub lines: u64,
    pub bytes: u64,
    pub flushes: u64,
    pub peak_buffer_bytes: usize,
    pub elapsed_secs: f64,
}

impl GenerateStats {
    fn from_counters(counters: WriteCounters, started: Instant) -> Self {
        Self {
            numbers: counters.numbers,
            lines: counters.lines,
            bytes: counters.bytes,
            flushes: counters.flushes,
            peak_buffer_bytes: counters.peak_block_bytes,
            elapsed_secs: started.elapsed().as_secs_f64(),
        }
    }
}

impl std::fmt::Display for GenerateStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} lines for {} numbers in {} {}, {} bytes, peak buffer {} bytes ({:.1}s)",
            format_count(self.lines),
            format_count(self.numbers),
            self.flushes,
            if self.flushes == 1 { "flush" } else { "flushes" },
            self.bytes,
            self.peak_buffer_bytes,
            self.elapsed_secs
        )
    }
}

/// Render local numbers `0..limit` for `area_code` into `sink`.
///
/// Lines are grouped ten per number in ascending numeric order, each
/// terminated by `\n`. A `limit` of 0 writes nothing.
///
/// # Example
///
/// ```
/// use phonesmith::{generate, AreaCode};
///
/// let mut out = Vec::new();
/// let stats = generate(&AreaCode::parse("555").unwrap(), &mut out, 2, 1000).unwrap();
/// assert_eq!(stats.lines, 20);
/// assert!(String::from_utf8(out).unwrap().ends_with("\n0000001\n"));
/// ```
pub fn generate<W: Write>(
    area_code: &AreaCode,
    sink: &mut W,
    limit: u32,
    flush_threshold: usize,
) -> Result<GenerateStats> {
    check_limit(limit)?;
    let started = Instant::now();
    let mut writer = WordlistWriter::new(sink, flush_threshold)?;
    let mut itoa_buf = itoa::Buffer::new();

    for i in 0..limit {
        let num = LocalNumber::with_buffer(i, &mut itoa_buf).ok_or_else(|| {
            WordlistError::InvalidLimit(format!("{} does not fit in 7 digits", i))
        })?;
        writer.push_number(area_code, &num)?;
    }

    let (counters, _) = writer.finish()?;
    Ok(GenerateStats::from_counters(counters, started))
}

/// Generate command.
pub struct GenerateCommand {
    area_code: AreaCode,
    config: GenerateConfig,
}

impl GenerateCommand {
    /// Create a new generate command with the given config.
    pub fn new(area_code: AreaCode, config: GenerateConfig) -> Self {
        Self { area_code, config }
    }

    pub fn area_code(&self) -> &AreaCode {
        &self.area_code
    }

    /// Run the generation against an already-open sink.
    pub fn run<W: Write>(&self, sink: &mut W) -> Result<GenerateStats> {
        self.config.validate()?;
        self.write_wordlist(sink)
    }

    /// Create (or truncate) `path` and write the wordlist to it.
    ///
    /// The config is checked before the file is touched. The file is
    /// synced to disk before returning. On failure the file is closed with
    /// whatever blocks were already written.
    pub fn run_to_path(&self, path: &Path) -> Result<GenerateStats> {
        self.config.validate()?;
        let mut file = File::create(path)?;
        let stats = self.write_wordlist(&mut file)?;
        file.sync_all()?;
        info!(path = %path.display(), "wordlist saved");
        Ok(stats)
    }

    /// Generation proper; expects an already validated config.
    fn write_wordlist<W: Write>(&self, sink: &mut W) -> Result<GenerateStats> {
        info!(
            area_code = %self.area_code,
            limit = self.config.limit,
            flush_every = self.config.flush_every,
            "generating wordlist"
        );

        let stats = generate(
            &self.area_code,
            sink,
            self.config.limit,
            self.config.flush_every,
        )?;

        info!(
            lines = stats.lines,
            flushes = stats.flushes,
            elapsed_secs = stats.elapsed_secs,
            "wordlist complete"
        );
        Ok(stats)
    }
}
