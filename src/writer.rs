//! Bounded, block-oriented wordlist output.
//!
//! Rendered lines accumulate in a single byte block. Once `flush_every`
//! numbers are pending, the block goes to the sink in one `write_all` and
//! is cleared, so peak memory is at most `flush_every * BATCH_BYTES`
//! regardless of how many numbers are written. Up-front reservation is
//! capped at [`RESERVED_NUMBERS`]; larger thresholds grow the block on
//! demand.

use crate::area_code::AreaCode;
use crate::config::{DEFAULT_FLUSH_THRESHOLD, LINES_PER_NUMBER};
use crate::error::{Result, WordlistError};
use crate::format::{write_formats, LocalNumber, BATCH_BYTES};
use std::io::Write;
use tracing::debug;

/// Most numbers' worth of block space reserved when a writer is created.
pub const RESERVED_NUMBERS: usize = DEFAULT_FLUSH_THRESHOLD;

/// Counters collected while writing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WriteCounters {
    /// Numbers rendered.
    pub numbers: u64,
    /// Lines written to the sink.
    pub lines: u64,
    /// Bytes written to the sink.
    pub bytes: u64,
    /// Blocks written to the sink.
    pub flushes: u64,
    /// Largest block held in memory before a flush.
    pub peak_block_bytes: usize,
}

/// Buffered wordlist writer over any [`Write`] sink.
pub struct WordlistWriter<W: Write> {
    sink: W,
    block: Vec<u8>,
    pending: usize,
    flush_every: usize,
    counters: WriteCounters,
}

impl<W: Write> WordlistWriter<W> {
    /// Create a writer that flushes every `flush_every` numbers.
    pub fn new(sink: W, flush_every: usize) -> Result<Self> {
        if flush_every == 0 {
            return Err(WordlistError::InvalidFlushThreshold(flush_every));
        }
        Ok(Self {
            sink,
            block: Vec::with_capacity(flush_every.min(RESERVED_NUMBERS) * BATCH_BYTES),
            pending: 0,
            flush_every,
            counters: WriteCounters::default(),
        })
    }

    /// Render one number into the block, flushing if the threshold is hit.
    #[inline]
    pub fn push_number(&mut self, area_code: &AreaCode, num: &LocalNumber) -> Result<()> {
        write_formats(&mut self.block, area_code, num);
        self.pending += 1;
        self.counters.numbers += 1;
        if self.pending >= self.flush_every {
            self.flush_block()?;
        }
        Ok(())
    }

    /// Write the pending block, if any, and clear it.
    pub fn flush_block(&mut self) -> Result<()> {
        if self.pending == 0 {
            return Ok(());
        }
        self.counters.peak_block_bytes = self.counters.peak_block_bytes.max(self.block.len());
        self.sink.write_all(&self.block)?;

        self.counters.lines += (self.pending * LINES_PER_NUMBER) as u64;
        self.counters.bytes += self.block.len() as u64;
        self.counters.flushes += 1;
        debug!(
            numbers = self.counters.numbers,
            bytes = self.block.len(),
            "flushed wordlist block"
        );

        self.block.clear();
        self.pending = 0;
        Ok(())
    }

    /// Write the final partial block and flush the sink.
    pub fn finish(mut self) -> Result<(WriteCounters, W)> {
        self.flush_block()?;
        self.sink.flush().map_err(WordlistError::Io)?;
        Ok((self.counters, self.sink))
    }

    /// Numbers rendered but not yet written.
    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn counters(&self) -> &WriteCounters {
        &self.counters
    }
}
