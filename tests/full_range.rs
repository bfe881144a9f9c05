//! Full local-number space tests.
//!
//! Streams all 10M numbers through a sink that keeps only running
//! checks, verifying order and the bounded buffer without storing the
//! ~1.35 GB wordlist. Ignored by default; run with `--ignored`.

use phonesmith::config::{LINES_PER_NUMBER, MAX_LIMIT};
use phonesmith::format::BATCH_BYTES;
use phonesmith::{generate, AreaCode};
use std::io::{self, Write};

/// Sink that checks the 10th line of every group and discards the rest.
struct CheckingSink {
    line: Vec<u8>,
    lines_seen: u64,
    next_number: u32,
    largest_write: usize,
}

impl CheckingSink {
    fn new() -> Self {
        Self {
            line: Vec::with_capacity(32),
            lines_seen: 0,
            next_number: 0,
            largest_write: 0,
        }
    }
}

impl Write for CheckingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.largest_write = self.largest_write.max(buf.len());
        for &b in buf {
            if b != b'\n' {
                self.line.push(b);
                continue;
            }
            assert!(!self.line.is_empty(), "blank line at {}", self.lines_seen);
            self.lines_seen += 1;
            if self.lines_seen % LINES_PER_NUMBER as u64 == 0 {
                let expected = format!("{:07}", self.next_number);
                assert_eq!(self.line, expected.as_bytes());
                self.next_number += 1;
            }
            self.line.clear();
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
#[ignore]
fn test_full_space_bounded_buffer() {
    let flush_every = 1_000;
    let area_code = AreaCode::parse("999").unwrap();
    let mut sink = CheckingSink::new();

    let stats = generate(&area_code, &mut sink, MAX_LIMIT, flush_every).unwrap();

    assert_eq!(stats.lines, MAX_LIMIT as u64 * LINES_PER_NUMBER as u64);
    assert_eq!(stats.flushes, (MAX_LIMIT as usize / flush_every) as u64);
    assert_eq!(sink.next_number, MAX_LIMIT);
    assert!(sink.line.is_empty());

    // Memory ceiling: never more than one block of flush_every numbers.
    let ceiling = flush_every * BATCH_BYTES;
    assert!(stats.peak_buffer_bytes <= ceiling);
    assert!(sink.largest_write <= ceiling);
}

#[test]
fn test_large_run_bounded_buffer() {
    let flush_every = 64;
    let limit = 100_000;
    let area_code = AreaCode::parse("000").unwrap();
    let mut sink = CheckingSink::new();

    let stats = generate(&area_code, &mut sink, limit, flush_every).unwrap();

    assert_eq!(sink.next_number, limit);
    assert_eq!(stats.bytes, limit as u64 * BATCH_BYTES as u64);
    assert_eq!(stats.peak_buffer_bytes, flush_every * BATCH_BYTES);
    assert_eq!(sink.largest_write, flush_every * BATCH_BYTES);
}
