//! Phone-number rendering.
//!
//! Every local number is rendered into ten fixed formats, always in the
//! same order. Consumers of a wordlist may rely on that order, so the
//! table below is the single source of truth for both the owned-string
//! API ([`format_numbers`]) and the allocation-free hot path
//! ([`write_formats`]).
//!
//! | # | Template                 | Example (555, 0001234) |
//! |---|--------------------------|------------------------|
//! | 1 | `AAANNNNNNN`             | `5550001234`           |
//! | 2 | `1+AAANNNNNNN`           | `1+5550001234`         |
//! | 3 | `1AAANNNNNNN`            | `15550001234`          |
//! | 4 | `AAA-PPP-LLLL`           | `555-000-1234`         |
//! | 5 | `1-AAA-PPP-LLLL`         | `1-555-000-1234`       |
//! | 6 | `1+AAA-PPP-LLLL`         | `1+555-000-1234`       |
//! | 7 | `(AAA) PPP-LLLL`         | `(555) 000-1234`       |
//! | 8 | `1 (AAA) PPP-LLLL`       | `1 (555) 000-1234`     |
//! | 9 | `+1 AAA PPP LLLL`        | `+1 555 000 1234`      |
//! | 10| `NNNNNNN`                | `0001234`              |

use crate::area_code::AreaCode;
use crate::config::{LINES_PER_NUMBER, LOCAL_NUMBER_DIGITS, MAX_LIMIT};

/// Bytes appended by [`write_formats`] for one number, newlines included.
pub const BATCH_BYTES: usize = 135;

/// Digits in the exchange prefix (`PPP`).
const PREFIX_DIGITS: usize = 3;

/// A local number rendered as exactly seven zero-padded ASCII digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalNumber([u8; LOCAL_NUMBER_DIGITS]);

impl LocalNumber {
    /// Render `n` zero-padded to seven digits.
    ///
    /// Returns `None` when `n` does not fit in seven digits.
    pub fn new(n: u32) -> Option<Self> {
        Self::with_buffer(n, &mut itoa::Buffer::new())
    }

    /// Same as [`LocalNumber::new`], reusing a caller-owned itoa buffer.
    #[inline]
    pub fn with_buffer(n: u32, itoa_buf: &mut itoa::Buffer) -> Option<Self> {
        if n >= MAX_LIMIT {
            return None;
        }
        let digits = itoa_buf.format(n).as_bytes();
        let mut padded = [b'0'; LOCAL_NUMBER_DIGITS];
        padded[LOCAL_NUMBER_DIGITS - digits.len()..].copy_from_slice(digits);
        Some(Self(padded))
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; LOCAL_NUMBER_DIGITS] {
        &self.0
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

/// Render one number into all ten formats.
///
/// Inputs are expected to be already validated: a 3-digit `area_code` and
/// a 7-digit zero-padded `num`.
///
/// # Panics
///
/// Panics if `num` is shorter than three bytes.
///
/// # Example
///
/// ```
/// use phonesmith::format::format_numbers;
///
/// let batch = format_numbers("555", "0001234");
/// assert_eq!(batch[6], "(555) 000-1234");
/// assert_eq!(batch[9], "0001234");
/// ```
pub fn format_numbers(area_code: &str, num: &str) -> [String; LINES_PER_NUMBER] {
    let (p1, p2) = num.split_at(PREFIX_DIGITS);
    [
        format!("{area_code}{num}"),
        format!("1+{area_code}{num}"),
        format!("1{area_code}{num}"),
        format!("{area_code}-{p1}-{p2}"),
        format!("1-{area_code}-{p1}-{p2}"),
        format!("1+{area_code}-{p1}-{p2}"),
        format!("({area_code}) {p1}-{p2}"),
        format!("1 ({area_code}) {p1}-{p2}"),
        format!("+1 {area_code} {p1} {p2}"),
        num.to_string(),
    ]
}

/// Append all ten formats of `num` to `out`, each terminated by `\n`.
///
/// Produces exactly the bytes of `format_numbers(..).join("\n") + "\n"`
/// without allocating per line.
#[inline]
pub fn write_formats(out: &mut Vec<u8>, area_code: &AreaCode, num: &LocalNumber) {
    let ac = area_code.as_bytes().as_slice();
    let n = num.as_bytes().as_slice();
    let (p1, p2) = n.split_at(PREFIX_DIGITS);

    out.reserve(BATCH_BYTES);
    push_line(out, &[ac, n]);
    push_line(out, &[b"1+", ac, n]);
    push_line(out, &[b"1", ac, n]);
    push_line(out, &[ac, b"-", p1, b"-", p2]);
    push_line(out, &[b"1-", ac, b"-", p1, b"-", p2]);
    push_line(out, &[b"1+", ac, b"-", p1, b"-", p2]);
    push_line(out, &[b"(", ac, b") ", p1, b"-", p2]);
    push_line(out, &[b"1 (", ac, b") ", p1, b"-", p2]);
    push_line(out, &[b"+1 ", ac, b" ", p1, b" ", p2]);
    push_line(out, &[n]);
}

#[inline]
fn push_line(out: &mut Vec<u8>, parts: &[&[u8]]) {
    for part in parts {
        out.extend_from_slice(part);
    }
    out.push(b'\n');
}
