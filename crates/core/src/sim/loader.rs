//! Memory range loader.
//!
//! This module pre-loads memory from plain-text files before the program runs. It performs:
//! 1. **Alignment:** The start address is aligned down to a word boundary.
//! 2. **Parsing:** Each non-blank line holds one unsigned number (auto-detected base).
//! 3. **Writing:** Successive values are stored in successive words.
//!
//! A malformed line stops the load; words from earlier lines have already been written.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::common::ConfigError;
use crate::common::constants::{WORD_ALIGN_MASK, WORD_BYTES};
use crate::parse::number::parse_unsigned;
use crate::parse::range::LoadRange;
use crate::sim::traits::MemoryWrite;

/// Characters stripped from both ends of each line.
const LINE_TRIM: &[char] = &[' ', '\t', '\n', '\r'];

/// Loads the file named by `range` into `memory`.
///
/// # Errors
///
/// See [`load_words`].
pub fn load_range<M: MemoryWrite + ?Sized>(
    memory: &mut M,
    range: &LoadRange,
) -> Result<usize, ConfigError> {
    load_file(memory, range.start, &range.path)
}

/// Opens `path` and loads it into `memory` starting at `start`.
///
/// # Errors
///
/// Returns [`ConfigError::RangeFile`] if the file cannot be opened, otherwise see
/// [`load_words`].
pub fn load_file<M: MemoryWrite + ?Sized>(
    memory: &mut M,
    start: u32,
    path: &Path,
) -> Result<usize, ConfigError> {
    let file = File::open(path).map_err(|source| ConfigError::RangeFile {
        path: path.to_path_buf(),
        source,
    })?;
    load_words(memory, start, BufReader::new(file), path)
}

/// Writes one word per non-blank line of `reader`, starting at `start & !3`.
///
/// `path` is only used in diagnostics. Returns the number of words written.
///
/// # Errors
///
/// Returns [`ConfigError::RangeFile`] on a read error and [`ConfigError::RangeData`] for the
/// first line that is not an unsigned 32-bit number.
pub fn load_words<M: MemoryWrite + ?Sized, R: BufRead>(
    memory: &mut M,
    start: u32,
    reader: R,
    path: &Path,
) -> Result<usize, ConfigError> {
    let mut address = start & WORD_ALIGN_MASK;
    let mut written = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| ConfigError::RangeFile {
            path: path.to_path_buf(),
            source,
        })?;
        let text = line.trim_matches(LINE_TRIM);
        if text.is_empty() {
            continue;
        }

        let value = parse_unsigned(text).ok_or_else(|| ConfigError::RangeData {
            path: path.to_path_buf(),
            line: idx + 1,
            text: text.to_owned(),
        })?;
        tracing::trace!(address, value, "Pre-load word");
        memory.write_word(address, value);
        address = address.wrapping_add(WORD_BYTES);
        written += 1;
    }

    tracing::debug!(path = %path.display(), start, words = written, "Loaded memory range");
    Ok(written)
}
