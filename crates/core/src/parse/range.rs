//! Memory range specifications.
//!
//! `--dump-range=START,LENGTH,FNAME` and `--load-range=START,FNAME`. START and LENGTH are
//! numbers or symbol names; FNAME is everything after the last separator used, so it may
//! itself contain commas.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::common::ConfigError;
use crate::parse::number::resolve;
use crate::symbols::SymbolTable;

/// A memory range written to a file when the program exits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DumpRange {
    /// First address of the range.
    pub start: u32,
    /// Length of the range in bytes.
    pub length: u32,
    /// Output file.
    pub path: PathBuf,
}

/// A file of words pre-loaded into memory before the program runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadRange {
    /// Address of the first word (aligned down to a word boundary when loading).
    pub start: u32,
    /// Input file, one number per line.
    pub path: PathBuf,
}

/// Parses a `START,LENGTH,FNAME` dump range.
///
/// # Errors
///
/// Returns [`ConfigError::RangeStartMissing`] or [`ConfigError::RangeLengthMissing`] when a
/// separator is absent and [`ConfigError::RangeSpecification`] when START or LENGTH cannot
/// be resolved.
pub fn parse_dump_range(
    raw: &str,
    symbols: Option<&dyn SymbolTable>,
) -> Result<DumpRange, ConfigError> {
    let (start, rest) = raw.split_once(',').ok_or(ConfigError::RangeStartMissing)?;
    let (length, path) = rest.split_once(',').ok_or(ConfigError::RangeLengthMissing)?;

    let range = DumpRange {
        start: resolve(start, symbols).map_err(ConfigError::RangeSpecification)?,
        length: resolve(length, symbols).map_err(ConfigError::RangeSpecification)?,
        path: PathBuf::from(path),
    };
    tracing::debug!(start = range.start, length = range.length, path = %range.path.display(), "Dump range");
    Ok(range)
}

/// Parses a `START,FNAME` load range.
///
/// # Errors
///
/// Returns [`ConfigError::RangeStartMissing`] when the separator is absent and
/// [`ConfigError::RangeSpecification`] when START cannot be resolved.
pub fn parse_load_range(
    raw: &str,
    symbols: Option<&dyn SymbolTable>,
) -> Result<LoadRange, ConfigError> {
    let (start, path) = raw.split_once(',').ok_or(ConfigError::RangeStartMissing)?;

    let range = LoadRange {
        start: resolve(start, symbols).map_err(ConfigError::RangeSpecification)?,
        path: PathBuf::from(path),
    };
    tracing::debug!(start = range.start, path = %range.path.display(), "Load range");
    Ok(range)
}
