//! Error definitions for configuration parsing and session setup.
//!
//! This module defines the error types surfaced by the configuration front end. It provides:
//! 1. **Resolution errors:** Failures turning a numeric-or-symbolic token into an address.
//! 2. **Configuration errors:** Malformed flag values and structural violations of the command line.
//! 3. **Session errors:** Configuration errors plus failures delegated to the assembler or machine backend.
//!
//! Every error is fatal to the session; the binary reports it once and exits with status 1.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to resolve a numeric-or-symbolic token to a 32-bit value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The token was empty.
    #[error("empty value")]
    Empty,

    /// The token starts with a digit but is not a complete unsigned 32-bit number.
    #[error("`{0}` is not a valid number")]
    InvalidNumber(String),

    /// The token names a symbol the symbol table does not know.
    #[error("unknown symbol `{0}`")]
    UnknownSymbol(String),

    /// The token is symbolic but no symbol table is available.
    #[error("symbol `{0}` cannot be resolved without a symbol table")]
    NoSymbolTable(String),
}

/// Invalid command-line configuration.
///
/// Display strings are the one-line diagnostics printed before the process exits.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Zero or more than one positional input file was given.
    #[error("Single ELF file has to be specified (got {0})")]
    InputFileCount(usize),

    /// A memory access time is not an unsigned integer.
    #[error("Memory {which} time `{value}` is not a valid number of cycles")]
    MemoryTiming {
        /// Which latency (`read`, `write` or `burst`).
        which: &'static str,
        /// The rejected value.
        value: String,
    },

    /// The replacement policy token of a cache specification is unknown or empty.
    #[error("Policy for {label} cache is incorrect.")]
    CachePolicy {
        /// Cache label (`data` or `instruction`).
        label: String,
        /// The rejected token.
        token: String,
    },

    /// Fewer than three geometry fields were given.
    #[error("Parameters for {label} cache incorrect (correct lru,4,2,2,wb).")]
    CacheParameterCount {
        /// Cache label (`data` or `instruction`).
        label: String,
    },

    /// A geometry field is not a number.
    #[error("Parameter `{value}` for {label} cache is not a number (correct lru,4,2,2,wb).")]
    CacheParameter {
        /// Cache label (`data` or `instruction`).
        label: String,
        /// The rejected value.
        value: String,
    },

    /// A geometry field is zero.
    #[error("Parameters for {label} cache cannot have zero component.")]
    CacheZeroComponent {
        /// Cache label (`data` or `instruction`).
        label: String,
    },

    /// The write policy token of a cache specification is unknown.
    #[error("Write policy for {label} cache is incorrect (correct wb/wt/wtna/wta).")]
    CacheWritePolicy {
        /// Cache label (`data` or `instruction`).
        label: String,
        /// The rejected token.
        token: String,
    },

    /// A range specification has no comma after its start field.
    #[error("Range start missing")]
    RangeStartMissing,

    /// A dump range specification has no comma after its length field.
    #[error("Range length/name missing")]
    RangeLengthMissing,

    /// The start or length of a range could not be resolved.
    #[error("Range start/length specification error: {0}")]
    RangeSpecification(#[source] ResolveError),

    /// A fail-match letter is not one of `i`, `a`, `o`, `j`.
    #[error("Unknown fail condition: {0}")]
    UnknownFailCondition(char),

    /// A trace-gp token is neither `*` nor a register number in range.
    #[error("Unknown register number given for trace-gp: {0}")]
    UnknownRegister(String),

    /// A load range file could not be opened or read.
    #[error("cannot read load range file {}: {source}", path.display())]
    RangeFile {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A line of a load range file is not an unsigned 32-bit number.
    #[error("cannot parse load range data at {}:{line}: `{text}`", path.display())]
    RangeData {
        /// Path of the file.
        path: PathBuf,
        /// One-based line number.
        line: usize,
        /// The trimmed line contents.
        text: String,
    },
}

/// Session-level error: anything that stops the simulator from being started.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid command-line configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The external assembler rejected the source file.
    #[error("assembly of {} failed: {reason}", path.display())]
    Assembly {
        /// Source file passed to the assembler.
        path: PathBuf,
        /// Assembler diagnostic.
        reason: String,
    },

    /// The machine backend could not be created or run.
    #[error("machine error: {0}")]
    Machine(String),
}

impl Error {
    /// Process exit status for this error.
    ///
    /// Every configuration, assembly and machine setup failure maps to status 1.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) | Self::Assembly { .. } | Self::Machine(_) => 1,
        }
    }
}
