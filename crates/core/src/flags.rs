//! Raw command-line values.
//!
//! [`Flags`] holds flag values exactly as they were given, before any validation.
//! Repeatable flags keep every occurrence in order; the session builder decides per flag
//! whether the last occurrence wins (caches, memory timing) or all of them accumulate
//! (ranges, trap letters, traced registers).

use std::path::PathBuf;

/// Unvalidated command-line values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    /// Positional input files; exactly one is required.
    pub files: Vec<PathBuf>,

    /// `--asm`: the input is assembler source rather than an ELF executable.
    pub asm: bool,
    /// `--pipelined`: use the five-stage pipelined core.
    pub pipelined: bool,
    /// `--no-delay-slot`: disable the branch delay slot.
    pub no_delay_slot: bool,

    /// `--trace-fetch`.
    pub trace_fetch: bool,
    /// `--trace-decode` (pipelined core only).
    pub trace_decode: bool,
    /// `--trace-execute` (pipelined core only).
    pub trace_execute: bool,
    /// `--trace-memory` (pipelined core only).
    pub trace_memory: bool,
    /// `--trace-writeback` (pipelined core only).
    pub trace_writeback: bool,
    /// `--trace-pc`.
    pub trace_pc: bool,
    /// Every `--trace-gp` value.
    pub trace_gp: Vec<String>,
    /// `--trace-lo`.
    pub trace_lo: bool,
    /// `--trace-hi`.
    pub trace_hi: bool,

    /// `--dump-registers`.
    pub dump_registers: bool,
    /// `--dump-cache-stats`.
    pub dump_cache_stats: bool,
    /// `--dump-cycles`.
    pub dump_cycles: bool,
    /// Every `--dump-range` value.
    pub dump_range: Vec<String>,
    /// Every `--load-range` value.
    pub load_range: Vec<String>,

    /// `--expect-fail`.
    pub expect_fail: bool,
    /// Every `--fail-match` value.
    pub fail_match: Vec<String>,

    /// Every `--d-cache` value.
    pub d_cache: Vec<String>,
    /// Every `--i-cache` value.
    pub i_cache: Vec<String>,

    /// Every `--read-time` value.
    pub read_time: Vec<String>,
    /// Every `--write-time` value.
    pub write_time: Vec<String>,
    /// Every `--burst-time` value.
    pub burst_time: Vec<String>,
}

impl Flags {
    /// Returns the single positional input file, if exactly one was given.
    pub fn input_file(&self) -> Option<&PathBuf> {
        self.files.first().filter(|_| self.files.len() == 1)
    }
}
