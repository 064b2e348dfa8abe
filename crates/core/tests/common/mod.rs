//! Shared fixtures and mocks for the test suite.

use std::io::Write;
use std::path::{Path, PathBuf};

use mipsim_core::Flags;
use mipsim_core::symbols::SymbolMap;
use tempfile::NamedTempFile;

/// Recording backend and machine.
pub mod mocks;

/// Installs a test-writer log subscriber once per process.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("mipsim_core=trace")
        .try_init();
}

/// Symbol table used by range and session tests.
pub fn program_symbols() -> SymbolMap {
    [("main", 0x8002_0000), ("buffer", 0x8004_0000), ("buffer_len", 64)]
        .into_iter()
        .collect()
}

/// Flags naming a single input file and nothing else.
pub fn flags_for(file: impl AsRef<Path>) -> Flags {
    Flags {
        files: vec![PathBuf::from(file.as_ref())],
        ..Flags::default()
    }
}

/// Writes `contents` to a fresh temporary file.
pub fn data_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
