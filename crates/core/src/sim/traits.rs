//! Interfaces to the simulation engine.
//!
//! The configuration front end does not execute anything itself. It drives an external
//! engine through these traits:
//! 1. **Memory:** `MemoryWrite` stores pre-loaded words.
//! 2. **Machine:** `Machine` exposes the symbol table, accepts tracer and reporter settings and runs.
//! 3. **Backend:** `Backend` constructs machines and assembles source files into them.

use std::path::Path;

use crate::common::Error;
use crate::config::MachineConfig;
use crate::report::ReportConfig;
use crate::symbols::SymbolTable;
use crate::trace::TraceConfig;

/// Word-granular memory writes.
pub trait MemoryWrite {
    /// Stores the 32-bit `value` at `address`.
    fn write_word(&mut self, address: u32, value: u32);
}

/// A constructed simulator instance.
pub trait Machine: MemoryWrite {
    /// Result of a completed run (typically the process exit status).
    type Outcome;

    /// Returns the symbol table, if the machine has one.
    ///
    /// A machine created from an ELF executable exposes its symbols; one created for
    /// assembler source has symbols only after assembly.
    fn symbol_table(&self) -> Option<&dyn SymbolTable>;

    /// Attaches the tracer configuration.
    fn install_tracer(&mut self, trace: TraceConfig);

    /// Attaches the reporter configuration.
    fn install_reporter(&mut self, report: ReportConfig);

    /// Runs the program to completion.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Machine`] if the engine cannot run the program.
    fn run(self) -> Result<Self::Outcome, Error>;
}

/// Factory for machines and the assembler that fills them.
pub trait Backend {
    /// Machine type produced by this backend.
    type Machine: Machine;

    /// Creates a machine for `config`.
    ///
    /// `load_executable` is `false` when the input file is assembler source; the machine
    /// must then not try to load `config.elf` as an executable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Machine`] if the machine cannot be constructed.
    fn create_machine(
        &mut self,
        config: &MachineConfig,
        load_executable: bool,
    ) -> Result<Self::Machine, Error>;

    /// Assembles `source` into `machine`'s memory and symbol table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Assembly`] if assembly fails.
    fn assemble(&mut self, machine: &mut Self::Machine, source: &Path) -> Result<(), Error>;
}
