//! Inspect backend.
//!
//! Stands in for the simulation engine: machines record their configuration, the ELF
//! symbol table and every pre-loaded word, and "running" one yields an [`Inspection`]
//! that the binary prints as JSON.

use std::fs;
use std::path::Path;

use mipsim_core::Error;
use mipsim_core::config::MachineConfig;
use mipsim_core::report::ReportConfig;
use mipsim_core::sim::{Backend, Machine, MemoryWrite, SparseMemory};
use mipsim_core::symbols::{SymbolMap, SymbolTable};
use mipsim_core::trace::TraceConfig;
use serde::Serialize;

/// Backend producing [`InspectMachine`]s.
#[derive(Debug, Default)]
pub struct InspectBackend;

impl InspectBackend {
    /// Creates the backend.
    pub const fn new() -> Self {
        Self
    }
}

impl Backend for InspectBackend {
    type Machine = InspectMachine;

    fn create_machine(
        &mut self,
        config: &MachineConfig,
        load_executable: bool,
    ) -> Result<Self::Machine, Error> {
        let symbols = if load_executable {
            let data = fs::read(&config.elf).map_err(|e| {
                Error::Machine(format!("cannot read {}: {e}", config.elf.display()))
            })?;
            let symbols = SymbolMap::from_elf(&data).map_err(|e| {
                Error::Machine(format!("{} is not a valid ELF file: {e}", config.elf.display()))
            })?;
            tracing::debug!(count = symbols.len(), "Read ELF symbols");
            Some(symbols)
        } else {
            None
        };

        Ok(InspectMachine {
            config: config.clone(),
            symbols,
            memory: SparseMemory::new(),
            trace: TraceConfig::default(),
            report: ReportConfig::default(),
        })
    }

    fn assemble(&mut self, _machine: &mut Self::Machine, source: &Path) -> Result<(), Error> {
        Err(Error::Assembly {
            path: source.to_path_buf(),
            reason: "no assembler is available in the inspect backend".to_owned(),
        })
    }
}

/// Machine that records its setup instead of executing.
#[derive(Debug)]
pub struct InspectMachine {
    config: MachineConfig,
    symbols: Option<SymbolMap>,
    memory: SparseMemory,
    trace: TraceConfig,
    report: ReportConfig,
}

impl MemoryWrite for InspectMachine {
    fn write_word(&mut self, address: u32, value: u32) {
        self.memory.write_word(address, value);
    }
}

impl Machine for InspectMachine {
    type Outcome = Inspection;

    fn symbol_table(&self) -> Option<&dyn SymbolTable> {
        self.symbols.as_ref().map(|symbols| symbols as &dyn SymbolTable)
    }

    fn install_tracer(&mut self, trace: TraceConfig) {
        self.trace = trace;
    }

    fn install_reporter(&mut self, report: ReportConfig) {
        self.report = report;
    }

    fn run(self) -> Result<Self::Outcome, Error> {
        Ok(Inspection {
            machine: self.config,
            trace: self.trace,
            report: self.report,
            symbols: self.symbols.as_ref().map_or(0, SymbolMap::len),
            preloaded: self.memory,
        })
    }
}

/// Everything the engine would have been started with.
#[derive(Debug, Serialize)]
pub struct Inspection {
    /// Machine configuration.
    pub machine: MachineConfig,
    /// Tracer configuration.
    pub trace: TraceConfig,
    /// Reporter configuration.
    pub report: ReportConfig,
    /// Number of symbols read from the executable.
    pub symbols: usize,
    /// Pre-loaded words by address.
    pub preloaded: SparseMemory,
}
