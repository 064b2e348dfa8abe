//! Recording backend and machine.
//!
//! Every call the session builder makes is appended to a shared [`CallLog`], so tests can
//! assert on the exact setup order and on where a failing session stopped.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use mipsim_core::Error;
use mipsim_core::config::MachineConfig;
use mipsim_core::report::ReportConfig;
use mipsim_core::sim::{Backend, Machine, MemoryWrite, SparseMemory};
use mipsim_core::symbols::{SymbolMap, SymbolTable};
use mipsim_core::trace::TraceConfig;

/// One interaction between the session builder and the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    /// `Backend::create_machine`.
    CreateMachine {
        /// Whether the input was to be loaded as an executable.
        load_executable: bool,
    },
    /// `Machine::install_tracer`.
    InstallTracer,
    /// `Machine::install_reporter`.
    InstallReporter,
    /// `Backend::assemble` with the source path.
    Assemble(PathBuf),
    /// `MemoryWrite::write_word` with address and value.
    WriteWord(u32, u32),
    /// `Machine::run`.
    Run,
}

/// Call log shared by a backend and the machines it creates.
pub type CallLog = Rc<RefCell<Vec<Call>>>;

/// Backend that records calls instead of simulating.
///
/// Machines created from an executable receive `elf_symbols`; assembling installs
/// `assembled_symbols`. Setting `assembly_error` makes `assemble` fail.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    /// Calls made on this backend and its machines.
    pub log: CallLog,
    /// Symbols of machines created from an executable.
    pub elf_symbols: Option<SymbolMap>,
    /// Symbols installed by a successful `assemble`.
    pub assembled_symbols: Option<SymbolMap>,
    /// Diagnostic returned by `assemble`, if it should fail.
    pub assembly_error: Option<String>,
}

impl RecordingBackend {
    /// Backend with no symbols that assembles successfully.
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend whose executables carry `symbols`.
    pub fn with_elf_symbols(symbols: SymbolMap) -> Self {
        Self {
            elf_symbols: Some(symbols),
            ..Self::default()
        }
    }

    /// Snapshot of every call made so far.
    pub fn calls(&self) -> Vec<Call> {
        self.log.borrow().clone()
    }
}

impl Backend for RecordingBackend {
    type Machine = RecordingMachine;

    fn create_machine(
        &mut self,
        config: &MachineConfig,
        load_executable: bool,
    ) -> Result<Self::Machine, Error> {
        self.log.borrow_mut().push(Call::CreateMachine { load_executable });
        Ok(RecordingMachine {
            log: Rc::clone(&self.log),
            config: config.clone(),
            symbols: if load_executable { self.elf_symbols.clone() } else { None },
            memory: SparseMemory::new(),
            trace: None,
            report: None,
        })
    }

    fn assemble(&mut self, machine: &mut Self::Machine, source: &Path) -> Result<(), Error> {
        self.log.borrow_mut().push(Call::Assemble(source.to_path_buf()));
        if let Some(reason) = &self.assembly_error {
            return Err(Error::Assembly {
                path: source.to_path_buf(),
                reason: reason.clone(),
            });
        }
        machine.symbols.clone_from(&self.assembled_symbols);
        Ok(())
    }
}

/// Machine that records everything it is given; running it returns itself.
#[derive(Debug)]
pub struct RecordingMachine {
    log: CallLog,
    /// Configuration the machine was created with.
    pub config: MachineConfig,
    /// Current symbol table.
    pub symbols: Option<SymbolMap>,
    /// Words written so far.
    pub memory: SparseMemory,
    /// Installed tracer configuration.
    pub trace: Option<TraceConfig>,
    /// Installed reporter configuration.
    pub report: Option<ReportConfig>,
}

impl MemoryWrite for RecordingMachine {
    fn write_word(&mut self, address: u32, value: u32) {
        self.log.borrow_mut().push(Call::WriteWord(address, value));
        self.memory.write_word(address, value);
    }
}

impl Machine for RecordingMachine {
    type Outcome = Self;

    fn symbol_table(&self) -> Option<&dyn SymbolTable> {
        self.symbols.as_ref().map(|symbols| symbols as &dyn SymbolTable)
    }

    fn install_tracer(&mut self, trace: TraceConfig) {
        self.log.borrow_mut().push(Call::InstallTracer);
        self.trace = Some(trace);
    }

    fn install_reporter(&mut self, report: ReportConfig) {
        self.log.borrow_mut().push(Call::InstallReporter);
        self.report = Some(report);
    }

    fn run(self) -> Result<Self::Outcome, Error> {
        self.log.borrow_mut().push(Call::Run);
        Ok(self)
    }
}
