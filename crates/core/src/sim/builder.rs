//! Session construction from raw command-line values.
//!
//! This module turns [`Flags`] into a configured, ready-to-run machine. It performs, in order:
//! 1. **Input:** Requires exactly one positional file.
//! 2. **Core:** Applies delay slot, pipeline and memory timing settings (last value wins).
//! 3. **Caches:** Parses the data cache, then the instruction cache specification (last value wins).
//! 4. **Machine:** Hands the finished `MachineConfig` to the backend.
//! 5. **Tracer:** Builds and installs the tracer configuration.
//! 6. **Reporter:** Builds and installs the reporter configuration, resolving symbols against the machine.
//! 7. **Assembly:** Assembles the input file when it is assembler source.
//! 8. **Pre-load:** Loads every `--load-range` file in command-line order.
//! 9. **Run:** Starts the machine.
//!
//! The first invalid value aborts the session; nothing after it is applied.

use crate::common::{ConfigError, Error};
use crate::config::{MachineConfig, MemoryTiming};
use crate::flags::Flags;
use crate::parse::cache::parse_cache_spec;
use crate::parse::number::parse_unsigned;
use crate::parse::range::parse_load_range;
use crate::report::ReportConfig;
use crate::sim::loader::load_range;
use crate::sim::traits::{Backend, Machine};
use crate::trace::TraceConfig;

/// Label of the data cache in diagnostics.
pub const DATA_CACHE_LABEL: &str = "data";

/// Label of the instruction cache in diagnostics.
pub const INSTRUCTION_CACHE_LABEL: &str = "instruction";

/// Builds a simulation session from raw flags.
#[derive(Debug, Clone)]
pub struct SessionBuilder<'a> {
    flags: &'a Flags,
}

impl<'a> SessionBuilder<'a> {
    /// Creates a builder over `flags`.
    pub const fn new(flags: &'a Flags) -> Self {
        Self { flags }
    }

    /// Validates the input file, core options, memory timing and caches.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] encountered.
    pub fn machine_config(&self) -> Result<MachineConfig, ConfigError> {
        let flags = self.flags;
        let elf = flags
            .input_file()
            .ok_or(ConfigError::InputFileCount(flags.files.len()))?
            .clone();

        let defaults = MemoryTiming::default();
        let memory = MemoryTiming {
            read: last_timing(&flags.read_time, "read")?.unwrap_or(defaults.read),
            write: last_timing(&flags.write_time, "write")?.unwrap_or(defaults.write),
            burst: last_timing(&flags.burst_time, "burst")?.unwrap_or(defaults.burst),
        };

        let mut config = MachineConfig {
            elf,
            delay_slot: !flags.no_delay_slot,
            pipelined: flags.pipelined,
            memory,
            ..MachineConfig::default()
        };
        if let Some(raw) = flags.d_cache.last() {
            config.data_cache = parse_cache_spec(raw, DATA_CACHE_LABEL)?;
        }
        if let Some(raw) = flags.i_cache.last() {
            config.instruction_cache = parse_cache_spec(raw, INSTRUCTION_CACHE_LABEL)?;
        }

        tracing::debug!(?config, "Machine configuration");
        Ok(config)
    }

    /// Runs every step up to, but not including, starting the machine.
    ///
    /// # Errors
    ///
    /// Returns the first configuration, backend or assembly error.
    pub fn prepare<B: Backend>(&self, backend: &mut B) -> Result<B::Machine, Error> {
        let flags = self.flags;
        let config = self.machine_config()?;
        let mut machine = backend.create_machine(&config, !flags.asm)?;

        let trace = TraceConfig::from_flags(flags)?;
        tracing::debug!(?trace, "Tracer configuration");
        machine.install_tracer(trace);

        let report = ReportConfig::from_flags(flags, machine.symbol_table())?;
        tracing::debug!(?report, "Reporter configuration");
        machine.install_reporter(report);

        if flags.asm {
            tracing::debug!(source = %config.elf.display(), "Assembling");
            backend.assemble(&mut machine, &config.elf)?;
        }

        for raw in &flags.load_range {
            let range = parse_load_range(raw, machine.symbol_table())?;
            let words = load_range(&mut machine, &range)?;
            tracing::debug!(start = range.start, words, "Pre-loaded range");
        }

        Ok(machine)
    }

    /// Prepares the machine and runs it.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`Self::prepare`] or from the run itself.
    pub fn run<B: Backend>(
        &self,
        backend: &mut B,
    ) -> Result<<B::Machine as Machine>::Outcome, Error> {
        self.prepare(backend)?.run()
    }
}

/// Parses the last occurrence of a memory timing flag, if any.
fn last_timing(values: &[String], which: &'static str) -> Result<Option<u32>, ConfigError> {
    values
        .last()
        .map(|value| {
            parse_unsigned(value).ok_or_else(|| ConfigError::MemoryTiming {
                which,
                value: value.clone(),
            })
        })
        .transpose()
}
