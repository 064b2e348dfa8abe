//! Tracer configuration.
//!
//! Selects which pipeline stages and which registers the external tracer prints while
//! the program runs.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::common::ConfigError;
use crate::flags::Flags;
use crate::parse::register::parse_register_list;

/// What the tracer prints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceConfig {
    /// Instruction in the fetch stage.
    #[serde(default)]
    pub fetch: bool,
    /// Instruction in the decode stage.
    #[serde(default)]
    pub decode: bool,
    /// Instruction in the execute stage.
    #[serde(default)]
    pub execute: bool,
    /// Instruction in the memory stage.
    #[serde(default)]
    pub memory: bool,
    /// Instruction in the write back stage.
    #[serde(default)]
    pub writeback: bool,
    /// Program counter changes.
    #[serde(default)]
    pub pc: bool,
    /// General-purpose registers whose changes are printed.
    #[serde(default)]
    pub gp: BTreeSet<u8>,
    /// LO register changes.
    #[serde(default)]
    pub lo: bool,
    /// HI register changes.
    #[serde(default)]
    pub hi: bool,
}

impl TraceConfig {
    /// Builds the tracer configuration from the raw flags.
    ///
    /// Decode, execute, memory and write back tracing exist only on the pipelined core;
    /// without `--pipelined` those flags are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownRegister`] for an invalid `--trace-gp` value.
    pub fn from_flags(flags: &Flags) -> Result<Self, ConfigError> {
        let staged = flags.pipelined;
        if !staged
            && (flags.trace_decode || flags.trace_execute || flags.trace_memory || flags.trace_writeback)
        {
            tracing::debug!("Ignoring stage trace flags without a pipelined core");
        }

        Ok(Self {
            fetch: flags.trace_fetch,
            decode: staged && flags.trace_decode,
            execute: staged && flags.trace_execute,
            memory: staged && flags.trace_memory,
            writeback: staged && flags.trace_writeback,
            pc: flags.trace_pc,
            gp: parse_register_list(&flags.trace_gp)?,
            lo: flags.trace_lo,
            hi: flags.trace_hi,
        })
    }

    /// Returns `true` if nothing is traced.
    pub fn is_empty(&self) -> bool {
        !(self.fetch
            || self.decode
            || self.execute
            || self.memory
            || self.writeback
            || self.pc
            || self.lo
            || self.hi)
            && self.gp.is_empty()
    }
}
