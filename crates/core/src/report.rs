//! Reporter configuration.
//!
//! Selects what the external reporter prints or writes when the program exits, and how
//! the run is expected to end.

use serde::{Deserialize, Serialize};

use crate::common::ConfigError;
use crate::flags::Flags;
use crate::parse::range::{DumpRange, parse_dump_range};
use crate::parse::trap::TrapExpectation;
use crate::symbols::SymbolTable;

/// What the reporter produces at program exit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Dump register state.
    #[serde(default)]
    pub registers: bool,
    /// Dump cache statistics.
    #[serde(default)]
    pub cache_stats: bool,
    /// Dump the executed cycle count.
    #[serde(default)]
    pub cycles: bool,
    /// Expected trap, if any.
    #[serde(default)]
    pub expected_trap: TrapExpectation,
    /// Memory ranges written to files, in command-line order.
    #[serde(default)]
    pub dump_ranges: Vec<DumpRange>,
}

impl ReportConfig {
    /// Builds the reporter configuration from the raw flags.
    ///
    /// Symbolic dump range bounds are resolved against `symbols`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for an unknown trap letter or a malformed dump range.
    pub fn from_flags(flags: &Flags, symbols: Option<&dyn SymbolTable>) -> Result<Self, ConfigError> {
        let expected_trap = TrapExpectation::from_flags(flags.expect_fail, &flags.fail_match)?;
        let dump_ranges = flags
            .dump_range
            .iter()
            .map(|raw| parse_dump_range(raw, symbols))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            registers: flags.dump_registers,
            cache_stats: flags.dump_cache_stats,
            cycles: flags.dump_cycles,
            expected_trap,
            dump_ranges,
        })
    }
}
