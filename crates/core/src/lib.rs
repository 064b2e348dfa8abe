//! Configuration front end for a MIPS 32-bit architecture simulator.
//!
//! This crate turns loosely-typed command-line values into validated configuration for an
//! external simulation engine:
//! 1. **Parsing:** Cache specifications, memory ranges, trap letters and register lists.
//! 2. **Configuration:** Machine, tracer and reporter settings with documented defaults.
//! 3. **Symbols:** Numeric-or-symbolic address resolution against an optional symbol table.
//! 4. **Session:** A fixed, fail-fast setup order that ends by running the machine.

/// Common types and constants (errors, register bounds, word geometry).
pub mod common;
/// Machine configuration (defaults, cache and memory timing structures).
pub mod config;
/// Raw command-line values.
pub mod flags;
/// Value parsers (numbers, caches, ranges, traps, registers).
pub mod parse;
/// Reporter configuration.
pub mod report;
/// Session builder, engine interfaces and memory range loader.
pub mod sim;
/// Symbol tables.
pub mod symbols;
/// Tracer configuration.
pub mod trace;

/// Session-level error; every variant maps to exit status 1.
pub use crate::common::Error;
/// Root machine configuration.
pub use crate::config::MachineConfig;
/// Raw command-line values consumed by the session builder.
pub use crate::flags::Flags;
/// Fail-fast session builder.
pub use crate::sim::SessionBuilder;
