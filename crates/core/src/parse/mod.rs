//! Parsers for the value formats accepted on the command line.
//!
//! Each parser turns one loosely-typed flag value into a validated configuration value:
//! 1. **Numbers:** Auto-base unsigned integers and numeric-or-symbolic addresses.
//! 2. **Caches:** `policy,sets,blocks,associativity,write` specifications.
//! 3. **Ranges:** Dump and load memory range specifications.
//! 4. **Traps:** Expected trap letters.
//! 5. **Registers:** Register trace lists.

/// Cache specification parser.
pub mod cache;
/// Auto-base numbers and symbol resolution.
pub mod number;
/// Register trace list parser.
pub mod register;
/// Dump and load range parsers.
pub mod range;
/// Trap letter parser and trap expectations.
pub mod trap;

pub use cache::parse_cache_spec;
pub use number::{parse_unsigned, resolve};
pub use range::{DumpRange, LoadRange, parse_dump_range, parse_load_range};
pub use register::parse_register_list;
pub use trap::{TrapExpectation, TrapKind, parse_trap_codes};
