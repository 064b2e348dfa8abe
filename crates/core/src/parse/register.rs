//! Register trace list parser (`--trace-gp`).

use std::collections::BTreeSet;

use crate::common::ConfigError;
use crate::common::constants::{GP_REGISTER_COUNT, MAX_TRACE_GP_INDEX};

/// Token selecting every general-purpose register.
pub const ALL_REGISTERS: &str = "*";

/// Parses `--trace-gp` values into a set of register indices.
///
/// `*` selects registers 0 through 31; any other token must be a decimal index no larger
/// than [`MAX_TRACE_GP_INDEX`].
///
/// # Errors
///
/// Returns [`ConfigError::UnknownRegister`] for the first token that is neither `*` nor an
/// index in range.
///
/// # Examples
///
/// ```
/// use mipsim_core::parse::register::parse_register_list;
///
/// let regs = parse_register_list(["4", "29", "4"]).unwrap();
/// assert_eq!(regs.into_iter().collect::<Vec<_>>(), vec![4, 29]);
/// assert!(parse_register_list(["33"]).is_err());
/// ```
pub fn parse_register_list<I, S>(tokens: I) -> Result<BTreeSet<u8>, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut registers = BTreeSet::new();
    for token in tokens {
        let token = token.as_ref();
        if token == ALL_REGISTERS {
            registers.extend(0..GP_REGISTER_COUNT);
            continue;
        }

        let index = token
            .parse::<u8>()
            .ok()
            .filter(|&index| {
                index <= MAX_TRACE_GP_INDEX && token.bytes().all(|b| b.is_ascii_digit())
            })
            .ok_or_else(|| ConfigError::UnknownRegister(token.to_owned()))?;
        if index >= GP_REGISTER_COUNT {
            tracing::warn!(index, "Tracing register index past the last general-purpose register");
        }
        let _ = registers.insert(index);
    }
    Ok(registers)
}
