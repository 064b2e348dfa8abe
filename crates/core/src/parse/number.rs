//! Numeric-or-symbolic value resolution.
//!
//! Numbers use C-style base detection: a `0x`/`0X` prefix selects hexadecimal, a leading
//! `0` selects octal, anything else is decimal. The whole token must be consumed.

use crate::common::ResolveError;
use crate::symbols::SymbolTable;

/// Parses an unsigned 32-bit integer with automatic base detection.
///
/// Signs, whitespace and trailing characters are rejected, as are values above `u32::MAX`.
///
/// # Examples
///
/// ```
/// use mipsim_core::parse::number::parse_unsigned;
///
/// assert_eq!(parse_unsigned("0x1000"), Some(4096));
/// assert_eq!(parse_unsigned("017"), Some(15));
/// assert_eq!(parse_unsigned("256"), Some(256));
/// assert_eq!(parse_unsigned("08"), None);
/// ```
pub fn parse_unsigned(token: &str) -> Option<u32> {
    let (digits, radix) = match token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None if token.len() > 1 && token.starts_with('0') => (&token[1..], 8),
        None => (token, 10),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u32::from_str_radix(digits, radix).ok()
}

/// Resolves `token` to a 32-bit value.
///
/// Tokens starting with a decimal digit are parsed with [`parse_unsigned`]; any other
/// non-empty token is looked up in `symbols`.
///
/// # Errors
///
/// Returns [`ResolveError::Empty`] for an empty token, [`ResolveError::InvalidNumber`] for a
/// malformed number, [`ResolveError::UnknownSymbol`] when the table lacks the name and
/// [`ResolveError::NoSymbolTable`] when no table is available.
pub fn resolve(token: &str, symbols: Option<&dyn SymbolTable>) -> Result<u32, ResolveError> {
    match token.chars().next() {
        None => Err(ResolveError::Empty),
        Some(first) if first.is_ascii_digit() => {
            parse_unsigned(token).ok_or_else(|| ResolveError::InvalidNumber(token.to_owned()))
        }
        Some(_) => {
            let symbols = symbols.ok_or_else(|| ResolveError::NoSymbolTable(token.to_owned()))?;
            symbols
                .resolve(token)
                .ok_or_else(|| ResolveError::UnknownSymbol(token.to_owned()))
        }
    }
}
