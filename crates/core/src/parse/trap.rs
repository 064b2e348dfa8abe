//! Expected trap specification (`--expect-fail`, `--fail-match`).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::common::ConfigError;

/// CPU trap kinds a run may be expected to end with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrapKind {
    /// Unsupported instruction (`i`).
    InstructionUnsupported,
    /// Unsupported ALU operation (`a`).
    AluUnsupported,
    /// Arithmetic overflow or underflow (`o`).
    Overflow,
    /// Unaligned jump target (`j`).
    UnalignedJump,
}

impl TrapKind {
    /// All trap kinds.
    pub const ALL: [Self; 4] = [
        Self::InstructionUnsupported,
        Self::AluUnsupported,
        Self::Overflow,
        Self::UnalignedJump,
    ];

    /// Looks up a trap kind by its case-insensitive letter.
    pub const fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_lowercase() {
            'i' => Some(Self::InstructionUnsupported),
            'a' => Some(Self::AluUnsupported),
            'o' => Some(Self::Overflow),
            'j' => Some(Self::UnalignedJump),
            _ => None,
        }
    }

    /// Lowercase letter for this trap kind.
    pub const fn code(self) -> char {
        match self {
            Self::InstructionUnsupported => 'i',
            Self::AluUnsupported => 'a',
            Self::Overflow => 'o',
            Self::UnalignedJump => 'j',
        }
    }
}

/// How the run is expected to end.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrapExpectation {
    /// The program must exit normally.
    #[default]
    None,
    /// The program must end with some trap, whatever its kind.
    Any,
    /// The program must end with one of these traps (never empty).
    Exact(BTreeSet<TrapKind>),
}

impl TrapExpectation {
    /// Builds the expectation from the `--expect-fail` flag and every `--fail-match` value.
    ///
    /// Letters from all values accumulate into one set. `--fail-match` overrides the "any
    /// trap" meaning of `--expect-fail`; an empty set means no trap is expected.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownFailCondition`] for the first unknown letter.
    pub fn from_flags<S: AsRef<str>>(
        expect_fail: bool,
        fail_match: &[S],
    ) -> Result<Self, ConfigError> {
        if fail_match.is_empty() {
            return Ok(if expect_fail { Self::Any } else { Self::None });
        }

        let mut kinds = BTreeSet::new();
        for raw in fail_match {
            kinds.extend(parse_trap_codes(raw.as_ref())?);
        }
        Ok(if kinds.is_empty() { Self::None } else { Self::Exact(kinds) })
    }

    /// Returns `true` if the run has to end with a trap.
    pub const fn expects_trap(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns `true` if ending with `kind` satisfies this expectation.
    pub fn accepts(&self, kind: TrapKind) -> bool {
        match self {
            Self::None => false,
            Self::Any => true,
            Self::Exact(kinds) => kinds.contains(&kind),
        }
    }
}

/// Parses a string of trap letters (`i`, `a`, `o`, `j`, any case) into a set.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownFailCondition`] carrying the first unknown character.
///
/// # Examples
///
/// ```
/// use mipsim_core::parse::trap::{parse_trap_codes, TrapKind};
///
/// let kinds = parse_trap_codes("oJ").unwrap();
/// assert!(kinds.contains(&TrapKind::Overflow));
/// assert!(kinds.contains(&TrapKind::UnalignedJump));
/// assert_eq!(kinds.len(), 2);
/// ```
pub fn parse_trap_codes(raw: &str) -> Result<BTreeSet<TrapKind>, ConfigError> {
    raw.chars()
        .map(|code| TrapKind::from_code(code).ok_or(ConfigError::UnknownFailCondition(code)))
        .collect()
}
