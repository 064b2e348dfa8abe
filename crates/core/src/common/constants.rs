//! Architectural constants used while validating configuration.

/// Number of general-purpose registers (`$0`..`$31`).
pub const GP_REGISTER_COUNT: u8 = 32;

/// Highest register index accepted by `--trace-gp`.
///
/// One past the last real register; index 32 is accepted and handed to the tracer unchanged.
pub const MAX_TRACE_GP_INDEX: u8 = 32;

/// Size of a memory word in bytes.
pub const WORD_BYTES: u32 = 4;

/// Mask that aligns an address down to a word boundary.
pub const WORD_ALIGN_MASK: u32 = !(WORD_BYTES - 1);
