//! Common types and constants shared by the parsers and the session builder.
//!
//! This module provides:
//! 1. **Constants:** Register-file bounds and memory word geometry.
//! 2. **Error Handling:** Resolution, configuration and session error types.

/// Register and memory constants.
pub mod constants;

/// Error types.
pub mod error;

pub use error::{ConfigError, Error, ResolveError};
