//! Session setup against the external simulation engine.
//!
//! Provides the engine interfaces, the session builder that drives them, the memory range
//! loader and a sparse memory image.

/// Session builder.
pub mod builder;
/// Memory range loader.
pub mod loader;
/// Sparse memory image.
pub mod memory;
/// Engine interfaces.
pub mod traits;

pub use builder::SessionBuilder;
pub use memory::SparseMemory;
pub use traits::{Backend, Machine, MemoryWrite};
