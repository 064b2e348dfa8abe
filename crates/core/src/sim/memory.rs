//! Sparse word-addressed memory image.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::sim::traits::MemoryWrite;

/// Memory image holding only the words that were written.
///
/// Used by backends that record pre-loaded data instead of simulating a full address space.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SparseMemory {
    words: BTreeMap<u32, u32>,
}

impl SparseMemory {
    /// Creates an empty image.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the word at `address`; unwritten words read as zero.
    pub fn read_word(&self, address: u32) -> u32 {
        self.words.get(&address).copied().unwrap_or(0)
    }

    /// Returns `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over `(address, value)` pairs in address order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.words.iter().map(|(&address, &value)| (address, value))
    }
}

impl MemoryWrite for SparseMemory {
    fn write_word(&mut self, address: u32, value: u32) {
        let _ = self.words.insert(address, value);
    }
}
