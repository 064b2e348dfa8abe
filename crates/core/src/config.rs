//! Machine configuration for the simulator.
//!
//! This module defines the configuration handed to the simulation engine. It provides:
//! 1. **Defaults:** Baseline values used when a flag is absent (memory latencies, cache geometry, policies).
//! 2. **Structures:** `MachineConfig` with its memory timing and two `CacheConfig`s.
//! 3. **Enums:** Cache replacement and write policies with their command-line tokens.
//!
//! A `MachineConfig` is built once from the command line and never mutated afterwards.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default configuration constants for the simulator.
///
/// These values define the baseline machine when the corresponding flag is not given.
mod defaults {
    /// Memory read access time in cycles.
    pub const READ_TIME: u32 = 10;

    /// Memory write access time in cycles.
    pub const WRITE_TIME: u32 = 10;

    /// Memory burst access time in cycles (0 disables burst timing).
    pub const BURST_TIME: u32 = 0;

    /// Number of cache sets.
    pub const CACHE_SETS: u32 = 1;

    /// Number of words per cache block.
    pub const CACHE_BLOCKS: u32 = 1;

    /// Cache associativity (1 way = direct-mapped).
    pub const CACHE_ASSOCIATIVITY: u32 = 1;
}

/// Cache replacement policy algorithms.
///
/// Specifies the algorithm used to select which cache line to evict
/// when a new line must be installed in a full cache set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplacementPolicy {
    /// Evicts a randomly selected line from the set.
    #[default]
    Random,
    /// Least Recently Used.
    ///
    /// Evicts the line that was accessed least recently.
    Lru,
    /// Least Frequently Used.
    ///
    /// Evicts the line with the fewest accesses.
    Lfu,
}

impl ReplacementPolicy {
    /// Command-line tokens and the policies they select.
    pub const TOKENS: [(&'static str, Self); 3] =
        [("random", Self::Random), ("lru", Self::Lru), ("lfu", Self::Lfu)];

    /// Looks up a policy by its case-insensitive command-line token.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::TOKENS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(token))
            .map(|&(_, policy)| policy)
    }

    /// Canonical command-line token for this policy.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Lru => "lru",
            Self::Lfu => "lfu",
        }
    }
}

impl fmt::Display for ReplacementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Cache write policies.
///
/// Specifies how stores interact with the cache and backing memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WritePolicy {
    /// Write-through; a store miss does not allocate a line.
    #[default]
    WriteThroughNoAlloc,
    /// Write-through; a store miss allocates a line.
    WriteThroughAlloc,
    /// Write-back; dirty lines are written on eviction.
    WriteBack,
}

impl WritePolicy {
    /// Command-line tokens and the policies they select (`wt` is shorthand for `wtna`).
    pub const TOKENS: [(&'static str, Self); 4] = [
        ("wb", Self::WriteBack),
        ("wt", Self::WriteThroughNoAlloc),
        ("wtna", Self::WriteThroughNoAlloc),
        ("wta", Self::WriteThroughAlloc),
    ];

    /// Looks up a write policy by its case-insensitive command-line token.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::TOKENS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(token))
            .map(|&(_, policy)| policy)
    }

    /// Canonical command-line token for this policy.
    pub const fn token(self) -> &'static str {
        match self {
            Self::WriteBack => "wb",
            Self::WriteThroughNoAlloc => "wtna",
            Self::WriteThroughAlloc => "wta",
        }
    }
}

impl fmt::Display for WritePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Configuration of one cache (data or instruction).
///
/// When `enabled` is set, `sets`, `blocks` and `associativity` are all non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Whether the cache is simulated at all.
    #[serde(default)]
    pub enabled: bool,

    /// Replacement policy.
    #[serde(default)]
    pub policy: ReplacementPolicy,

    /// Number of sets.
    #[serde(default = "CacheConfig::default_sets")]
    pub sets: u32,

    /// Words per block.
    #[serde(default = "CacheConfig::default_blocks")]
    pub blocks: u32,

    /// Blocks per set (number of ways).
    #[serde(default = "CacheConfig::default_associativity")]
    pub associativity: u32,

    /// Write policy.
    #[serde(default)]
    pub write_policy: WritePolicy,
}

impl CacheConfig {
    /// Returns the default number of sets.
    const fn default_sets() -> u32 {
        defaults::CACHE_SETS
    }

    /// Returns the default number of words per block.
    const fn default_blocks() -> u32 {
        defaults::CACHE_BLOCKS
    }

    /// Returns the default associativity.
    const fn default_associativity() -> u32 {
        defaults::CACHE_ASSOCIATIVITY
    }
}

impl Default for CacheConfig {
    /// Creates a disabled direct-mapped cache with one single-word set.
    fn default() -> Self {
        Self {
            enabled: false,
            policy: ReplacementPolicy::default(),
            sets: defaults::CACHE_SETS,
            blocks: defaults::CACHE_BLOCKS,
            associativity: defaults::CACHE_ASSOCIATIVITY,
            write_policy: WritePolicy::default(),
        }
    }
}

impl fmt::Display for CacheConfig {
    /// Formats the cache in command-line form, e.g. `lru,4,2,2,wb`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{}",
            self.policy, self.sets, self.blocks, self.associativity, self.write_policy
        )
    }
}

/// Main memory access latencies, in cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryTiming {
    /// Read access time.
    #[serde(default = "MemoryTiming::default_read")]
    pub read: u32,

    /// Write access time.
    #[serde(default = "MemoryTiming::default_write")]
    pub write: u32,

    /// Burst access time.
    #[serde(default = "MemoryTiming::default_burst")]
    pub burst: u32,
}

impl MemoryTiming {
    /// Returns the default read access time.
    const fn default_read() -> u32 {
        defaults::READ_TIME
    }

    /// Returns the default write access time.
    const fn default_write() -> u32 {
        defaults::WRITE_TIME
    }

    /// Returns the default burst access time.
    const fn default_burst() -> u32 {
        defaults::BURST_TIME
    }
}

impl Default for MemoryTiming {
    fn default() -> Self {
        Self {
            read: defaults::READ_TIME,
            write: defaults::WRITE_TIME,
            burst: defaults::BURST_TIME,
        }
    }
}

/// Root configuration handed to the machine at construction.
///
/// # Examples
///
/// ```
/// use mipsim_core::config::{MachineConfig, ReplacementPolicy};
///
/// let config = MachineConfig::default();
/// assert!(config.delay_slot);
/// assert!(!config.pipelined);
/// assert!(!config.data_cache.enabled);
/// assert_eq!(config.data_cache.policy, ReplacementPolicy::Random);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// ELF executable or assembler source to run.
    #[serde(default)]
    pub elf: PathBuf,

    /// Branch delay slot enabled.
    #[serde(default = "MachineConfig::default_delay_slot")]
    pub delay_slot: bool,

    /// Five-stage pipelined core instead of single-cycle.
    #[serde(default)]
    pub pipelined: bool,

    /// Main memory latencies.
    #[serde(default)]
    pub memory: MemoryTiming,

    /// Data cache.
    #[serde(default)]
    pub data_cache: CacheConfig,

    /// Instruction cache.
    #[serde(default)]
    pub instruction_cache: CacheConfig,
}

impl MachineConfig {
    /// Delay slot is on unless explicitly disabled.
    const fn default_delay_slot() -> bool {
        true
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            elf: PathBuf::new(),
            delay_slot: true,
            pipelined: false,
            memory: MemoryTiming::default(),
            data_cache: CacheConfig::default(),
            instruction_cache: CacheConfig::default(),
        }
    }
}
