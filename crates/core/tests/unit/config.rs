//! # Configuration Tests
//!
//! Defaults, token tables and serialization of the machine configuration.

use mipsim_core::config::{CacheConfig, MachineConfig, MemoryTiming, ReplacementPolicy, WritePolicy};
use pretty_assertions::assert_eq;

#[test]
fn test_machine_config_default() {
    let config = MachineConfig::default();
    assert!(config.delay_slot);
    assert!(!config.pipelined);
    assert_eq!(config.memory, MemoryTiming::default());
    assert_eq!(config.data_cache, CacheConfig::default());
    assert_eq!(config.instruction_cache, CacheConfig::default());
}

#[test]
fn test_memory_timing_defaults() {
    let memory = MemoryTiming::default();
    assert_eq!(memory.read, 10);
    assert_eq!(memory.write, 10);
    assert_eq!(memory.burst, 0);
}

#[test]
fn test_deserialize_empty_memory_timing_uses_defaults() {
    let memory: MemoryTiming = serde_json::from_str("{}").unwrap();
    assert_eq!(memory, MemoryTiming::default());

    let memory: MemoryTiming = serde_json::from_str(r#"{ "read": 3 }"#).unwrap();
    assert_eq!((memory.read, memory.write, memory.burst), (3, 10, 0));
}

#[test]
fn test_cache_config_defaults() {
    let cache = CacheConfig::default();
    assert!(!cache.enabled);
    assert_eq!(cache.policy, ReplacementPolicy::Random);
    assert_eq!(cache.write_policy, WritePolicy::WriteThroughNoAlloc);
    assert_eq!((cache.sets, cache.blocks, cache.associativity), (1, 1, 1));
}

#[test]
fn test_cache_display_is_command_line_form() {
    let cache = CacheConfig {
        enabled: true,
        policy: ReplacementPolicy::Lru,
        sets: 4,
        blocks: 2,
        associativity: 2,
        write_policy: WritePolicy::WriteBack,
    };
    assert_eq!(cache.to_string(), "lru,4,2,2,wb");
}

#[test]
fn test_policy_tokens_round_trip() {
    for policy in [ReplacementPolicy::Random, ReplacementPolicy::Lru, ReplacementPolicy::Lfu] {
        assert_eq!(ReplacementPolicy::from_token(policy.token()), Some(policy));
    }
    for (token, policy) in WritePolicy::TOKENS {
        assert_eq!(WritePolicy::from_token(token), Some(policy));
        assert_eq!(WritePolicy::from_token(policy.token()), Some(policy));
    }
    assert_eq!(ReplacementPolicy::from_token("plru"), None);
    assert_eq!(WritePolicy::from_token(""), None);
}

#[test]
fn test_deserialize_partial_machine_config() {
    let json = r#"{ "elf": "prog.elf", "data_cache": { "enabled": true, "policy": "lfu" } }"#;
    let config: MachineConfig = serde_json::from_str(json).unwrap();
    assert!(config.delay_slot);
    assert_eq!(config.memory.read, 10);
    assert!(config.data_cache.enabled);
    assert_eq!(config.data_cache.policy, ReplacementPolicy::Lfu);
    assert_eq!(config.data_cache.sets, 1);
    assert_eq!(config.data_cache.write_policy, WritePolicy::WriteThroughNoAlloc);
    assert!(!config.instruction_cache.enabled);
}

#[test]
fn test_serialize_policy_names() {
    let value = serde_json::to_value(CacheConfig {
        write_policy: WritePolicy::WriteThroughAlloc,
        ..CacheConfig::default()
    })
    .unwrap();
    assert_eq!(value["policy"], "random");
    assert_eq!(value["write_policy"], "write_through_alloc");
}
