//! Cache specification parser.
//!
//! Decodes `[POLICY,]SETS,BLOCKS,ASSOCIATIVITY[,WRITE]` (e.g. `lru,4,2,2,wb`) into a
//! [`CacheConfig`]. The policy field is recognised by not starting with a digit; fields
//! after the write policy are ignored.

use crate::common::ConfigError;
use crate::config::{CacheConfig, ReplacementPolicy, WritePolicy};
use crate::parse::number::parse_unsigned;

/// Parses one cache specification.
///
/// `label` names the cache in diagnostics (`data` or `instruction`). Omitted policy fields
/// keep the [`CacheConfig::default`] values. The returned cache is always enabled.
///
/// # Errors
///
/// Returns a [`ConfigError`] when the policy or write policy token is unknown, fewer than
/// three geometry fields are present, or a geometry field is not a positive number.
///
/// # Examples
///
/// ```
/// use mipsim_core::config::{ReplacementPolicy, WritePolicy};
/// use mipsim_core::parse::cache::parse_cache_spec;
///
/// let cache = parse_cache_spec("lru,4,2,2,wb", "data").unwrap();
/// assert!(cache.enabled);
/// assert_eq!(cache.policy, ReplacementPolicy::Lru);
/// assert_eq!((cache.sets, cache.blocks, cache.associativity), (4, 2, 2));
/// assert_eq!(cache.write_policy, WritePolicy::WriteBack);
/// ```
pub fn parse_cache_spec(raw: &str, label: &str) -> Result<CacheConfig, ConfigError> {
    let fields: Vec<&str> = raw.split(',').collect();
    if fields.len() < 3 {
        return Err(ConfigError::CacheParameterCount { label: label.to_owned() });
    }

    let mut cache = CacheConfig::default();
    let mut geometry = fields.as_slice();

    let first = fields[0];
    if first.is_empty() {
        return Err(ConfigError::CachePolicy {
            label: label.to_owned(),
            token: String::new(),
        });
    }
    if !first.starts_with(|c: char| c.is_ascii_digit()) {
        cache.policy =
            ReplacementPolicy::from_token(first).ok_or_else(|| ConfigError::CachePolicy {
                label: label.to_owned(),
                token: first.to_owned(),
            })?;
        geometry = &geometry[1..];
    }

    let [sets, blocks, associativity, rest @ ..] = geometry else {
        return Err(ConfigError::CacheParameterCount { label: label.to_owned() });
    };
    cache.sets = geometry_field(sets, label)?;
    cache.blocks = geometry_field(blocks, label)?;
    cache.associativity = geometry_field(associativity, label)?;
    if cache.sets == 0 || cache.blocks == 0 || cache.associativity == 0 {
        return Err(ConfigError::CacheZeroComponent { label: label.to_owned() });
    }

    if let Some(&token) = rest.first() {
        cache.write_policy =
            WritePolicy::from_token(token).ok_or_else(|| ConfigError::CacheWritePolicy {
                label: label.to_owned(),
                token: token.to_owned(),
            })?;
    }

    cache.enabled = true;
    tracing::debug!(cache = label, spec = %cache, "Parsed cache specification");
    Ok(cache)
}

/// Parses one of the sets/blocks/associativity fields.
fn geometry_field(value: &str, label: &str) -> Result<u32, ConfigError> {
    parse_unsigned(value).ok_or_else(|| ConfigError::CacheParameter {
        label: label.to_owned(),
        value: value.to_owned(),
    })
}
