//! Generator configuration.
//!
//! [`Config`] is the editable state a front end mutates; every edit goes
//! through a setter that keeps length and bulk count inside their ranges.
//! [`Config::request`] snapshots it into an immutable [`GenerationRequest`].
//!
//! [`StoredConfig`] is the shape of the persisted settings blob. Every field
//! is optional and a malformed field is treated as missing.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::charset::{CharacterGroup, CharacterPools, GroupPool};
use crate::generator::assemble_alphabet;

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 50;
pub const DEFAULT_LENGTH: usize = 20;

pub const MIN_BULK_COUNT: usize = 1;
pub const MAX_BULK_COUNT: usize = 100;
pub const DEFAULT_BULK_COUNT: usize = 1;

/// Editable generator settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pools: CharacterPools,
    require_one: [bool; 4],
    guaranteed: Vec<char>,
    length: usize,
    bulk_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pools: CharacterPools::default(),
            require_one: [true; 4],
            guaranteed: Vec::new(),
            length: DEFAULT_LENGTH,
            bulk_count: DEFAULT_BULK_COUNT,
        }
    }
}

impl Config {
    pub fn pools(&self) -> &CharacterPools {
        &self.pools
    }

    pub fn pool(&self, group: CharacterGroup) -> &GroupPool {
        self.pools.get(group)
    }

    /// Enables or disables one character. Returns `false` when `c` is not in
    /// any canonical alphabet.
    ///
    /// Disabling a guaranteed character keeps it in the guaranteed set; it is
    /// only skipped while it stays disabled.
    pub fn set_char_enabled(&mut self, c: char, enabled: bool) -> bool {
        match CharacterGroup::of(c) {
            Some(group) => self.pools.get_mut(group).set(c, enabled),
            None => false,
        }
    }

    /// Select all / deselect all for one group.
    pub fn set_group_enabled(&mut self, group: CharacterGroup, enabled: bool) {
        self.pools.get_mut(group).set_all(enabled);
    }

    pub fn require_one(&self, group: CharacterGroup) -> bool {
        self.require_one[group.index()]
    }

    pub fn set_require_one(&mut self, group: CharacterGroup, required: bool) {
        self.require_one[group.index()] = required;
    }

    /// Guaranteed characters in the order they were added.
    pub fn guaranteed(&self) -> &[char] {
        &self.guaranteed
    }

    /// Adds `c` to the guaranteed set, or removes it if already present.
    ///
    /// Returns whether `c` is guaranteed afterwards. Characters outside every
    /// canonical alphabet are never added.
    pub fn toggle_guaranteed(&mut self, c: char) -> bool {
        if let Some(idx) = self.guaranteed.iter().position(|&g| g == c) {
            self.guaranteed.remove(idx);
            return false;
        }
        if CharacterGroup::of(c).is_none() {
            return false;
        }
        self.guaranteed.push(c);
        true
    }

    /// Characters that can currently be picked as guaranteed, filtered by a
    /// case-insensitive substring query.
    pub fn guarantee_candidates(&self, query: &str) -> Vec<char> {
        let query = query.to_lowercase();
        assemble_alphabet(&self.pools)
            .chars()
            .filter(|c| c.to_lowercase().to_string().contains(&query))
            .collect()
    }

    /// True when more characters are guaranteed than the password can hold.
    pub fn guaranteed_overflow(&self) -> bool {
        self.guaranteed.len() > self.length
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn set_length(&mut self, length: i64) {
        self.length = clamp(length, MIN_LENGTH, MAX_LENGTH);
    }

    pub fn bulk_count(&self) -> usize {
        self.bulk_count
    }

    pub fn set_bulk_count(&mut self, count: i64) {
        self.bulk_count = clamp(count, MIN_BULK_COUNT, MAX_BULK_COUNT);
    }

    /// Snapshots the current settings into a generation request.
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest {
            pools: self.pools.clone(),
            require_one: self.require_one,
            guaranteed: self.guaranteed.clone(),
            length: self.length,
            bulk_count: self.bulk_count,
        }
    }
}

fn clamp(value: i64, min: usize, max: usize) -> usize {
    value.clamp(min as i64, max as i64) as usize
}

/// Immutable input of one generation call.
///
/// Only [`Config::request`] builds it, so length and bulk count are always
/// inside their ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pools: CharacterPools,
    require_one: [bool; 4],
    guaranteed: Vec<char>,
    length: usize,
    bulk_count: usize,
}

impl GenerationRequest {
    pub fn pools(&self) -> &CharacterPools {
        &self.pools
    }

    pub fn require_one(&self, group: CharacterGroup) -> bool {
        self.require_one[group.index()]
    }

    pub fn guaranteed(&self) -> &[char] {
        &self.guaranteed
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn bulk_count(&self) -> usize {
        self.bulk_count
    }
}

/// Persisted settings blob.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredConfig {
    #[serde(default, deserialize_with = "lenient")]
    pub length: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub bulk_count: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub uppercase: Option<BTreeMap<String, bool>>,
    #[serde(default, deserialize_with = "lenient")]
    pub lowercase: Option<BTreeMap<String, bool>>,
    #[serde(default, deserialize_with = "lenient")]
    pub numbers: Option<BTreeMap<String, bool>>,
    #[serde(default, deserialize_with = "lenient")]
    pub symbols: Option<BTreeMap<String, bool>>,
    #[serde(default, deserialize_with = "lenient")]
    pub guaranteed_chars: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub require_uppercase: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub require_lowercase: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub require_numbers: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub require_symbols: Option<bool>,
}

/// Parses a field, turning any type mismatch into `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl StoredConfig {
    fn pool_map(&self, group: CharacterGroup) -> Option<&BTreeMap<String, bool>> {
        match group {
            CharacterGroup::Uppercase => self.uppercase.as_ref(),
            CharacterGroup::Lowercase => self.lowercase.as_ref(),
            CharacterGroup::Number => self.numbers.as_ref(),
            CharacterGroup::Symbol => self.symbols.as_ref(),
        }
    }

    fn require_flag(&self, group: CharacterGroup) -> Option<bool> {
        match group {
            CharacterGroup::Uppercase => self.require_uppercase,
            CharacterGroup::Lowercase => self.require_lowercase,
            CharacterGroup::Number => self.require_numbers,
            CharacterGroup::Symbol => self.require_symbols,
        }
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

impl From<StoredConfig> for Config {
    fn from(stored: StoredConfig) -> Self {
        let mut config = Config::default();

        for group in CharacterGroup::ALL {
            if let Some(map) = stored.pool_map(group) {
                let pool = config.pools.get_mut(group);
                pool.set_all(false);
                for (key, &on) in map {
                    if let Some(c) = single_char(key) {
                        pool.set(c, on);
                    }
                }
            }
            if let Some(required) = stored.require_flag(group) {
                config.set_require_one(group, required);
            }
        }

        if let Some(list) = &stored.guaranteed_chars {
            for c in list.iter().filter_map(|s| single_char(s)) {
                if !config.guaranteed.contains(&c) && CharacterGroup::of(c).is_some() {
                    config.guaranteed.push(c);
                }
            }
        }

        if let Some(length) = stored.length {
            config.set_length(length);
        }
        if let Some(count) = stored.bulk_count {
            config.set_bulk_count(count);
        }

        config
    }
}

impl From<&Config> for StoredConfig {
    fn from(config: &Config) -> Self {
        let map = |group: CharacterGroup| {
            let pool = config.pool(group);
            Some(
                group
                    .alphabet()
                    .chars()
                    .map(|c| (c.to_string(), pool.is_enabled(c)))
                    .collect::<BTreeMap<_, _>>(),
            )
        };

        StoredConfig {
            length: Some(config.length as i64),
            bulk_count: Some(config.bulk_count as i64),
            uppercase: map(CharacterGroup::Uppercase),
            lowercase: map(CharacterGroup::Lowercase),
            numbers: map(CharacterGroup::Number),
            symbols: map(CharacterGroup::Symbol),
            guaranteed_chars: Some(config.guaranteed.iter().map(|c| c.to_string()).collect()),
            require_uppercase: Some(config.require_one(CharacterGroup::Uppercase)),
            require_lowercase: Some(config.require_one(CharacterGroup::Lowercase)),
            require_numbers: Some(config.require_one(CharacterGroup::Number)),
            require_symbols: Some(config.require_one(CharacterGroup::Symbol)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.length(), 20);
        assert_eq!(config.bulk_count(), 1);
        assert!(config.guaranteed().is_empty());
        for group in CharacterGroup::ALL {
            assert!(config.require_one(group));
            assert_eq!(config.pool(group).selected_count(), group.size());
        }
    }

    #[test]
    fn test_length_and_bulk_are_clamped() {
        let mut config = Config::default();
        config.set_length(2);
        assert_eq!(config.length(), MIN_LENGTH);
        config.set_length(500);
        assert_eq!(config.length(), MAX_LENGTH);
        config.set_bulk_count(0);
        assert_eq!(config.bulk_count(), MIN_BULK_COUNT);
        config.set_bulk_count(-3);
        assert_eq!(config.bulk_count(), MIN_BULK_COUNT);
        config.set_bulk_count(1000);
        assert_eq!(config.bulk_count(), MAX_BULK_COUNT);
    }

    #[test]
    fn test_toggle_guaranteed() {
        let mut config = Config::default();
        assert!(config.toggle_guaranteed('Z'));
        assert!(config.toggle_guaranteed('3'));
        assert_eq!(config.guaranteed(), &['Z', '3']);
        assert!(!config.toggle_guaranteed('Z'));
        assert_eq!(config.guaranteed(), &['3']);
        // Not in any canonical alphabet
        assert!(!config.toggle_guaranteed('"'));
        assert_eq!(config.guaranteed(), &['3']);
    }

    #[test]
    fn test_disabling_keeps_guaranteed_stored() {
        let mut config = Config::default();
        config.toggle_guaranteed('a');
        config.set_group_enabled(CharacterGroup::Lowercase, false);
        assert!(config.set_char_enabled('B', false));
        assert_eq!(config.guaranteed(), &['a']);
        assert!(config.pool(CharacterGroup::Lowercase).is_empty());
        assert!(!config.pool(CharacterGroup::Uppercase).is_enabled('B'));
        assert!(!config.set_char_enabled('~', false));
    }

    #[test]
    fn test_guarantee_candidates() {
        let mut config = Config::default();
        config.set_group_enabled(CharacterGroup::Symbol, false);
        config.set_group_enabled(CharacterGroup::Number, false);
        assert_eq!(config.guarantee_candidates("q"), vec!['Q', 'q']);
        assert_eq!(config.guarantee_candidates("").len(), 52);
        assert!(config.guarantee_candidates("!").is_empty());
    }

    #[test]
    fn test_guaranteed_overflow() {
        let mut config = Config::default();
        config.set_length(4);
        for c in "ABCD".chars() {
            config.toggle_guaranteed(c);
        }
        assert!(!config.guaranteed_overflow());
        config.toggle_guaranteed('E');
        assert!(config.guaranteed_overflow());
    }

    #[test]
    fn test_request_snapshot() {
        let mut config = Config::default();
        config.set_length(8);
        config.set_bulk_count(3);
        config.toggle_guaranteed('x');
        let request = config.request();

        config.set_length(30);
        assert_eq!(request.length(), 8);
        assert_eq!(request.bulk_count(), 3);
        assert_eq!(request.guaranteed(), &['x']);
    }

    #[test]
    fn test_empty_stored_config_yields_defaults() {
        let stored: StoredConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(Config::from(stored), Config::default());
    }

    #[test]
    fn test_malformed_fields_fall_back_to_defaults() {
        let json = r#"{
            "length": "long",
            "bulkCount": null,
            "uppercase": [1, 2, 3],
            "guaranteedChars": 7,
            "requireSymbols": "yes"
        }"#;
        let stored: StoredConfig = serde_json::from_str(json).unwrap();
        assert_eq!(Config::from(stored), Config::default());
    }

    #[test]
    fn test_stored_config_applied() {
        let json = r#"{
            "length": 2,
            "bulkCount": 7,
            "numbers": {"1": true, "2": false, "x": true},
            "guaranteedChars": ["1", "1", "ab", "", "Q", "\""],
            "requireNumbers": false
        }"#;
        let stored: StoredConfig = serde_json::from_str(json).unwrap();
        let config = Config::from(stored);

        assert_eq!(config.length(), MIN_LENGTH);
        assert_eq!(config.bulk_count(), 7);
        assert_eq!(config.pool(CharacterGroup::Number).chars().collect::<String>(), "1");
        assert_eq!(config.pool(CharacterGroup::Uppercase).selected_count(), 26);
        assert_eq!(config.guaranteed(), &['1', 'Q']);
        assert!(!config.require_one(CharacterGroup::Number));
        assert!(config.require_one(CharacterGroup::Symbol));
    }

    #[test]
    fn test_stored_config_round_trip() {
        let mut config = Config::default();
        config.set_length(33);
        config.set_bulk_count(5);
        config.set_char_enabled('%', false);
        config.set_group_enabled(CharacterGroup::Lowercase, false);
        config.set_require_one(CharacterGroup::Uppercase, false);
        config.toggle_guaranteed('7');

        let json = serde_json::to_string(&StoredConfig::from(&config)).unwrap();
        let stored: StoredConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(Config::from(stored), config);
    }
}
