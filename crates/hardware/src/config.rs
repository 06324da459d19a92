//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize the
//! simulator. It provides:
//! 1. **Defaults:** Baseline constants reproducing the 16-set, 2-way data cache.
//! 2. **Structures:** Hierarchical config for general options and the cache.
//! 3. **Validation:** Geometry checks performed once, before any cache is built.
//!
//! Configuration is supplied as JSON (see [`Config::from_json`]) or taken from
//! `Config::default()`.

use serde::Deserialize;

use crate::common::ConfigError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Number of cache sets (lines per bank).
    pub const CACHE_SETS: usize = 16;

    /// Cache associativity (number of banks).
    pub const CACHE_WAYS: usize = 2;

    /// Address bits below the set index.
    ///
    /// With 16 sets this places the index at bits [6:3] and the tag at bits 7 and up.
    pub const CACHE_OFFSET_BITS: u32 = 3;
}

/// Cache replacement policy algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReplacementPolicy {
    /// Least Recently Used, tracked with global access-counter stamps.
    ///
    /// Ties between equal stamps resolve to the lowest bank.
    #[default]
    #[serde(alias = "Lru")]
    Lru,
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use s360_core::config::Config;
///
/// let json = r#"{
///     "general": { "verbose": true },
///     "cache": { "sets": 8, "ways": 4 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.verbose);
/// assert_eq!(config.cache.sets, 8);
/// assert_eq!(config.cache.ways, 4);
/// assert_eq!(config.cache.offset_bits, 3);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Data cache configuration
    #[serde(default)]
    pub cache: CacheConfig,
}

impl Config {
    /// Parses and validates a JSON configuration document.
    ///
    /// Missing sections and fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and a geometry error
    /// if the cache section describes an impossible cache.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.cache.validate()?;
        Ok(config)
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Emit the per-instruction trace and memory dumps.
    #[serde(default)]
    pub verbose: bool,
}

/// Data cache configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Enable the cache model
    #[serde(default = "CacheConfig::default_enabled")]
    pub enabled: bool,

    /// Number of sets; must be a power of two
    #[serde(default = "CacheConfig::default_sets")]
    pub sets: usize,

    /// Associativity (number of banks)
    #[serde(default = "CacheConfig::default_ways")]
    pub ways: usize,

    /// Address bits below the set index
    #[serde(default = "CacheConfig::default_offset_bits")]
    pub offset_bits: u32,

    /// Replacement policy
    #[serde(default)]
    pub policy: ReplacementPolicy,
}

impl CacheConfig {
    const fn default_enabled() -> bool {
        true
    }

    const fn default_sets() -> usize {
        defaults::CACHE_SETS
    }

    const fn default_ways() -> usize {
        defaults::CACHE_WAYS
    }

    const fn default_offset_bits() -> u32 {
        defaults::CACHE_OFFSET_BITS
    }

    /// Number of address bits used for the set index.
    pub const fn index_bits(&self) -> u32 {
        self.sets.trailing_zeros()
    }

    /// Checks the geometry.
    ///
    /// # Errors
    ///
    /// Fails if the set count is not a non-zero power of two, if there are no
    /// ways, or if the offset and index bits leave no room for a tag.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.sets.is_power_of_two() {
            return Err(ConfigError::InvalidSets(self.sets));
        }
        if self.ways == 0 {
            return Err(ConfigError::ZeroWays);
        }
        let split = self.offset_bits.saturating_add(self.index_bits());
        if split >= u32::BITS {
            return Err(ConfigError::AddressSplit(split));
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: Self::default_enabled(),
            sets: Self::default_sets(),
            ways: Self::default_ways(),
            offset_bits: Self::default_offset_bits(),
            policy: ReplacementPolicy::default(),
        }
    }
}
