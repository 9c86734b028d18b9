// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Registry configuration.
//!
//! Supports both programmatic and file-based (TOML) configuration:
//!
//! ```toml
//! bucket_selection = "most-specific"
//! initial_cache_capacity = 256
//! inclusion = "non-null"
//! ```

use crate::codec::InclusionPolicy;
#[cfg(feature = "config-loaders")]
use serde::Deserialize;
#[cfg(feature = "config-loaders")]
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "config-loaders")]
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// How a serializer request with no bucket of its own picks a supertype bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "config-loaders", derive(Deserialize))]
#[cfg_attr(feature = "config-loaders", serde(rename_all = "kebab-case"))]
pub enum BucketSelection {
    /// First assignable bucket in registration order.
    #[default]
    FirstAssignable,
    /// The assignable bucket below every other assignable one; registration
    /// order among unrelated buckets.
    MostSpecific,
}

/// Registry configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config-loaders", derive(Deserialize))]
#[cfg_attr(feature = "config-loaders", serde(deny_unknown_fields))]
pub struct RegistryConfig {
    /// Supertype bucket selection for serializer lookups.
    #[cfg_attr(feature = "config-loaders", serde(default))]
    pub bucket_selection: BucketSelection,

    /// Initial capacity of each codec cache.
    #[cfg_attr(feature = "config-loaders", serde(default = "default_cache_capacity"))]
    pub initial_cache_capacity: usize,

    /// Default member inclusion for encoder contexts.
    #[cfg_attr(feature = "config-loaders", serde(default))]
    pub inclusion: InclusionPolicy,
}

fn default_cache_capacity() -> usize {
    50
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            bucket_selection: BucketSelection::default(),
            initial_cache_capacity: default_cache_capacity(),
            inclusion: InclusionPolicy::default(),
        }
    }
}

impl RegistryConfig {
    /// Load configuration from a TOML file.
    #[cfg(feature = "config-loaders")]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    #[cfg(feature = "config-loaders")]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_bucket_selection(mut self, selection: BucketSelection) -> Self {
        self.bucket_selection = selection;
        self
    }

    pub fn with_inclusion(mut self, inclusion: InclusionPolicy) -> Self {
        self.inclusion = inclusion;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_cache_capacity == 0 {
            return Err(ConfigError::Invalid(
                "initial_cache_capacity must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}
