//! Ramulator2 configuration file resolution.
//!
//! Locates the configuration file a Ramulator2 controller is built from. It performs:
//! 1. **Input checks:** Rejects an empty memory type or a zero channel count.
//! 2. **Layout checks:** Probes the install directory, the configs directory, and the
//!    configuration file in that order, failing on the first one that is missing.
//! 3. **Output:** Returns the configuration file path with the run's output directory.
//!
//! The configuration file is handed over unmodified; it is never rewritten for the
//! requested channel count.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::common::error::ConfigError;
use crate::config::{Config, ResolverConfig, SimOptions};

/// A resolved Ramulator2 configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Existing YAML configuration file for the external simulator.
    pub config_path: PathBuf,
    /// Directory the external simulator writes its output to.
    pub output_dir: PathBuf,
}

/// Resolves Ramulator2 configuration files against a fixed install layout.
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    layout: ResolverConfig,
    options: SimOptions,
}

impl ConfigResolver {
    /// Creates a resolver from an install layout and run options.
    pub const fn new(layout: ResolverConfig, options: SimOptions) -> Self {
        Self { layout, options }
    }

    /// Creates a resolver from the root configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.resolver.clone(), config.options.clone())
    }

    /// Locates the configuration file for `memory_type` with `channel_count` channels.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::EmptyMemoryType`] / [`ConfigError::InvalidChannelCount`] for bad inputs.
    /// * [`ConfigError::MissingInstallDir`] if the install directory does not exist.
    /// * [`ConfigError::MissingConfigsDir`] if it has no configs directory.
    /// * [`ConfigError::MissingConfigFile`] if the configuration file is absent.
    pub fn resolve(
        &self,
        memory_type: &str,
        channel_count: u32,
    ) -> Result<ResolvedConfig, ConfigError> {
        if memory_type.is_empty() {
            return Err(ConfigError::EmptyMemoryType);
        }
        if channel_count == 0 {
            return Err(ConfigError::InvalidChannelCount(channel_count));
        }

        let install_dir = self.layout.install_dir();
        let configs_dir = self.layout.configs_dir();
        let config_path = self.layout.config_file();
        debug!(
            install_dir = %install_dir.display(),
            config_file = %config_path.display(),
            memory_type,
            "resolving ramulator2 configuration"
        );

        if !install_dir.is_dir() {
            return Err(ConfigError::MissingInstallDir { path: install_dir });
        }
        if !configs_dir.is_dir() {
            return Err(ConfigError::MissingConfigsDir { path: configs_dir });
        }
        if !config_path.is_file() {
            return Err(ConfigError::MissingConfigFile { path: config_path });
        }

        if channel_count > 1 {
            warn!(
                channel_count,
                config_file = %config_path.display(),
                "configuration is not rewritten per channel count; the file's channel setting applies"
            );
        }

        Ok(ResolvedConfig {
            config_path,
            output_dir: self.options.outdir.clone(),
        })
    }
}
