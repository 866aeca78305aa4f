//! Configuration for locating Ramulator2 and the run's output directory.
//!
//! This module defines all configuration structures used by the resolver. It provides:
//! 1. **Defaults:** The install layout relative to the base directory and the default output directory.
//! 2. **Structures:** `ResolverConfig` for the install layout and `SimOptions` for run-wide options.
//! 3. **Overrides:** Environment variable overrides applied through an injectable lookup.
//!
//! Configuration is supplied as JSON (`Config::from_json`) or built with `Config::default()`
//! and the base directory set explicitly by the caller.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration constants.
mod defaults {
    /// Install directory of Ramulator2, relative to the base directory.
    pub const INSTALL_SUBDIR: &str = "ext/ramulator2/ramulator2";

    /// Name of the configs directory inside the install directory.
    pub const CONFIGS_DIR: &str = "configs";

    /// Configuration file handed to every controller.
    pub const CONFIG_FILE: &str = "example.yaml";

    /// Output directory used by the simulation framework when none is given.
    pub const OUTDIR: &str = "m5out";
}

/// Environment variable overriding the Ramulator2 install directory.
pub const ENV_INSTALL_DIR: &str = "RAMULATOR2_DIR";

/// Environment variable overriding the output directory.
pub const ENV_OUTDIR: &str = "R2SYS_OUTDIR";

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use r2sys_core::config::Config;
///
/// let json = r#"{
///     "resolver": { "base_dir": "/opt/gem5" },
///     "options": { "outdir": "/tmp/run0" }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(
///     config.resolver.install_dir(),
///     std::path::Path::new("/opt/gem5/ext/ramulator2/ramulator2")
/// );
/// assert_eq!(config.options.outdir, std::path::Path::new("/tmp/run0"));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Ramulator2 install layout
    #[serde(default)]
    pub resolver: ResolverConfig,
    /// Run-wide simulation options
    #[serde(default)]
    pub options: SimOptions,
}

impl Config {
    /// Parses a configuration document from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is not valid JSON or has
    /// fields of the wrong type.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Applies environment overrides using `lookup` to read variables.
    ///
    /// `RAMULATOR2_DIR` replaces the install directory and `R2SYS_OUTDIR` the
    /// output directory. Empty values are ignored.
    ///
    /// ```
    /// use r2sys_core::config::Config;
    ///
    /// let mut config = Config::default();
    /// config.apply_env(|key| (key == "R2SYS_OUTDIR").then(|| "/scratch/out".to_owned()));
    /// assert_eq!(config.options.outdir, std::path::Path::new("/scratch/out"));
    /// ```
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_INSTALL_DIR).filter(|v| !v.is_empty()) {
            self.resolver.install_dir_override = Some(PathBuf::from(dir));
        }
        if let Some(dir) = lookup(ENV_OUTDIR).filter(|v| !v.is_empty()) {
            self.options.outdir = PathBuf::from(dir);
        }
    }

    /// Applies overrides from the process environment.
    pub fn apply_process_env(&mut self) {
        self.apply_env(|key| std::env::var(key).ok());
    }

    /// Applies command-line overrides, which take precedence over the file and
    /// the environment.
    ///
    /// An explicit `base_dir` drops any install directory override so the
    /// layout is resolved under the given directory.
    pub fn apply_overrides(&mut self, base_dir: Option<PathBuf>, outdir: Option<PathBuf>) {
        if let Some(dir) = base_dir {
            self.resolver.base_dir = dir;
            self.resolver.install_dir_override = None;
        }
        if let Some(dir) = outdir {
            self.options.outdir = dir;
        }
    }
}

/// Where the Ramulator2 install and its configuration file live.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResolverConfig {
    /// Directory the install layout is resolved against (usually the gem5 checkout).
    #[serde(default)]
    pub base_dir: PathBuf,

    /// Install directory relative to `base_dir`
    #[serde(default = "ResolverConfig::default_install_subdir")]
    pub install_subdir: PathBuf,

    /// Absolute install directory; when set, `base_dir` and `install_subdir` are ignored
    #[serde(default)]
    pub install_dir_override: Option<PathBuf>,

    /// Configs directory name inside the install directory
    #[serde(default = "ResolverConfig::default_configs_dir")]
    pub configs_dir: String,

    /// Configuration file name inside the configs directory
    #[serde(default = "ResolverConfig::default_config_file")]
    pub config_file: String,
}

impl ResolverConfig {
    /// Returns a configuration rooted at `base_dir` with the default layout.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            ..Self::default()
        }
    }

    /// The Ramulator2 install directory.
    pub fn install_dir(&self) -> PathBuf {
        self.install_dir_override
            .clone()
            .unwrap_or_else(|| self.base_dir.join(&self.install_subdir))
    }

    /// The directory holding Ramulator2 configuration files.
    pub fn configs_dir(&self) -> PathBuf {
        self.install_dir().join(&self.configs_dir)
    }

    /// The configuration file handed to controllers.
    pub fn config_file(&self) -> PathBuf {
        self.configs_dir().join(&self.config_file)
    }

    fn default_install_subdir() -> PathBuf {
        PathBuf::from(defaults::INSTALL_SUBDIR)
    }

    fn default_configs_dir() -> String {
        defaults::CONFIGS_DIR.to_owned()
    }

    fn default_config_file() -> String {
        defaults::CONFIG_FILE.to_owned()
    }
}

impl Default for ResolverConfig {
    /// Layout relative to an empty base directory, i.e. the process working directory.
    fn default() -> Self {
        Self {
            base_dir: PathBuf::new(),
            install_subdir: Self::default_install_subdir(),
            install_dir_override: None,
            configs_dir: Self::default_configs_dir(),
            config_file: Self::default_config_file(),
        }
    }
}

/// Run-wide options shared by every component of a simulated system.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimOptions {
    /// Directory the simulator writes statistics and traces to
    #[serde(default = "SimOptions::default_outdir")]
    pub outdir: PathBuf,
}

impl SimOptions {
    fn default_outdir() -> PathBuf {
        PathBuf::from(defaults::OUTDIR)
    }
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            outdir: Self::default_outdir(),
        }
    }
}
