//! Ramulator2 memory controller wrapper.
//!
//! This module provides:
//! 1. **Port:** The connection handle a board binds to a controller's address range.
//! 2. **Ramulator2Controller:** The object carrying the resolved configuration path and
//!    output directory to the external memory-timing simulator.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::common::addr::AddrRange;
use crate::common::error::{ConfigError, MemorySystemError};
use crate::resolver::ConfigResolver;
use crate::soc::traits::MemoryController;

/// Default instance name given to controllers.
pub const DEFAULT_CONTROLLER_NAME: &str = "mem_ctrl";

/// A named connection point on a simulated component.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Port {
    owner: String,
    name: &'static str,
}

impl Port {
    /// Creates a port called `name` on the component `owner`.
    pub fn new(owner: impl Into<String>, name: &'static str) -> Self {
        Self {
            owner: owner.into(),
            name,
        }
    }

    /// The component owning this port.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// The port's name on its owner.
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.owner, self.name)
    }
}

/// A controller backed by the Ramulator2 memory-timing simulator.
#[derive(Debug, Clone)]
pub struct Ramulator2Controller {
    name: String,
    mem_type: String,
    channels: u32,
    config_path: PathBuf,
    output_dir: PathBuf,
    range: Option<AddrRange>,
    port: Port,
}

impl Ramulator2Controller {
    /// Creates a controller for `mem_type` with `channels` channels.
    ///
    /// # Errors
    ///
    /// Propagates any [`ConfigError`] from [`ConfigResolver::resolve`].
    pub fn new(
        resolver: &ConfigResolver,
        mem_type: &str,
        channels: u32,
    ) -> Result<Self, ConfigError> {
        Self::with_name(resolver, DEFAULT_CONTROLLER_NAME, mem_type, channels)
    }

    /// Creates a controller with an explicit instance name.
    ///
    /// # Errors
    ///
    /// Propagates any [`ConfigError`] from [`ConfigResolver::resolve`].
    pub fn with_name(
        resolver: &ConfigResolver,
        name: &str,
        mem_type: &str,
        channels: u32,
    ) -> Result<Self, ConfigError> {
        let resolved = resolver.resolve(mem_type, channels)?;
        info!(
            controller = name,
            mem_type,
            channels,
            config_path = %resolved.config_path.display(),
            output_dir = %resolved.output_dir.display(),
            "created ramulator2 controller"
        );
        Ok(Self {
            name: name.to_owned(),
            mem_type: mem_type.to_owned(),
            channels,
            config_path: resolved.config_path,
            output_dir: resolved.output_dir,
            range: None,
            port: Port::new(name, "port"),
        })
    }

    /// Number of channels the controller was configured for.
    pub const fn channels(&self) -> u32 {
        self.channels
    }

    /// Assigns the address range this controller serves.
    ///
    /// # Errors
    ///
    /// Returns [`MemorySystemError::RangeAlreadyAssigned`] if a range is already set.
    pub fn assign_range(&mut self, range: AddrRange) -> Result<(), MemorySystemError> {
        if let Some(existing) = self.range {
            return Err(MemorySystemError::RangeAlreadyAssigned(existing));
        }
        info!(controller = %self.name, %range, "assigned memory range");
        self.range = Some(range);
        Ok(())
    }
}

impl MemoryController for Ramulator2Controller {
    fn name(&self) -> &str {
        &self.name
    }

    fn mem_type(&self) -> &str {
        &self.mem_type
    }

    fn config_path(&self) -> &Path {
        &self.config_path
    }

    fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn range(&self) -> Option<AddrRange> {
        self.range
    }

    fn port(&self) -> &Port {
        &self.port
    }
}
