//! Error definitions for memory system configuration.
//!
//! This module defines the failure taxonomy for the crate. It provides:
//! 1. **Size Errors:** Malformed human-readable memory size strings.
//! 2. **Config Errors:** Missing Ramulator2 install, configs directory, or config file, and bad inputs.
//! 3. **Memory System Errors:** Missing size parameters and invalid address range assignments.
//!
//! Every error is fatal at this layer and is propagated to the caller unchanged.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::addr::AddrRange;

/// Errors produced while parsing a human-readable memory size such as `"1024MB"`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SizeError {
    /// The size string was empty or whitespace.
    #[error("memory size string is empty")]
    Empty,

    /// The size string does not start with a decimal number.
    #[error("memory size `{0}` does not start with a number")]
    MissingNumber(String),

    /// The unit suffix is not a recognised memory unit.
    #[error("unknown memory size unit `{unit}` in `{input}`")]
    UnknownUnit {
        /// The full input string.
        input: String,
        /// The unrecognised suffix.
        unit: String,
    },

    /// The magnitude has a fractional part that does not come out to whole bytes.
    #[error("memory size `{0}` is not a whole number of bytes")]
    FractionalBytes(String),

    /// The resulting byte count does not fit in 64 bits.
    #[error("memory size `{0}` overflows a 64-bit byte count")]
    Overflow(String),
}

/// Errors produced while locating the Ramulator2 configuration or loading crate configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The memory type name was empty.
    #[error("memory type name must not be empty")]
    EmptyMemoryType,

    /// A channel count of zero was requested.
    #[error("channel count must be at least 1, got {0}")]
    InvalidChannelCount(u32),

    /// The Ramulator2 install directory does not exist.
    #[error(
        "the `ext/ramulator2` directory cannot be found at `{}`.\n\
         Please navigate to `ext` and run:\n\
         git clone git@github.com:CMU-SAFARI/ramulator2.git",
        .path.display()
    )]
    MissingInstallDir {
        /// The directory that was probed.
        path: PathBuf,
    },

    /// The install directory exists but has no `configs` subdirectory.
    #[error("the `ext/ramulator2/configs` directory cannot be found at `{}`", .path.display())]
    MissingConfigsDir {
        /// The directory that was probed.
        path: PathBuf,
    },

    /// The example configuration file is missing.
    #[error("the configuration file `{}` cannot be found", .path.display())]
    MissingConfigFile {
        /// The file that was probed.
        path: PathBuf,
    },

    /// A crate configuration file could not be read.
    #[error("failed to read configuration file `{}`", .path.display())]
    Read {
        /// The file that failed to read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A crate configuration document is not valid JSON for [`crate::Config`].
    #[error("invalid configuration document")]
    Parse(#[from] serde_json::Error),
}

/// Errors produced by memory systems during construction or range assignment.
#[derive(Debug, Error)]
pub enum MemorySystemError {
    /// No size was supplied; a single-channel system cannot derive one.
    #[error("Ramulator2 memory controller requires a size parameter")]
    MissingSize,

    /// The supplied size could not be parsed.
    #[error("invalid memory size")]
    InvalidSize(#[from] SizeError),

    /// The size parsed to zero bytes.
    #[error("memory size must be non-zero")]
    ZeroSize,

    /// An address range was empty or its end overflowed the address space.
    #[error("invalid address range: start {start:#x}, size {size:#x}")]
    InvalidRange {
        /// Requested start address.
        start: u64,
        /// Requested size in bytes.
        size: u64,
    },

    /// The number of ranges supplied does not match the number of channels.
    #[error("single channel memory requires exactly one range, got {got}")]
    RangeCount {
        /// Number of ranges supplied.
        got: usize,
    },

    /// The supplied range does not cover exactly the memory's size.
    #[error("range size {got:#x} does not match memory size {expected:#x}")]
    RangeSizeMismatch {
        /// Configured memory size in bytes.
        expected: u64,
        /// Size of the supplied range in bytes.
        got: u64,
    },

    /// A range was already assigned; memory ranges are set exactly once.
    #[error("memory range already assigned to {0}")]
    RangeAlreadyAssigned(AddrRange),

    /// A port was reported without an assigned range after range assignment.
    #[error("port `{0}` has no assigned memory range")]
    UnassignedPort(String),

    /// The controller could not be configured.
    #[error("failed to configure memory controller")]
    Config(#[from] ConfigError),
}

/// Crate-level error covering every failure surface.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration resolution or loading failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Memory system construction or range assignment failed.
    #[error(transparent)]
    MemorySystem(#[from] MemorySystemError),
}

/// Convenience result alias using the crate-level [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
