//! Ramulator2-backed memory systems for simulated boards.
//!
//! This crate configures memory controllers whose timing is modelled by the external
//! Ramulator2 simulator:
//! 1. **Resolver:** Locates the Ramulator2 configuration file and the run's output directory.
//! 2. **Memory:** The `SingleChannel` memory system and its Ramulator2 controller.
//! 3. **SoC:** Capability traits and a `SimpleBoard` that assigns ranges and builds the memory map.
//! 4. **Common:** Address ranges, memory size strings, and errors.

/// Common types (address ranges, sizes, errors).
pub mod common;
/// Crate configuration (install layout, run options, environment overrides).
pub mod config;
/// Ramulator2 configuration file resolution.
pub mod resolver;
/// Boards, memory systems, and controllers.
pub mod soc;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Crate-level error and result alias.
pub use crate::common::error::{Error, Result};
/// Resolver for Ramulator2 configuration files.
pub use crate::resolver::{ConfigResolver, ResolvedConfig};
/// Single-channel memory system.
pub use crate::soc::memory::SingleChannel;
