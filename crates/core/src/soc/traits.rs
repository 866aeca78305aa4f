//! Capability contracts between boards, memory systems, and controllers.
//!
//! This module defines the traits a board assembly process programs against. It provides:
//! 1. **Board:** What a memory system may learn about the board it is attached to.
//! 2. **MemorySystem:** Size, range assignment, and port/controller enumeration for one topology.
//! 3. **MemoryController:** Read-only view of a controller handed to the external simulator.
//!
//! All implementors must be `Send + Sync` so assembled systems can be moved across threads.

use std::fmt;
use std::path::Path;

use crate::common::addr::AddrRange;
use crate::common::error::MemorySystemError;
use crate::soc::memory::controller::Port;

/// The board a memory system is incorporated into.
pub trait Board: fmt::Debug {
    /// Returns the board's name (e.g., `"board"`).
    fn name(&self) -> &str;
    /// Returns the physical address main memory starts at.
    fn mem_base(&self) -> u64;
}

/// A memory topology (single channel, multi channel, ...) attached to a board.
///
/// Boards query the size, assign address ranges once, then connect each
/// `(range, port)` pair returned by [`MemorySystem::get_mem_ports`].
pub trait MemorySystem: fmt::Debug + Send + Sync {
    /// Performs any wiring the memory system needs beyond its ports.
    ///
    /// # Errors
    ///
    /// Returns a [`MemorySystemError`] if the system cannot be incorporated.
    fn incorporate_memory(&mut self, board: &mut dyn Board) -> Result<(), MemorySystemError>;

    /// Returns one `(range, port)` pair per controller; the range is `None` until assigned.
    fn get_mem_ports(&self) -> Vec<(Option<AddrRange>, Port)>;

    /// Returns every controller owned by this memory system.
    fn get_memory_controllers(&self) -> Vec<&dyn MemoryController>;

    /// Returns the total memory size in bytes.
    fn get_size(&self) -> u64;

    /// Assigns the address ranges served by this memory system.
    ///
    /// # Errors
    ///
    /// Returns a [`MemorySystemError`] if the ranges do not fit the topology or
    /// a range was already assigned.
    fn set_memory_range(&mut self, ranges: &[AddrRange]) -> Result<(), MemorySystemError>;
}

/// A memory controller as seen by the board and the external simulator.
pub trait MemoryController: fmt::Debug + Send + Sync {
    /// Returns the controller's instance name.
    fn name(&self) -> &str;
    /// Returns the memory technology name passed to the external simulator.
    fn mem_type(&self) -> &str;
    /// Returns the external simulator's configuration file.
    fn config_path(&self) -> &Path;
    /// Returns the directory the external simulator writes output to.
    fn output_dir(&self) -> &Path;
    /// Returns the assigned address range, if any.
    fn range(&self) -> Option<AddrRange>;
    /// Returns the controller's response port.
    fn port(&self) -> &Port;
}
