//! Single-channel Ramulator2 memory system.
//!
//! One controller serves one address range whose size is fixed at construction.
//! The range is assigned exactly once; after that the system is read-only.

use tracing::debug;

use crate::common::addr::AddrRange;
use crate::common::error::MemorySystemError;
use crate::common::size::parse_mem_size;
use crate::resolver::ConfigResolver;
use crate::soc::memory::controller::{Port, Ramulator2Controller};
use crate::soc::traits::{Board, MemoryController, MemorySystem};

/// A memory system with a single Ramulator2 controller and a single channel.
#[derive(Debug, Clone)]
pub struct SingleChannel {
    mem_ctrl: Ramulator2Controller,
    size: u64,
}

impl SingleChannel {
    /// Creates a single-channel system of `mem_type` memory.
    ///
    /// `size` is a human-readable size such as `"1024MB"` and is mandatory.
    ///
    /// # Errors
    ///
    /// * [`MemorySystemError::MissingSize`] if `size` is `None` or blank.
    /// * [`MemorySystemError::InvalidSize`] / [`MemorySystemError::ZeroSize`] if it does not
    ///   parse to a positive byte count.
    /// * [`MemorySystemError::Config`] if the Ramulator2 configuration cannot be resolved.
    pub fn new(
        resolver: &ConfigResolver,
        mem_type: &str,
        size: Option<&str>,
    ) -> Result<Self, MemorySystemError> {
        let size = match size {
            Some(s) if !s.trim().is_empty() => parse_mem_size(s)?,
            _ => return Err(MemorySystemError::MissingSize),
        };
        if size == 0 {
            return Err(MemorySystemError::ZeroSize);
        }

        let mem_ctrl = Ramulator2Controller::new(resolver, mem_type, 1)?;
        debug!(mem_type, size, "built single channel memory system");
        Ok(Self { mem_ctrl, size })
    }

    /// Returns `true` once an address range has been assigned.
    pub fn is_configured(&self) -> bool {
        self.mem_ctrl.range().is_some()
    }

    /// The controller backing this memory system.
    pub const fn controller(&self) -> &Ramulator2Controller {
        &self.mem_ctrl
    }
}

impl MemorySystem for SingleChannel {
    fn incorporate_memory(&mut self, _board: &mut dyn Board) -> Result<(), MemorySystemError> {
        Ok(())
    }

    fn get_mem_ports(&self) -> Vec<(Option<AddrRange>, Port)> {
        vec![(self.mem_ctrl.range(), self.mem_ctrl.port().clone())]
    }

    fn get_memory_controllers(&self) -> Vec<&dyn MemoryController> {
        vec![&self.mem_ctrl]
    }

    fn get_size(&self) -> u64 {
        self.size
    }

    fn set_memory_range(&mut self, ranges: &[AddrRange]) -> Result<(), MemorySystemError> {
        let [range] = ranges else {
            return Err(MemorySystemError::RangeCount { got: ranges.len() });
        };
        if range.size() != self.size {
            return Err(MemorySystemError::RangeSizeMismatch {
                expected: self.size,
                got: range.size(),
            });
        }
        self.mem_ctrl.assign_range(*range)
    }
}
