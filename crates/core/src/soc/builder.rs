//! Board assembly around a memory system.
//!
//! This module builds a minimal board from a memory system. It performs:
//! 1. **Range assignment:** Places the memory at the board's memory base as one contiguous range.
//! 2. **Incorporation:** Lets the memory system do any extra wiring against the board.
//! 3. **Memory map:** Collects the `(range, port)` pairs the rest of the system connects to.

use tracing::info;

use crate::common::addr::AddrRange;
use crate::common::error::MemorySystemError;
use crate::common::size::format_mem_size;
use crate::soc::memory::controller::Port;
use crate::soc::traits::{Board, MemorySystem};

/// Default physical address main memory is mapped at (2 GiB).
pub const DEFAULT_MEM_BASE: u64 = 0x8000_0000;

/// One entry of the board's memory map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryMapEntry {
    /// Addresses served through `port`.
    pub range: AddrRange,
    /// Controller port bound to `range`.
    pub port: Port,
}

/// Name and memory base of a board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardInfo {
    name: String,
    mem_base: u64,
}

impl BoardInfo {
    /// Creates board information for `name` with memory starting at `mem_base`.
    pub fn new(name: impl Into<String>, mem_base: u64) -> Self {
        Self {
            name: name.into(),
            mem_base,
        }
    }
}

impl Board for BoardInfo {
    fn name(&self) -> &str {
        &self.name
    }

    fn mem_base(&self) -> u64 {
        self.mem_base
    }
}

/// A board owning one memory system mapped at a fixed base address.
#[derive(Debug)]
pub struct SimpleBoard {
    info: BoardInfo,
    memory: Box<dyn MemorySystem>,
    memory_map: Vec<MemoryMapEntry>,
}

impl SimpleBoard {
    /// Assembles a board around `memory`, mapping it at `mem_base`.
    ///
    /// # Arguments
    ///
    /// * `name` - Board name.
    /// * `mem_base` - Physical address the memory range starts at.
    /// * `memory` - The memory system; its range must still be unassigned.
    ///
    /// # Errors
    ///
    /// Returns a [`MemorySystemError`] if the range does not fit the address space,
    /// the memory system rejects it, or a port ends up without a range.
    pub fn new(
        name: impl Into<String>,
        mem_base: u64,
        mut memory: Box<dyn MemorySystem>,
    ) -> Result<Self, MemorySystemError> {
        let mut info = BoardInfo::new(name, mem_base);

        let range = AddrRange::with_size(mem_base, memory.get_size())?;
        memory.set_memory_range(&[range])?;
        memory.incorporate_memory(&mut info)?;

        let memory_map = memory
            .get_mem_ports()
            .into_iter()
            .map(|(range, port)| match range {
                Some(range) => Ok(MemoryMapEntry { range, port }),
                None => Err(MemorySystemError::UnassignedPort(port.to_string())),
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            board = %info.name,
            size = %format_mem_size(memory.get_size()),
            %range,
            controllers = memory.get_memory_controllers().len(),
            "assembled board memory"
        );

        Ok(Self {
            info,
            memory,
            memory_map,
        })
    }

    /// Assembles a board with memory at [`DEFAULT_MEM_BASE`].
    ///
    /// # Errors
    ///
    /// Fails as [`SimpleBoard::new`] does.
    pub fn with_default_base(
        name: impl Into<String>,
        memory: Box<dyn MemorySystem>,
    ) -> Result<Self, MemorySystemError> {
        Self::new(name, DEFAULT_MEM_BASE, memory)
    }

    /// The board's memory system.
    pub fn memory(&self) -> &dyn MemorySystem {
        self.memory.as_ref()
    }

    /// The `(range, port)` pairs of the board's main memory.
    pub fn memory_map(&self) -> &[MemoryMapEntry] {
        &self.memory_map
    }

    /// Finds the port serving `addr`, if any.
    pub fn port_for(&self, addr: u64) -> Option<&Port> {
        self.memory_map
            .iter()
            .find(|entry| entry.range.contains(addr))
            .map(|entry| &entry.port)
    }
}

impl Board for SimpleBoard {
    fn name(&self) -> &str {
        self.info.name()
    }

    fn mem_base(&self) -> u64 {
        self.info.mem_base()
    }
}
