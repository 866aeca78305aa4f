//! Board-level components.
//!
//! This module wires memory into a simulated board. It contains:
//! 1. **Traits:** `Board`, `MemorySystem`, and `MemoryController` capability contracts.
//! 2. **Memory:** Ramulator2 controllers, memory systems, and presets.
//! 3. **Builder:** `SimpleBoard`, which assigns ranges and collects the memory map.

/// Board assembly and memory map.
pub mod builder;

/// Memory controllers and memory systems.
pub mod memory;

/// Capability traits shared by boards and memory systems.
pub mod traits;

pub use builder::{MemoryMapEntry, SimpleBoard};
pub use traits::{Board, MemoryController, MemorySystem};
