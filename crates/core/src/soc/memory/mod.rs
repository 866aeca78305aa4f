//! Main memory systems backed by Ramulator2.
//!
//! This module implements the memory side of board assembly. It provides:
//! 1. **Controller:** The Ramulator2 controller wrapper and its port.
//! 2. **Single Channel:** A one-controller, one-range memory system.
//! 3. **Presets:** Factory functions for common memory parts.

/// Ramulator2 controller wrapper and ports.
pub mod controller;

/// Factory functions for common memory configurations.
pub mod presets;

/// Single-channel memory system.
pub mod single_channel;

pub use controller::{Port, Ramulator2Controller};
pub use presets::{single_channel_ddr4_2400, single_channel_ddr4_2400_with_size};
pub use single_channel::SingleChannel;
