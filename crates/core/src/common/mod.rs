//! Common types shared by the resolver and the memory systems.
//!
//! This module provides:
//! 1. **Address Ranges:** The `[start, end)` interval a controller serves.
//! 2. **Memory Sizes:** Parsing and rendering of strings such as `"1024MB"`.
//! 3. **Error Handling:** The crate's error taxonomy and `Result` alias.

/// Address range type.
pub mod addr;

/// Error types.
pub mod error;

/// Memory size parsing and formatting.
pub mod size;

pub use addr::AddrRange;
pub use error::{ConfigError, Error, MemorySystemError, Result, SizeError};
pub use size::{format_mem_size, parse_mem_size};
