//! Physical address ranges.
//!
//! This module defines the address interval a memory controller serves. It provides:
//! 1. **Construction:** Checked constructors from `(start, end)` or `(start, size)`.
//! 2. **Queries:** Size and containment tests used for memory map lookups.

use std::fmt;

use super::error::MemorySystemError;

/// A contiguous, non-empty interval `[start, end)` of simulated physical memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AddrRange {
    start: u64,
    end: u64,
}

impl AddrRange {
    /// Creates a range covering `[start, end)`.
    ///
    /// # Errors
    ///
    /// Returns [`MemorySystemError::InvalidRange`] if `end <= start`.
    pub const fn new(start: u64, end: u64) -> Result<Self, MemorySystemError> {
        if end <= start {
            return Err(MemorySystemError::InvalidRange {
                start,
                size: end.saturating_sub(start),
            });
        }
        Ok(Self { start, end })
    }

    /// Creates a range of `size` bytes beginning at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`MemorySystemError::InvalidRange`] if `size` is zero or
    /// `start + size` overflows the 64-bit address space.
    pub const fn with_size(start: u64, size: u64) -> Result<Self, MemorySystemError> {
        match start.checked_add(size) {
            Some(end) if size > 0 => Ok(Self { start, end }),
            _ => Err(MemorySystemError::InvalidRange { start, size }),
        }
    }

    /// First address in the range.
    #[inline]
    pub const fn start(&self) -> u64 {
        self.start
    }

    /// One past the last address in the range.
    #[inline]
    pub const fn end(&self) -> u64 {
        self.end
    }

    /// Number of bytes covered.
    #[inline]
    pub const fn size(&self) -> u64 {
        self.end - self.start
    }

    /// Returns `true` if `addr` falls inside the range.
    #[inline]
    pub const fn contains(&self, addr: u64) -> bool {
        addr >= self.start && addr < self.end
    }
}

impl fmt::Display for AddrRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:#x}:{:#x})", self.start, self.end)
    }
}
