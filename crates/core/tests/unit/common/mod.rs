//! Tests for the shared types in `r2sys_core::common`.

/// `AddrRange` construction and queries.
pub mod addr_range;
