//! # Unit Tests
//!
//! Organised to mirror the crate layout.

/// Address ranges, size strings, and error messages.
pub mod common;


/// Ramulator2 configuration file resolution.
pub mod resolver;
