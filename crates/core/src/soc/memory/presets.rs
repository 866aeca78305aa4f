//! Ready-made memory system configurations.

use crate::common::error::MemorySystemError;
use crate::resolver::ConfigResolver;
use crate::soc::memory::single_channel::SingleChannel;

/// Ramulator2 name of the DDR4-2400 part (4Gb, x8 devices).
pub const DDR4_2400_MEM_TYPE: &str = "DDR4_4Gb_x8_2400";

/// Default size of the single-channel DDR4-2400 system.
pub const DDR4_2400_DEFAULT_SIZE: &str = "1024MB";

/// A single-channel DDR4-2400 memory system of the default 1024MB.
///
/// # Errors
///
/// Returns [`MemorySystemError::Config`] if the Ramulator2 configuration cannot be resolved.
pub fn single_channel_ddr4_2400(
    resolver: &ConfigResolver,
) -> Result<SingleChannel, MemorySystemError> {
    single_channel_ddr4_2400_with_size(resolver, Some(DDR4_2400_DEFAULT_SIZE))
}

/// A single-channel DDR4-2400 memory system of the given size.
///
/// # Errors
///
/// Fails as [`SingleChannel::new`] does, including when `size` is `None`.
pub fn single_channel_ddr4_2400_with_size(
    resolver: &ConfigResolver,
    size: Option<&str>,
) -> Result<SingleChannel, MemorySystemError> {
    SingleChannel::new(resolver, DDR4_2400_MEM_TYPE, size)
}
