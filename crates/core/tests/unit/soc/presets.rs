//! Preset factory tests.

use r2sys_core::common::MemorySystemError;
use r2sys_core::soc::{MemoryController as _, MemorySystem};
use r2sys_core::soc::memory::presets::{
    DDR4_2400_MEM_TYPE, single_channel_ddr4_2400, single_channel_ddr4_2400_with_size,
};

use crate::common::{Missing, Ramulator2Tree};

#[test]
fn ddr4_2400_defaults_to_1024mb() {
    let tree = Ramulator2Tree::complete();
    let system = single_channel_ddr4_2400(&tree.resolver()).unwrap();

    assert_eq!(system.get_size(), 1024 * 1024 * 1024);
    assert_eq!(system.get_mem_ports().len(), 1);
    assert_eq!(system.get_memory_controllers()[0].mem_type(), DDR4_2400_MEM_TYPE);
}

#[test]
fn ddr4_2400_accepts_explicit_size() {
    let tree = Ramulator2Tree::complete();
    let system = single_channel_ddr4_2400_with_size(&tree.resolver(), Some("2GiB")).unwrap();
    assert_eq!(system.get_size(), 2 << 30);
}

#[test]
fn ddr4_2400_without_size_fails() {
    let tree = Ramulator2Tree::complete();
    assert!(matches!(
        single_channel_ddr4_2400_with_size(&tree.resolver(), None),
        Err(MemorySystemError::MissingSize)
    ));
}

#[test]
fn ddr4_2400_requires_install() {
    let tree = Ramulator2Tree::with_missing(Missing::ConfigFile);
    assert!(matches!(
        single_channel_ddr4_2400(&tree.resolver()),
        Err(MemorySystemError::Config(_))
    ));
}
