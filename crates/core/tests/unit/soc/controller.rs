//! Ramulator2 controller tests.

use r2sys_core::common::{AddrRange, ConfigError, MemorySystemError};
use r2sys_core::soc::MemoryController;
use r2sys_core::soc::memory::{Port, Ramulator2Controller};

use crate::common::{Missing, Ramulator2Tree};

#[test]
fn carries_resolved_paths() {
    let tree = Ramulator2Tree::complete();
    let ctrl = Ramulator2Controller::new(&tree.resolver(), "DDR4_4Gb_x8_2400", 1).unwrap();

    assert_eq!(ctrl.name(), "mem_ctrl");
    assert_eq!(ctrl.mem_type(), "DDR4_4Gb_x8_2400");
    assert_eq!(ctrl.config_path(), tree.config_file());
    assert_eq!(ctrl.output_dir(), tree.outdir());
    assert_eq!(ctrl.range(), None);
}

#[test]
fn named_controller_owns_its_port() {
    let tree = Ramulator2Tree::complete();
    let ctrl =
        Ramulator2Controller::with_name(&tree.resolver(), "ctrl0", "DDR4_4Gb_x8_2400", 2).unwrap();

    assert_eq!(ctrl.port(), &Port::new("ctrl0", "port"));
    assert_eq!(ctrl.port().owner(), "ctrl0");
    assert_eq!(ctrl.port().name(), "port");
    assert_eq!(ctrl.channels(), 2);
}

#[test]
fn construction_fails_without_install() {
    let tree = Ramulator2Tree::with_missing(Missing::InstallDir);
    let err = Ramulator2Controller::new(&tree.resolver(), "DDR4_4Gb_x8_2400", 1).unwrap_err();
    assert!(matches!(err, ConfigError::MissingInstallDir { .. }));
}

#[test]
fn range_is_assigned_once() {
    let tree = Ramulator2Tree::complete();
    let mut ctrl = Ramulator2Controller::new(&tree.resolver(), "DDR4_4Gb_x8_2400", 1).unwrap();
    let range = AddrRange::with_size(0, 0x1000).unwrap();

    ctrl.assign_range(range).unwrap();
    assert_eq!(ctrl.range(), Some(range));

    let other = AddrRange::with_size(0x1000, 0x1000).unwrap();
    assert!(matches!(
        ctrl.assign_range(other),
        Err(MemorySystemError::RangeAlreadyAssigned(r)) if r == range
    ));
}
