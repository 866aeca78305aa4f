//! # Config Resolver Tests
//!
//! The resolver checks the install directory, the configs directory, and the
//! configuration file in that order and reports the first one missing.

use pretty_assertions::assert_eq;
use r2sys_core::ConfigResolver;
use r2sys_core::common::ConfigError;
use r2sys_core::config::{ResolverConfig, SimOptions};
use rstest::rstest;

use crate::common::{Missing, Ramulator2Tree};

#[test]
fn resolves_existing_example_config() {
    let tree = Ramulator2Tree::complete();
    let resolved = tree.resolver().resolve("DDR4_4Gb_x8_2400", 1).unwrap();

    assert_eq!(resolved.config_path, tree.config_file());
    assert!(resolved.config_path.is_file());
    assert_eq!(resolved.output_dir, tree.outdir());
}

#[test]
fn config_file_is_not_rewritten_for_channel_count() {
    let tree = Ramulator2Tree::complete();
    let before = std::fs::read_to_string(tree.config_file()).unwrap();

    let resolved = tree.resolver().resolve("DDR4_4Gb_x8_2400", 4).unwrap();

    assert_eq!(resolved.config_path, tree.config_file());
    assert_eq!(std::fs::read_to_string(&resolved.config_path).unwrap(), before);
}

#[test]
fn missing_install_dir_is_reported_first() {
    let tree = Ramulator2Tree::with_missing(Missing::InstallDir);
    match tree.resolver().resolve("DDR4_4Gb_x8_2400", 1) {
        Err(ConfigError::MissingInstallDir { path }) => assert_eq!(path, tree.install_dir()),
        other => panic!("expected missing install dir, got {other:?}"),
    }
}

#[test]
fn missing_configs_dir_is_reported() {
    let tree = Ramulator2Tree::with_missing(Missing::ConfigsDir);
    match tree.resolver().resolve("DDR4_4Gb_x8_2400", 1) {
        Err(ConfigError::MissingConfigsDir { path }) => assert_eq!(path, tree.configs_dir()),
        other => panic!("expected missing configs dir, got {other:?}"),
    }
}

#[test]
fn missing_config_file_is_reported() {
    let tree = Ramulator2Tree::with_missing(Missing::ConfigFile);
    match tree.resolver().resolve("DDR4_4Gb_x8_2400", 1) {
        Err(ConfigError::MissingConfigFile { path }) => assert_eq!(path, tree.config_file()),
        other => panic!("expected missing config file, got {other:?}"),
    }
}

#[test]
fn config_path_that_is_a_directory_counts_as_missing() {
    let tree = Ramulator2Tree::with_missing(Missing::ConfigFile);
    std::fs::create_dir(tree.config_file()).unwrap();
    assert!(matches!(
        tree.resolver().resolve("DDR4_4Gb_x8_2400", 1),
        Err(ConfigError::MissingConfigFile { .. })
    ));
}

#[rstest]
#[case(Missing::InstallDir)]
#[case(Missing::ConfigsDir)]
#[case(Missing::ConfigFile)]
fn every_missing_precondition_fails(#[case] missing: Missing) {
    let tree = Ramulator2Tree::with_missing(missing);
    assert!(tree.resolver().resolve("DDR4_4Gb_x8_2400", 1).is_err());
}

#[test]
fn empty_memory_type_is_rejected_before_probing() {
    let tree = Ramulator2Tree::with_missing(Missing::InstallDir);
    assert!(matches!(
        tree.resolver().resolve("", 1),
        Err(ConfigError::EmptyMemoryType)
    ));
}

#[test]
fn zero_channels_is_rejected() {
    let tree = Ramulator2Tree::complete();
    assert!(matches!(
        tree.resolver().resolve("DDR4_4Gb_x8_2400", 0),
        Err(ConfigError::InvalidChannelCount(0))
    ));
}

#[test]
fn install_dir_override_is_honoured() {
    let tree = Ramulator2Tree::complete();
    let layout = ResolverConfig {
        install_dir_override: Some(tree.install_dir()),
        ..ResolverConfig::with_base_dir("/nonexistent")
    };
    let resolver = ConfigResolver::new(layout, SimOptions::default());

    let resolved = resolver.resolve("DDR4_4Gb_x8_2400", 1).unwrap();
    assert_eq!(resolved.config_path, tree.config_file());
    assert_eq!(resolved.output_dir, SimOptions::default().outdir);
}

#[test]
fn custom_config_file_name_is_used() {
    let tree = Ramulator2Tree::complete();
    std::fs::write(tree.configs_dir().join("ddr4.yaml"), "MemorySystem: {}\n").unwrap();
    let layout = ResolverConfig {
        config_file: "ddr4.yaml".to_owned(),
        ..ResolverConfig::with_base_dir(tree.base_dir())
    };
    let resolver = ConfigResolver::new(layout, SimOptions::default());

    let resolved = resolver.resolve("DDR4_4Gb_x8_2400", 1).unwrap();
    assert_eq!(resolved.config_path, tree.configs_dir().join("ddr4.yaml"));
}
