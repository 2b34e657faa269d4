// tests/cli_args.rs

use std::path::PathBuf;

use clap::Parser;

use scalegroup::cli::{CliArgs, Command};
use scalegroup::manifest::default_manifest_path;

#[test]
fn manifest_defaults_to_scalegroup_toml() {
    let args = CliArgs::try_parse_from(["scalegroup", "check"]).unwrap();

    assert!(args.manifest.is_none());
    assert_eq!(args.manifest_path(), default_manifest_path());
    assert_eq!(args.manifest_path(), PathBuf::from("Scalegroup.toml"));
}

#[test]
fn explicit_manifest_overrides_default() {
    let args = CliArgs::try_parse_from([
        "scalegroup",
        "plan",
        "--manifest",
        "deploy/groups.toml",
        "--observed",
        "observed.toml",
    ])
    .unwrap();

    assert_eq!(args.manifest_path(), PathBuf::from("deploy/groups.toml"));
    match args.command {
        Command::Plan { observed } => assert_eq!(observed.as_deref(), Some("observed.toml")),
        other => panic!("expected plan, got {other:?}"),
    }
}

#[test]
fn strict_capacity_is_a_global_flag() {
    let args = CliArgs::try_parse_from(["scalegroup", "check", "--strict-capacity"]).unwrap();
    assert!(args.strict_capacity);
}
