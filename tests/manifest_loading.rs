// tests/manifest_loading.rs

use std::io::Write;

use tempfile::NamedTempFile;

use scalegroup::errors::{ScalegroupError, ValidationError};
use scalegroup::manifest::{
    ManifestSettings, load_and_validate, load_observed, load_with_settings,
};
use scalegroup::resource::{CapacityRule, Property, PropertyValue};

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn loads_groups_with_title_as_name() {
    let file = write_temp(
        r#"
[group.test-asg]
min_size = "1"
max_size = "3"
desired_capacity = "2"
default_cooldown = "200"
launch_configuration = "test-lc"
region = "sa-east-1"
subnets = ["subnet-a", "subnet-b"]

[group.test-asg.tags]
Name = "web"

[group.other]
name = "renamed"
min_size = 2
"#,
    );

    let manifest = load_and_validate(file.path()).unwrap();
    assert_eq!(manifest.groups().len(), 2);

    let asg = manifest.group("test-asg").expect("test-asg present");
    assert_eq!(asg.min_size(), Some(1));
    assert_eq!(asg.default_cooldown(), Some(200));
    assert_eq!(asg.subnets().len(), 2);
    assert_eq!(asg.tags().unwrap().get("Name"), Some("web"));

    let renamed = manifest.group("renamed").expect("explicit name wins");
    assert_eq!(renamed.min_size(), Some(2));
    assert!(manifest.group("other").is_none());
}

#[test]
fn invalid_group_reports_title_and_field() {
    let file = write_temp(
        r#"
[group.broken]
region = "sa east 1"
"#,
    );

    match load_and_validate(file.path()) {
        Err(ScalegroupError::InvalidGroup { title, source }) => {
            assert_eq!(title, "broken");
            assert_eq!(source.field_name(), Some("region"));
        }
        other => panic!("expected InvalidGroup, got {other:?}"),
    }
}

#[test]
fn instance_count_in_manifest_is_rejected() {
    let file = write_temp(
        r#"
[group.g]
instance_count = 3
"#,
    );

    match load_and_validate(file.path()) {
        Err(ScalegroupError::InvalidGroup { source, .. }) => {
            assert_eq!(source.to_string(), "instance_count is read only");
        }
        other => panic!("expected InvalidGroup, got {other:?}"),
    }
}

#[test]
fn empty_manifest_is_rejected() {
    let file = write_temp("");
    match load_and_validate(file.path()) {
        Err(ScalegroupError::Manifest(msg)) => assert!(msg.contains("at least one")),
        other => panic!("expected Manifest error, got {other:?}"),
    }
}

#[test]
fn duplicate_names_are_rejected() {
    let file = write_temp(
        r#"
[group.a]
name = "same"

[group.b]
name = "same"
"#,
    );
    match load_and_validate(file.path()) {
        Err(ScalegroupError::Manifest(msg)) => assert!(msg.contains("duplicate group name 'same'")),
        other => panic!("expected Manifest error, got {other:?}"),
    }
}

#[test]
fn settings_select_strict_capacity_rule() {
    let body = r#"
[group.g]
min_size = 5
max_size = 10
desired_capacity = 2
"#;
    let lenient = write_temp(body);
    assert!(load_and_validate(lenient.path()).is_ok());

    let strict = write_temp(&format!("[settings]\ncapacity_rule = \"strict\"\n{body}"));
    match load_and_validate(strict.path()) {
        Err(ScalegroupError::InvalidGroup { source, .. }) => {
            assert_eq!(source, ValidationError::CapacityBounds);
        }
        other => panic!("expected capacity error, got {other:?}"),
    }

    let overridden = load_with_settings(
        lenient.path(),
        ManifestSettings {
            capacity_rule: CapacityRule::Strict,
        },
    );
    assert!(overridden.is_err());
}

#[test]
fn malformed_toml_is_a_toml_error() {
    let file = write_temp("[group.g\nmin_size = 1");
    assert!(matches!(
        load_and_validate(file.path()),
        Err(ScalegroupError::TomlError(_))
    ));
}

#[test]
fn observed_file_loads_typed_records() {
    let file = write_temp(
        r#"
[group.test-asg]
min_size = 1
max_size = 3
instance_count = 2
subnets = ["subnet-b", "subnet-a"]
tags = { env = "prod" }
"#,
    );

    let records = load_observed(file.path()).unwrap();
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.name, "test-asg");
    assert_eq!(record.instance_count(), Some(2));
    assert_eq!(record.get(Property::MaxSize), Some(&PropertyValue::Int(3)));
    assert!(record.get(Property::Region).is_none());
}

#[test]
fn observed_file_rejects_unknown_fields() {
    let file = write_temp(
        r#"
[group.test-asg]
maximum = 3
"#,
    );
    assert!(load_observed(file.path()).is_err());
}
