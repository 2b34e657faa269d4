// tests/tags_normalization.rs

mod common;
use crate::common::builders::GroupInputBuilder;
use crate::common::expect_field_error;

use std::collections::BTreeMap;

use scalegroup::input::RawValue;
use scalegroup::resource::tags::normalize_tags;
use scalegroup::resource::{TagForm, TagMap};

fn record(key: &str, value: &str) -> RawValue {
    let mut map = BTreeMap::new();
    map.insert("key".to_string(), RawValue::from(key));
    map.insert("value".to_string(), RawValue::from(value));
    RawValue::Map(map)
}

fn mapping(pairs: &[(&str, RawValue)]) -> RawValue {
    RawValue::Map(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect(),
    )
}

#[test]
fn flat_mapping_and_records_normalize_identically() {
    let flat = mapping(&[("env", "prod".into()), ("team", "ops".into())]);
    let records = RawValue::List(vec![record("team", "ops"), record("env", "prod")]);

    let a = normalize_tags(&flat).unwrap();
    let b = normalize_tags(&records).unwrap();

    assert_eq!(a, b);
    assert_eq!(a.get("env"), Some("prod"));
    assert_eq!(a.len(), 2);
}

#[test]
fn record_field_names_are_case_insensitive() {
    let aws_style = mapping(&[("Key", "Name".into()), ("Value", "web".into())]);
    let form = TagForm::from_raw(&RawValue::List(vec![aws_style])).unwrap();
    assert!(matches!(form, TagForm::Records(ref r) if r.len() == 1));

    let tags = form.normalize().unwrap();
    assert_eq!(tags.get("Name"), Some("web"));
}

#[test]
fn list_of_flat_mappings_is_merged() {
    let raw = RawValue::List(vec![
        mapping(&[("a", "1".into())]),
        mapping(&[("b", "2".into()), ("c", "3".into())]),
    ]);
    let tags = normalize_tags(&raw).unwrap();
    let keys: Vec<&str> = tags.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["a", "b", "c"]);
}

#[test]
fn scalar_values_are_stringified() {
    let raw = mapping(&[("port", RawValue::Int(80)), ("public", RawValue::Bool(true))]);
    let tags = normalize_tags(&raw).unwrap();
    assert_eq!(tags.get("port"), Some("80"));
    assert_eq!(tags.get("public"), Some("true"));
}

#[test]
fn keys_colliding_ignoring_case_are_rejected() {
    let raw = RawValue::List(vec![record("Env", "prod"), record("env", "dev")]);
    let err = normalize_tags(&raw).unwrap_err();
    assert!(err.to_string().contains("duplicate tag key"), "{err}");
}

#[test]
fn structured_tag_values_are_rejected() {
    let input = GroupInputBuilder::example()
        .set("tags", mapping(&[("nested", RawValue::List(vec![]))]))
        .build();
    let msg = expect_field_error(input, "tags");
    assert!(msg.contains("scalar value"), "{msg}");
}

#[test]
fn plain_string_tags_are_rejected() {
    let input = GroupInputBuilder::example().set("tags", "env=prod").build();
    let msg = expect_field_error(input, "tags");
    assert!(msg.starts_with("tags should be a mapping"), "{msg}");
}

#[test]
fn insync_ignores_key_case_but_not_value_case() {
    let desired: TagMap = [("Env", "prod"), ("Team", "ops")].into_iter().collect();
    let same_keys_other_case: TagMap = [("env", "prod"), ("TEAM", "ops")].into_iter().collect();
    let other_value_case: TagMap = [("Env", "Prod"), ("Team", "ops")].into_iter().collect();
    let missing: TagMap = [("Env", "prod")].into_iter().collect();

    assert!(desired.insync(&same_keys_other_case));
    assert!(!desired.insync(&other_value_case));
    assert!(!desired.insync(&missing));
}

#[test]
fn observed_keys_colliding_by_case_are_never_in_sync() {
    let desired: TagMap = [("env", "prod")].into_iter().collect();
    let observed: TagMap = [("Env", "dev"), ("env", "prod")].into_iter().collect();

    assert_eq!(observed.len(), 2);
    assert!(!desired.insync(&observed));
    assert!(!observed.insync(&desired));
}

#[test]
fn descriptor_keeps_key_spelling() {
    let group = GroupInputBuilder::example()
        .tags(&[("Name", "web"), ("env", "prod")])
        .construct();
    let tags = group.tags().unwrap();
    assert_eq!(tags.get("Name"), Some("web"));
    assert_eq!(tags.get_ignore_case("ENV"), Some("prod"));
    assert_eq!(tags.to_string(), "{Name => web, env => prod}");
}
