// tests/descriptor_construction.rs

mod common;
use crate::common::builders::GroupInputBuilder;
use crate::common::{expect_field_error, expect_invalid};
use scalegroup_test_utils::init_tracing;

use scalegroup::errors::{CAPACITY_BOUNDS_MESSAGE, ValidationError};
use scalegroup::input::RawValue;
use scalegroup::resource::{
    AutoScalingGroup, CapacityRule, DEFAULT_COOLDOWN, DescriptorOptions, Ensure, Property,
    PropertyValue,
};

#[test]
fn full_example_constructs_with_integer_fields() {
    init_tracing();
    let group = GroupInputBuilder::example().construct();

    assert_eq!(group.name(), "test-asg");
    assert_eq!(group.min_size(), Some(1));
    assert_eq!(group.max_size(), Some(3));
    assert_eq!(group.desired_capacity(), Some(2));
    assert_eq!(group.default_cooldown(), Some(200));
    assert_eq!(group.launch_configuration(), Some("test-lc"));
    assert_eq!(group.region(), Some("sa-east-1"));
    assert_eq!(group.ensure(), Ensure::Present);
    assert_eq!(group.instance_count(), None);
}

#[test]
fn numeric_fields_accept_native_numbers() {
    let group = GroupInputBuilder::example()
        .set("min_size", 2i64)
        .set("max_size", 4.9f64)
        .construct();

    assert_eq!(group.min_size(), Some(2));
    assert_eq!(group.max_size(), Some(4));
}

#[test]
fn every_example_key_is_required_to_be_non_blank() {
    for key in [
        "name",
        "max_size",
        "desired_capacity",
        "min_size",
        "default_cooldown",
        "launch_configuration",
        "region",
    ] {
        let input = GroupInputBuilder::example().set(key, "").build();
        let err = expect_invalid(input);
        assert_eq!(err.field_name(), Some(key), "blank {key} gave {err:?}");
    }
}

#[test]
fn blank_desired_capacity_is_rejected() {
    let input = GroupInputBuilder::example().set("desired_capacity", "").build();
    let msg = expect_field_error(input, "desired_capacity");
    assert_eq!(msg, "desired_capacity cannot be blank");
}

#[test]
fn blank_max_size_names_max_size() {
    let input = GroupInputBuilder::example().set("max_size", "").build();
    let msg = expect_field_error(input, "max_size");
    assert_eq!(msg, "max_size cannot be blank");
}

#[test]
fn missing_name_is_reported_before_field_errors() {
    let input = GroupInputBuilder::example()
        .remove("name")
        .set("instance_count", "4")
        .set("region", "sa east 1")
        .build();

    let err = expect_invalid(input);
    assert_eq!(err, ValidationError::MissingIdentity);
    assert_eq!(err.to_string(), "Title or name must be provided");
}

#[test]
fn empty_input_requires_a_name() {
    let err = expect_invalid(Default::default());
    assert_eq!(err, ValidationError::MissingIdentity);
}

#[test]
fn empty_name_is_rejected() {
    let input = GroupInputBuilder::example().name("").build();
    let msg = expect_field_error(input, "name");
    assert_eq!(msg, "Auto scaling groups must have a name");
}

#[test]
fn non_string_name_is_rejected() {
    let input = GroupInputBuilder::example().set("name", 42i64).build();
    let msg = expect_field_error(input, "name");
    assert_eq!(msg, "name should be a String");
}

#[test]
fn instance_count_is_read_only_even_alone() {
    let input = GroupInputBuilder::new()
        .name("g")
        .set("instance_count", 3i64)
        .build();
    let msg = expect_field_error(input, "instance_count");
    assert_eq!(msg, "instance_count is read only");
}

#[test]
fn unknown_property_is_rejected() {
    let input = GroupInputBuilder::example().set("max_instances", "5").build();
    let err = expect_invalid(input);
    assert_eq!(err, ValidationError::UnknownProperty("max_instances".to_string()));
}

#[test]
fn first_failing_field_in_table_order_wins() {
    // min_size precedes region in the field table.
    let input = GroupInputBuilder::example()
        .set("region", "")
        .set("min_size", "")
        .build();
    let err = expect_invalid(input);
    assert_eq!(err.field_name(), Some("min_size"));
}

#[test]
fn default_cooldown_defaults_to_300() {
    let group = GroupInputBuilder::new().name("bare").construct();
    assert_eq!(group.default_cooldown(), Some(DEFAULT_COOLDOWN));
    assert_eq!(group.get(Property::MinSize), None);
    assert!(group.subnets().is_empty());
    assert!(group.tags().is_none());
}

#[test]
fn ensure_accepts_present_and_absent_only() {
    let absent = GroupInputBuilder::example().set("ensure", "absent").construct();
    assert_eq!(absent.ensure(), Ensure::Absent);

    let input = GroupInputBuilder::example().set("ensure", "gone").build();
    let msg = expect_field_error(input, "ensure");
    assert!(msg.contains("Valid values are present, absent"), "{msg}");
}

#[test]
fn capacity_literal_rule_accepts_desired_below_min() {
    // min 5 > desired 2, but desired <= max, so the OR holds.
    let group = GroupInputBuilder::example()
        .set("min_size", "5")
        .set("max_size", "10")
        .set("desired_capacity", "2")
        .construct();
    assert_eq!(group.desired_capacity(), Some(2));
}

#[test]
fn capacity_literal_rule_rejects_when_neither_bound_holds() {
    let input = GroupInputBuilder::example()
        .set("min_size", "5")
        .set("max_size", "1")
        .set("desired_capacity", "3")
        .build();
    let err = expect_invalid(input);
    assert_eq!(err, ValidationError::CapacityBounds);
    assert_eq!(err.to_string(), CAPACITY_BOUNDS_MESSAGE);
}

#[test]
fn capacity_check_needs_min_size_when_desired_is_set() {
    let input = GroupInputBuilder::new()
        .name("g")
        .set("desired_capacity", "2")
        .build();
    assert_eq!(expect_invalid(input), ValidationError::CapacityBounds);

    let only_max = GroupInputBuilder::new()
        .name("g")
        .set("desired_capacity", "2")
        .set("max_size", "4")
        .build();
    assert_eq!(expect_invalid(only_max), ValidationError::CapacityBounds);

    let only_min = GroupInputBuilder::new()
        .name("g")
        .set("desired_capacity", "2")
        .set("min_size", "1")
        .build();
    assert!(AutoScalingGroup::new(only_min).is_ok());
}

#[test]
fn missing_min_size_fails_even_when_max_holds() {
    for max in ["2", "4", "100"] {
        let input = GroupInputBuilder::example()
            .remove("min_size")
            .set("max_size", max)
            .build();
        assert_eq!(expect_invalid(input), ValidationError::CapacityBounds, "max {max}");
    }
}

#[test]
fn strict_rule_requires_both_bounds() {
    let input = GroupInputBuilder::example()
        .set("min_size", "5")
        .set("max_size", "10")
        .set("desired_capacity", "2")
        .build();
    let options = DescriptorOptions {
        capacity_rule: CapacityRule::Strict,
    };

    let err = AutoScalingGroup::with_options(input, options).unwrap_err();
    assert_eq!(err, ValidationError::CapacityBounds);

    let ok = GroupInputBuilder::example().build();
    assert!(AutoScalingGroup::with_options(ok, options).is_ok());
}

#[test]
fn non_numeric_strings_munge_to_zero() {
    let group = GroupInputBuilder::example()
        .set("default_cooldown", "soon")
        .set("max_size", "12abc")
        .construct();
    assert_eq!(group.default_cooldown(), Some(0));
    assert_eq!(group.max_size(), Some(12));
}

#[test]
fn record_instance_count_is_the_only_mutation() {
    let mut group = GroupInputBuilder::example().construct();
    let before = group.clone();

    group.record_instance_count(7);

    assert_eq!(group.instance_count(), Some(7));
    assert_eq!(group.get(Property::InstanceCount), Some(&PropertyValue::Int(7)));
    for property in Property::ALL.into_iter().filter(|p| !p.is_read_only()) {
        assert_eq!(group.get(property), before.get(property));
    }
}

#[test]
fn list_values_are_rejected_for_scalar_fields() {
    let input = GroupInputBuilder::example()
        .set("launch_configuration", RawValue::List(vec!["a".into()]))
        .build();
    let msg = expect_field_error(input, "launch_configuration");
    assert_eq!(msg, "launch_configuration should be a String");
}
