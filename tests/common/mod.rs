#![allow(dead_code)]

pub use scalegroup_test_utils::builders;

use scalegroup::errors::ValidationError;
use scalegroup::input::RawInput;
use scalegroup::resource::AutoScalingGroup;

/// Construct and return the error, panicking if construction succeeds.
pub fn expect_invalid(input: RawInput) -> ValidationError {
    match AutoScalingGroup::new(input) {
        Ok(group) => panic!("expected validation error, got {group:?}"),
        Err(e) => e,
    }
}

/// Construct and assert the failure is tied to `field`; returns the message.
pub fn expect_field_error(input: RawInput, field: &str) -> String {
    let err = expect_invalid(input);
    match &err {
        ValidationError::Field { field: f, message } => {
            assert_eq!(*f, field, "unexpected field in error: {err}");
            message.clone()
        }
        other => panic!("expected field error for {field}, got {other:?}"),
    }
}
