// src/resource/invariant.rs

//! Cross-field capacity check, run once after every field is normalized.

use serde::Deserialize;

use crate::errors::ValidationError;

/// How `desired_capacity` is checked against `min_size` / `max_size`.
///
/// - `Literal` (default): passes when `min_size <= desired_capacity` **or**
///   `desired_capacity <= max_size`. This is the historical behaviour and is
///   kept as-is even though it rarely rejects anything.
/// - `Strict`: both bounds must hold. Only used when a caller opts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapacityRule {
    #[default]
    Literal,
    Strict,
}

/// Check the capacity bounds.
///
/// Nothing is checked when `desired_capacity` is unset. Otherwise `min_size`
/// is always compared first, so a group that sets `desired_capacity` without
/// `min_size` fails under either rule. An unset `max_size` only makes its own
/// side of the comparison unsatisfied.
pub fn check_capacity(
    rule: CapacityRule,
    min_size: Option<i64>,
    max_size: Option<i64>,
    desired_capacity: Option<i64>,
) -> Result<(), ValidationError> {
    let Some(desired) = desired_capacity else {
        return Ok(());
    };

    let Some(min) = min_size else {
        return Err(ValidationError::CapacityBounds);
    };

    let above_min = min <= desired;
    let below_max = max_size.is_some_and(|max| desired <= max);

    let ok = match rule {
        CapacityRule::Literal => above_min || below_max,
        CapacityRule::Strict => above_min && below_max,
    };

    if ok {
        Ok(())
    } else {
        Err(ValidationError::CapacityBounds)
    }
}
