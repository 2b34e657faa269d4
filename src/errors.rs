// src/errors.rs

//! Crate-wide error types.
//!
//! [`ValidationError`] is the only error raised while constructing a
//! descriptor. Everything else (manifest IO, provider calls, graph ordering)
//! is folded into [`ScalegroupError`].

use thiserror::Error;

/// Message used when the capacity bounds check fails.
pub const CAPACITY_BOUNDS_MESSAGE: &str = "desired_capacity must be greater than or equal to min_size and less than or equal to max_size";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No `name` key was supplied at all.
    #[error("Title or name must be provided")]
    MissingIdentity,

    /// A single field failed its own rule.
    #[error("{message}")]
    Field {
        field: &'static str,
        message: String,
    },

    #[error("no property named '{0}' on ec2_autoscalinggroup")]
    UnknownProperty(String),

    #[error("{}", CAPACITY_BOUNDS_MESSAGE)]
    CapacityBounds,
}

impl ValidationError {
    pub fn field(field: &'static str, message: impl Into<String>) -> Self {
        ValidationError::Field {
            field,
            message: message.into(),
        }
    }

    /// Name of the offending field, if the error is tied to one.
    pub fn field_name(&self) -> Option<&str> {
        match self {
            ValidationError::MissingIdentity => Some("name"),
            ValidationError::Field { field, .. } => Some(*field),
            ValidationError::UnknownProperty(name) => Some(name.as_str()),
            ValidationError::CapacityBounds => None,
        }
    }
}

/// Errors reported by a provisioning provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("auto scaling group not found: {0}")]
    NotFound(String),

    #[error("provider rejected change for '{name}': {reason}")]
    Rejected { name: String, reason: String },

    #[error("provider failure: {0}")]
    Backend(String),
}

#[derive(Error, Debug)]
pub enum ScalegroupError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("group '{title}' is invalid: {source}")]
    InvalidGroup {
        title: String,
        #[source]
        source: ValidationError,
    },

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Cycle detected in dependency graph: {0}")]
    DependencyCycle(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, ScalegroupError>;
