// src/manifest/mod.rs

//! Manifest loading for scalegroup.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load manifests and observed-state files from disk (`loader.rs`).
//! - Construct and cross-check the declared groups (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{
    default_manifest_path, load_and_validate, load_from_path, load_observed,
    load_with_settings, memory_provider_from_path,
};
pub use model::{Manifest, ManifestSettings, ObservedFile, RawManifest};
