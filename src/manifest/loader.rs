// src/manifest/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::Result;
use crate::manifest::model::{Manifest, ManifestSettings, ObservedFile, RawManifest};
use crate::reconcile::{MemoryProvider, ObservedRecord};

/// Load a manifest and return the raw, unconstructed groups.
///
/// This only performs TOML deserialization; no group is validated. Use
/// [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawManifest> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let manifest: RawManifest = toml::from_str(&contents)?;

    Ok(manifest)
}

/// Load a manifest and construct every group it declares.
///
/// - Reads TOML.
/// - Uses each table title as the group name unless `name` is set.
/// - Fails on the first invalid group, or on duplicate names.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<Manifest> {
    let raw = load_from_path(&path)?;
    let manifest = Manifest::try_from(raw)?;
    info!(path = ?path.as_ref(), groups = manifest.groups().len(), "loaded manifest");
    Ok(manifest)
}

/// Like [`load_and_validate`] but with settings chosen by the caller.
pub fn load_with_settings(path: impl AsRef<Path>, settings: ManifestSettings) -> Result<Manifest> {
    let raw = load_from_path(&path)?;
    Manifest::from_raw(raw, settings)
}

/// Load an observed-state file into records.
pub fn load_observed(path: impl AsRef<Path>) -> Result<Vec<ObservedRecord>> {
    let contents = fs::read_to_string(path.as_ref())?;
    let file: ObservedFile = toml::from_str(&contents)?;

    let records = file
        .group
        .into_iter()
        .map(|(name, state)| state.into_record(name))
        .collect::<Vec<_>>();

    info!(path = ?path.as_ref(), groups = records.len(), "loaded observed state");
    Ok(records)
}

/// Build a [`MemoryProvider`] seeded from an observed-state file.
pub fn memory_provider_from_path(path: impl AsRef<Path>) -> Result<MemoryProvider> {
    Ok(MemoryProvider::from_records(load_observed(path)?))
}

/// Default manifest location: `Scalegroup.toml` in the working directory.
pub fn default_manifest_path() -> PathBuf {
    PathBuf::from("Scalegroup.toml")
}
