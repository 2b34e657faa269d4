// src/manifest/validate.rs

use std::collections::BTreeSet;

use tracing::debug;

use crate::errors::{Result, ScalegroupError};
use crate::input::RawValue;
use crate::manifest::model::{Manifest, ManifestSettings, RawManifest};
use crate::resource::AutoScalingGroup;
use crate::resource::descriptor::NAME_KEY;

impl TryFrom<RawManifest> for Manifest {
    type Error = ScalegroupError;

    fn try_from(raw: RawManifest) -> std::result::Result<Self, Self::Error> {
        let settings = raw.settings;
        Manifest::from_raw(raw, settings)
    }
}

impl Manifest {
    /// Construct every group with the given settings (which may differ from
    /// the ones in the file, e.g. when the CLI forces the strict rule).
    pub fn from_raw(raw: RawManifest, settings: ManifestSettings) -> Result<Self> {
        ensure_has_groups(&raw)?;

        let options = settings.descriptor_options();
        let mut groups = Vec::with_capacity(raw.group.len());

        for (title, mut input) in raw.group {
            input
                .entry(NAME_KEY.to_string())
                .or_insert_with(|| RawValue::Str(title.clone()));

            let group = AutoScalingGroup::with_options(input, options)
                .map_err(|source| ScalegroupError::InvalidGroup {
                    title: title.clone(),
                    source,
                })?;
            groups.push(group);
        }

        ensure_unique_names(&groups)?;

        debug!(groups = groups.len(), rule = ?options.capacity_rule, "manifest validated");
        Ok(Manifest::new_unchecked(settings, groups))
    }
}

fn ensure_has_groups(raw: &RawManifest) -> Result<()> {
    if raw.group.is_empty() {
        return Err(ScalegroupError::Manifest(
            "manifest must contain at least one [group.<name>] section".to_string(),
        ));
    }
    Ok(())
}

fn ensure_unique_names(groups: &[AutoScalingGroup]) -> Result<()> {
    let mut seen = BTreeSet::new();
    for group in groups {
        if !seen.insert(group.name()) {
            return Err(ScalegroupError::Manifest(format!(
                "duplicate group name '{}'",
                group.name()
            )));
        }
    }
    Ok(())
}
