//! Resources in the `seedmanagement.gardener.cloud` API group.

use crate::gardener::{NameReference, SecretReference};
use kube::CustomResource;
use serde::{Deserialize, Serialize};

/// Registers a shoot as a seed by deploying a gardenlet into it.
#[derive(Clone, Debug, Default, PartialEq, CustomResource, Deserialize, Serialize)]
#[kube(
    group = "seedmanagement.gardener.cloud",
    version = "v1alpha1",
    kind = "ManagedSeed",
    namespaced,
    schema = "disabled"
)]
#[serde(rename_all = "camelCase")]
pub struct ManagedSeedSpec {
    pub shoot: Option<NameReference>,
    pub gardenlet: Option<Gardenlet>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Gardenlet {
    /// The gardenlet's component configuration, embedded as a raw object.
    pub config: Option<serde_json::Value>,
}

/// The part of a `GardenletConfiguration` that references objects in the garden cluster.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GardenletConfiguration {
    seed_config: Option<SeedTemplate>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
struct SeedTemplate {
    spec: Option<crate::gardener::SeedSpec>,
}

impl Gardenlet {
    /// Decodes the backup secret of the seed template embedded in the gardenlet configuration.
    ///
    /// Returns an error if the configuration cannot be decoded and `None` if it does not
    /// configure a backup secret.
    pub fn seed_backup_secret(&self) -> Result<Option<SecretReference>, serde_json::Error> {
        let config = match &self.config {
            Some(config) => GardenletConfiguration::deserialize(config)?,
            None => return Ok(None),
        };
        Ok(config
            .seed_config
            .and_then(|s| s.spec)
            .and_then(|s| s.backup)
            .and_then(|b| b.secret_ref))
    }
}
