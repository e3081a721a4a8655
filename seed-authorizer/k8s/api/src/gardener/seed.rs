use super::SecretReference;
use kube::CustomResource;
use serde::{Deserialize, Serialize};

/// A cluster hosting the control planes of shoots.
#[derive(Clone, Debug, Default, PartialEq, CustomResource, Deserialize, Serialize)]
#[kube(
    group = "core.gardener.cloud",
    version = "v1beta1",
    kind = "Seed",
    schema = "disabled"
)]
#[serde(rename_all = "camelCase")]
pub struct SeedSpec {
    pub backup: Option<SeedBackup>,
    pub dns: Option<SeedDns>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedBackup {
    pub provider: Option<String>,
    pub secret_ref: Option<SecretReference>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedDns {
    pub provider: Option<SeedDnsProvider>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedDnsProvider {
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub secret_ref: Option<SecretReference>,
}
