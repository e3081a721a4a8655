use kube::CustomResource;
use serde::{Deserialize, Serialize};

/// A shoot's backup, stored in a `BackupBucket`.
#[derive(Clone, Debug, Default, PartialEq, CustomResource, Deserialize, Serialize)]
#[kube(
    group = "core.gardener.cloud",
    version = "v1beta1",
    kind = "BackupEntry",
    status = "BackupEntryStatus",
    namespaced,
    schema = "disabled"
)]
#[serde(rename_all = "camelCase")]
pub struct BackupEntrySpec {
    #[serde(default)]
    pub bucket_name: String,
    pub seed_name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupEntryStatus {
    pub seed_name: Option<String>,
}
