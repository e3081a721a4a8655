use super::SecretReference;
use kube::CustomResource;
use serde::{Deserialize, Serialize};

/// Holds the backups of all shoots scheduled to a seed.
#[derive(Clone, Debug, Default, PartialEq, CustomResource, Deserialize, Serialize)]
#[kube(
    group = "core.gardener.cloud",
    version = "v1beta1",
    kind = "BackupBucket",
    status = "BackupBucketStatus",
    schema = "disabled"
)]
#[serde(rename_all = "camelCase")]
pub struct BackupBucketSpec {
    pub seed_name: Option<String>,
    #[serde(default)]
    pub secret_ref: SecretReference,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupBucketStatus {
    pub generated_secret_ref: Option<SecretReference>,
}
