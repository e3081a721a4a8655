use kube::CustomResource;
use serde::{Deserialize, Serialize};

/// Groups shoots and their credentials into a namespace.
#[derive(Clone, Debug, Default, PartialEq, CustomResource, Deserialize, Serialize)]
#[kube(
    group = "core.gardener.cloud",
    version = "v1beta1",
    kind = "Project",
    schema = "disabled"
)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSpec {
    pub namespace: Option<String>,
}
