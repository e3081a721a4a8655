use super::NameReference;
use kube::CustomResource;
use serde::{Deserialize, Serialize};

/// Installs an extension (described by a `ControllerRegistration`) on a seed.
#[derive(Clone, Debug, Default, PartialEq, CustomResource, Deserialize, Serialize)]
#[kube(
    group = "core.gardener.cloud",
    version = "v1beta1",
    kind = "ControllerInstallation",
    schema = "disabled"
)]
#[serde(rename_all = "camelCase")]
pub struct ControllerInstallationSpec {
    #[serde(default)]
    pub registration_ref: NameReference,
    #[serde(default)]
    pub seed_ref: NameReference,
    pub deployment_ref: Option<NameReference>,
}
