//! Resources in the `operations.gardener.cloud` API group.

use kube::CustomResource;
use serde::{Deserialize, Serialize};

/// An SSH jump host into a shoot's worker network, reconciled by the shoot's seed.
#[derive(Clone, Debug, Default, PartialEq, CustomResource, Deserialize, Serialize)]
#[kube(
    group = "operations.gardener.cloud",
    version = "v1alpha1",
    kind = "Bastion",
    namespaced,
    schema = "disabled"
)]
#[serde(rename_all = "camelCase")]
pub struct BastionSpec {
    pub shoot_ref: Option<crate::gardener::NameReference>,
    pub seed_name: Option<String>,
}
