use super::NameReference;
use kube::CustomResource;
use serde::{Deserialize, Serialize};

/// A Kubernetes cluster managed by Gardener, with its control plane hosted on a seed.
#[derive(Clone, Debug, Default, PartialEq, CustomResource, Deserialize, Serialize)]
#[kube(
    group = "core.gardener.cloud",
    version = "v1beta1",
    kind = "Shoot",
    status = "ShootStatus",
    namespaced,
    schema = "disabled"
)]
#[serde(rename_all = "camelCase")]
pub struct ShootSpec {
    pub cloud_profile_name: Option<String>,
    pub cloud_profile: Option<CloudProfileReference>,
    pub secret_binding_name: Option<String>,
    pub credentials_binding_name: Option<String>,
    pub seed_name: Option<String>,
    pub exposure_class_name: Option<String>,
    pub dns: Option<Dns>,
    pub kubernetes: Option<Kubernetes>,
    pub resources: Option<Vec<NamedResourceReference>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShootStatus {
    pub seed_name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudProfileReference {
    pub kind: Option<String>,
    #[serde(default)]
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dns {
    pub domain: Option<String>,
    pub providers: Option<Vec<DnsProvider>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsProvider {
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub secret_name: Option<String>,
    pub primary: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Kubernetes {
    pub version: Option<String>,
    #[serde(rename = "kubeAPIServer")]
    pub kube_api_server: Option<KubeApiServerConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KubeApiServerConfig {
    pub audit_config: Option<AuditConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditConfig {
    pub audit_policy: Option<AuditPolicy>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditPolicy {
    pub config_map_ref: Option<NameReference>,
}

/// Names an object in the shoot's namespace that is made available to extensions.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedResourceReference {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub resource_ref: CrossVersionObjectReference,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossVersionObjectReference {
    #[serde(default)]
    pub api_version: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub name: String,
}

impl ShootSpec {
    /// The name of the shoot's `CloudProfile`, preferring the structured reference.
    ///
    /// References to namespaced cloud profiles are not returned.
    pub fn cloud_profile_ref(&self) -> Option<&str> {
        match &self.cloud_profile {
            Some(CloudProfileReference { kind, name }) => match kind.as_deref() {
                None | Some("CloudProfile") => Some(name.as_str()),
                Some(_) => None,
            },
            None => self.cloud_profile_name.as_deref(),
        }
        .filter(|n| !n.is_empty())
    }

    /// The name of the `ConfigMap` holding the shoot's audit policy, if any.
    pub fn audit_policy_config_map(&self) -> Option<&str> {
        self.kubernetes
            .as_ref()?
            .kube_api_server
            .as_ref()?
            .audit_config
            .as_ref()?
            .audit_policy
            .as_ref()?
            .config_map_ref
            .as_ref()
            .map(|r| r.name.as_str())
            .filter(|n| !n.is_empty())
    }

    /// The names of the secrets referenced by the shoot's DNS providers.
    pub fn dns_provider_secrets(&self) -> impl Iterator<Item = &str> {
        self.dns
            .iter()
            .flat_map(|dns| dns.providers.iter().flatten())
            .filter_map(|p| p.secret_name.as_deref())
            .filter(|n| !n.is_empty())
    }
}

impl Shoot {
    /// The names of all seeds the shoot is (or is being) scheduled to.
    ///
    /// During a control plane migration the spec and status may name different seeds.
    pub fn seed_names(&self) -> impl Iterator<Item = &str> {
        let spec = self.spec.seed_name.as_deref();
        let status = self.status.as_ref().and_then(|s| s.seed_name.as_deref());
        spec.into_iter()
            .chain(status.filter(move |s| Some(*s) != spec))
            .filter(|n| !n.is_empty())
    }
}
