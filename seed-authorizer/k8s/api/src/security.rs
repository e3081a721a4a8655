//! Resources in the `security.gardener.cloud` API group.

use crate::ObjectMeta;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Binds infrastructure credentials (a `Secret` or a `WorkloadIdentity`) so that shoots in the
/// binding's namespace may use them.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsBinding {
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub credentials_ref: ObjectReference,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectReference {
    pub api_version: Option<String>,
    pub kind: Option<String>,
    pub namespace: Option<String>,
    pub name: Option<String>,
}

impl ObjectReference {
    /// Returns true if the reference points at a core `v1` `Secret`.
    pub fn is_secret(&self) -> bool {
        self.api_version.as_deref() == Some("v1") && self.kind.as_deref() == Some("Secret")
    }
}

impl kube::Resource for CredentialsBinding {
    type DynamicType = ();
    type Scope = k8s_openapi::NamespaceResourceScope;

    fn kind(_: &()) -> Cow<'_, str> {
        "CredentialsBinding".into()
    }

    fn group(_: &()) -> Cow<'_, str> {
        "security.gardener.cloud".into()
    }

    fn version(_: &()) -> Cow<'_, str> {
        "v1alpha1".into()
    }

    fn plural(_: &()) -> Cow<'_, str> {
        "credentialsbindings".into()
    }

    fn meta(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn meta_mut(&mut self) -> &mut ObjectMeta {
        &mut self.metadata
    }
}
