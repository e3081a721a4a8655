use super::SecretReference;
use crate::ObjectMeta;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Binds an infrastructure secret so that shoots in the binding's namespace may use it.
///
/// Unlike most Gardener resources, a `SecretBinding` has no `spec`; its fields live at the top
/// level of the object.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretBinding {
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub secret_ref: SecretReference,
}

impl kube::Resource for SecretBinding {
    type DynamicType = ();
    type Scope = k8s_openapi::NamespaceResourceScope;

    fn kind(_: &()) -> Cow<'_, str> {
        "SecretBinding".into()
    }

    fn group(_: &()) -> Cow<'_, str> {
        super::GROUP.into()
    }

    fn version(_: &()) -> Cow<'_, str> {
        super::VERSION.into()
    }

    fn plural(_: &()) -> Cow<'_, str> {
        "secretbindings".into()
    }

    fn meta(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn meta_mut(&mut self) -> &mut ObjectMeta {
        &mut self.metadata
    }
}
