//! Decides whether a gardenlet may access an object in the garden cluster.
//!
//! A gardenlet authenticates as `gardener.cloud:system:seed:<seed>` in the
//! `gardener.cloud:system:seeds` group. It may access an object only if the graph holds a path
//! from the object to its seed.

use crate::{
    graph::{SharedGraph, VertexType},
    k8s::identity,
};
use thiserror::Error;

/// The authenticated user making a request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserInfo {
    pub name: String,
    pub groups: Vec<String>,
}

/// Describes a request to the API server.
///
/// Cluster-scoped resources have an empty namespace; collection requests have an empty name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes {
    pub user: UserInfo,
    pub verb: String,
    pub api_group: String,
    pub resource: String,
    pub subresource: String,
    pub namespace: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(String),
    /// The request is left to other authorizers.
    NoOpinion(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentityError {
    #[error("user is not in group {}", identity::SEEDS_GROUP)]
    NotInSeedsGroup,

    #[error("user {0:?} does not identify a seed")]
    NotASeed(String),
}

#[derive(Clone, Debug)]
pub struct Authorizer {
    graph: SharedGraph,
}

/// The seed a gardenlet acts for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Seed<'u> {
    Named(&'u str),
    /// The gardenlet manages more than one seed.
    Ambiguous,
}

/// Resources that gardenlets may only read one by one.
const GET_ONLY: [VertexType; 5] = [
    VertexType::ClusterRoleBinding,
    VertexType::ConfigMap,
    VertexType::InternalSecret,
    VertexType::Secret,
    VertexType::ServiceAccount,
];

/// Resources that gardenlets create themselves.
const CREATABLE: [VertexType; 6] = [
    VertexType::BackupBucket,
    VertexType::BackupEntry,
    VertexType::CertificateSigningRequest,
    VertexType::Lease,
    VertexType::Seed,
    VertexType::ShootState,
];

// === impl Authorizer ===

impl Authorizer {
    pub fn new(graph: SharedGraph) -> Self {
        Self { graph }
    }

    pub fn authorize(&self, attrs: &Attributes) -> Decision {
        let seed = match seed_identity(&attrs.user) {
            Ok(seed) => seed,
            Err(error) => return Decision::NoOpinion(error.to_string()),
        };

        let vertex_type = match vertex_type(&attrs.api_group, &attrs.resource) {
            Some(vertex_type) => vertex_type,
            None => {
                return Decision::NoOpinion(format!(
                    "unhandled resource {}/{}",
                    attrs.api_group, attrs.resource
                ))
            }
        };

        let decision = match attrs.verb.as_str() {
            "list" | "watch" if GET_ONLY.contains(&vertex_type) => {
                Decision::Deny("can only get individual resources of this type".to_string())
            }
            "list" | "watch" => Decision::Allow,
            "create" if CREATABLE.contains(&vertex_type) => Decision::Allow,
            "get" | "create" | "update" | "patch" | "delete" => {
                self.authorize_object(seed, vertex_type, attrs)
            }
            verb => Decision::Deny(format!("unexpected verb {verb}")),
        };
        tracing::debug!(
            user = %attrs.user.name,
            verb = %attrs.verb,
            %vertex_type,
            subresource = %attrs.subresource,
            namespace = %attrs.namespace,
            name = %attrs.name,
            ?decision,
            "Authorized request"
        );
        decision
    }

    fn authorize_object(
        &self,
        seed: Seed<'_>,
        vertex_type: VertexType,
        attrs: &Attributes,
    ) -> Decision {
        if attrs.name.is_empty() {
            return Decision::Deny("no object name given".to_string());
        }

        let seed = match seed {
            Seed::Named(seed) => seed,
            Seed::Ambiguous => return Decision::Allow,
        };
        if vertex_type == VertexType::Seed && attrs.name == seed {
            return Decision::Allow;
        }

        let related = self.graph.read().has_path_from(
            vertex_type,
            &attrs.namespace,
            &attrs.name,
            VertexType::Seed,
            "",
            seed,
        );
        if related {
            Decision::Allow
        } else {
            Decision::Deny(format!(
                "no relationship found between seed '{seed}' and this object"
            ))
        }
    }
}

fn seed_identity(user: &UserInfo) -> Result<Seed<'_>, IdentityError> {
    if !user.groups.iter().any(|g| g == identity::SEEDS_GROUP) {
        return Err(IdentityError::NotInSeedsGroup);
    }
    match identity::seed_name(&user.name) {
        Some(identity::AMBIGUOUS_SEED_NAME) => Ok(Seed::Ambiguous),
        Some(seed) => Ok(Seed::Named(seed)),
        None => Err(IdentityError::NotASeed(user.name.clone())),
    }
}

fn vertex_type(api_group: &str, resource: &str) -> Option<VertexType> {
    let vertex_type = match (api_group, resource) {
        ("", "configmaps") => VertexType::ConfigMap,
        ("", "namespaces") => VertexType::Namespace,
        ("", "secrets") => VertexType::Secret,
        ("", "serviceaccounts") => VertexType::ServiceAccount,
        ("certificates.k8s.io", "certificatesigningrequests") => {
            VertexType::CertificateSigningRequest
        }
        ("coordination.k8s.io", "leases") => VertexType::Lease,
        ("rbac.authorization.k8s.io", "clusterrolebindings") => VertexType::ClusterRoleBinding,
        ("core.gardener.cloud", resource) => match resource {
            "backupbuckets" => VertexType::BackupBucket,
            "backupentries" => VertexType::BackupEntry,
            "cloudprofiles" => VertexType::CloudProfile,
            "controllerdeployments" => VertexType::ControllerDeployment,
            "controllerinstallations" => VertexType::ControllerInstallation,
            "controllerregistrations" => VertexType::ControllerRegistration,
            "exposureclasses" => VertexType::ExposureClass,
            "internalsecrets" => VertexType::InternalSecret,
            "projects" => VertexType::Project,
            "secretbindings" => VertexType::SecretBinding,
            "seeds" => VertexType::Seed,
            "shoots" => VertexType::Shoot,
            "shootstates" => VertexType::ShootState,
            _ => return None,
        },
        ("operations.gardener.cloud", "bastions") => VertexType::Bastion,
        ("security.gardener.cloud", "credentialsbindings") => VertexType::CredentialsBinding,
        ("seedmanagement.gardener.cloud", "managedseeds") => VertexType::ManagedSeed,
        _ => return None,
    };
    Some(vertex_type)
}
