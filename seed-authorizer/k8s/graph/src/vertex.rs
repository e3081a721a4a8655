use petgraph::stable_graph::NodeIndex;
use std::fmt;

/// The kinds of objects tracked by the graph.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VertexType {
    BackupBucket,
    BackupEntry,
    Bastion,
    CertificateSigningRequest,
    CloudProfile,
    ClusterRoleBinding,
    ConfigMap,
    ControllerDeployment,
    ControllerInstallation,
    ControllerRegistration,
    CredentialsBinding,
    ExposureClass,
    InternalSecret,
    Lease,
    ManagedSeed,
    Namespace,
    Project,
    Secret,
    SecretBinding,
    Seed,
    ServiceAccount,
    Shoot,
    ShootState,
}

/// An object in the graph.
///
/// Vertices are identified by their type, namespace, and name. The `id` is only meaningful to the
/// graph that holds the vertex and may be reused once the vertex is removed.
#[derive(Clone, Debug)]
pub struct Vertex {
    pub vertex_type: VertexType,
    /// Empty for cluster-scoped objects.
    pub namespace: String,
    pub name: String,
    pub id: NodeIndex,
}

// === impl VertexType ===

impl VertexType {
    pub const ALL: [VertexType; 23] = [
        VertexType::BackupBucket,
        VertexType::BackupEntry,
        VertexType::Bastion,
        VertexType::CertificateSigningRequest,
        VertexType::CloudProfile,
        VertexType::ClusterRoleBinding,
        VertexType::ConfigMap,
        VertexType::ControllerDeployment,
        VertexType::ControllerInstallation,
        VertexType::ControllerRegistration,
        VertexType::CredentialsBinding,
        VertexType::ExposureClass,
        VertexType::InternalSecret,
        VertexType::Lease,
        VertexType::ManagedSeed,
        VertexType::Namespace,
        VertexType::Project,
        VertexType::Secret,
        VertexType::SecretBinding,
        VertexType::Seed,
        VertexType::ServiceAccount,
        VertexType::Shoot,
        VertexType::ShootState,
    ];

    /// The Kubernetes kind of objects of this type.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::BackupBucket => "BackupBucket",
            Self::BackupEntry => "BackupEntry",
            Self::Bastion => "Bastion",
            Self::CertificateSigningRequest => "CertificateSigningRequest",
            Self::CloudProfile => "CloudProfile",
            Self::ClusterRoleBinding => "ClusterRoleBinding",
            Self::ConfigMap => "ConfigMap",
            Self::ControllerDeployment => "ControllerDeployment",
            Self::ControllerInstallation => "ControllerInstallation",
            Self::ControllerRegistration => "ControllerRegistration",
            Self::CredentialsBinding => "CredentialsBinding",
            Self::ExposureClass => "ExposureClass",
            Self::InternalSecret => "InternalSecret",
            Self::Lease => "Lease",
            Self::ManagedSeed => "ManagedSeed",
            Self::Namespace => "Namespace",
            Self::Project => "Project",
            Self::Secret => "Secret",
            Self::SecretBinding => "SecretBinding",
            Self::Seed => "Seed",
            Self::ServiceAccount => "ServiceAccount",
            Self::Shoot => "Shoot",
            Self::ShootState => "ShootState",
        }
    }
}

impl fmt::Display for VertexType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

// === impl Vertex ===

impl Vertex {
    pub(crate) fn new(vertex_type: VertexType, namespace: &str, name: &str) -> Self {
        Self {
            vertex_type,
            namespace: namespace.to_string(),
            name: name.to_string(),
            id: NodeIndex::end(),
        }
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            write!(f, "{}:{}", self.vertex_type, self.name)
        } else {
            write!(f, "{}:{}/{}", self.vertex_type, self.namespace, self.name)
        }
    }
}
