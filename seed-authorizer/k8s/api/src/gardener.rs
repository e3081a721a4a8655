//! Resources in the `core.gardener.cloud` API group.

pub mod backup_bucket;
pub mod backup_entry;
pub mod controller_installation;
pub mod project;
pub mod secret_binding;
pub mod seed;
pub mod shoot;

pub use self::{
    backup_bucket::{BackupBucket, BackupBucketSpec, BackupBucketStatus},
    backup_entry::{BackupEntry, BackupEntrySpec, BackupEntryStatus},
    controller_installation::{ControllerInstallation, ControllerInstallationSpec},
    project::{Project, ProjectSpec},
    secret_binding::SecretBinding,
    seed::{Seed, SeedSpec},
    shoot::{Shoot, ShootSpec, ShootStatus},
};

pub const GROUP: &str = "core.gardener.cloud";
pub const VERSION: &str = "v1beta1";

/// References a secret, optionally in another namespace.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct SecretReference {
    #[serde(default)]
    pub name: String,
    pub namespace: Option<String>,
}

/// References a cluster-scoped object by name.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct NameReference {
    #[serde(default)]
    pub name: String,
}
