//! Starts the watches that keep the graph up to date.
//!
//! Each watched resource type gets its own task, so events of one type are applied in order while
//! different types are applied concurrently. The initial list of every watch is applied as a
//! reset, which replays all existing objects.

use crate::{
    graph::{Graph, SharedGraph},
    k8s::{self, gardener, operations, security, seedmanagement},
};
use kube::{runtime::watcher, Client, Resource};
use kubert::index::{IndexClusterResource, IndexNamespacedResource};
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use thiserror::Error;
use tracing::{info_span, Instrument};

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("failed to discover resources in {group_version}: {source}")]
    Discovery {
        group_version: String,
        #[source]
        source: kube::Error,
    },

    #[error("{kind} ({group_version}) is not served by the API server")]
    ResourceNotFound { group_version: String, kind: String },
}

/// Watches every resource type that contributes edges to the graph.
///
/// Returns an error, without starting any watches, if one of the Gardener resource types is not
/// served.
pub async fn setup<S>(
    runtime: &mut kubert::Runtime<S>,
    graph: SharedGraph,
) -> Result<(), SetupError>
where
    S: 'static,
{
    let client = runtime.client();
    ensure_served::<gardener::BackupBucket>(&client).await?;
    ensure_served::<gardener::BackupEntry>(&client).await?;
    ensure_served::<gardener::ControllerInstallation>(&client).await?;
    ensure_served::<gardener::Project>(&client).await?;
    ensure_served::<gardener::SecretBinding>(&client).await?;
    ensure_served::<gardener::Seed>(&client).await?;
    ensure_served::<gardener::Shoot>(&client).await?;
    ensure_served::<operations::Bastion>(&client).await?;
    ensure_served::<security::CredentialsBinding>(&client).await?;
    ensure_served::<seedmanagement::ManagedSeed>(&client).await?;

    watch_cluster::<gardener::BackupBucket, _>(runtime, &graph);
    watch_namespaced::<gardener::BackupEntry, _>(runtime, &graph);
    watch_namespaced::<operations::Bastion, _>(runtime, &graph);
    watch_cluster::<k8s::CertificateSigningRequest, _>(runtime, &graph);
    watch_cluster::<k8s::ClusterRoleBinding, _>(runtime, &graph);
    watch_cluster::<gardener::ControllerInstallation, _>(runtime, &graph);
    watch_namespaced::<security::CredentialsBinding, _>(runtime, &graph);
    watch_namespaced::<seedmanagement::ManagedSeed, _>(runtime, &graph);
    watch_cluster::<gardener::Project, _>(runtime, &graph);
    watch_namespaced::<gardener::SecretBinding, _>(runtime, &graph);
    watch_cluster::<gardener::Seed, _>(runtime, &graph);
    watch_namespaced::<k8s::ServiceAccount, _>(runtime, &graph);
    watch_namespaced::<gardener::Shoot, _>(runtime, &graph);

    tracing::info!("Watching resources");
    Ok(())
}

async fn ensure_served<T>(client: &Client) -> Result<(), SetupError>
where
    T: Resource<DynamicType = ()>,
{
    let group_version = T::api_version(&());
    let resources = client
        .list_api_group_resources(&group_version)
        .await
        .map_err(|source| SetupError::Discovery {
            group_version: group_version.to_string(),
            source,
        })?;

    if resources.resources.iter().any(|r| r.kind == T::kind(&())) {
        return Ok(());
    }
    Err(SetupError::ResourceNotFound {
        group_version: group_version.to_string(),
        kind: T::kind(&()).to_string(),
    })
}

fn watch_namespaced<T, S>(runtime: &mut kubert::Runtime<S>, graph: &SharedGraph)
where
    T: Resource<DynamicType = ()> + DeserializeOwned + Clone + Debug + Send + Sync + 'static,
    Graph: IndexNamespacedResource<T>,
    S: 'static,
{
    let events = runtime.watch_all::<T>(watcher::Config::default());
    let span = info_span!("watch", resource = %T::plural(&()));
    tokio::spawn(kubert::index::namespaced(graph.clone(), events).instrument(span));
}

fn watch_cluster<T, S>(runtime: &mut kubert::Runtime<S>, graph: &SharedGraph)
where
    T: Resource<DynamicType = ()> + DeserializeOwned + Clone + Debug + Send + Sync + 'static,
    Graph: IndexClusterResource<T>,
    S: 'static,
{
    let events = runtime.watch_all::<T>(watcher::Config::default());
    let span = info_span!("watch", resource = %T::plural(&()));
    tokio::spawn(kubert::index::cluster(graph.clone(), events).instrument(span));
}
