//! Seed authorization graph
//!
//! Gardenlets may only access the objects that belong to their own seed. To make that decision
//! cheaply on every request, we maintain a directed graph of the objects in the garden cluster,
//! where an edge points from an object towards the object that ties it to a seed. An object
//! belongs to a seed if the seed's vertex is reachable from the object's vertex:
//!
//! ```text
//! [ Secret ] -> [ SecretBinding ] -> [ Shoot ] -> [ Seed ]
//!                  [ CloudProfile ] ----^           ^  ^
//!       [ ControllerRegistration ] -> [ ControllerInstallation ]
//!                                          [ BackupBucket ]
//! ```
//!
//! The graph is updated from watches on the resource types that reference other objects. Each
//! watch event replaces the edges owned by the changed object. Vertices are created when an edge
//! first attaches to them and are removed as soon as they become isolated, so the graph only ever
//! holds objects that participate in a relationship.
//!
//! Lookups are made through [`Graph::has_path_from`] while holding the [`SharedGraph`]'s read lock.

#![deny(warnings, rust_2018_idioms)]
#![forbid(unsafe_code)]

mod backup_bucket;
mod backup_entry;
mod bastion;
mod certificate_signing_request;
mod cluster_role_binding;
mod controller_installation;
mod credentials_binding;
mod graph;
mod index;
mod managed_seed;
pub mod metrics;
mod project;
mod secret_binding;
mod seed;
mod service_account;
mod shoot;
mod vertex;


pub use self::{
    graph::{Graph, SharedGraph},
    vertex::{Vertex, VertexType},
};

/// The namespace holding the leases that gardenlets renew to signal their seed's health.
pub const SEED_LEASE_NAMESPACE: &str = "gardener-system-seed-lease";

/// Prefix of the cluster role bindings created to let a managed seed's gardenlet bootstrap.
pub const SEED_BOOTSTRAPPER_PREFIX: &str = "gardener.cloud:system:seed-bootstrapper:";

/// The namespace in the garden cluster reserved for a seed's objects.
pub fn seed_namespace(seed: &str) -> String {
    format!("seed-{seed}")
}

/// Returns the namespace and name of a namespaced object.
///
/// Objects missing either are logged and skipped by the watch handlers.
fn namespaced_name<T>(resource: &T) -> Option<(String, String)>
where
    T: kube::Resource<DynamicType = ()>,
{
    let meta = resource.meta();
    match (meta.namespace.as_deref(), meta.name.as_deref()) {
        (Some(ns), Some(name)) if !ns.is_empty() && !name.is_empty() => {
            Some((ns.to_string(), name.to_string()))
        }
        _ => {
            tracing::warn!(kind = %T::kind(&()), "Ignoring object without a namespace or name");
            None
        }
    }
}

/// Returns the name of a cluster-scoped object.
fn cluster_name<T>(resource: &T) -> Option<String>
where
    T: kube::Resource<DynamicType = ()>,
{
    match resource.meta().name.as_deref() {
        Some(name) if !name.is_empty() => Some(name.to_string()),
        _ => {
            tracing::warn!(kind = %T::kind(&()), "Ignoring object without a name");
            None
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
