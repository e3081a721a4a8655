use crate::{Graph, VertexType, SEED_LEASE_NAMESPACE};
use gardener_seed_authorizer_k8s_api::gardener::{SecretReference, Seed};
use tracing::info_span;

impl kubert::index::IndexClusterResource<Seed> for Graph {
    fn apply(&mut self, seed: Seed) {
        let name = match crate::cluster_name(&seed) {
            Some(name) => name,
            None => return,
        };
        let _span = info_span!("apply", %name).entered();

        for dependency in [VertexType::Lease, VertexType::Namespace, VertexType::Secret] {
            self.delete_all_incoming_edges(dependency, VertexType::Seed, "", &name);
        }

        let seed_v = self.get_or_create_vertex(VertexType::Seed, "", &name);

        let namespace =
            self.get_or_create_vertex(VertexType::Namespace, "", &crate::seed_namespace(&name));
        self.add_edge(namespace, seed_v);

        let lease = self.get_or_create_vertex(VertexType::Lease, SEED_LEASE_NAMESPACE, &name);
        self.add_edge(lease, seed_v);

        let backup = seed.spec.backup.as_ref().and_then(|b| b.secret_ref.as_ref());
        let dns = seed
            .spec
            .dns
            .as_ref()
            .and_then(|dns| dns.provider.as_ref())
            .and_then(|p| p.secret_ref.as_ref());
        for secret_ref in backup.into_iter().chain(dns) {
            match secret_ref {
                SecretReference {
                    name,
                    namespace: Some(namespace),
                } if !name.is_empty() && !namespace.is_empty() => {
                    let secret = self.get_or_create_vertex(VertexType::Secret, namespace, name);
                    self.add_edge(secret, seed_v);
                }
                _ => tracing::warn!(?secret_ref, "Ignoring incomplete secret reference"),
            }
        }
    }

    fn delete(&mut self, name: String) {
        let _span = info_span!("delete", %name).entered();
        self.delete_vertex(VertexType::Seed, "", &name);
    }
}
