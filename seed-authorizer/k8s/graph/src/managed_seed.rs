use crate::{Graph, VertexType};
use gardener_seed_authorizer_k8s_api::seedmanagement::ManagedSeed;
use tracing::info_span;

impl kubert::index::IndexNamespacedResource<ManagedSeed> for Graph {
    fn apply(&mut self, managed_seed: ManagedSeed) {
        let (ns, name) = match crate::namespaced_name(&managed_seed) {
            Some(id) => id,
            None => return,
        };
        let _span = info_span!("apply", %ns, %name).entered();

        self.delete_all_outgoing_edges(VertexType::ManagedSeed, &ns, &name, VertexType::Shoot);
        self.delete_all_incoming_edges(VertexType::Secret, VertexType::ManagedSeed, &ns, &name);

        let spec = &managed_seed.spec;
        match spec.shoot.as_ref().filter(|s| !s.name.is_empty()) {
            Some(shoot) => {
                let managed_seed_v = self.get_or_create_vertex(VertexType::ManagedSeed, &ns, &name);
                let shoot = self.get_or_create_vertex(VertexType::Shoot, &ns, &shoot.name);
                self.add_edge(managed_seed_v, shoot);
            }
            None => tracing::warn!("Managed seed does not reference a shoot"),
        }

        let backup_secret = match spec.gardenlet.as_ref().map(|g| g.seed_backup_secret()) {
            Some(Ok(secret)) => secret,
            Some(Err(error)) => {
                tracing::warn!(%error, "Invalid gardenlet configuration");
                None
            }
            None => None,
        };
        if let Some(secret_ref) = backup_secret.filter(|s| !s.name.is_empty()) {
            let secret_ns = crate::non_empty(&secret_ref.namespace).unwrap_or(&ns);
            let managed_seed_v = self.get_or_create_vertex(VertexType::ManagedSeed, &ns, &name);
            let secret = self.get_or_create_vertex(VertexType::Secret, secret_ns, &secret_ref.name);
            self.add_edge(secret, managed_seed_v);
        }
    }

    fn delete(&mut self, ns: String, name: String) {
        let _span = info_span!("delete", %ns, %name).entered();
        self.delete_vertex(VertexType::ManagedSeed, &ns, &name);
    }
}
