use crate::{Graph, VertexType};
use gardener_seed_authorizer_k8s_api::operations::Bastion;
use tracing::info_span;

impl kubert::index::IndexNamespacedResource<Bastion> for Graph {
    fn apply(&mut self, bastion: Bastion) {
        let (ns, name) = match crate::namespaced_name(&bastion) {
            Some(id) => id,
            None => return,
        };
        let _span = info_span!("apply", %ns, %name).entered();

        self.delete_all_outgoing_edges(VertexType::Bastion, &ns, &name, VertexType::Seed);

        // Bastions are only scheduled once their shoot has a seed.
        if let Some(seed_name) = crate::non_empty(&bastion.spec.seed_name) {
            let bastion_v = self.get_or_create_vertex(VertexType::Bastion, &ns, &name);
            let seed = self.get_or_create_vertex(VertexType::Seed, "", seed_name);
            self.add_edge(bastion_v, seed);
        }
    }

    fn delete(&mut self, ns: String, name: String) {
        let _span = info_span!("delete", %ns, %name).entered();
        self.delete_vertex(VertexType::Bastion, &ns, &name);
    }
}
