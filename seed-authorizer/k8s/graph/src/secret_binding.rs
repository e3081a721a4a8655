use crate::{Graph, VertexType};
use gardener_seed_authorizer_k8s_api::gardener::SecretBinding;
use tracing::info_span;

impl kubert::index::IndexNamespacedResource<SecretBinding> for Graph {
    fn apply(&mut self, binding: SecretBinding) {
        let (ns, name) = match crate::namespaced_name(&binding) {
            Some(id) => id,
            None => return,
        };
        let _span = info_span!("apply", %ns, %name).entered();

        self.delete_all_incoming_edges(VertexType::Secret, VertexType::SecretBinding, &ns, &name);

        let secret_ref = &binding.secret_ref;
        if secret_ref.name.is_empty() {
            tracing::warn!("Binding does not reference a secret");
            return;
        }
        let secret_ns = crate::non_empty(&secret_ref.namespace).unwrap_or(&ns);

        let binding_v = self.get_or_create_vertex(VertexType::SecretBinding, &ns, &name);
        let secret = self.get_or_create_vertex(VertexType::Secret, secret_ns, &secret_ref.name);
        self.add_edge(secret, binding_v);
    }

    fn delete(&mut self, ns: String, name: String) {
        let _span = info_span!("delete", %ns, %name).entered();
        self.delete_vertex(VertexType::SecretBinding, &ns, &name);
    }
}
