use crate::{Graph, VertexType};
use gardener_seed_authorizer_k8s_api::security::CredentialsBinding;
use tracing::info_span;

impl kubert::index::IndexNamespacedResource<CredentialsBinding> for Graph {
    fn apply(&mut self, binding: CredentialsBinding) {
        let (ns, name) = match crate::namespaced_name(&binding) {
            Some(id) => id,
            None => return,
        };
        let _span = info_span!("apply", %ns, %name).entered();

        self.delete_all_incoming_edges(
            VertexType::Secret,
            VertexType::CredentialsBinding,
            &ns,
            &name,
        );

        let credentials = &binding.credentials_ref;
        if !credentials.is_secret() {
            tracing::debug!(kind = ?credentials.kind, "Credentials are not a secret");
            return;
        }
        let secret_name = match crate::non_empty(&credentials.name) {
            Some(secret_name) => secret_name,
            None => {
                tracing::warn!("Credentials reference has no name");
                return;
            }
        };
        let secret_ns = crate::non_empty(&credentials.namespace).unwrap_or(&ns);

        let binding_v = self.get_or_create_vertex(VertexType::CredentialsBinding, &ns, &name);
        let secret = self.get_or_create_vertex(VertexType::Secret, secret_ns, secret_name);
        self.add_edge(secret, binding_v);
    }

    fn delete(&mut self, ns: String, name: String) {
        let _span = info_span!("delete", %ns, %name).entered();
        self.delete_vertex(VertexType::CredentialsBinding, &ns, &name);
    }
}
