use crate::{Graph, VertexType};
use gardener_seed_authorizer_k8s_api::ServiceAccount;
use tracing::info_span;

impl kubert::index::IndexNamespacedResource<ServiceAccount> for Graph {
    fn apply(&mut self, account: ServiceAccount) {
        let (ns, name) = match crate::namespaced_name(&account) {
            Some(id) => id,
            None => return,
        };
        let _span = info_span!("apply", %ns, %name).entered();

        self.delete_all_incoming_edges(VertexType::Secret, VertexType::ServiceAccount, &ns, &name);

        let secrets = account
            .secrets
            .iter()
            .flatten()
            .filter_map(|s| crate::non_empty(&s.name));
        for secret in secrets {
            let account_v = self.get_or_create_vertex(VertexType::ServiceAccount, &ns, &name);
            let secret = self.get_or_create_vertex(VertexType::Secret, &ns, secret);
            self.add_edge(secret, account_v);
        }
    }

    fn delete(&mut self, ns: String, name: String) {
        let _span = info_span!("delete", %ns, %name).entered();
        self.delete_vertex(VertexType::ServiceAccount, &ns, &name);
    }
}
