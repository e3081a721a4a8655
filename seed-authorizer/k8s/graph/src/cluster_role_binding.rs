use crate::{Graph, VertexType, SEED_BOOTSTRAPPER_PREFIX};
use gardener_seed_authorizer_k8s_api::ClusterRoleBinding;
use tracing::info_span;

impl kubert::index::IndexClusterResource<ClusterRoleBinding> for Graph {
    fn apply(&mut self, binding: ClusterRoleBinding) {
        let name = match crate::cluster_name(&binding) {
            Some(name) => name,
            None => return,
        };

        // Only the bindings that let a managed seed's gardenlet bootstrap are relevant.
        let managed_seed = match name.strip_prefix(SEED_BOOTSTRAPPER_PREFIX) {
            Some(suffix) => suffix.split_once(':'),
            None => return,
        };
        let _span = info_span!("apply", %name).entered();

        self.delete_all_outgoing_edges(
            VertexType::ClusterRoleBinding,
            "",
            &name,
            VertexType::ManagedSeed,
        );
        self.delete_all_incoming_edges(
            VertexType::ServiceAccount,
            VertexType::ClusterRoleBinding,
            "",
            &name,
        );

        let (ms_ns, ms_name) = match managed_seed {
            Some((ns, name)) if !ns.is_empty() && !name.is_empty() => (ns, name),
            _ => {
                tracing::warn!("Binding does not name a managed seed");
                return;
            }
        };
        let binding_v = self.get_or_create_vertex(VertexType::ClusterRoleBinding, "", &name);
        let managed_seed = self.get_or_create_vertex(VertexType::ManagedSeed, ms_ns, ms_name);
        self.add_edge(binding_v, managed_seed);

        for subject in binding.subjects.iter().flatten() {
            if subject.kind != "ServiceAccount" {
                continue;
            }
            let namespace = match subject.namespace.as_deref() {
                Some(ns) if !ns.is_empty() && !subject.name.is_empty() => ns,
                _ => {
                    tracing::debug!(
                        subject = %subject.name,
                        "Ignoring incomplete service account subject"
                    );
                    continue;
                }
            };
            let account =
                self.get_or_create_vertex(VertexType::ServiceAccount, namespace, &subject.name);
            self.add_edge(account, binding_v);
        }
    }

    fn delete(&mut self, name: String) {
        if !name.starts_with(SEED_BOOTSTRAPPER_PREFIX) {
            return;
        }
        let _span = info_span!("delete", %name).entered();
        self.delete_vertex(VertexType::ClusterRoleBinding, "", &name);
    }
}
