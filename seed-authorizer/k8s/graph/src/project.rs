use crate::{Graph, VertexType};
use gardener_seed_authorizer_k8s_api::gardener::Project;
use tracing::info_span;

impl kubert::index::IndexClusterResource<Project> for Graph {
    fn apply(&mut self, project: Project) {
        let name = match crate::cluster_name(&project) {
            Some(name) => name,
            None => return,
        };
        let _span = info_span!("apply", %name).entered();

        self.delete_all_incoming_edges(VertexType::Namespace, VertexType::Project, "", &name);

        // New projects have no namespace until it has been created for them.
        if let Some(namespace) = crate::non_empty(&project.spec.namespace) {
            let project_v = self.get_or_create_vertex(VertexType::Project, "", &name);
            let namespace = self.get_or_create_vertex(VertexType::Namespace, "", namespace);
            self.add_edge(namespace, project_v);
        }
    }

    fn delete(&mut self, name: String) {
        let _span = info_span!("delete", %name).entered();
        self.delete_vertex(VertexType::Project, "", &name);
    }
}
