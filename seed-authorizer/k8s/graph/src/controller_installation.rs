use crate::{Graph, VertexType};
use gardener_seed_authorizer_k8s_api::gardener::ControllerInstallation;
use tracing::info_span;

impl kubert::index::IndexClusterResource<ControllerInstallation> for Graph {
    fn apply(&mut self, installation: ControllerInstallation) {
        let name = match crate::cluster_name(&installation) {
            Some(name) => name,
            None => return,
        };
        let _span = info_span!("apply", %name).entered();

        for dependency in [VertexType::ControllerDeployment, VertexType::ControllerRegistration] {
            self.delete_all_incoming_edges(
                dependency,
                VertexType::ControllerInstallation,
                "",
                &name,
            );
        }
        self.delete_all_outgoing_edges(
            VertexType::ControllerInstallation,
            "",
            &name,
            VertexType::Seed,
        );

        let spec = &installation.spec;
        let references = [
            (VertexType::ControllerRegistration, Some(&spec.registration_ref)),
            (VertexType::ControllerDeployment, spec.deployment_ref.as_ref()),
        ];
        for (vertex_type, reference) in references {
            if let Some(reference) = reference.filter(|r| !r.name.is_empty()) {
                let installation_v =
                    self.get_or_create_vertex(VertexType::ControllerInstallation, "", &name);
                let referenced = self.get_or_create_vertex(vertex_type, "", &reference.name);
                self.add_edge(referenced, installation_v);
            }
        }

        if !spec.seed_ref.name.is_empty() {
            let installation_v =
                self.get_or_create_vertex(VertexType::ControllerInstallation, "", &name);
            let seed = self.get_or_create_vertex(VertexType::Seed, "", &spec.seed_ref.name);
            self.add_edge(installation_v, seed);
        } else {
            tracing::warn!("Installation does not reference a seed");
        }
    }

    fn delete(&mut self, name: String) {
        let _span = info_span!("delete", %name).entered();
        self.delete_vertex(VertexType::ControllerInstallation, "", &name);
    }
}
