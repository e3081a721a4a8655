use crate::{Graph, VertexType};
use gardener_seed_authorizer_k8s_api::{identity, CertificateSigningRequest};
use tracing::info_span;

/// The signer used for the client certificates of gardenlets.
const CLIENT_SIGNER: &str = "kubernetes.io/kube-apiserver-client";

impl kubert::index::IndexClusterResource<CertificateSigningRequest> for Graph {
    fn apply(&mut self, csr: CertificateSigningRequest) {
        let name = match crate::cluster_name(&csr) {
            Some(name) => name,
            None => return,
        };
        let _span = info_span!("apply", %name).entered();

        self.delete_all_outgoing_edges(
            VertexType::CertificateSigningRequest,
            "",
            &name,
            VertexType::Seed,
        );

        if csr.spec.signer_name != CLIENT_SIGNER {
            tracing::trace!(signer = %csr.spec.signer_name, "Ignoring request for another signer");
            return;
        }

        // Gardenlets renew their client certificates with their current identity.
        let seed_name = csr
            .spec
            .username
            .as_deref()
            .and_then(identity::seed_name)
            .filter(|s| *s != identity::AMBIGUOUS_SEED_NAME);
        if let Some(seed_name) = seed_name {
            let csr_v = self.get_or_create_vertex(VertexType::CertificateSigningRequest, "", &name);
            let seed = self.get_or_create_vertex(VertexType::Seed, "", seed_name);
            self.add_edge(csr_v, seed);
        }
    }

    fn delete(&mut self, name: String) {
        let _span = info_span!("delete", %name).entered();
        self.delete_vertex(VertexType::CertificateSigningRequest, "", &name);
    }
}
