use crate::{Graph, VertexType};
use gardener_seed_authorizer_k8s_api::gardener::BackupBucket;
use tracing::info_span;

impl kubert::index::IndexClusterResource<BackupBucket> for Graph {
    fn apply(&mut self, bucket: BackupBucket) {
        let name = match crate::cluster_name(&bucket) {
            Some(name) => name,
            None => return,
        };
        let _span = info_span!("apply", %name).entered();

        self.delete_all_incoming_edges(VertexType::Secret, VertexType::BackupBucket, "", &name);
        self.delete_all_outgoing_edges(VertexType::BackupBucket, "", &name, VertexType::Seed);

        if let Some(seed_name) = crate::non_empty(&bucket.spec.seed_name) {
            let bucket_v = self.get_or_create_vertex(VertexType::BackupBucket, "", &name);
            let seed = self.get_or_create_vertex(VertexType::Seed, "", seed_name);
            self.add_edge(bucket_v, seed);
        }

        let generated = bucket
            .status
            .as_ref()
            .and_then(|s| s.generated_secret_ref.as_ref());
        for secret_ref in std::iter::once(&bucket.spec.secret_ref).chain(generated) {
            let namespace = match secret_ref.namespace.as_deref() {
                Some(ns) if !ns.is_empty() && !secret_ref.name.is_empty() => ns,
                _ => {
                    tracing::debug!(?secret_ref, "Ignoring incomplete secret reference");
                    continue;
                }
            };
            let bucket_v = self.get_or_create_vertex(VertexType::BackupBucket, "", &name);
            let secret = self.get_or_create_vertex(VertexType::Secret, namespace, &secret_ref.name);
            self.add_edge(secret, bucket_v);
        }
    }

    fn delete(&mut self, name: String) {
        let _span = info_span!("delete", %name).entered();
        self.delete_vertex(VertexType::BackupBucket, "", &name);
    }
}
