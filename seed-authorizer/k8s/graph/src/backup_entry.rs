use crate::{Graph, VertexType};
use gardener_seed_authorizer_k8s_api::{gardener::BackupEntry, OwnerReference};
use tracing::info_span;

impl kubert::index::IndexNamespacedResource<BackupEntry> for Graph {
    fn apply(&mut self, entry: BackupEntry) {
        let (ns, name) = match crate::namespaced_name(&entry) {
            Some(id) => id,
            None => return,
        };
        let _span = info_span!("apply", %ns, %name).entered();

        self.delete_all_incoming_edges(
            VertexType::BackupBucket,
            VertexType::BackupEntry,
            &ns,
            &name,
        );
        self.delete_all_outgoing_edges(VertexType::BackupEntry, &ns, &name, VertexType::Seed);
        self.delete_all_outgoing_edges(VertexType::BackupEntry, &ns, &name, VertexType::Shoot);

        let spec_seed = crate::non_empty(&entry.spec.seed_name);
        let status_seed = entry
            .status
            .as_ref()
            .and_then(|s| crate::non_empty(&s.seed_name))
            .filter(|s| Some(*s) != spec_seed);
        for seed_name in spec_seed.into_iter().chain(status_seed) {
            let entry_v = self.get_or_create_vertex(VertexType::BackupEntry, &ns, &name);
            let seed = self.get_or_create_vertex(VertexType::Seed, "", seed_name);
            self.add_edge(entry_v, seed);
        }

        if !entry.spec.bucket_name.is_empty() {
            let entry_v = self.get_or_create_vertex(VertexType::BackupEntry, &ns, &name);
            let bucket =
                self.get_or_create_vertex(VertexType::BackupBucket, "", &entry.spec.bucket_name);
            self.add_edge(bucket, entry_v);
        }

        if let Some(shoot_name) = owning_shoot(entry.metadata.owner_references.iter().flatten()) {
            let entry_v = self.get_or_create_vertex(VertexType::BackupEntry, &ns, &name);
            let shoot = self.get_or_create_vertex(VertexType::Shoot, &ns, shoot_name);
            self.add_edge(entry_v, shoot);
        }
    }

    fn delete(&mut self, ns: String, name: String) {
        let _span = info_span!("delete", %ns, %name).entered();
        self.delete_vertex(VertexType::BackupEntry, &ns, &name);
    }
}

fn owning_shoot<'r>(owners: impl IntoIterator<Item = &'r OwnerReference>) -> Option<&'r str> {
    owners
        .into_iter()
        .find(|o| o.kind == "Shoot" && o.api_version.starts_with("core.gardener.cloud/"))
        .map(|o| o.name.as_str())
        .filter(|n| !n.is_empty())
}
