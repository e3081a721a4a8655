use crate::{non_empty, Graph, VertexType};
use gardener_seed_authorizer_k8s_api::gardener::Shoot;
use tracing::info_span;

/// The kinds of objects a shoot depends on. Edges from these into a shoot are owned by the shoot.
const DEPENDENCIES: [VertexType; 9] = [
    VertexType::CloudProfile,
    VertexType::ConfigMap,
    VertexType::CredentialsBinding,
    VertexType::ExposureClass,
    VertexType::InternalSecret,
    VertexType::Namespace,
    VertexType::Secret,
    VertexType::SecretBinding,
    VertexType::ShootState,
];

/// Suffix of the secret and config map holding a shoot's cluster CA bundle.
const CA_CLUSTER_SUFFIX: &str = ".ca-cluster";

/// Suffix of the internal secret holding a shoot's client CA.
const CA_CLIENT_SUFFIX: &str = ".ca-client";

impl kubert::index::IndexNamespacedResource<Shoot> for Graph {
    fn apply(&mut self, shoot: Shoot) {
        let (ns, name) = match crate::namespaced_name(&shoot) {
            Some(id) => id,
            None => return,
        };
        let _span = info_span!("apply", %ns, %name).entered();

        for dependency in DEPENDENCIES {
            self.delete_all_incoming_edges(dependency, VertexType::Shoot, &ns, &name);
        }
        self.delete_all_outgoing_edges(VertexType::Shoot, &ns, &name, VertexType::Seed);

        let shoot_v = self.get_or_create_vertex(VertexType::Shoot, &ns, &name);

        let namespace = self.get_or_create_vertex(VertexType::Namespace, "", &ns);
        self.add_edge(namespace, shoot_v);

        for seed_name in shoot.seed_names() {
            let seed = self.get_or_create_vertex(VertexType::Seed, "", seed_name);
            self.add_edge(shoot_v, seed);
        }

        let spec = &shoot.spec;
        if let Some(cloud_profile) = spec.cloud_profile_ref() {
            let cloud_profile =
                self.get_or_create_vertex(VertexType::CloudProfile, "", cloud_profile);
            self.add_edge(cloud_profile, shoot_v);
        } else {
            tracing::debug!("Shoot does not reference a cloud profile");
        }

        if let Some(binding) = non_empty(&spec.secret_binding_name) {
            let binding = self.get_or_create_vertex(VertexType::SecretBinding, &ns, binding);
            self.add_edge(binding, shoot_v);
        }

        if let Some(binding) = non_empty(&spec.credentials_binding_name) {
            let binding = self.get_or_create_vertex(VertexType::CredentialsBinding, &ns, binding);
            self.add_edge(binding, shoot_v);
        }

        if let Some(class) = non_empty(&spec.exposure_class_name) {
            let class = self.get_or_create_vertex(VertexType::ExposureClass, "", class);
            self.add_edge(class, shoot_v);
        }

        if let Some(config_map) = spec.audit_policy_config_map() {
            let config_map = self.get_or_create_vertex(VertexType::ConfigMap, &ns, config_map);
            self.add_edge(config_map, shoot_v);
        }

        for secret in spec.dns_provider_secrets() {
            let secret = self.get_or_create_vertex(VertexType::Secret, &ns, secret);
            self.add_edge(secret, shoot_v);
        }

        for resource in spec.resources.iter().flatten() {
            let r = &resource.resource_ref;
            let vertex_type = match (r.api_version.as_str(), r.kind.as_str()) {
                ("v1", "Secret") => VertexType::Secret,
                ("v1", "ConfigMap") => VertexType::ConfigMap,
                (api_version, kind) => {
                    tracing::debug!(
                        resource = %resource.name,
                        %api_version,
                        %kind,
                        "Ignoring resource reference"
                    );
                    continue;
                }
            };
            if r.name.is_empty() {
                tracing::debug!(resource = %resource.name, "Ignoring unnamed resource reference");
                continue;
            }
            let referenced = self.get_or_create_vertex(vertex_type, &ns, &r.name);
            self.add_edge(referenced, shoot_v);
        }

        let state = self.get_or_create_vertex(VertexType::ShootState, &ns, &name);
        self.add_edge(state, shoot_v);

        let ca_cluster = format!("{name}{CA_CLUSTER_SUFFIX}");
        let ca_cluster_secret = self.get_or_create_vertex(VertexType::Secret, &ns, &ca_cluster);
        self.add_edge(ca_cluster_secret, shoot_v);
        let ca_cluster_config_map =
            self.get_or_create_vertex(VertexType::ConfigMap, &ns, &ca_cluster);
        self.add_edge(ca_cluster_config_map, shoot_v);

        let ca_client = format!("{name}{CA_CLIENT_SUFFIX}");
        let ca_client = self.get_or_create_vertex(VertexType::InternalSecret, &ns, &ca_client);
        self.add_edge(ca_client, shoot_v);
    }

    fn delete(&mut self, ns: String, name: String) {
        let _span = info_span!("delete", %ns, %name).entered();
        self.delete_vertex(VertexType::Shoot, &ns, &name);
    }
}
