use super::*;
use k8s::gardener::{
    shoot::{
        AuditConfig, AuditPolicy, CrossVersionObjectReference, Dns, DnsProvider,
        KubeApiServerConfig, Kubernetes, NamedResourceReference,
    },
    NameReference, Shoot, ShootSpec, ShootStatus,
};
use maplit::btreeset;

const NS: &str = "garden-dev";

fn scheduled(seed: &str) -> ShootSpec {
    ShootSpec {
        seed_name: Some(seed.to_string()),
        secret_binding_name: Some("binding".to_string()),
        cloud_profile_name: Some("aws".to_string()),
        ..Default::default()
    }
}

fn with_dns_secret(mut spec: ShootSpec, secret: &str) -> ShootSpec {
    spec.dns = Some(Dns {
        domain: Some("dev.example.com".to_string()),
        providers: Some(vec![DnsProvider {
            type_: Some("aws-route53".to_string()),
            secret_name: Some(secret.to_string()),
            primary: Some(true),
        }]),
    });
    spec
}

#[test]
fn shoot_dependencies_reach_seed() {
    init_tracing();
    let graph = Graph::shared();

    apply(&graph, mk_secret_binding(NS, "binding", "infra"));
    apply(&graph, mk_shoot(NS, "shoot-0", scheduled("seed-0")));

    assert_eq!(
        vertices(&graph),
        btreeset! {
            "CloudProfile:aws".to_string(),
            "ConfigMap:garden-dev/shoot-0.ca-cluster".to_string(),
            "InternalSecret:garden-dev/shoot-0.ca-client".to_string(),
            "Namespace:garden-dev".to_string(),
            "Secret:garden-dev/infra".to_string(),
            "Secret:garden-dev/shoot-0.ca-cluster".to_string(),
            "SecretBinding:garden-dev/binding".to_string(),
            "Seed:seed-0".to_string(),
            "Shoot:garden-dev/shoot-0".to_string(),
            "ShootState:garden-dev/shoot-0".to_string(),
        }
    );
    assert!(reaches_seed(&graph, VertexType::Secret, NS, "infra", "seed-0"));
    assert!(reaches_seed(&graph, VertexType::SecretBinding, NS, "binding", "seed-0"));
    assert!(reaches_seed(&graph, VertexType::ShootState, NS, "shoot-0", "seed-0"));
    assert!(reaches_seed(&graph, VertexType::CloudProfile, "", "aws", "seed-0"));
    assert!(reaches_seed(&graph, VertexType::InternalSecret, NS, "shoot-0.ca-client", "seed-0"));
    assert!(!reaches_seed(&graph, VertexType::Secret, NS, "infra", "seed-1"));
}

#[test]
fn shoot_references_optional_dependencies() {
    init_tracing();
    let graph = Graph::shared();

    let mut spec = with_dns_secret(scheduled("seed-0"), "dns");
    spec.credentials_binding_name = Some("credentials".to_string());
    spec.exposure_class_name = Some("internet".to_string());
    spec.kubernetes = Some(Kubernetes {
        version: Some("1.33.0".to_string()),
        kube_api_server: Some(KubeApiServerConfig {
            audit_config: Some(AuditConfig {
                audit_policy: Some(AuditPolicy {
                    config_map_ref: Some(NameReference {
                        name: "audit-policy".to_string(),
                    }),
                }),
            }),
        }),
    });
    spec.resources = Some(vec![
        NamedResourceReference {
            name: "extension-secret".to_string(),
            resource_ref: CrossVersionObjectReference {
                api_version: "v1".to_string(),
                kind: "Secret".to_string(),
                name: "extension".to_string(),
            },
        },
        NamedResourceReference {
            name: "extension-config".to_string(),
            resource_ref: CrossVersionObjectReference {
                api_version: "v1".to_string(),
                kind: "ConfigMap".to_string(),
                name: "extension".to_string(),
            },
        },
        NamedResourceReference {
            name: "identity".to_string(),
            resource_ref: CrossVersionObjectReference {
                api_version: "security.gardener.cloud/v1alpha1".to_string(),
                kind: "WorkloadIdentity".to_string(),
                name: "identity".to_string(),
            },
        },
    ]);
    apply(&graph, mk_shoot(NS, "shoot-0", spec));

    let reachable = [
        (VertexType::Secret, NS, "dns"),
        (VertexType::Secret, NS, "extension"),
        (VertexType::ConfigMap, NS, "extension"),
        (VertexType::ConfigMap, NS, "audit-policy"),
        (VertexType::CredentialsBinding, NS, "credentials"),
        (VertexType::ExposureClass, "", "internet"),
        (VertexType::Namespace, "", NS),
    ];
    for (vertex_type, ns, name) in reachable {
        assert!(
            reaches_seed(&graph, vertex_type, ns, name, "seed-0"),
            "{vertex_type}:{ns}/{name} must reach the seed"
        );
    }
    assert!(!vertices(&graph).iter().any(|v| v.contains("identity")));
}

#[test]
fn shoot_prefers_cloud_profile_reference() {
    let graph = Graph::shared();

    let mut spec = scheduled("seed-0");
    spec.cloud_profile = Some(k8s::gardener::shoot::CloudProfileReference {
        kind: Some("CloudProfile".to_string()),
        name: "gcp".to_string(),
    });
    apply(&graph, mk_shoot(NS, "shoot-0", spec));

    assert!(reaches_seed(&graph, VertexType::CloudProfile, "", "gcp", "seed-0"));
    assert!(!graph.read().has_vertex(VertexType::CloudProfile, "", "aws"));
}

#[test]
fn shoot_moves_between_seeds() {
    init_tracing();
    let graph = Graph::shared();

    apply(&graph, mk_secret_binding(NS, "binding", "infra"));
    apply(&graph, mk_shoot(NS, "shoot-0", scheduled("seed-0")));
    assert!(reaches_seed(&graph, VertexType::Secret, NS, "infra", "seed-0"));

    // During the migration, both seeds may access the shoot's dependencies.
    let mut migrating = mk_shoot(NS, "shoot-0", scheduled("seed-1"));
    migrating.status = Some(ShootStatus {
        seed_name: Some("seed-0".to_string()),
    });
    apply(&graph, migrating);
    assert!(reaches_seed(&graph, VertexType::Secret, NS, "infra", "seed-0"));
    assert!(reaches_seed(&graph, VertexType::Secret, NS, "infra", "seed-1"));

    apply(&graph, mk_shoot(NS, "shoot-0", scheduled("seed-1")));
    assert!(!reaches_seed(&graph, VertexType::Secret, NS, "infra", "seed-0"));
    assert!(reaches_seed(&graph, VertexType::Secret, NS, "infra", "seed-1"));
    // Nothing else refers to the old seed.
    assert!(!graph.read().has_vertex(VertexType::Seed, "", "seed-0"));
}

#[test]
fn shoot_prunes_removed_dns_secret() {
    init_tracing();
    let graph = Graph::shared();

    apply(&graph, mk_shoot(NS, "shoot-0", with_dns_secret(scheduled("seed-0"), "dns")));
    assert!(reaches_seed(&graph, VertexType::Secret, NS, "dns", "seed-0"));

    apply(&graph, mk_shoot(NS, "shoot-0", scheduled("seed-0")));
    assert!(!graph.read().has_vertex(VertexType::Secret, NS, "dns"));
    assert!(reaches_seed(&graph, VertexType::CloudProfile, "", "aws", "seed-0"));
}

#[test]
fn shoot_reapply_is_stable() {
    let graph = Graph::shared();

    apply(&graph, mk_shoot(NS, "shoot-0", scheduled("seed-0")));
    let before = vertices(&graph);
    let edges = graph.read().edge_count();

    apply(&graph, mk_shoot(NS, "shoot-0", scheduled("seed-0")));
    assert_eq!(vertices(&graph), before);
    assert_eq!(graph.read().edge_count(), edges);
}

#[test]
fn unscheduled_shoot_does_not_reach_any_seed() {
    let graph = Graph::shared();

    let mut spec = scheduled("seed-0");
    spec.seed_name = None;
    apply(&graph, mk_shoot(NS, "shoot-0", spec));

    assert!(graph.read().has_vertex(VertexType::Shoot, NS, "shoot-0"));
    assert_eq!(graph.read().vertex_counts_by_type().find(|(t, _)| *t == VertexType::Seed), None);
}

#[test]
fn shoot_delete_removes_dependencies() {
    init_tracing();
    let graph = Graph::shared();

    apply(&graph, mk_secret_binding(NS, "binding", "infra"));
    apply(&graph, mk_shoot(NS, "shoot-0", with_dns_secret(scheduled("seed-0"), "dns")));
    delete::<Shoot>(&graph, NS, "shoot-0");

    assert!(graph.read().is_empty(), "{:?}", vertices(&graph));
}

#[test]
fn shoot_delete_retains_shared_dependencies() {
    init_tracing();
    let graph = Graph::shared();

    apply(&graph, mk_secret_binding(NS, "binding", "infra"));
    apply(&graph, mk_shoot(NS, "shoot-0", scheduled("seed-0")));
    apply(&graph, mk_shoot(NS, "shoot-1", scheduled("seed-0")));
    delete::<Shoot>(&graph, NS, "shoot-0");

    assert!(!graph.read().has_vertex(VertexType::Shoot, NS, "shoot-0"));
    assert!(!graph.read().has_vertex(VertexType::ShootState, NS, "shoot-0"));
    assert!(reaches_seed(&graph, VertexType::Secret, NS, "infra", "seed-0"));
    assert!(reaches_seed(&graph, VertexType::Shoot, NS, "shoot-1", "seed-0"));
}

#[test]
fn shoot_delete_drops_binding_secret_until_binding_is_reapplied() {
    init_tracing();
    let graph = Graph::shared();

    apply(&graph, mk_secret_binding(NS, "binding", "infra"));
    apply(&graph, mk_shoot(NS, "shoot-0", scheduled("seed-0")));
    delete::<Shoot>(&graph, NS, "shoot-0");
    assert!(!graph.read().has_vertex(VertexType::SecretBinding, NS, "binding"));

    apply(&graph, mk_shoot(NS, "shoot-1", scheduled("seed-0")));
    assert!(reaches_seed(&graph, VertexType::SecretBinding, NS, "binding", "seed-0"));
    assert!(!reaches_seed(&graph, VertexType::Secret, NS, "infra", "seed-0"));

    apply(&graph, mk_secret_binding(NS, "binding", "infra"));
    assert!(reaches_seed(&graph, VertexType::Secret, NS, "infra", "seed-0"));
}

#[test]
fn shoot_without_namespace_is_ignored() {
    let graph = Graph::shared();

    let mut shoot = mk_shoot(NS, "shoot-0", scheduled("seed-0"));
    shoot.metadata.namespace = None;
    apply(&graph, shoot);

    assert!(graph.read().is_empty());
}
