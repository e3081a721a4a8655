use super::*;
use k8s::{
    gardener::{
        seed::{SeedBackup, SeedDns, SeedDnsProvider},
        BackupBucket, BackupBucketSpec, BackupBucketStatus, BackupEntry, BackupEntrySpec,
        BackupEntryStatus, ControllerInstallation, ControllerInstallationSpec, NameReference, Seed,
        SeedSpec, ShootSpec,
    },
    operations::{Bastion, BastionSpec},
    OwnerReference,
};
use maplit::btreeset;

fn mk_seed(name: &str, spec: SeedSpec) -> Seed {
    Seed {
        metadata: mk_meta(None, name),
        spec,
    }
}

fn mk_installation(name: &str, seed: &str, deployment: Option<&str>) -> ControllerInstallation {
    ControllerInstallation {
        metadata: mk_meta(None, name),
        spec: ControllerInstallationSpec {
            registration_ref: NameReference {
                name: "provider-aws".to_string(),
            },
            seed_ref: NameReference {
                name: seed.to_string(),
            },
            deployment_ref: deployment.map(|name| NameReference {
                name: name.to_string(),
            }),
        },
    }
}

fn mk_bucket(name: &str, seed: &str) -> BackupBucket {
    BackupBucket {
        metadata: mk_meta(None, name),
        spec: BackupBucketSpec {
            seed_name: Some(seed.to_string()),
            secret_ref: mk_secret_ref("garden", "backup"),
        },
        status: None,
    }
}

fn mk_entry(ns: &str, name: &str, bucket: &str, seed: Option<&str>) -> BackupEntry {
    BackupEntry {
        metadata: mk_meta(Some(ns), name),
        spec: BackupEntrySpec {
            bucket_name: bucket.to_string(),
            seed_name: seed.map(ToString::to_string),
        },
        status: None,
    }
}

#[test]
fn seed_dependencies() {
    init_tracing();
    let graph = Graph::shared();

    apply_cluster(
        &graph,
        mk_seed(
            "seed-0",
            SeedSpec {
                backup: Some(SeedBackup {
                    provider: Some("aws".to_string()),
                    secret_ref: Some(mk_secret_ref("garden", "backup")),
                }),
                dns: Some(SeedDns {
                    provider: Some(SeedDnsProvider {
                        type_: Some("aws-route53".to_string()),
                        secret_ref: Some(mk_secret_ref("garden", "ingress-dns")),
                    }),
                }),
            },
        ),
    );

    assert_eq!(
        vertices(&graph),
        btreeset! {
            "Lease:gardener-system-seed-lease/seed-0".to_string(),
            "Namespace:seed-seed-0".to_string(),
            "Secret:garden/backup".to_string(),
            "Secret:garden/ingress-dns".to_string(),
            "Seed:seed-0".to_string(),
        }
    );
    assert!(reaches_seed(&graph, VertexType::Secret, "garden", "backup", "seed-0"));
    assert!(
        reaches_seed(&graph, VertexType::Lease, crate::SEED_LEASE_NAMESPACE, "seed-0", "seed-0")
    );

    // The backup is disabled and the DNS secret lacks a namespace.
    apply_cluster(
        &graph,
        mk_seed(
            "seed-0",
            SeedSpec {
                backup: None,
                dns: Some(SeedDns {
                    provider: Some(SeedDnsProvider {
                        type_: Some("aws-route53".to_string()),
                        secret_ref: Some(k8s::gardener::SecretReference {
                            name: "ingress-dns".to_string(),
                            namespace: None,
                        }),
                    }),
                }),
            },
        ),
    );
    assert!(!graph.read().has_vertex(VertexType::Secret, "garden", "backup"));
    assert!(!graph.read().has_vertex(VertexType::Secret, "garden", "ingress-dns"));

    delete_cluster::<Seed>(&graph, "seed-0");
    assert!(graph.read().is_empty(), "{:?}", vertices(&graph));
}

#[test]
fn seed_delete_retains_objects_bound_to_other_seeds() {
    let graph = Graph::shared();

    apply_cluster(&graph, mk_seed("seed-0", SeedSpec::default()));
    let mut shoot = mk_shoot("garden-dev", "shoot-0", ShootSpec {
        seed_name: Some("seed-1".to_string()),
        ..Default::default()
    });
    shoot.status = Some(k8s::gardener::ShootStatus {
        seed_name: Some("seed-0".to_string()),
    });
    apply(&graph, shoot);
    delete_cluster::<Seed>(&graph, "seed-0");

    assert!(!graph.read().has_vertex(VertexType::Seed, "", "seed-0"));
    assert!(!graph.read().has_vertex(VertexType::Lease, crate::SEED_LEASE_NAMESPACE, "seed-0"));
    assert!(!graph.read().has_vertex(VertexType::Namespace, "", "seed-seed-0"));
    assert!(reaches_seed(&graph, VertexType::ShootState, "garden-dev", "shoot-0", "seed-1"));
}

#[test]
fn controller_installation_dependencies() {
    init_tracing();
    let graph = Graph::shared();

    apply_cluster(&graph, mk_installation("provider-aws-x7k2", "seed-0", Some("provider-aws")));

    assert!(reaches_seed(&graph, VertexType::ControllerRegistration, "", "provider-aws", "seed-0"));
    assert!(reaches_seed(&graph, VertexType::ControllerDeployment, "", "provider-aws", "seed-0"));
    assert!(
        reaches_seed(&graph, VertexType::ControllerInstallation, "", "provider-aws-x7k2", "seed-0")
    );
    assert!(
        !reaches_seed(&graph, VertexType::ControllerRegistration, "", "provider-aws", "seed-1")
    );

    apply_cluster(&graph, mk_installation("provider-aws-x7k2", "seed-0", None));
    assert!(!graph.read().has_vertex(VertexType::ControllerDeployment, "", "provider-aws"));
    assert!(reaches_seed(&graph, VertexType::ControllerRegistration, "", "provider-aws", "seed-0"));
}

#[test]
fn controller_installation_delete_removes_dependencies() {
    init_tracing();
    let graph = Graph::shared();

    apply_cluster(&graph, mk_installation("provider-aws-x7k2", "seed-0", Some("provider-aws")));
    apply_cluster(&graph, mk_installation("provider-aws-9mq4", "seed-1", Some("provider-aws")));
    delete_cluster::<ControllerInstallation>(&graph, "provider-aws-x7k2");

    assert!(!graph.read().has_vertex(VertexType::ControllerInstallation, "", "provider-aws-x7k2"));
    assert!(!graph.read().has_vertex(VertexType::Seed, "", "seed-0"));
    // The registration is still installed on the other seed.
    assert!(reaches_seed(&graph, VertexType::ControllerRegistration, "", "provider-aws", "seed-1"));

    delete_cluster::<ControllerInstallation>(&graph, "provider-aws-9mq4");
    assert!(graph.read().is_empty(), "{:?}", vertices(&graph));
}

#[test]
fn backup_bucket_and_entries() {
    init_tracing();
    let graph = Graph::shared();

    let mut bucket = mk_bucket("bucket-0", "seed-0");
    bucket.status = Some(BackupBucketStatus {
        generated_secret_ref: Some(mk_secret_ref("garden", "generated-bucket-bucket-0")),
    });
    apply_cluster(&graph, bucket);
    apply(&graph, mk_entry("garden-dev", "shoot-0", "bucket-0", Some("seed-0")));

    assert!(reaches_seed(&graph, VertexType::Secret, "garden", "backup", "seed-0"));
    assert!(
        reaches_seed(&graph, VertexType::Secret, "garden", "generated-bucket-bucket-0", "seed-0")
    );
    assert!(reaches_seed(&graph, VertexType::BackupEntry, "garden-dev", "shoot-0", "seed-0"));
    assert!(graph.read().has_edge(
        (VertexType::BackupBucket, "", "bucket-0"),
        (VertexType::BackupEntry, "garden-dev", "shoot-0"),
    ));

    delete::<BackupEntry>(&graph, "garden-dev", "shoot-0");
    assert!(!graph.read().has_vertex(VertexType::BackupEntry, "garden-dev", "shoot-0"));
    assert!(reaches_seed(&graph, VertexType::BackupBucket, "", "bucket-0", "seed-0"));

    delete_cluster::<BackupBucket>(&graph, "bucket-0");
    assert!(graph.read().is_empty(), "{:?}", vertices(&graph));
}

#[test]
fn backup_entry_follows_seed_migration() {
    let graph = Graph::shared();

    let mut entry = mk_entry("garden-dev", "shoot-0", "bucket-0", Some("seed-1"));
    entry.status = Some(BackupEntryStatus {
        seed_name: Some("seed-0".to_string()),
    });
    apply(&graph, entry);
    assert!(reaches_seed(&graph, VertexType::BackupEntry, "garden-dev", "shoot-0", "seed-0"));
    assert!(reaches_seed(&graph, VertexType::BackupEntry, "garden-dev", "shoot-0", "seed-1"));

    apply(&graph, mk_entry("garden-dev", "shoot-0", "bucket-0", Some("seed-1")));
    assert!(!graph.read().has_vertex(VertexType::Seed, "", "seed-0"));
    assert!(reaches_seed(&graph, VertexType::BackupEntry, "garden-dev", "shoot-0", "seed-1"));
}

#[test]
fn backup_entry_reaches_seed_through_owning_shoot() {
    let graph = Graph::shared();

    apply(&graph, mk_shoot("garden-dev", "shoot-0", ShootSpec {
        seed_name: Some("seed-0".to_string()),
        ..Default::default()
    }));
    let mut entry = mk_entry("garden-dev", "shoot-0--abc", "bucket-0", None);
    entry.metadata.owner_references = Some(vec![OwnerReference {
        api_version: "core.gardener.cloud/v1beta1".to_string(),
        kind: "Shoot".to_string(),
        name: "shoot-0".to_string(),
        uid: "6d7b5f2a".to_string(),
        ..Default::default()
    }]);
    apply(&graph, entry);

    assert!(reaches_seed(&graph, VertexType::BackupBucket, "", "bucket-0", "seed-0"));
    assert!(graph.read().has_edge(
        (VertexType::BackupEntry, "garden-dev", "shoot-0--abc"),
        (VertexType::Shoot, "garden-dev", "shoot-0"),
    ));
}

#[test]
fn bastion_is_bound_to_seed() {
    let graph = Graph::shared();

    let mut bastion = Bastion {
        metadata: mk_meta(Some("garden-dev"), "cli-xyz"),
        spec: BastionSpec {
            shoot_ref: Some(NameReference {
                name: "shoot-0".to_string(),
            }),
            seed_name: None,
        },
    };
    apply(&graph, bastion.clone());
    assert!(graph.read().is_empty());

    bastion.spec.seed_name = Some("seed-0".to_string());
    apply(&graph, bastion);
    assert!(reaches_seed(&graph, VertexType::Bastion, "garden-dev", "cli-xyz", "seed-0"));

    delete::<Bastion>(&graph, "garden-dev", "cli-xyz");
    assert!(graph.read().is_empty());
}
