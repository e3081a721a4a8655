//! Typed views of the Kubernetes and Gardener resources that the seed authorizer indexes.
//!
//! Only the fields that establish a relationship between objects are modeled. Everything else in
//! the Gardener API is ignored when deserializing.

#![deny(warnings, rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod gardener;
pub mod identity;
pub mod operations;
pub mod security;
pub mod seedmanagement;

pub use k8s_openapi::{
    api::{
        self,
        certificates::v1::{CertificateSigningRequest, CertificateSigningRequestSpec},
        core::v1::{Namespace, Secret, ServiceAccount},
        rbac::v1::{ClusterRoleBinding, RoleRef, Subject},
    },
    apimachinery::pkg::apis::meta::v1::{ObjectMeta, OwnerReference},
};
pub use kube::{Resource, ResourceExt};
