#![deny(warnings, rust_2018_idioms)]
#![forbid(unsafe_code)]

pub use gardener_seed_authorizer_graph as graph;
pub use gardener_seed_authorizer_k8s_api as k8s;

mod args;
pub mod authorizer;
pub mod setup;

pub use self::{
    args::Args,
    authorizer::{Attributes, Authorizer, Decision, UserInfo},
    setup::{setup, SetupError},
};
