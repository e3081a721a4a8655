use crate::{
    graph::{self, Graph},
    setup,
};
use anyhow::{bail, Result};
use clap::Parser;
use prometheus_client::registry::Registry;

#[derive(Debug, Parser)]
#[clap(
    name = "seed-authorizer",
    about = "Tracks which garden cluster objects belong to which seed"
)]
pub struct Args {
    #[clap(
        long,
        default_value = "gardener=info,warn",
        env = "GARDENER_SEED_AUTHORIZER_LOG"
    )]
    log_level: kubert::LogFilter,

    #[clap(long, default_value = "plain")]
    log_format: kubert::LogFormat,

    #[clap(flatten)]
    client: kubert::ClientArgs,

    #[clap(flatten)]
    admin: kubert::AdminArgs,
}

impl Args {
    #[inline]
    pub async fn parse_and_run() -> Result<()> {
        Self::parse().run().await
    }

    pub async fn run(self) -> Result<()> {
        let Self {
            admin,
            client,
            log_level,
            log_format,
        } = self;

        let graph = Graph::shared();

        let mut prom = <Registry>::default();
        graph::metrics::register(
            prom.sub_registry_with_prefix("seed_authorizer_graph"),
            graph.clone(),
        );
        let rt_metrics = kubert::RuntimeMetrics::register(prom.sub_registry_with_prefix("kube"));

        let mut runtime = kubert::Runtime::builder()
            .with_log(log_level, log_format)
            .with_metrics(rt_metrics)
            .with_admin(admin.into_builder().with_prometheus(prom))
            .with_client(client)
            .build()
            .await?;

        // Fails if any of the watched resource kinds is not served.
        setup(&mut runtime, graph).await?;

        // Block the main thread on the shutdown signal. Once it fires, wait for the background
        // tasks to complete before exiting.
        if runtime.run().await.is_err() {
            bail!("Aborted");
        }

        Ok(())
    }
}
