use anyhow::Context;
use packwise::domain::config::ApiConfig;
use packwise::kernel::config::load_config;
use packwise_server::{Server, init_logging};

#[packwise_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let cfg: ApiConfig =
        load_config(None::<&str>).context("Critical: Configuration is malformed")?;

    let _log = init_logging(env!("CARGO_PKG_NAME"), &cfg.logging)?;

    Server::builder().config(cfg).build()?.run().await
}
