use anyhow::Context;

use stockroom_api::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = Config::from_env().context("invalid configuration")?;

    stockroom_api::server::run(config).await
}
