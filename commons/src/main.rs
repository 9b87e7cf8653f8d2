//! Service entry-point: loads settings and serves the sample book API.

use color_eyre::eyre::{Result, WrapErr};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use commons::server::{ServerConfig, create_server};
use commons::settings::Settings;

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = Settings::load(env!("CARGO_PKG_NAME")).wrap_err("loading settings")?;
    let config = ServerConfig::from_settings(&settings).wrap_err("validating settings")?;
    let (host, port) = config.bind_addr();
    info!(%host, port, groups = config.docs().group_names().count(), "starting server");

    create_server(config)
        .wrap_err("binding http server")?
        .await
        .wrap_err("running http server")
}
