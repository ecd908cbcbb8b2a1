use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use strand::{Server, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), String> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = ServerConfig::from_env();
    let mut server = Server::start(&config).await?;
    info!("strand serving on http://{}", server.addr());

    tokio::signal::ctrl_c()
        .await
        .map_err(|error| error.to_string())?;
    info!("shutting down");
    server.shutdown()
}
