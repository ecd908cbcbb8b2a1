use std::net::{IpAddr, SocketAddr};

/// Bind configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Loads configuration from the environment (and a `.env` file when
    /// present). Unset or malformed variables fall back to the defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let defaults = Self::default();
        let host = std::env::var("STRAND_HOST")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(defaults.host);
        let port = std::env::var("STRAND_PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(defaults.port);
        Self { host, port }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 8000,
        }
    }
}
