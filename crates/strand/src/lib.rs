pub mod config;
pub mod server;

pub use crate::config::ServerConfig;
pub use crate::server::Server;
