//! Server settings loaded via OrthoConfig.
//!
//! Values layer as defaults, then a configuration file, then `POI_*`
//! environment variables, then command-line flags.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;

/// Settings controlling the bind address and the initial POI data.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "POI")]
pub struct AppSettings {
    /// Address to bind the HTTP listener to.
    pub host: Option<IpAddr>,
    /// Port to bind the HTTP listener to.
    pub port: Option<u16>,
    /// JSON file of POI drafts loaded into the store at start-up.
    pub seed_path: Option<PathBuf>,
}

impl AppSettings {
    /// Socket address the server binds to, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(DEFAULT_HOST),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Seed file, when one is configured.
    pub fn seed_path(&self) -> Option<&Path> {
        self.seed_path.as_deref()
    }
}
