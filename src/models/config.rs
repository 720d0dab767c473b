//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Cookie signing key material; must be at least 64 bytes.
    pub secret: String,
    pub templates_dir: String,
    /// Base URL of the external gateway, e.g. `http://localhost:3000/api/v1`.
    pub gateway_url: String,
}
