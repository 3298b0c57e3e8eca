use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Gateway port (default: 3000)
    #[serde(default = "default_gateway_port")]
    pub port: u16,
    /// Gateway host (default: 0.0.0.0, the orchestrator calls in from outside)
    #[serde(default = "default_gateway_host")]
    pub host: String,
    /// Directory with the activity's static UI (`config.json`, `index.html`)
    #[serde(default)]
    pub public_dir: Option<PathBuf>,
}

fn default_gateway_port() -> u16 {
    3000
}

fn default_gateway_host() -> String {
    "0.0.0.0".into()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_gateway_port(),
            host: default_gateway_host(),
            public_dir: None,
        }
    }
}
