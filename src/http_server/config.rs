//! Listener settings for the climate API
//!
//! Defaults reproduce a local development server (loopback, port 5000),
//! so existing clients of the dataset API keep working unchanged. This is
//! the `server` section of `climate-api.json`.

use serde::{Deserialize, Serialize};

/// Where the API listens and which browser origins may call it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Interface to bind; loopback unless the API should be reachable remotely
    #[serde(default = "default_host")]
    pub host: String,

    /// Listening port (default: 5000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Origins allowed to read the JSON routes from a browser; empty allows any
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// Default listener on another port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// `host:port`, as passed to the listener
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
