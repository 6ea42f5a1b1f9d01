use serde::{ Deserialize, Serialize };

use crate::constants::DEFAULT_RPC_URL;

/// Environment variable checked by the binary boundary for an RPC override
pub const RPC_URL_ENV: &str = "RECLAIM_RPC_URL";

/// Explicit configuration injected into the core components.
///
/// The core never reads the process environment itself; the calling boundary
/// performs the lookup once (see [`Config::from_env`]) and hands the value in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub rpc_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
        }
    }
}

impl Config {
    /// Resolve configuration from the environment, falling back to the
    /// public mainnet endpoint. Intended to be called exactly once, at the
    /// binary boundary.
    pub fn from_env() -> Self {
        match std::env::var(RPC_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self { rpc_url: url },
            _ => Self::default(),
        }
    }
}
