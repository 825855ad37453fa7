//! Service configuration from environment variables.

use crate::types::Depth;
use std::net::SocketAddr;

/// Default search depth; the search has no pruning, so keep this small
pub const DEFAULT_DEPTH: i32 = 2;

/// Runtime configuration for the service
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to (`CHESSD_BIND`)
    pub bind: SocketAddr,
    /// Fixed search depth for the built-in selector (`CHESSD_DEPTH`)
    pub depth: Depth,
    /// Optional path to an external UCI engine binary (`CHESSD_ENGINE_PATH`).
    /// When set, `/ai-move` queries that engine instead of the built-in
    /// minimax selector.
    pub engine_path: Option<String>,
}

impl Config {
    /// Read configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        let bind = std::env::var("CHESSD_BIND")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let depth = std::env::var("CHESSD_DEPTH")
            .ok()
            .and_then(|s| s.parse::<i32>().ok())
            .filter(|d| *d > 0)
            .map(Depth::new)
            .unwrap_or(Depth::new(DEFAULT_DEPTH));

        let engine_path = std::env::var("CHESSD_ENGINE_PATH").ok().filter(|p| !p.is_empty());

        Self {
            bind,
            depth,
            engine_path,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 3000)),
            depth: Depth::new(DEFAULT_DEPTH),
            engine_path: None,
        }
    }
}
