mod types;

pub use types::*;

use crate::Result;
use std::env;
use tracing::debug;

/// Resolve the console configuration from the process environment, once, at
/// startup. Both adapters are handed their routing targets from the result;
/// nothing else reads the environment afterwards.
pub fn load() -> Result<Config> {
    let config = Config::from_lookup(|key| env::var(key).ok())?;

    debug!(
        "Resolved ingress gateway {}:{}",
        config.gateway.host, config.gateway.port
    );

    Ok(config)
}
