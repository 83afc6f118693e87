use std::env;

use log::*;
use payoneer_tools::PayoneerConfig;

const DEFAULT_PPG_HOST: &str = "127.0.0.1";
const DEFAULT_PPG_PORT: u16 = 8460;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Credentials and endpoint for the Payoneer payouts API
    pub payoneer: PayoneerConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_PPG_HOST.to_string(), port: DEFAULT_PPG_PORT, payoneer: PayoneerConfig::default() }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("PPG_HOST").ok().unwrap_or_else(|| DEFAULT_PPG_HOST.into());
        let port = env::var("PPG_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!(
                        "🪛️ {s} is not a valid port for PPG_PORT. {e} Using the default, {DEFAULT_PPG_PORT}, instead."
                    );
                    DEFAULT_PPG_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_PPG_PORT);
        let payoneer = PayoneerConfig::new_from_env_or_default();
        if let Err(e) = payoneer.validate() {
            warn!("🪛️ The Payoneer configuration is incomplete and the server will refuse to start. {e}");
        }
        Self { host, port, payoneer }
    }
}
