use std::env;

use log::*;
use ppg_common::{env_flag, Secret};

use crate::PayoneerApiError;

pub const SANDBOX_API_URI: &str = "https://api.sandbox.payoneer.com/Payouts/HttpApi/API.aspx";
pub const PRODUCTION_API_URI: &str = "https://api.payoneer.com/Payouts/HttpApi/API.aspx";

#[derive(Debug, Clone, Default)]
pub struct PayoneerConfig {
    /// The full URL of the payouts endpoint, e.g. [`SANDBOX_API_URI`].
    pub uri: String,
    pub username: String,
    pub password: Secret<String>,
    pub partner_id: String,
    /// The program that payouts are drawn from. Only needed for payment calls, but Payoneer issues one with every
    /// partner account, so it is always required.
    pub program_id: String,
}

impl PayoneerConfig {
    pub fn new(uri: &str, username: &str, password: &str, partner_id: &str, program_id: &str) -> Self {
        Self {
            uri: uri.to_string(),
            username: username.to_string(),
            password: Secret::from(password),
            partner_id: partner_id.to_string(),
            program_id: program_id.to_string(),
        }
    }

    pub fn new_from_env_or_default() -> Self {
        let sandbox = env_flag("PPG_PAYONEER_SANDBOX", true);
        let uri = env::var("PPG_PAYONEER_URI").unwrap_or_else(|_| {
            let uri = if sandbox { SANDBOX_API_URI } else { PRODUCTION_API_URI };
            info!("🪛️ PPG_PAYONEER_URI not set, using {uri}");
            uri.to_string()
        });
        let username = env::var("PPG_PAYONEER_USERNAME").unwrap_or_else(|_| {
            error!("🪛️ PPG_PAYONEER_USERNAME is not set. Please set it to your Payoneer API username.");
            String::default()
        });
        let password = Secret::new(env::var("PPG_PAYONEER_PASSWORD").unwrap_or_else(|_| {
            error!("🪛️ PPG_PAYONEER_PASSWORD is not set. Please set it to your Payoneer API password.");
            String::default()
        }));
        let partner_id = env::var("PPG_PAYONEER_PARTNER_ID").unwrap_or_else(|_| {
            error!("🪛️ PPG_PAYONEER_PARTNER_ID is not set. Please set it to your Payoneer partner id.");
            String::default()
        });
        let program_id = env::var("PPG_PAYONEER_PROGRAM_ID").unwrap_or_else(|_| {
            error!("🪛️ PPG_PAYONEER_PROGRAM_ID is not set. Please set it to your Payoneer program id.");
            String::default()
        });
        Self { uri, username, password, partner_id, program_id }
    }

    /// Checks that every credential is present. All missing keys are reported in a single error.
    pub fn validate(&self) -> Result<(), PayoneerApiError> {
        let missing = [
            ("uri", self.uri.trim().is_empty()),
            ("username", self.username.trim().is_empty()),
            ("password", self.password.is_blank()),
            ("partner_id", self.partner_id.trim().is_empty()),
            ("program_id", self.program_id.trim().is_empty()),
        ]
        .into_iter()
        .filter_map(|(key, missing)| missing.then_some(key))
        .collect::<Vec<_>>();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(PayoneerApiError::InvalidInput(format!("{} config must be included", missing.join(", "))))
        }
    }

    /// The credential parameters that prefix every API call.
    pub(crate) fn credentials(&self) -> [(&'static str, &str); 3] {
        [("p1", self.username.as_str()), ("p2", self.password.reveal().as_str()), ("p3", self.partner_id.as_str())]
    }
}
