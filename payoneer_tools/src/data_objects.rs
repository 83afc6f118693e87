use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{helpers::check_payout_amount, PayoneerApiError};

/// The arguments for a `PerformPayoutPayment` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// The partner-side id of the payment. Payoneer echoes it back in notifications as `PartnerpaymentId`.
    pub payment_id: String,
    pub payee_id: String,
    pub amount: String,
    pub description: String,
    #[serde(default = "Utc::now")]
    pub date: DateTime<Utc>,
}

impl PaymentRequest {
    pub fn new(payment_id: &str, payee_id: &str, amount: &str, description: &str) -> Self {
        Self {
            payment_id: payment_id.to_string(),
            payee_id: payee_id.to_string(),
            amount: amount.to_string(),
            description: description.to_string(),
            date: Utc::now(),
        }
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    pub fn validate(&self) -> Result<(), PayoneerApiError> {
        let missing = [
            ("payment_id", &self.payment_id),
            ("payee_id", &self.payee_id),
            ("amount", &self.amount),
            ("description", &self.description),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.trim().is_empty().then_some(key))
        .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(PayoneerApiError::InvalidInput(format!("{} must be included", missing.join(", "))));
        }
        check_payout_amount(&self.amount)
    }
}

/// `Echo` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EchoResponse {
    /// Payoneer status code, `000` when the API is up.
    #[serde(default)]
    pub status: Option<String>,
    pub description: String,
}

/// `GetVersion` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionResponse {
    pub version: String,
}

/// The combined result of the `Echo` and `GetVersion` calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiStatus {
    pub status: Option<String>,
    pub description: String,
    pub version: String,
}

impl ApiStatus {
    pub fn new(echo: EchoResponse, version: VersionResponse) -> Self {
        Self { status: echo.status, description: echo.description, version: version.version }
    }
}

/// `GetAccountDetails` response. Amounts are kept exactly as Payoneer formats them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountBalance {
    pub account_balance: String,
    pub curr: String,
    #[serde(default)]
    pub fees_due: Option<String>,
}

/// `PerformPayoutPayment` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutReceipt {
    pub payment_id: String,
    #[serde(default)]
    pub payoneer_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
