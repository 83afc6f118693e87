use std::sync::Arc;

use log::*;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    config::PayoneerConfig,
    data_objects::{AccountBalance, ApiStatus, EchoResponse, PaymentRequest, PayoutReceipt, VersionResponse},
    helpers::payoneer_date,
    xml::{from_response, parse_response},
    PayoneerApiError,
};

const ECHO: &str = "Echo";
const GET_VERSION: &str = "GetVersion";
const GET_TOKEN: &str = "GetToken";
const PERFORM_PAYOUT_PAYMENT: &str = "PerformPayoutPayment";
const GET_UNCLAIMED_PAYMENTS: &str = "GetUnclaimedPaymentsXML";
const CANCEL_PAYMENT: &str = "CancelPayment";
const GET_PAYMENT_STATUS: &str = "GetPaymentStatus";
const GET_SINGLE_PAYEE_REPORT: &str = "GetSinglePayeeReport";
const GET_PAYEES_REPORT: &str = "GetPayeesReport";
const GET_PAYEE_DETAILS: &str = "GetPayeeDetails";
const CHANGE_PAYEE_ID: &str = "ChangePayeeID";
const GET_ACCOUNT_DETAILS: &str = "GetAccountDetails";

#[derive(Clone)]
pub struct PayoneerApi {
    config: PayoneerConfig,
    client: Arc<Client>,
}

impl PayoneerApi {
    pub fn new(config: PayoneerConfig) -> Result<Self, PayoneerApiError> {
        config.validate()?;
        let client = Client::builder().build().map_err(|e| PayoneerApiError::Initialization(e.to_string()))?;
        Ok(Self { config, client: Arc::new(client) })
    }

    pub fn config(&self) -> &PayoneerConfig {
        &self.config
    }

    /// Sends a single API call. `params` follow the credentials in the query string and must include `mname`.
    ///
    /// The body of a successful response is returned untouched. Use [`Self::query`] or [`Self::query_tree`] for
    /// calls that answer with XML.
    pub async fn request(&self, params: &[(&str, &str)]) -> Result<String, PayoneerApiError> {
        let method = params.iter().find(|(k, _)| *k == "mname").map(|(_, v)| *v).unwrap_or("???");
        trace!("Sending Payoneer request: {method}");
        let response = self
            .client
            .post(self.config.uri.as_str())
            .query(&self.config.credentials())
            .query(params)
            .send()
            .await
            .map_err(|e| PayoneerApiError::RestRequestError(e.to_string()))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| PayoneerApiError::RestResponseError(e.to_string()))?;
        if !status.is_success() {
            debug!("Payoneer request {method} failed with status {status}");
            return Err(PayoneerApiError::QueryError { status: status.as_u16(), message: body });
        }
        if body.trim().is_empty() {
            return Err(PayoneerApiError::EmptyResponse);
        }
        trace!("Payoneer request {method} successful. {status}");
        Ok(body)
    }

    /// Sends an API call and reads the XML response into `T`.
    pub async fn query<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T, PayoneerApiError> {
        let body = self.request(params).await?;
        from_response(&body).map_err(|e| {
            debug!("Could not read Payoneer response. {e}. Body: {body}");
            e
        })
    }

    /// Sends an API call and returns the XML response as a camelCase-keyed tree.
    pub async fn query_tree(&self, params: &[(&str, &str)]) -> Result<Value, PayoneerApiError> {
        let body = self.request(params).await?;
        parse_response(&body)
    }

    pub async fn echo(&self) -> Result<EchoResponse, PayoneerApiError> {
        self.query(&[("mname", ECHO)]).await
    }

    pub async fn get_version(&self) -> Result<VersionResponse, PayoneerApiError> {
        self.query(&[("mname", GET_VERSION)]).await
    }

    pub async fn get_api_status(&self) -> Result<ApiStatus, PayoneerApiError> {
        let echo = self.echo().await?;
        let version = self.get_version().await?;
        Ok(ApiStatus::new(echo, version))
    }

    /// Fetches the URL of the Payoneer sign-up page for the given payee. `GetToken` answers with the bare URL rather
    /// than XML.
    pub async fn get_auth_redirect_url(&self, payee_id: &str) -> Result<String, PayoneerApiError> {
        if payee_id.trim().is_empty() {
            return Err(PayoneerApiError::InvalidInput("payee_id must be included".to_string()));
        }
        debug!("Fetching sign-up token for payee {payee_id}");
        // p9 lets the sandbox create the payee on the fly. Production ignores it.
        let url = self.request(&[("mname", GET_TOKEN), ("p4", payee_id), ("p9", "True")]).await?;
        Ok(url.trim().to_string())
    }

    pub async fn request_payment(&self, payment: &PaymentRequest) -> Result<PayoutReceipt, PayoneerApiError> {
        payment.validate()?;
        let date = payoneer_date(&payment.date);
        debug!("Requesting payout {} of {} to payee {}", payment.payment_id, payment.amount, payment.payee_id);
        let receipt: PayoutReceipt = self
            .query(&[
                ("mname", PERFORM_PAYOUT_PAYMENT),
                ("p4", self.config.program_id.as_str()),
                ("p5", payment.payment_id.as_str()),
                ("p6", payment.payee_id.as_str()),
                ("p7", payment.amount.trim()),
                ("p8", payment.description.as_str()),
                ("p9", date.as_str()),
            ])
            .await?;
        info!("Payout {} requested. Payoneer reference: {}", payment.payment_id, receipt.payment_id);
        Ok(receipt)
    }

    pub async fn get_unclaimed_payments(&self) -> Result<Value, PayoneerApiError> {
        self.query_tree(&[("mname", GET_UNCLAIMED_PAYMENTS)]).await
    }

    pub async fn cancel_payment(&self, payment_id: &str) -> Result<Value, PayoneerApiError> {
        debug!("Cancelling payout {payment_id}");
        let result =
            self.query_tree(&[("mname", CANCEL_PAYMENT), ("p4", self.config.program_id.as_str()), ("p5", payment_id)]).await?;
        info!("Cancelled payout {payment_id}");
        Ok(result)
    }

    pub async fn get_payment_status(&self, payee_id: &str, payment_id: &str) -> Result<Value, PayoneerApiError> {
        self.query_tree(&[("mname", GET_PAYMENT_STATUS), ("p4", payee_id), ("p5", payment_id)]).await
    }

    pub async fn get_payee_payments(&self, payee_id: &str) -> Result<Value, PayoneerApiError> {
        self.query_tree(&[("mname", GET_SINGLE_PAYEE_REPORT), ("p4", payee_id)]).await
    }

    pub async fn get_payees_report(&self) -> Result<Value, PayoneerApiError> {
        self.query_tree(&[("mname", GET_PAYEES_REPORT)]).await
    }

    pub async fn get_payee(&self, payee_id: &str) -> Result<Value, PayoneerApiError> {
        self.query_tree(&[("mname", GET_PAYEE_DETAILS), ("p4", payee_id)]).await
    }

    pub async fn update_payee_id(&self, old_id: &str, new_id: &str) -> Result<Value, PayoneerApiError> {
        debug!("Changing payee id {old_id} to {new_id}");
        let result = self.query_tree(&[("mname", CHANGE_PAYEE_ID), ("p4", old_id), ("p5", new_id)]).await?;
        info!("Payee {old_id} is now known as {new_id}");
        Ok(result)
    }

    pub async fn get_balance(&self) -> Result<AccountBalance, PayoneerApiError> {
        self.query(&[("mname", GET_ACCOUNT_DETAILS)]).await
    }
}
