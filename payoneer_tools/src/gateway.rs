use crate::{
    data_objects::{ApiStatus, EchoResponse, VersionResponse},
    PayoneerApi,
    PayoneerApiError,
};

/// The payout operations the gateway server proxies. [`PayoneerApi`] is the production implementation; route
/// handlers are generic over this trait so that they can be exercised against mocks.
#[allow(async_fn_in_trait)]
pub trait PayoutGateway {
    /// Round-trip check against the payout API.
    async fn echo(&self) -> Result<EchoResponse, PayoneerApiError>;

    async fn get_version(&self) -> Result<VersionResponse, PayoneerApiError>;

    async fn get_api_status(&self) -> Result<ApiStatus, PayoneerApiError>;

    /// Returns the sign-up URL that the payee identified by `payee_id` should be redirected to.
    async fn get_auth_redirect_url(&self, payee_id: &str) -> Result<String, PayoneerApiError>;
}

impl PayoutGateway for PayoneerApi {
    async fn echo(&self) -> Result<EchoResponse, PayoneerApiError> {
        PayoneerApi::echo(self).await
    }

    async fn get_version(&self) -> Result<VersionResponse, PayoneerApiError> {
        PayoneerApi::get_version(self).await
    }

    async fn get_api_status(&self) -> Result<ApiStatus, PayoneerApiError> {
        PayoneerApi::get_api_status(self).await
    }

    async fn get_auth_redirect_url(&self, payee_id: &str) -> Result<String, PayoneerApiError> {
        PayoneerApi::get_auth_redirect_url(self, payee_id).await
    }
}
