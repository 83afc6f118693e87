use mockall::mock;
use payoneer_tools::{ApiStatus, EchoResponse, PayoneerApiError, PayoutGateway, VersionResponse};

mock! {
    pub PayoutGateway {}
    impl PayoutGateway for PayoutGateway {
        async fn echo(&self) -> Result<EchoResponse, PayoneerApiError>;
        async fn get_version(&self) -> Result<VersionResponse, PayoneerApiError>;
        async fn get_api_status(&self) -> Result<ApiStatus, PayoneerApiError>;
        async fn get_auth_redirect_url(&self, payee_id: &str) -> Result<String, PayoneerApiError>;
    }
}
