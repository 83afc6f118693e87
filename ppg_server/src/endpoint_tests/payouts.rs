use actix_web::{http::StatusCode, web, web::ServiceConfig};
use payoneer_tools::{ApiStatus, EchoResponse, PayoneerApiError, VersionResponse};

use super::helpers::get_request;
use crate::{
    endpoint_tests::mocks::MockPayoutGateway,
    routes::{ApiStatusRoute, EchoRoute, GetVersionRoute, SignupRoute},
};

const SIGNUP_URL: &str = "https://payouts.sandbox.payoneer.com/partners/lp.aspx?token=abc";

#[actix_web::test]
async fn signup_redirects_to_payoneer() {
    let _ = env_logger::try_init().ok();
    let res = get_request("/signup?payee_id=123", configure).await;
    assert_eq!(res.status, StatusCode::FOUND);
    let location = res.headers.get("Location").and_then(|v| v.to_str().ok());
    assert_eq!(location, Some(SIGNUP_URL));
}

#[actix_web::test]
async fn signup_requires_payee_id() {
    let _ = env_logger::try_init().ok();
    let res = get_request("/signup", configure).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    let res = get_request("/signup?payee_id=", configure).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, r#"{"error":"Invalid request. payee_id cannot be empty"}"#);
}

#[actix_web::test]
async fn signup_reports_gateway_failures() {
    let _ = env_logger::try_init().ok();
    let res = get_request("/signup?payee_id=999", configure).await;
    assert_eq!(res.status, StatusCode::BAD_GATEWAY);
    assert_eq!(
        res.body,
        r#"{"error":"The payout API call failed. Query failed. Error 500. Payee 999 is blocked"}"#
    );
}

#[actix_web::test]
async fn echo_and_version_are_json() {
    let _ = env_logger::try_init().ok();
    let res = get_request("/echo", configure).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, r#"{"status":"000","description":"Echo Ok - All systems are up."}"#);
    let res = get_request("/get_version", configure).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, r#"{"version":"4.15"}"#);
}

#[actix_web::test]
async fn api_status_is_json() {
    let _ = env_logger::try_init().ok();
    let res = get_request("/status", configure).await;
    assert_eq!(res.status, StatusCode::OK);
    let status: ApiStatus = serde_json::from_str(&res.body).expect("Response should be an ApiStatus");
    assert_eq!(status, ApiStatus::new(echo_ok(), version()));
}

#[actix_web::test]
async fn unreadable_payoneer_response() {
    let _ = env_logger::try_init().ok();
    let res = get_request("/get_version", configure_offline).await;
    assert_eq!(res.status, StatusCode::BAD_GATEWAY);
    assert_eq!(
        res.body,
        r#"{"error":"The payout API call failed. Invalid response from Payoneer: Unclosed element <version>"}"#
    );
}

#[actix_web::test]
async fn unreachable_payoneer() {
    let _ = env_logger::try_init().ok();
    let res = get_request("/echo", configure_offline).await;
    assert_eq!(res.status, StatusCode::BAD_GATEWAY);
    let res = get_request("/status", configure_offline).await;
    assert_eq!(res.status, StatusCode::BAD_GATEWAY);
}

fn configure(cfg: &mut ServiceConfig) {
    let mut gateway = MockPayoutGateway::new();
    gateway.expect_get_auth_redirect_url().returning(|payee_id| match payee_id {
        "999" => Err(PayoneerApiError::QueryError { status: 500, message: format!("Payee {payee_id} is blocked") }),
        _ => Ok(SIGNUP_URL.to_string()),
    });
    gateway.expect_echo().returning(|| Ok(echo_ok()));
    gateway.expect_get_version().returning(|| Ok(version()));
    gateway.expect_get_api_status().returning(|| Ok(ApiStatus::new(echo_ok(), version())));
    register(cfg, gateway);
}

fn configure_offline(cfg: &mut ServiceConfig) {
    let mut gateway = MockPayoutGateway::new();
    gateway.expect_echo().returning(|| Err(PayoneerApiError::RestRequestError("connection refused".to_string())));
    gateway
        .expect_get_api_status()
        .returning(|| Err(PayoneerApiError::RestRequestError("connection refused".to_string())));
    gateway
        .expect_get_version()
        .returning(|| Err(PayoneerApiError::RestResponseError("Unclosed element <version>".to_string())));
    register(cfg, gateway);
}

fn echo_ok() -> EchoResponse {
    EchoResponse { status: Some("000".to_string()), description: "Echo Ok - All systems are up.".to_string() }
}

fn version() -> VersionResponse {
    VersionResponse { version: "4.15".to_string() }
}

fn register(cfg: &mut ServiceConfig, gateway: MockPayoutGateway) {
    cfg.service(SignupRoute::<MockPayoutGateway>::new())
        .service(EchoRoute::<MockPayoutGateway>::new())
        .service(GetVersionRoute::<MockPayoutGateway>::new())
        .service(ApiStatusRoute::<MockPayoutGateway>::new())
        .app_data(web::Data::new(gateway));
}
