use actix_web::{http::StatusCode, web, web::ServiceConfig};
use payoneer_tools::{notifications::Catalog, NotificationClassifier, NotificationType};
use serde_json::Value;

use super::helpers::get_request;
use crate::{data_objects::NOT_VALID_TYPE, notification_routes::notification};

async fn notification_type(query: &str) -> Option<String> {
    let res = get_request(&format!("/notification?{query}"), configure).await;
    if res.status != StatusCode::OK {
        return None;
    }
    let json: Value = serde_json::from_str(&res.body).expect("Response should be JSON");
    json["type"].as_str().map(String::from)
}

#[actix_web::test]
async fn returns_the_matched_entry() {
    let _ = env_logger::try_init().ok();
    let res = get_request("/notification?APPROVED=true&a=b&c=d&yolo=swag", configure).await;
    assert_eq!(res.status, StatusCode::OK);
    let json: Value = serde_json::from_str(&res.body).expect("Response should be JSON");
    assert_eq!(json, serde_json::json!({"type": "accountApproved", "message": "Payee account approved"}));
}

#[actix_web::test]
async fn unknown_notification_fails() {
    let _ = env_logger::try_init().ok();
    let res = get_request("/notification?RANDOM=true&a=b&c=d&yolo=swag", configure).await;
    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.body, NOT_VALID_TYPE);
}

#[actix_web::test]
async fn empty_query_fails() {
    let _ = env_logger::try_init().ok();
    let res = get_request("/notification", configure).await;
    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.body, NOT_VALID_TYPE);
}

#[actix_web::test]
async fn registration_notifications() {
    let _ = env_logger::try_init().ok();
    for flag in ["REG", "ACHREG", "iACHREG", "PaperCheck"] {
        let t = notification_type(&format!("{flag}=true&payeeid=1&Payoneerid=1")).await;
        assert_eq!(t.as_deref(), Some("registration"), "{flag}");
    }
    assert_eq!(notification_type("DECLINE=true&payeeid=1&Payoneerid=1").await.as_deref(), Some("accountDeclined"));
}

#[actix_web::test]
async fn payment_notifications() {
    let _ = env_logger::try_init().ok();
    for flag in ["LOADCC", "LOADACH", "LOADiACH", "PaperCheck"] {
        let t = notification_type(&format!("{flag}=true&payeeid=1&PaymentId=1&PartnerpaymentId=1")).await;
        assert_eq!(t.as_deref(), Some("pay"), "{flag}");
    }
    assert_eq!(notification_type("PAYMENT=true").await.as_deref(), Some("paymentRequested"));
    assert_eq!(notification_type("CancelPayment=true").await.as_deref(), Some("paymentCanceled"));
}

#[actix_web::test]
async fn flag_values_are_ignored() {
    let _ = env_logger::try_init().ok();
    assert_eq!(notification_type("APPROVED=false").await.as_deref(), Some("accountApproved"));
    assert_eq!(notification_type("APPROVED").await.as_deref(), Some("accountApproved"));
}

#[actix_web::test]
async fn uses_the_injected_catalog() {
    let _ = env_logger::try_init().ok();
    let res = get_request("/notification?ping=1", configure_custom).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, r#"{"type":"paymentRequested","message":"Ping"}"#);
    let res = get_request("/notification?APPROVED=true", configure_custom).await;
    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
}

fn configure(cfg: &mut ServiceConfig) {
    cfg.service(notification).app_data(web::Data::new(NotificationClassifier::default()));
}

fn configure_custom(cfg: &mut ServiceConfig) {
    let catalog =
        Catalog::builder().terminal("ping", NotificationType::PaymentRequested, "Ping").build().expect("Valid catalog");
    cfg.service(notification).app_data(web::Data::new(NotificationClassifier::new(catalog)));
}
