use std::time::Duration;

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use log::info;
use payoneer_tools::{NotificationClassifier, PayoneerApi};

use crate::{
    config::ServerConfig,
    errors::ServerError,
    notification_routes::notification,
    routes::{health, ApiStatusRoute, EchoRoute, GetVersionRoute, SignupRoute},
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    config.payoneer.validate().map_err(|e| ServerError::ConfigurationError(e.to_string()))?;
    let api = PayoneerApi::new(config.payoneer.clone()).map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let classifier = NotificationClassifier::default();
    info!("🔔️ Loaded {} notification catalog nodes", classifier.catalog().len());
    let srv = create_server_instance(config, api, classifier)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

pub fn create_server_instance(
    config: ServerConfig,
    api: PayoneerApi,
    classifier: NotificationClassifier,
) -> Result<Server, ServerError> {
    let srv = HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("ppg::access_log"))
            .app_data(web::Data::new(api.clone()))
            .app_data(web::Data::new(classifier.clone()))
            .service(health)
            .service(notification)
            .service(SignupRoute::<PayoneerApi>::new())
            .service(EchoRoute::<PayoneerApi>::new())
            .service(GetVersionRoute::<PayoneerApi>::new())
            .service(ApiStatusRoute::<PayoneerApi>::new())
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}
