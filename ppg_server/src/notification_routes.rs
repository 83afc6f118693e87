//----------------------------------------------   Notifications  ----------------------------------------------------

use std::collections::HashMap;

use actix_web::{get, web, HttpRequest, HttpResponse};
use log::{debug, info, trace, warn};
use payoneer_tools::NotificationClassifier;

use crate::data_objects::NOT_VALID_TYPE;

/// Payoneer callback (IPCN) handler.
///
/// The matched catalog entry is returned as JSON with a 200. Anything we don't recognise gets a 500, which makes
/// Payoneer flag the delivery as failed so it shows up on their side too.
#[get("/notification")]
pub async fn notification(
    req: HttpRequest,
    query: web::Query<HashMap<String, String>>,
    classifier: web::Data<NotificationClassifier>,
) -> HttpResponse {
    trace!("🔔️ Received notification: {}", req.uri());
    let params = query.into_inner();
    match classifier.classify(&params) {
        Some(entry) => {
            info!("🔔️ {} notification ({}): {}", entry.event_type, entry.trigger_key, entry.message);
            if let Some(payee) = params.get("payeeid") {
                debug!("🔔️ Notification concerns payee {payee}");
            }
            HttpResponse::Ok().json(entry)
        },
        None => {
            let mut keys = params.keys().map(String::as_str).collect::<Vec<_>>();
            keys.sort_unstable();
            warn!("🔔️ Unrecognised notification. Parameters: [{}]", keys.join(", "));
            HttpResponse::InternalServerError().body(NOT_VALID_TYPE)
        },
    }
}
