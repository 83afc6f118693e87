//! Request handler definitions
//!
//! Define each route and it handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! Every handler that talks to Payoneer is async and awaits the outbound call, so a slow Payoneer response never
//! stalls a worker thread. The notification handler does no I/O at all.
use actix_web::{get, web, HttpResponse, Responder};
use log::*;
use payoneer_tools::PayoutGateway;

use crate::{data_objects::SignupParams, errors::ServerError};

// Web-actix cannot handle generics in handlers, so it's implemented manually using the `route!` macro
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+) => {
        paste::paste! { pub struct [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ >( $( core::marker::PhantomData<fn() -> [< T $bounds:camel> ] >,)+ );}
        paste::paste! { impl< $( [< T $bounds:camel> ],)+ > [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ > {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self($( core::marker::PhantomData::<fn() -> [< T $bounds:camel> ] >,)+)
            }
        }}
        paste::paste! { impl<$( [< T $bounds:camel >] , )+> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<$([<T $bounds:camel>],)+>
        where
            $([<T $bounds:camel>]: $bounds + 'static,)+
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::< $( [< T $bounds:camel >], )+>);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

//----------------------------------------------   Sign-up  ----------------------------------------------------
route!(signup => Get "/signup" impl PayoutGateway);
/// Sends the payee to their Payoneer registration page.
///
/// The payee id is chosen by us and must be unique per payee; Payoneer quotes it back in every notification about
/// that payee (`payeeid`).
pub async fn signup<G: PayoutGateway>(
    query: web::Query<SignupParams>,
    api: web::Data<G>,
) -> Result<HttpResponse, ServerError> {
    let payee_id = query.into_inner().payee_id;
    if payee_id.trim().is_empty() {
        return Err(ServerError::InvalidRequest("payee_id cannot be empty".to_string()));
    }
    debug!("💸️ Fetching sign-up URL for payee {payee_id}");
    let url = api.get_auth_redirect_url(&payee_id).await.map_err(|e| {
        warn!("💸️ Could not fetch sign-up URL for payee {payee_id}. {e}");
        ServerError::from(e)
    })?;
    info!("💸️ Redirecting payee {payee_id} to Payoneer sign-up");
    Ok(HttpResponse::Found().insert_header(("Location", url)).finish())
}

//----------------------------------------------   API health  ----------------------------------------------------
route!(echo => Get "/echo" impl PayoutGateway);
pub async fn echo<G: PayoutGateway>(api: web::Data<G>) -> Result<HttpResponse, ServerError> {
    trace!("💸️ Received echo request");
    let echo = api.echo().await?;
    Ok(HttpResponse::Ok().json(echo))
}

route!(get_version => Get "/get_version" impl PayoutGateway);
pub async fn get_version<G: PayoutGateway>(api: web::Data<G>) -> Result<HttpResponse, ServerError> {
    trace!("💸️ Received version request");
    let version = api.get_version().await?;
    Ok(HttpResponse::Ok().json(version))
}

route!(api_status => Get "/status" impl PayoutGateway);
pub async fn api_status<G: PayoutGateway>(api: web::Data<G>) -> Result<HttpResponse, ServerError> {
    trace!("💸️ Received API status request");
    let status = api.get_api_status().await.map_err(|e| {
        warn!("💸️ Payoneer API status check failed. {e}");
        ServerError::from(e)
    })?;
    Ok(HttpResponse::Ok().json(status))
}
