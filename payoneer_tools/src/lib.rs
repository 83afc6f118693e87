//! # Payoneer tools
//!
//! * [`PayoneerApi`]: a thin client for the Payoneer payouts HTTP API. Every call is a `POST` with the method name
//!   and its positional arguments in the query string. XML responses are parsed into typed structs or a
//!   camelCase-keyed tree (see [`xml`]); `GetToken` answers with a plain URL.
//! * [`notifications`]: the classifier for Payoneer's callback notifications (IPCN), which maps the query
//!   parameters of an incoming callback onto one of a fixed set of payout lifecycle events.
mod api;
mod config;
mod error;
mod gateway;
mod helpers;

pub mod data_objects;
pub mod notifications;
pub mod xml;

pub use api::PayoneerApi;
pub use config::{PayoneerConfig, PRODUCTION_API_URI, SANDBOX_API_URI};
pub use data_objects::{AccountBalance, ApiStatus, EchoResponse, PaymentRequest, PayoutReceipt, VersionResponse};
pub use error::PayoneerApiError;
pub use gateway::PayoutGateway;
pub use notifications::{EventCatalogEntry, NotificationClassifier, NotificationType};
