//! # Payoneer callback notifications (IPCN)
//!
//! Payoneer reports registration and payout lifecycle events by calling a URL of our choosing with a handful of
//! query parameters. The event is identified by which parameters are *present*, not by their values, e.g.
//!
//! ```text
//! /notification?APPROVED=true&payeeid=1&Payoneerid=1      -> accountApproved
//! /notification?LOADCC=true&payeeid=1&PaymentId=1         -> pay
//! ```
//!
//! [`Catalog`] describes the recognised events and [`NotificationClassifier`] resolves a parameter set against it.
//! Parsing the query string and deciding how to answer the callback is left to the caller.
mod catalog;
mod classifier;

pub use catalog::{Catalog, CatalogBuilder, CatalogError, CatalogNode, EventCatalogEntry, EventCategory, NotificationType};
pub use classifier::{NotificationClassifier, ParamKeys};
