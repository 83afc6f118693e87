//! # PPG server
//! This module hosts the server code for the Payoneer payout gateway. It is responsible for:
//! Receiving callback notifications (IPCN) from Payoneer and identifying which event they describe.
//! Proxying the handful of payout API calls that a web front end needs (payee sign-up, API status).
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! The server exposes the following routes:
//! * `/health`: A health check route that returns a 200 OK response.
//! * `/notification`: The callback route for Payoneer notifications.
//! * `/signup`: Redirects a payee to their Payoneer sign-up page.
//! * `/echo`, `/get_version`, `/status`: Payoneer API health.

pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;

pub mod notification_routes;
pub mod routes;
pub mod server;

#[cfg(test)]
mod endpoint_tests;
