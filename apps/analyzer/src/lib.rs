//! Resume skill analyzer.
//!
//! `client` holds the submission core: intake, validation, the submission
//! state machine, response decoding and chart projection. `service` is a
//! reference implementation of the analysis endpoint the client talks to.

pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;
