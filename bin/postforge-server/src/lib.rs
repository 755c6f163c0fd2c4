//! postforge-server – HTTP front-end for the generation pipeline.
//!
//! Exposed as a library so the integration tests can build the router
//! against a stub upstream; the binary entry point lives in `main.rs`.

pub mod config;
pub mod error;
pub mod history;
pub mod middleware;
pub mod routes;
pub mod schemas;
pub mod session;
pub mod state;
