//! Request / response types for the HTTP API.

pub mod generate;
pub mod templates;
