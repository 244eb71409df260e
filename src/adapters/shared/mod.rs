//! Shared helpers for exchange adapters

pub mod http;

pub use http::RestClient;
