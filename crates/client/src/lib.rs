//! Client crate: Circonus v2 API integration.
/// Circonus API client
pub mod client;

pub use client::{APP_NAME_HEADER, AUTH_TOKEN_HEADER, Client, api_headers, api_url};
pub use config::API_BASE_URL;
