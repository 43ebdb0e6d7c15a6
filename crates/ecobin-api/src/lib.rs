// ecobin-api: typed async client for the ecobin backend REST API.

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use error::Error;
pub use transport::TransportConfig;
