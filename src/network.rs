//! Network constants for the Lending Club investor API.

/// API version segment of the investor API path.
pub const API_VERSION: &str = "v1";

/// Default REST API base URL for the Lending Club investor API.
pub const DEFAULT_API_URL: &str = "https://api.lendingclub.com/api/investor/v1";

/// Library version sent in the `User-Agent` header.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default `User-Agent` header value.
pub const USER_AGENT: &str = concat!("Lending Club Rust ", env!("CARGO_PKG_VERSION"));

/// Content type used for every request body and response.
pub const CONTENT_TYPE: &str = "application/json";
