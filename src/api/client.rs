//! Lending Club REST API client implementation.
//!
//! The [`LendingClubClient`] owns the transport and credentials; resource
//! accessors ([`AccountsResource`], [`LoansResource`]) borrow it to issue
//! requests.
//!
//! # Example
//!
//! ```rust,ignore
//! use lendingclub::api::LendingClubClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = LendingClubClient::new("my-api-token")?;
//!
//!     let cash = client.accounts(1234).available_cash().await?;
//!     println!("Available cash: {}", cash.available_cash);
//!
//!     let listing = client.loans().listed().await?;
//!     println!("{} loans listed", listing.loans.len());
//!
//!     Ok(())
//! }
//! ```

use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::accounts::AccountsResource;
use crate::api::error::{ApiError, ApiResult, ErrorBody};
use crate::api::loans::LoansResource;
use crate::network;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builder for configuring [`LendingClubClient`].
#[derive(Clone)]
pub struct LendingClubClientBuilder {
    auth_token: String,
    base_url: String,
    user_agent: String,
    timeout: Duration,
    http_client: Option<Client>,
}

impl LendingClubClientBuilder {
    /// Create a new builder for the given API token.
    pub fn new(auth_token: impl Into<String>) -> Self {
        Self {
            auth_token: auth_token.into(),
            base_url: network::DEFAULT_API_URL.to_string(),
            user_agent: network::USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            http_client: None,
        }
    }

    /// Override the API base URL. A trailing `/` is dropped.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the `User-Agent` header value.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Use an existing `reqwest::Client` instead of building one.
    ///
    /// The injected client keeps its own timeout and pool settings.
    pub fn http_client(mut self, http_client: Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Set the request timeout of the default client.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Build the client.
    pub fn build(self) -> ApiResult<LendingClubClient> {
        let http_client = match self.http_client {
            Some(client) => client,
            None => Client::builder()
                .timeout(self.timeout)
                .pool_max_idle_per_host(10)
                .build()
                .map_err(ApiError::Construction)?,
        };

        Ok(LendingClubClient {
            http_client,
            base_url: self.base_url,
            user_agent: self.user_agent,
            auth_token: self.auth_token,
        })
    }
}

impl fmt::Debug for LendingClubClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LendingClubClientBuilder")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .field("http_client", &self.http_client.is_some())
            .finish_non_exhaustive()
    }
}

/// Lending Club investor API client.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone)]
pub struct LendingClubClient {
    http_client: Client,
    base_url: String,
    user_agent: String,
    auth_token: String,
}

impl LendingClubClient {
    /// Create a client against the production API with default settings
    /// (30s timeout, connection pooling).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(auth_token: impl Into<String>) -> ApiResult<Self> {
        LendingClubClientBuilder::new(auth_token).build()
    }

    /// Create a new client builder for custom configuration.
    pub fn builder(auth_token: impl Into<String>) -> LendingClubClientBuilder {
        LendingClubClientBuilder::new(auth_token)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Account operations for one investor.
    pub fn accounts(&self, investor_id: u64) -> AccountsResource<'_> {
        AccountsResource::new(self, investor_id)
    }

    /// Loan listing operations.
    pub fn loans(&self) -> LoansResource<'_> {
        LoansResource::new(self)
    }

    // =========================================================================
    // Request / response plumbing
    // =========================================================================

    /// Assemble a request carrying the client's standard headers.
    ///
    /// The token goes into `Authorization` verbatim, without a scheme prefix.
    /// No I/O happens here.
    pub fn new_request(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> ApiResult<reqwest::Request> {
        let user_agent = HeaderValue::from_str(&self.user_agent)
            .map_err(|_| ApiError::InvalidHeader("User-Agent"))?;
        let mut authorization = HeaderValue::from_str(&self.auth_token)
            .map_err(|_| ApiError::InvalidHeader("Authorization"))?;
        authorization.set_sensitive(true);

        let mut builder = self
            .http_client
            .request(method, url)
            .header(USER_AGENT, user_agent)
            .header(AUTHORIZATION, authorization)
            .header(CONTENT_TYPE, network::CONTENT_TYPE)
            .header(ACCEPT, network::CONTENT_TYPE);

        if let Some(body) = body {
            builder = builder.body(body);
        }

        builder.build().map_err(ApiError::Construction)
    }

    /// Turn a response into the decoded payload or a typed error.
    ///
    /// 400, 403 and 404 bodies are drained and handed back inside the error;
    /// a 401 body is never read.
    pub async fn process_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> ApiResult<T> {
        let status = response.status();
        tracing::debug!(status = %status, url = %response.url(), "Received response");

        match status {
            StatusCode::OK => {
                let bytes = response.bytes().await.map_err(ApiError::Transport)?;
                serde_json::from_slice(&bytes).map_err(ApiError::Decode)
            }
            StatusCode::BAD_REQUEST | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND => {
                let text = response.text().await.map_err(ApiError::Transport)?;
                tracing::warn!(status = %status, body = %text, "Request rejected by API");
                Err(Self::map_soft_failure(ErrorBody::new(status, text)))
            }
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
            StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!(status = %status, "API server error");
                Err(ApiError::ServerError(status.to_string()))
            }
            _ => {
                tracing::error!(status = %status, "Unexpected API status");
                Err(ApiError::UnexpectedStatus(status.to_string()))
            }
        }
    }

    fn map_soft_failure(body: ErrorBody) -> ApiError {
        match body.status {
            StatusCode::BAD_REQUEST => ApiError::BadRequest(body),
            StatusCode::FORBIDDEN => ApiError::Forbidden(body),
            _ => ApiError::NotFound(body),
        }
    }

    /// Build, send and process one request.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> ApiResult<T> {
        let request = self.new_request(method, url, body)?;
        tracing::debug!(method = %request.method(), url = %request.url(), "Sending request");

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(ApiError::Transport)?;

        Self::process_response(response).await
    }

    /// Execute a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        self.execute(Method::GET, url, None).await
    }

    /// Execute a POST request with a JSON body.
    pub(crate) async fn post<T, B>(&self, url: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let payload = serde_json::to_vec(body).map_err(ApiError::Serialize)?;
        self.execute(Method::POST, url, Some(payload)).await
    }
}

impl fmt::Debug for LendingClubClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LendingClubClient")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header<'a>(request: &'a reqwest::Request, name: &str) -> &'a str {
        request.headers()[name].to_str().unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = LendingClubClient::new("Token").unwrap();
        assert_eq!(client.base_url(), network::DEFAULT_API_URL);
        assert_eq!(client.user_agent(), network::USER_AGENT);
    }

    #[test]
    fn test_client_builder() {
        let client = LendingClubClient::builder("Token")
            .base_url("http://127.0.0.1:8080/api/investor/v1/")
            .user_agent("custom-agent/1.0")
            .timeout_secs(60)
            .build()
            .unwrap();

        // Base URL should have trailing slash removed
        assert_eq!(client.base_url(), "http://127.0.0.1:8080/api/investor/v1");
        assert_eq!(client.user_agent(), "custom-agent/1.0");
    }

    #[test]
    fn test_client_with_injected_transport() {
        let http = Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        let client = LendingClubClient::builder("Token")
            .http_client(http)
            .build()
            .unwrap();
        assert_eq!(client.base_url(), network::DEFAULT_API_URL);
    }

    #[test]
    fn test_debug_hides_token() {
        let client = LendingClubClient::new("super-secret").unwrap();
        assert!(!format!("{:?}", client).contains("super-secret"));
        let builder = LendingClubClient::builder("super-secret");
        assert!(!format!("{:?}", builder).contains("super-secret"));
    }

    #[test]
    fn test_new_request_sets_standard_headers() {
        let client = LendingClubClient::new("Token").unwrap();
        let url = format!("{}/accounts/1234/funds/add", client.base_url());
        let request = client
            .new_request(Method::POST, &url, Some(br#"{"amount":"100"}"#.to_vec()))
            .unwrap();

        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.url().as_str(), url);
        assert_eq!(header(&request, "authorization"), "Token");
        assert_eq!(header(&request, "user-agent"), network::USER_AGENT);
        assert_eq!(header(&request, "content-type"), "application/json");
        assert_eq!(header(&request, "accept"), "application/json");
        assert_eq!(
            request.body().and_then(|b| b.as_bytes()),
            Some(&br#"{"amount":"100"}"#[..])
        );
    }

    #[test]
    fn test_new_request_without_body() {
        let client = LendingClubClient::new("Token").unwrap();
        let request = client
            .new_request(Method::GET, "http://localhost/accounts/1/summary", None)
            .unwrap();
        assert_eq!(request.method(), Method::GET);
        assert!(request.body().is_none());
    }

    #[test]
    fn test_new_request_rejects_malformed_url() {
        let client = LendingClubClient::new("Token").unwrap();
        let err = client
            .new_request(Method::GET, "not a url", None)
            .unwrap_err();
        assert!(matches!(err, ApiError::Construction(_)));
    }

    #[test]
    fn test_new_request_rejects_invalid_token() {
        let client = LendingClubClient::new("bad\ntoken").unwrap();
        let err = client
            .new_request(Method::GET, "http://localhost/loans/listing", None)
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidHeader("Authorization")));
    }

    #[test]
    fn test_accessor_endpoints() {
        let client = LendingClubClient::builder("Token")
            .base_url("http://localhost:9000/api/investor/v1")
            .build()
            .unwrap();
        assert_eq!(
            client.accounts(1234).endpoint(),
            "http://localhost:9000/api/investor/v1/accounts/1234"
        );
        assert_eq!(
            client.loans().endpoint(),
            "http://localhost:9000/api/investor/v1/loans"
        );
    }
}
