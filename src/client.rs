//! Generic JSON-over-HTTP client for the backend API.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::EnvConfig;
use crate::error::{ApiError, Result};
use crate::graphql::GraphqlRequest;

/// JSON HTTP client bound to one backend base URL.
///
/// Holds no mutable state beyond the connection pool and cookie jar inside
/// `reqwest::Client`, so clones are cheap and share both. Each call is one
/// request: no retries, no timeouts, no deduplication.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// HTTP client with an enabled cookie store.
    http: reqwest::Client,
    /// Base URL all relative paths are joined against.
    base_url: String,
}

impl ApiClient {
    /// Create a client from resolved environment configuration.
    pub fn new(config: &EnvConfig) -> Self {
        Self::with_base_url(&config.api_base_url)
    }

    /// Create a client against an explicit base URL.
    pub fn with_base_url(base_url: &str) -> Self {
        // Cookies ride along on every request, matching the backend's
        // credentialed CORS setup.
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform a JSON request against a relative path.
    ///
    /// `Content-Type: application/json` is set by default; caller headers
    /// are merged on top and may replace it. A non-success status fails with
    /// [`ApiError::Http`] without reading the body; a success body that does
    /// not decode as `T` fails with [`ApiError::Decode`].
    #[instrument(skip(self, body, headers), fields(method = %method, path))]
    pub async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        headers: Option<HeaderMap>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self
            .http
            .request(method, &url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(body) = body {
            request = request.json(body);
        }

        if let Some(headers) = headers {
            request = request.headers(headers);
        }

        let response = request.send().await.map_err(ApiError::Network)?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), url = %url, "request failed");
            return Err(ApiError::Http {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(ApiError::Network)?;
        serde_json::from_slice(&bytes).map_err(ApiError::Decode)
    }

    /// GET request.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request::<T, Value>(Method::GET, path, None, None).await
    }

    /// POST request with an optional JSON body.
    pub async fn post<T, B>(&self, path: &str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, body, None).await
    }

    /// PUT request with an optional JSON body.
    pub async fn put<T, B>(&self, path: &str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, path, body, None).await
    }

    /// DELETE request.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request::<T, Value>(Method::DELETE, path, None, None)
            .await
    }

    /// POST a GraphQL query to `/graphql`.
    ///
    /// The `variables` key is omitted from the body when absent. `T` is the
    /// whole response body; pair with
    /// [`GraphqlResponse`](crate::graphql::GraphqlResponse) to split the
    /// `data`/`errors` halves.
    pub async fn graphql<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Option<Value>,
    ) -> Result<T> {
        let mut request = GraphqlRequest::new(query);
        if let Some(variables) = variables {
            request = request.with_variables(variables);
        }
        self.post("/graphql", Some(&request)).await
    }

    /// GET `/health`, untyped.
    pub async fn health_check(&self) -> Result<Value> {
        self.get("/health").await
    }

    /// GET `/cors-config`, untyped.
    pub async fn cors_config(&self) -> Result<Value> {
        self.get("/cors-config").await
    }
}
