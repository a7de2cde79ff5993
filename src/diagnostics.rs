//! Typed connectivity probes against the backend's diagnostic endpoints.
//!
//! [`probe`] mirrors what an operator checks after a deployment: can we
//! reach the backend at all, and is its CORS configuration in place. The
//! two checks run and fail independently.

use serde::Deserialize;
use tracing::warn;

use crate::client::ApiClient;
use crate::error::Result;

/// Payload of the backend root endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerInfo {
    /// Greeting message.
    pub message: String,
    /// Path of the GraphQL playground, when advertised.
    #[serde(default)]
    pub graphql_playground: Option<String>,
    /// Path of the health endpoint, when advertised.
    #[serde(default)]
    pub health_check: Option<String>,
}

/// Payload of `/health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    /// Reported status, `"healthy"` when all is well.
    pub status: String,
    /// Deployment environment the backend resolved to.
    #[serde(default)]
    pub environment: Option<String>,
    /// Whether the backend reached its database.
    #[serde(default)]
    pub database_connected: Option<bool>,
    /// Backend version string.
    #[serde(default)]
    pub version: Option<String>,
}

impl HealthStatus {
    /// Whether the backend reported itself healthy.
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Payload of `/cors-config`.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// Origins the backend accepts credentialed requests from.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    /// Deployment environment the backend resolved to.
    #[serde(default)]
    pub environment: Option<String>,
    /// Frontend URL the backend is configured for.
    #[serde(default)]
    pub frontend_url: Option<String>,
}

impl CorsConfig {
    /// Whether the given origin is in the backend's allow list.
    pub fn allows(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|allowed| allowed == origin)
    }
}

/// Outcome of one probe: the decoded payload, or the failure rendered as
/// text.
pub type ProbeOutcome<T> = std::result::Result<T, String>;

/// Combined connectivity report.
#[derive(Debug, Clone)]
pub struct ApiStatusReport {
    /// Outcome of the `/health` probe.
    pub health: ProbeOutcome<HealthStatus>,
    /// Outcome of the `/cors-config` probe.
    pub cors: ProbeOutcome<CorsConfig>,
}

impl ApiStatusReport {
    /// Whether both probes succeeded.
    pub fn all_ok(&self) -> bool {
        self.health.is_ok() && self.cors.is_ok()
    }
}

/// GET `/`, typed.
pub async fn server_info(client: &ApiClient) -> Result<ServerInfo> {
    client.get("/").await
}

/// GET `/health`, typed.
pub async fn check_health(client: &ApiClient) -> Result<HealthStatus> {
    client.get("/health").await
}

/// GET `/cors-config`, typed.
pub async fn check_cors(client: &ApiClient) -> Result<CorsConfig> {
    client.get("/cors-config").await
}

/// Run the health and CORS probes, capturing each failure in its half of
/// the report. Never fails itself.
pub async fn probe(client: &ApiClient) -> ApiStatusReport {
    let health = check_health(client).await.map_err(|e| {
        warn!(error = %e, "health probe failed");
        e.to_string()
    });

    let cors = check_cors(client).await.map_err(|e| {
        warn!(error = %e, "cors probe failed");
        e.to_string()
    });

    ApiStatusReport { health, cors }
}
