//! Backend selection from environment variables and runtime hints.
//!
//! Resolution is split in two: [`resolve`] is a pure function over an
//! explicit snapshot of the override variables, and [`EnvConfig::load`] is
//! the impure convenience that takes that snapshot from the process
//! environment. Resolution never fails; anything missing or malformed falls
//! through to a safe default.

use serde::Deserialize;
use strum::{Display, EnumString};
use tracing::debug;

/// Default backend URL when running against a local development stack.
pub const DEV_API_URL: &str = "http://localhost:8000";

/// Backend URL used by production deployments unless overridden.
pub const PROD_API_URL: &str = "https://userhub-api.onrender.com";

/// Deployment mode controlling default base URL selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Mode {
    /// Local development against a localhost backend.
    Development,
    /// Deployed instance talking to the hosted backend.
    Production,
}

/// Override variables as read from the process environment.
///
/// Every field is optional; absence means "use the computed default".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEnv {
    /// Explicit base URL override (`API_URL`).
    #[serde(default)]
    pub api_url: Option<String>,

    /// Explicit mode override (`APP_ENV`): `development` or `production`.
    #[serde(default)]
    pub app_env: Option<String>,

    /// Build-mode flag set by the deployment platform (`BUILD_PROFILE`).
    #[serde(default)]
    pub build_profile: Option<String>,
}

/// Hints about the running host that are not override variables.
#[derive(Debug, Clone, Default)]
pub struct RuntimeHints {
    /// Hostname the instance runs under, if known.
    pub hostname: Option<String>,
}

/// Resolved backend configuration.
///
/// Computed once per process start and passed by reference into anything
/// that needs it; never re-derived mid-session, so every request within a
/// session targets the same backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    /// Root origin all relative request paths are joined against.
    pub api_base_url: String,
    /// Deployment mode the instance resolved to.
    pub mode: Mode,
}

impl EnvConfig {
    /// Load configuration from the process environment, reading `.env` first.
    ///
    /// Cannot fail: an unreadable environment degrades to an empty override
    /// set and resolution falls through to development defaults.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        let raw: RawEnv = envy::from_env().unwrap_or_default();
        let hints = RuntimeHints {
            hostname: std::env::var("HOSTNAME").ok(),
        };
        resolve(&raw, &hints)
    }

    /// Check if running in development mode.
    pub fn is_development(&self) -> bool {
        self.mode == Mode::Development
    }

    /// Check if running in production mode.
    pub fn is_production(&self) -> bool {
        self.mode == Mode::Production
    }

    /// Base URL without its scheme, for status banners.
    pub fn display_host(&self) -> String {
        url::Url::parse(&self.api_base_url)
            .ok()
            .and_then(|parsed| {
                parsed.host_str().map(|host| match parsed.port() {
                    Some(port) => format!("{host}:{port}"),
                    None => host.to_string(),
                })
            })
            .unwrap_or_else(|| self.api_base_url.clone())
    }
}

/// Resolve the backend configuration from an explicit variable snapshot.
///
/// Pure: same inputs, same output, no environment reads. Precedence for the
/// base URL is override variable first, then the mode-dependent default.
pub fn resolve(raw: &RawEnv, hints: &RuntimeHints) -> EnvConfig {
    let mode = detect_mode(raw, hints);

    let api_base_url = match raw.api_url.as_deref() {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => match mode {
            Mode::Development => DEV_API_URL.to_string(),
            Mode::Production => PROD_API_URL.to_string(),
        },
    };

    debug!(%mode, api_base_url = %api_base_url, "resolved backend environment");

    EnvConfig { api_base_url, mode }
}

/// Select the deployment mode.
///
/// Precedence: explicit `APP_ENV` override if it parses, loopback hostname,
/// production build flag, then the development default.
fn detect_mode(raw: &RawEnv, hints: &RuntimeHints) -> Mode {
    if let Some(explicit) = raw.app_env.as_deref() {
        if let Ok(mode) = explicit.parse() {
            return mode;
        }
        // Malformed override falls through rather than erroring.
    }

    if let Some(hostname) = hints.hostname.as_deref() {
        if hostname == "localhost" || hostname == "127.0.0.1" {
            return Mode::Development;
        }
    }

    if let Some(profile) = raw.build_profile.as_deref() {
        if profile.eq_ignore_ascii_case("production") || profile.eq_ignore_ascii_case("release") {
            return Mode::Production;
        }
    }

    Mode::Development
}
