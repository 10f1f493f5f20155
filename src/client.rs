use crate::client::SynoError::*;
use crate::config::{NasConfig, validate_target};
use crate::entities::{
    AuthData, SharedFolderSet, StorageInventory, SynologyResponse, SystemUtilization,
    UNKNOWN_ERROR_CODE,
};
use anyhow::{Context, Result};
use log::debug;
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use std::{env, fmt};
use thiserror::Error;

const AUTH_PATH: &str = "/webapi/auth.cgi";
const API_PATH: &str = "/webapi/entry.cgi";

/// Default request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 3000;

/// Custom error types for the [`SynoNas`] client
#[derive(Error, Debug)]
pub enum SynoError {
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Synology API error: code={code}, message={message}")]
    Api { code: i32, message: String },

    #[error("Network request error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP request failed with status: {status} ({reason})")]
    Http { status: u16, reason: String },

    #[error("URL parsing error: {0}")]
    UrlParse(String),

    #[error("Environment variable error: {0}")]
    Environment(#[from] env::VarError),

    #[error("JSON serialization/deserialization error: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl SynoError {
    /// Builds an [`SynoError::Api`] for a code returned by any `entry.cgi` API
    #[must_use]
    pub fn api(code: i32) -> Self {
        Api {
            code,
            message: describe_common_code(code).into(),
        }
    }

    /// Builds an [`SynoError::Api`] for a code returned by `SYNO.API.Auth`
    #[must_use]
    pub fn auth_api(code: i32) -> Self {
        Api {
            code,
            message: describe_auth_code(code).into(),
        }
    }

    /// Whether the device rejected the session id, in which case a new
    /// [`Connection`] has to be obtained
    #[must_use]
    pub fn is_session_error(&self) -> bool {
        matches!(self, Api { code: 105 | 106 | 107 | 119, .. })
    }
}

fn describe_common_code(code: i32) -> &'static str {
    match code {
        100 => "Unknown error",
        101 => "No parameter of API, method or version",
        102 => "The requested API does not exist",
        103 => "The requested method does not exist",
        104 => "The requested version does not support the functionality",
        105 => "The logged in session does not have permission",
        106 => "Session timeout",
        107 => "Session interrupted by duplicate login",
        114 => "Lost parameters for this API",
        116 => "Not allowed to perform for a demo site",
        109..=111 | 117 | 118 => "The network connection is unstable or the system is busy",
        119 => "Invalid session",
        150 => "Request source IP does not match the login IP",
        _ => "Unrecognized error code",
    }
}

fn describe_auth_code(code: i32) -> &'static str {
    match code {
        400 => "No such account or incorrect password",
        401 => "Disabled account",
        402 => "Denied permission",
        403 => "2-factor authentication code required",
        404 => "Failed to authenticate 2-factor authentication code",
        406 => "Enforce to authenticate with 2-factor authentication code",
        407 => "Blocked IP source",
        408 => "Expired password cannot change",
        409 => "Expired password",
        410 => "Password must be changed",
        _ => describe_common_code(code),
    }
}

/// Authenticated session on a single device
///
/// Obtained from [`SynoNas::connect`] and passed to every query. Connections
/// are plain values, any number of them may be used side by side.
#[derive(Clone, PartialEq, Eq)]
pub struct Connection {
    origin: String,
    token: String,
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("origin", &self.origin)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl Connection {
    /// Rebuilds a connection from an origin (`http://host:port`) and a session
    /// id obtained earlier
    ///
    /// # Errors
    ///
    /// Returns an error if the origin is not a valid URL or the token is empty
    pub fn from_parts(origin: &str, token: impl Into<String>) -> Result<Self> {
        let origin = origin.trim_end_matches('/');
        Url::parse(origin).map_err(|e| UrlParse(format!("{origin}: {e}")))?;

        let token = token.into();
        if token.is_empty() {
            return Err(Auth("Session ID cannot be empty".into()).into());
        }

        Ok(Self {
            origin: origin.to_string(),
            token,
        })
    }

    /// Scheme, host and port of the device, e.g. `http://nas.local:5000`
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Session id sent as `_sid` with every query
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Synology DSM management API client
#[derive(Clone, Debug)]
pub struct SynoNas {
    client: Client,
}

impl Default for SynoNas {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT_MS)
    }
}

impl SynoNas {
    /// Creates a new `SynoNas` client with the given request timeout
    #[must_use]
    pub fn new(timeout_ms: u64) -> Self {
        Self {
            client: Self::create_client(timeout_ms),
        }
    }

    /// Creates a configured HTTP client
    fn create_client(timeout: u64) -> Client {
        Client::builder()
            .timeout(Duration::from_millis(timeout))
            .build()
            .unwrap_or_default()
    }

    /// Logs in to the device at `http://{host}:{port}` and returns the session
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Host, account or password is empty, or host is not a bare host name or address
    /// - Network request fails
    /// - The device rejects the credentials
    /// - Response cannot be parsed or carries no session id
    pub async fn connect(
        &self,
        host: &str,
        port: u16,
        account: &str,
        password: &str,
    ) -> Result<Connection> {
        validate_target(host, port, account, password)?;

        let origin = format!("http://{host}:{port}");
        let params = [
            ("api", "SYNO.API.Auth"),
            ("version", "6"),
            ("method", "login"),
            ("account", account),
            ("passwd", password),
            ("session", "Core"),
            ("format", "cookie"),
        ];
        let url = build_url(&origin, AUTH_PATH, &params)?;

        let body = self
            .perform_request(Method::GET, url)
            .await
            .context("Failed to authorize")?;
        let data: AuthData =
            decode_response(&body, SynoError::auth_api).context("Failed to authorize")?;

        if data.sid.is_empty() {
            return Err(Auth("No session ID received".into()).into());
        }

        debug!(
            "Logged in to {origin}, portal port: {}",
            data.is_portal_port
        );

        Ok(Connection {
            origin,
            token: data.sid,
        })
    }

    /// Logs in using the host, port and credentials of a [`NasConfig`]
    ///
    /// # Errors
    ///
    /// See [`Self::connect`]
    pub async fn connect_with(&self, config: &NasConfig) -> Result<Connection> {
        self.connect(&config.host, config.port, &config.account, &config.password)
            .await
    }

    /// Gets the current CPU, memory, network, disk and volume utilization
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Network request fails
    /// - API returns an error response
    /// - Response cannot be parsed
    /// - Session is invalid or expired
    pub async fn fetch_system_utilization(&self, conn: &Connection) -> Result<SystemUtilization> {
        self.query(conn, "SYNO.Core.System.Utilization", "get", &[])
            .await
            .context("Failed to get system utilization")
    }

    /// Lists all shared folders including their quota usage
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Network request fails
    /// - API returns an error response
    /// - Response cannot be parsed
    /// - Session is invalid or expired
    pub async fn fetch_shares(&self, conn: &Connection) -> Result<SharedFolderSet> {
        let params = [("shareType", "all"), ("additional", r#"["share_quota"]"#)];

        self.query(conn, "SYNO.Core.Share", "list", &params)
            .await
            .context("Failed to get shared folders")
    }

    /// Gets disks, volumes, iSCSI LUNs and targets of the device
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Network request fails
    /// - API returns an error response
    /// - Response cannot be parsed
    /// - Session is invalid or expired
    pub async fn fetch_storage_inventory(&self, conn: &Connection) -> Result<StorageInventory> {
        self.query(conn, "SYNO.Storage.CGI.Storage", "load_info", &[])
            .await
            .context("Failed to get storage information")
    }

    /// Makes a GET request against `entry.cgi` and decodes its payload
    async fn query<R>(
        &self,
        conn: &Connection,
        api: &str,
        method: &str,
        extra: &[(&str, &str)],
    ) -> Result<R, SynoError>
    where
        R: DeserializeOwned,
    {
        let mut params = vec![("api", api), ("version", "1"), ("method", method)];
        params.extend_from_slice(extra);
        params.push(("_sid", conn.token()));

        debug!(
            "Making API request to: {}{} for {api} with {} parameters",
            conn.origin(),
            API_PATH,
            params.len()
        );

        let url = build_url(conn.origin(), API_PATH, &params)?;
        let body = self.perform_request(Method::GET, url).await?;

        decode_response(&body, SynoError::api)
    }

    /// Sends a single request and reads the whole response body
    async fn perform_request(&self, method: Method, url: Url) -> Result<Vec<u8>, SynoError> {
        let response = self.client.request(method, url).send().await?;

        let status = response.status();
        debug!("API request status: {status}");

        if !status.is_success() {
            return Err(Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").into(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

/// Joins origin and path and appends the percent-encoded query parameters
fn build_url(origin: &str, path: &str, params: &[(&str, &str)]) -> Result<Url, SynoError> {
    Url::parse_with_params(&format!("{origin}{path}"), params)
        .map_err(|e| UrlParse(format!("{origin}{path}: {e}")))
}

/// Unwraps the `{success, data, error}` envelope
fn decode_response<R>(body: &[u8], describe: fn(i32) -> SynoError) -> Result<R, SynoError>
where
    R: DeserializeOwned,
{
    let response: SynologyResponse =
        serde_json::from_slice(body).map_err(|e| InvalidResponse(e.to_string()))?;

    if response.success {
        let data = response
            .data
            .ok_or_else(|| InvalidResponse("No data received".into()))?;
        serde_json::from_value(data).map_err(|e| InvalidResponse(e.to_string()))
    } else {
        Err(describe(
            response.error.map_or(UNKNOWN_ERROR_CODE, |error| error.code),
        ))
    }
}
