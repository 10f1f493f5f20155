use crate::client::SynoError::{self, Configuration};
use crate::client::{DEFAULT_TIMEOUT_MS, SynoNas};
use anyhow::{Context, Result};
use reqwest::Url;
use std::{env, fmt};

/// Default DSM HTTP port
pub const DEFAULT_PORT: u16 = 5000;

/// Host, port and credentials of a single device
#[derive(Clone)]
pub struct NasConfig {
    pub host: String,
    pub port: u16,
    pub account: String,
    pub password: String,
    pub timeout_ms: u64,
}

impl fmt::Debug for NasConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NasConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("account", &self.account)
            .field("password", &"<redacted>")
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

impl NasConfig {
    /// Creates a new [`NasConfig`] with a builder pattern
    #[must_use]
    pub fn builder() -> NasConfigBuilder {
        NasConfigBuilder::default()
    }

    /// Reads the configuration from `SYNOLOGY_HOST`, `SYNOLOGY_PORT`,
    /// `SYNOLOGY_USERNAME`, `SYNOLOGY_PASSWORD` and `SYNOLOGY_TIMEOUT_MS`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Host, username or password variable is not set
    /// - Port or timeout is not a number
    /// - Any value fails validation
    pub fn from_env() -> Result<Self> {
        let mut builder = Self::builder()
            .host(env::var("SYNOLOGY_HOST").map_err(SynoError::from)?)
            .account(env::var("SYNOLOGY_USERNAME").map_err(SynoError::from)?)
            .password(env::var("SYNOLOGY_PASSWORD").map_err(SynoError::from)?);

        if let Ok(port) = env::var("SYNOLOGY_PORT") {
            let port = port
                .parse::<u16>()
                .map_err(|e| Configuration(format!("Invalid SYNOLOGY_PORT {port}: {e}")))?;
            builder = builder.port(port);
        }

        if let Ok(timeout) = env::var("SYNOLOGY_TIMEOUT_MS") {
            let timeout = timeout
                .parse::<u64>()
                .map_err(|e| Configuration(format!("Invalid SYNOLOGY_TIMEOUT_MS {timeout}: {e}")))?;
            builder = builder.timeout(timeout);
        }

        builder.build().context("Failed to read configuration from environment")
    }

    /// Creates a [`SynoNas`] client using the configured timeout
    #[must_use]
    pub fn client(&self) -> SynoNas {
        SynoNas::new(self.timeout_ms)
    }
}

/// Builder for [`NasConfig`]
#[derive(Default)]
pub struct NasConfigBuilder {
    host: Option<String>,
    port: Option<u16>,
    account: Option<String>,
    password: Option<String>,
    timeout: Option<u64>,
}

impl NasConfigBuilder {
    /// Sets the host name or IP address, without scheme
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Sets the DSM port
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Sets the account name
    #[must_use]
    pub fn account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    /// Sets the password
    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Sets the request timeout in milliseconds
    #[must_use]
    pub fn timeout(mut self, timeout_millis: u64) -> Self {
        self.timeout = Some(timeout_millis);
        self
    }

    /// Builds the [`NasConfig`]
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required fields (host, account, password) are not provided
    /// - Host is not a bare host name or address
    /// - Any field is empty
    pub fn build(self) -> Result<NasConfig> {
        let host = self
            .host
            .ok_or_else(|| Configuration("Host is required".into()))?;
        let account = self
            .account
            .ok_or_else(|| Configuration("Account is required".into()))?;
        let password = self
            .password
            .ok_or_else(|| Configuration("Password is required".into()))?;

        let port = self.port.unwrap_or(DEFAULT_PORT);
        validate_target(&host, port, &account, &password)?;

        Ok(NasConfig {
            host,
            port,
            account,
            password,
            timeout_ms: self.timeout.unwrap_or(DEFAULT_TIMEOUT_MS),
        })
    }
}

/// Checks the parameters that end up in the login URL
///
/// The host must survive the round trip through `http://{host}:{port}`
/// unchanged, which rules out schemes, paths, queries and user info.
pub(crate) fn validate_target(
    host: &str,
    port: u16,
    account: &str,
    password: &str,
) -> Result<(), SynoError> {
    if host.is_empty() {
        return Err(Configuration("Host cannot be empty".into()));
    }

    let bare = Url::parse(&format!("http://{host}:{port}")).is_ok_and(|url| {
        url.host_str()
            .is_some_and(|parsed| parsed.eq_ignore_ascii_case(host))
            && url.username().is_empty()
            && url.password().is_none()
            && url.path() == "/"
            && url.query().is_none()
            && url.fragment().is_none()
    });
    if !bare {
        return Err(Configuration(format!(
            "Host must be a bare host name or address, got: {host}"
        )));
    }

    if account.is_empty() {
        return Err(Configuration("Account cannot be empty".into()));
    }

    if password.is_empty() {
        return Err(Configuration("Password cannot be empty".into()));
    }

    Ok(())
}
