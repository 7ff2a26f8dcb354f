//! Configuration for the GroupShare client.

use crate::errors::{GroupShareError, GroupShareResult};
use std::time::Duration;
use url::Url;

/// Configuration for [`GroupShareClient`](crate::client::GroupShareClient).
///
/// Two base URLs mirror the deployment: the API server hosts the listing and
/// delete endpoints (`/api/file/...`), the file server hosts the download
/// endpoint (`/{group}/download/{file}`).
#[derive(Debug, Clone)]
pub struct GroupShareConfig {
    /// Base URL of the API server.
    pub api_base_url: Url,

    /// Base URL of the file-delivery server.
    pub file_base_url: Url,

    /// Per-request timeout.
    pub timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// User agent string.
    pub user_agent: String,
}

impl GroupShareConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> GroupShareConfigBuilder {
        GroupShareConfigBuilder::new()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> GroupShareResult<()> {
        for (name, url) in [
            ("API base URL", &self.api_base_url),
            ("file base URL", &self.file_base_url),
        ] {
            if url.cannot_be_a_base() {
                return Err(GroupShareError::configuration(format!(
                    "{name} cannot carry path segments: {url}"
                )));
            }
            if !matches!(url.scheme(), "http" | "https") {
                return Err(GroupShareError::configuration(format!(
                    "{name} must use http or https: {url}"
                )));
            }
        }
        Ok(())
    }
}

/// Builder for [`GroupShareConfig`].
#[derive(Debug, Default)]
pub struct GroupShareConfigBuilder {
    api_base_url: Option<String>,
    file_base_url: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl GroupShareConfigBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API server base URL (required).
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    /// Sets the file-delivery server base URL (required).
    pub fn file_base_url(mut self, url: impl Into<String>) -> Self {
        self.file_base_url = Some(url.into());
        self
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets the user agent string.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> GroupShareResult<GroupShareConfig> {
        let api_base_url = Self::parse_url("API base URL", self.api_base_url)?;
        let file_base_url = Self::parse_url("file base URL", self.file_base_url)?;

        let config = GroupShareConfig {
            api_base_url,
            file_base_url,
            timeout: self.timeout.unwrap_or(Duration::from_secs(30)),
            connect_timeout: self.connect_timeout.unwrap_or(Duration::from_secs(10)),
            user_agent: self
                .user_agent
                .unwrap_or_else(|| format!("groupshare-files/{}", env!("CARGO_PKG_VERSION"))),
        };

        config.validate()?;
        Ok(config)
    }

    fn parse_url(name: &str, url: Option<String>) -> GroupShareResult<Url> {
        let url = url
            .ok_or_else(|| GroupShareError::configuration(format!("{name} is required")))?;
        Url::parse(&url)
            .map_err(|e| GroupShareError::configuration(format!("invalid {name} `{url}`: {e}")))
    }
}
