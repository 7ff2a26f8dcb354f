//! GroupShare API client.

use crate::config::GroupShareConfig;
use crate::errors::{GroupShareError, GroupShareResult};
use crate::services::FilesService;
use crate::transport::{HttpTransport, ReqwestTransport};
use std::sync::Arc;

mod executor;
pub use executor::{Endpoint, RequestExecutor};

/// Client for the GroupShare endpoints consumed by the group files page.
///
/// The client holds no credentials: every call takes a
/// [`RequestContext`](crate::auth::RequestContext) supplied by the caller.
pub struct GroupShareClient {
    config: GroupShareConfig,
    executor: Arc<RequestExecutor>,
}

impl GroupShareClient {
    /// Creates a client with a reqwest transport.
    pub fn new(config: GroupShareConfig) -> GroupShareResult<Self> {
        let transport = ReqwestTransport::with_defaults(config.connect_timeout)
            .map_err(|e| GroupShareError::configuration(format!("failed to create transport: {e}")))?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Creates a client over a custom transport.
    pub fn with_transport(
        config: GroupShareConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> GroupShareResult<Self> {
        config.validate()?;
        let executor = Arc::new(RequestExecutor::new(config.clone(), transport));
        Ok(Self { config, executor })
    }

    /// Creates a new client builder.
    pub fn builder() -> GroupShareClientBuilder {
        GroupShareClientBuilder::new()
    }

    /// Access the files service.
    pub fn files(&self) -> FilesService {
        FilesService::new(self.executor.clone())
    }

    /// Gets the configuration.
    pub fn config(&self) -> &GroupShareConfig {
        &self.config
    }
}

/// Builder for [`GroupShareClient`].
#[derive(Default)]
pub struct GroupShareClientBuilder {
    config_builder: crate::config::GroupShareConfigBuilder,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl GroupShareClientBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API server base URL.
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.api_base_url(url);
        self
    }

    /// Sets the file-delivery server base URL.
    pub fn file_base_url(mut self, url: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.file_base_url(url);
        self
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.config_builder = self.config_builder.timeout(timeout);
        self
    }

    /// Sets the user agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.user_agent(ua);
        self
    }

    /// Sets a custom transport (defaults to reqwest).
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Builds the client.
    pub fn build(self) -> GroupShareResult<GroupShareClient> {
        let config = self.config_builder.build()?;
        match self.transport {
            Some(transport) => GroupShareClient::with_transport(config, transport),
            None => GroupShareClient::new(config),
        }
    }
}
