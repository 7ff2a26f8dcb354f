//! Request executor: URL building, credential headers, error mapping.

use crate::auth::RequestContext;
use crate::config::GroupShareConfig;
use crate::errors::{GroupShareError, GroupShareResult};
use crate::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use crate::types::ApiErrorBody;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

/// Which configured base URL a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// The API server (`/api/file/...` listing and delete).
    Api,
    /// The file-delivery server (`/{group}/download/{file}`).
    File,
}

/// Executes HTTP requests: attaches the caller's credential, sends through
/// the transport, and maps non-success responses to domain errors carrying
/// the server-supplied message.
pub struct RequestExecutor {
    config: GroupShareConfig,
    transport: Arc<dyn HttpTransport>,
}

impl RequestExecutor {
    /// Creates a new request executor.
    pub(crate) fn new(config: GroupShareConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    /// Executes a request and deserializes the JSON response.
    pub async fn execute_json<T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        method: HttpMethod,
        endpoint: Endpoint,
        segments: &[&str],
    ) -> GroupShareResult<T> {
        let body = self.execute(ctx, method, endpoint, segments).await?;
        serde_json::from_slice(&body)
            .map_err(|e| GroupShareError::response(format!("failed to deserialize response: {e}")))
    }

    /// Executes a request and returns the raw success body.
    pub async fn execute(
        &self,
        ctx: &RequestContext,
        method: HttpMethod,
        endpoint: Endpoint,
        segments: &[&str],
    ) -> GroupShareResult<Bytes> {
        let url = self.build_url(endpoint, segments)?;
        debug!(%url, ?method, "sending request");

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&ctx.authorization_header())
                .map_err(|e| GroupShareError::request(format!("invalid auth header: {e}")))?,
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&self.config.user_agent)
                .map_err(|e| GroupShareError::request(format!("invalid user agent: {e}")))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let response = self
            .transport
            .send(HttpRequest {
                method,
                url,
                headers,
                timeout: Some(self.config.timeout),
            })
            .await?;

        if !response.status.is_success() {
            return Err(self.error_from_response(&response));
        }

        Ok(response.body)
    }

    /// Builds a full URL from percent-encoded path segments.
    pub fn build_url(&self, endpoint: Endpoint, segments: &[&str]) -> GroupShareResult<Url> {
        let mut url = match endpoint {
            Endpoint::Api => self.config.api_base_url.clone(),
            Endpoint::File => self.config.file_base_url.clone(),
        };

        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| GroupShareError::configuration("base URL cannot carry path segments"))?;
            path.pop_if_empty();
            path.extend(segments);
        }

        Ok(url)
    }

    /// Maps a non-success response to a domain error.
    ///
    /// Every endpoint uses the same failure envelope `{ "error": "..." }`;
    /// the message is surfaced verbatim. Bodies that are not the envelope
    /// fall back to the HTTP status line.
    fn error_from_response(&self, response: &HttpResponse) -> GroupShareError {
        warn!(status = %response.status, "request failed");
        match serde_json::from_slice::<ApiErrorBody>(&response.body) {
            Ok(body) => GroupShareError::api(body.error),
            Err(_) => GroupShareError::api(format!("HTTP {}", response.status)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::ReqwestTransport;
    use reqwest::StatusCode;

    fn executor() -> RequestExecutor {
        let config = GroupShareConfig::builder()
            .api_base_url("https://api.groupshare.test")
            .file_base_url("https://files.groupshare.test/base/")
            .build()
            .unwrap();
        let transport =
            Arc::new(ReqwestTransport::with_defaults(std::time::Duration::from_secs(1)).unwrap());
        RequestExecutor::new(config, transport)
    }

    #[test]
    fn builds_api_urls_from_segments() {
        let url = executor()
            .build_url(Endpoint::Api, &["api", "file", "g-1", "files"])
            .unwrap();
        assert_eq!(url.as_str(), "https://api.groupshare.test/api/file/g-1/files");
    }

    #[test]
    fn keeps_base_path_and_encodes_segments() {
        let url = executor()
            .build_url(Endpoint::File, &["g 1", "download", "f/2"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://files.groupshare.test/base/g%201/download/f%2F2"
        );
    }

    #[test]
    fn error_body_message_is_surfaced_verbatim() {
        let response = HttpResponse::new(
            StatusCode::FORBIDDEN,
            Bytes::from(r#"{"error":"not your file"}"#),
        );
        let error = executor().error_from_response(&response);
        assert_eq!(error.to_string(), "not your file");
    }

    #[test]
    fn malformed_error_body_falls_back_to_status() {
        let response = HttpResponse::new(StatusCode::BAD_GATEWAY, Bytes::from("<html>"));
        let error = executor().error_from_response(&response);
        assert_eq!(error.to_string(), "HTTP 502 Bad Gateway");
    }
}
