//! Files service: the three operations the group files page consumes.
//!
//! | Operation | Method | Path |
//! |---|---|---|
//! | list | GET | `/api/file/{groupId}/files` |
//! | download | GET | `/{groupId}/download/{fileId}` (file server) |
//! | delete | DELETE | `/api/file/{groupId}/files/{fileId}` |

use crate::auth::RequestContext;
use crate::client::{Endpoint, RequestExecutor};
use crate::errors::{GroupShareError, GroupShareResult};
use crate::transport::HttpMethod;
use crate::types::{DownloadResponse, FileListResponse};
use std::sync::Arc;
use tracing::instrument;

/// Service for group file operations.
#[derive(Clone)]
pub struct FilesService {
    executor: Arc<RequestExecutor>,
}

impl FilesService {
    /// Creates a new files service.
    pub(crate) fn new(executor: Arc<RequestExecutor>) -> Self {
        Self { executor }
    }

    /// Lists the files uploaded to a group.
    ///
    /// The returned order is the server's; it is never re-sorted.
    #[instrument(skip(self, ctx))]
    pub async fn list(
        &self,
        ctx: &RequestContext,
        group_id: &str,
    ) -> GroupShareResult<FileListResponse> {
        require("group_id", group_id)?;
        self.executor
            .execute_json(
                ctx,
                HttpMethod::Get,
                Endpoint::Api,
                &["api", "file", group_id, "files"],
            )
            .await
    }

    /// Fetches the base64-encoded payload and stored filename for one file.
    #[instrument(skip(self, ctx))]
    pub async fn download(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        file_id: &str,
    ) -> GroupShareResult<DownloadResponse> {
        require("group_id", group_id)?;
        require("file_id", file_id)?;
        self.executor
            .execute_json(
                ctx,
                HttpMethod::Get,
                Endpoint::File,
                &[group_id, "download", file_id],
            )
            .await
    }

    /// Deletes a file. The success body is ignored.
    #[instrument(skip(self, ctx))]
    pub async fn delete(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        file_id: &str,
    ) -> GroupShareResult<()> {
        require("group_id", group_id)?;
        require("file_id", file_id)?;
        let _ = self
            .executor
            .execute(
                ctx,
                HttpMethod::Delete,
                Endpoint::Api,
                &["api", "file", group_id, "files", file_id],
            )
            .await?;
        Ok(())
    }
}

fn require(name: &str, value: &str) -> GroupShareResult<()> {
    if value.is_empty() {
        return Err(GroupShareError::request(format!("{name} is required")));
    }
    Ok(())
}
