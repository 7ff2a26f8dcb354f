//! The group files page: state, rendering, and user actions.
//!
//! The controller is framework-agnostic. Each render pass produces a
//! declarative [`PageView`] for the embedding shell to draw, and the
//! browser-boundary collaborators — the save dialog and client-side
//! navigation — come in as traits. Credentials are threaded explicitly:
//! every action takes a [`RequestContext`] from the caller.

use crate::auth::RequestContext;
use crate::client::GroupShareClient;
use crate::content::{self, DownloadedFile};
use crate::errors::{GroupShareError, GroupShareResult};
use crate::humanize;
use crate::types::FileRecord;
use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Route the page redirects to when no group identifier is present.
pub const GROUP_LIST_PATH: &str = "/user/groups";

/// Heading shown above the file list.
pub const PAGE_HEADING: &str = "All Files In This Group";

/// Parameters read from the current URL by the embedding shell.
#[derive(Debug, Clone, Default)]
pub struct RouteParams {
    /// The active group identifier, when present in the route.
    pub group_id: Option<String>,
}

impl RouteParams {
    /// Route params for a specific group.
    pub fn group(group_id: impl Into<String>) -> Self {
        Self {
            group_id: Some(group_id.into()),
        }
    }
}

/// Save-to-disk collaborator (the browser save dialog in a web shell).
pub trait FileSaver: Send + Sync {
    /// Persists a named byte blob.
    fn save(&self, file: &DownloadedFile) -> GroupShareResult<()>;
}

/// Client-side navigation collaborator.
pub trait Navigator: Send + Sync {
    /// Replaces the current location with `path`.
    fn redirect(&self, path: &str);
}

/// Mutable page state.
///
/// `error` and stale `files` may coexist: the list, once loaded, stays
/// visible alongside the error panel.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    /// Whether a download or delete is in flight.
    pub loading: bool,
    /// File records in server order.
    pub files: Vec<FileRecord>,
    /// Last failure message; empty means no error panel.
    pub error: String,
}

/// One rendered file row.
#[derive(Debug, Clone, PartialEq)]
pub struct FileRow {
    /// Server-assigned file identifier.
    pub id: String,
    /// Filename with the compression suffix stripped.
    pub display_name: String,
    /// `"<n> bytes"`.
    pub size_label: String,
    /// `"Uploaded <age> ago"`.
    pub uploaded_label: String,
    /// The delete button renders only for records the user owns.
    pub can_delete: bool,
}

/// Declarative view of the page for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    /// Page heading.
    pub heading: &'static str,
    /// Failure message, rendered verbatim when present.
    pub error: Option<String>,
    /// Whether the loading indicator shows.
    pub loading: bool,
    /// One row per file record, in state order.
    pub rows: Vec<FileRow>,
}

/// Controller for the group files page.
pub struct FilesPage {
    client: Arc<GroupShareClient>,
    saver: Arc<dyn FileSaver>,
    navigator: Arc<dyn Navigator>,
    state: RwLock<PageState>,
    /// Cancelled on unmount; list fetches run under child tokens of this one.
    lifetime: CancellationToken,
    /// Token of the in-flight list fetch, cancelled by the next refresh.
    active_fetch: Mutex<Option<CancellationToken>>,
}

impl FilesPage {
    /// Creates the page controller with its collaborators.
    pub fn new(
        client: Arc<GroupShareClient>,
        saver: Arc<dyn FileSaver>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            client,
            saver,
            navigator,
            state: RwLock::new(PageState::default()),
            lifetime: CancellationToken::new(),
            active_fetch: Mutex::new(None),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> PageState {
        self.state.read().clone()
    }

    /// Cancels the page lifetime; any pending fetch discards its result.
    pub fn unmount(&self) {
        self.lifetime.cancel();
    }

    /// Mount/dependency-change effect: one list fetch per call.
    ///
    /// Success replaces `files` with the server's list, in server order.
    /// Failure surfaces the server message and leaves `files` untouched.
    /// `loading` is not toggled here. A fetch still in flight from an
    /// earlier call is cancelled first, so a stale response can never
    /// overwrite newer state.
    pub async fn refresh(&self, ctx: &RequestContext, group_id: &str) {
        let token = self.lifetime.child_token();
        if let Some(previous) = self.active_fetch.lock().replace(token.clone()) {
            previous.cancel();
        }

        let files = self.client.files();
        let request = files.list(ctx, group_id);

        tokio::select! {
            _ = token.cancelled() => {
                debug!(group_id, "list fetch cancelled");
            }
            result = request => {
                if token.is_cancelled() {
                    // A cancel that lands together with the response wins.
                    return;
                }
                match result {
                    Ok(response) => {
                        self.state.write().files = response.files;
                    }
                    Err(err) => {
                        warn!(group_id, error = %err, "list fetch failed");
                        self.state.write().error = err.to_string();
                    }
                }
            }
        }
    }

    /// Renders the page.
    ///
    /// The missing-identifier guard runs first, on every render: without a
    /// group id the shell is redirected to the group list and nothing is
    /// rendered.
    pub fn render(&self, route: &RouteParams, now: DateTime<Utc>) -> Option<PageView> {
        if route.group_id.as_deref().map_or(true, str::is_empty) {
            self.navigator.redirect(GROUP_LIST_PATH);
            return None;
        }

        let state = self.state.read();
        Some(PageView {
            heading: PAGE_HEADING,
            error: (!state.error.is_empty()).then(|| state.error.clone()),
            loading: state.loading,
            rows: state.files.iter().map(|r| Self::row(r, now)).collect(),
        })
    }

    /// Download action: fetch the file's base64 payload, decode it into
    /// memory, and hand the named blob to the save collaborator.
    pub async fn download(&self, ctx: &RequestContext, group_id: &str, record: &FileRecord) {
        self.state.write().loading = true;

        let response = match self.client.files().download(ctx, group_id, &record.id).await {
            Ok(response) => response,
            Err(err) => return self.fail(err),
        };

        let file = match content::prepare(&response) {
            Ok(file) => file,
            Err(err) => return self.fail(err),
        };

        self.state.write().loading = false;
        if let Err(err) = self.saver.save(&file) {
            warn!(file = %file.name, error = %err, "save failed");
            self.state.write().error = err.to_string();
        }
    }

    /// Delete action: on success the record is removed from the in-memory
    /// list directly, keeping the rest of the page (and scroll position)
    /// intact.
    pub async fn delete(&self, ctx: &RequestContext, group_id: &str, record: &FileRecord) {
        self.state.write().loading = true;

        match self.client.files().delete(ctx, group_id, &record.id).await {
            Ok(()) => {
                let mut state = self.state.write();
                state.loading = false;
                state.files.retain(|f| f.id != record.id);
            }
            Err(err) => self.fail(err),
        }
    }

    fn fail(&self, err: GroupShareError) {
        let mut state = self.state.write();
        state.loading = false;
        state.error = err.to_string();
    }

    fn row(record: &FileRecord, now: DateTime<Utc>) -> FileRow {
        FileRow {
            id: record.id.clone(),
            display_name: content::stripped_name(&record.original_filename),
            size_label: format!("{} bytes", record.file_size),
            uploaded_label: format!(
                "Uploaded {} ago",
                humanize::humanize(now - record.file_time)
            ),
            can_delete: record.is_owner,
        }
    }
}

impl Drop for FilesPage {
    fn drop(&mut self) {
        self.lifetime.cancel();
    }
}
