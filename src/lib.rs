//! GroupShare Files
//!
//! This crate implements the group file listing page of a file-sharing
//! service: a typed client for the file endpoints and a framework-agnostic
//! page controller that turns its state into a declarative view.
//!
//! # Features
//!
//! - **File Operations**: List, download, and delete the files of a group
//! - **Page Controller**: Mount/refresh lifecycle, declarative rendering,
//!   download and delete actions with per-action loading state
//! - **Explicit Credentials**: Every call takes a [`RequestContext`];
//!   the client holds no ambient token
//! - **Lifecycle Safety**: Stale list fetches are cancelled when a new
//!   refresh starts or the page unmounts
//!
//! # Example
//!
//! ```no_run
//! use groupshare_files::{FilesPage, GroupShareClient, RequestContext};
//! use groupshare_files::content::DownloadedFile;
//! use groupshare_files::errors::GroupShareResult;
//! use groupshare_files::page::{FileSaver, Navigator, RouteParams};
//! use std::sync::Arc;
//!
//! struct DiskSaver;
//! impl FileSaver for DiskSaver {
//!     fn save(&self, file: &DownloadedFile) -> GroupShareResult<()> {
//!         std::fs::write(&file.name, &file.bytes)
//!             .map_err(|e| groupshare_files::errors::GroupShareError::save(e.to_string()))
//!     }
//! }
//!
//! struct LogNavigator;
//! impl Navigator for LogNavigator {
//!     fn redirect(&self, path: &str) {
//!         println!("redirect -> {path}");
//!     }
//! }
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GroupShareClient::builder()
//!     .api_base_url("https://api.example.com")
//!     .file_base_url("https://files.example.com")
//!     .build()?;
//!
//! let page = FilesPage::new(Arc::new(client), Arc::new(DiskSaver), Arc::new(LogNavigator));
//! let ctx = RequestContext::bearer("session-token");
//!
//! page.refresh(&ctx, "group-1").await;
//! if let Some(view) = page.render(&RouteParams::group("group-1"), chrono::Utc::now()) {
//!     for row in view.rows {
//!         println!("{} ({})", row.display_name, row.size_label);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

// Core modules
pub mod auth;
pub mod client;
pub mod config;
pub mod content;
pub mod errors;
pub mod humanize;
pub mod page;
pub mod services;
pub mod transport;
pub mod types;

// Re-exports for convenience
pub use auth::{AuthToken, RequestContext};
pub use client::{GroupShareClient, GroupShareClientBuilder};
pub use config::{GroupShareConfig, GroupShareConfigBuilder};
pub use errors::{GroupShareError, GroupShareResult};
pub use page::{FilesPage, PageView};
pub use types::{DownloadResponse, FileListResponse, FileRecord};

/// Prelude module with commonly used types and traits.
///
/// ```no_run
/// use groupshare_files::prelude::*;
/// ```
pub mod prelude {
    // Client
    pub use crate::client::{GroupShareClient, GroupShareClientBuilder};

    // Configuration
    pub use crate::config::{GroupShareConfig, GroupShareConfigBuilder};

    // Authentication
    pub use crate::auth::{AuthToken, RequestContext};

    // Services
    pub use crate::services::FilesService;

    // Page
    pub use crate::page::{
        FileRow, FileSaver, FilesPage, Navigator, PageState, PageView, RouteParams,
    };

    // Content handling
    pub use crate::content::DownloadedFile;

    // Common types
    pub use crate::types::{DownloadResponse, FileListResponse, FileRecord};

    // Errors
    pub use crate::errors::{GroupShareError, GroupShareResult};
}
