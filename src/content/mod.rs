//! Decoding and naming rules for downloaded files.
//!
//! The download endpoint returns the whole file as a base64 string; it is
//! decoded into memory in one piece — there is no streaming or partial
//! content path.

use crate::errors::{GroupShareError, GroupShareResult};
use crate::types::DownloadResponse;
use mime::Mime;
use once_cell::sync::Lazy;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

const TAR_GZ: &str = ".tar.gz";
const GZ: &str = ".gz";

static APPLICATION_X_TAR: Lazy<Mime> =
    Lazy::new(|| "application/x-tar".parse().expect("static MIME literal"));

/// MIME type for a stored filename: tarballs are `application/x-tar`,
/// everything else is an opaque octet stream.
pub fn mime_for(stored_name: &str) -> Mime {
    if stored_name.contains(TAR_GZ) {
        APPLICATION_X_TAR.clone()
    } else {
        mime::APPLICATION_OCTET_STREAM
    }
}

/// Strips the compression suffix from a stored filename, for both row
/// display and the save name: the first `.tar.gz` is removed wholly when
/// present, otherwise the first `.gz`. Names without either are returned
/// unchanged.
pub fn stripped_name(stored_name: &str) -> String {
    if stored_name.contains(TAR_GZ) {
        stored_name.replacen(TAR_GZ, "", 1)
    } else {
        stored_name.replacen(GZ, "", 1)
    }
}

/// Decodes the base64 payload of a download response.
pub fn decode_content(content: &str) -> GroupShareResult<Vec<u8>> {
    BASE64
        .decode(content)
        .map_err(|e| GroupShareError::content(format!("invalid base64 payload: {e}")))
}

/// A fully materialized download, ready for the save collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadedFile {
    /// Save name, with the compression suffix stripped.
    pub name: String,
    /// Resolved MIME type.
    pub mime: Mime,
    /// Decoded file content.
    pub bytes: Vec<u8>,
}

/// Turns a raw download response into a saveable file.
pub fn prepare(response: &DownloadResponse) -> GroupShareResult<DownloadedFile> {
    let bytes = decode_content(&response.content)?;
    Ok(DownloadedFile {
        name: stripped_name(&response.filename),
        mime: mime_for(&response.filename),
        bytes,
    })
}
