//! Wire types for the group files endpoints.
//!
//! Field names mirror the JSON the server sends: snake_case except for
//! `isOwner`, which the listing endpoint emits in camelCase.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Metadata for one stored file, as returned by the listing endpoint.
///
/// Immutable from the page's perspective; a delete removes the whole record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FileRecord {
    /// Server-assigned file identifier.
    pub id: String,
    /// The filename under which the file was stored.
    pub original_filename: String,
    /// Size in bytes.
    pub file_size: u64,
    /// Upload time.
    pub file_time: DateTime<Utc>,
    /// Whether the current user may delete this file.
    #[serde(rename = "isOwner", default)]
    pub is_owner: bool,
}

/// Success envelope of the listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct FileListResponse {
    /// File records in server order.
    #[serde(default)]
    pub files: Vec<FileRecord>,
}

/// Success envelope of the download endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DownloadResponse {
    /// The stored filename.
    pub filename: String,
    /// Base64-encoded file content.
    pub content: String,
}

/// Failure envelope shared by all endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    /// The server-supplied failure message.
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn file_record_deserializes_wire_format() {
        let json = r#"{
            "id": "f-17",
            "original_filename": "backup.tar.gz",
            "file_size": 2048,
            "file_time": "2023-04-01T12:30:00Z",
            "isOwner": true
        }"#;

        let record: FileRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "f-17");
        assert_eq!(record.original_filename, "backup.tar.gz");
        assert_eq!(record.file_size, 2048);
        assert_eq!(
            record.file_time,
            Utc.with_ymd_and_hms(2023, 4, 1, 12, 30, 0).unwrap()
        );
        assert!(record.is_owner);
    }

    #[test]
    fn is_owner_defaults_to_false_when_absent() {
        let json = r#"{
            "id": "f-18",
            "original_filename": "notes.txt.gz",
            "file_size": 10,
            "file_time": "2023-04-01T12:30:00Z"
        }"#;

        let record: FileRecord = serde_json::from_str(json).unwrap();
        assert!(!record.is_owner);
    }

    #[test]
    fn file_list_defaults_to_empty() {
        let list: FileListResponse = serde_json::from_str("{}").unwrap();
        assert!(list.files.is_empty());
    }

    #[test]
    fn error_body_carries_message() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"error": "group not found"}"#).unwrap();
        assert_eq!(body.error, "group not found");
    }
}
