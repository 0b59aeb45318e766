use serde::Serialize;

/// List view of an uploaded file; content is omitted.
#[derive(Debug, Serialize)]
pub struct FileListItem {
    pub id: i64,
    pub filename: String,
}

/// Full view of a single file.
#[derive(Debug, Serialize)]
pub struct FileDetails {
    pub filename: String,
    pub content: String,
}

/// Response returned after a successful upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub file_id: i64,
}
