use anyhow::Context;
use axum::{
    extract::{rejection::PathRejection, DefaultBodyLimit, Multipart, Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    auth::jwt::CurrentUser,
    data::dto::{FileDetails, FileListItem, UploadResponse},
    data::repo::DataFile,
    error::ApiError,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/upload", post(upload))
        .route("/files", get(list_files))
        .route("/file/:id", get(get_file))
        .layer(DefaultBodyLimit::max(20 * 1024 * 1024)) // 20MB
}

/// POST /data/upload (multipart, field `file`)
#[instrument(skip(state, user, mp), fields(user_id = user.0.id))]
pub async fn upload(
    State(state): State<AppState>,
    user: CurrentUser,
    mut mp: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Ok(Some(field)) = mp.next_field().await {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| anyhow::anyhow!(e).context("read multipart field"))?;
            upload = Some((filename, data.to_vec()));
            break;
        }
    }

    let Some((filename, data)) = upload else {
        return Err(ApiError::InvalidInput("No file part".into()));
    };
    if filename.is_empty() {
        return Err(ApiError::InvalidInput("No selected file".into()));
    }

    let content = String::from_utf8(data).context("file is not valid UTF-8")?;

    let file = DataFile::create(&state.db, user.0.id, &filename, &content).await?;

    info!(file_id = file.id, filename = %file.filename, "file uploaded");
    Ok(Json(UploadResponse {
        message: "File uploaded successfully".into(),
        file_id: file.id,
    }))
}

#[instrument(skip(state, user), fields(user_id = user.0.id))]
pub async fn list_files(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Vec<FileListItem>>, ApiError> {
    let files = DataFile::list_for_owner(&state.db, user.0.id).await?;
    let items = files
        .into_iter()
        .map(|f| FileListItem {
            id: f.id,
            filename: f.filename,
        })
        .collect();
    Ok(Json(items))
}

#[instrument(skip(state, user), fields(user_id = user.0.id))]
pub async fn get_file(
    State(state): State<AppState>,
    user: CurrentUser,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<FileDetails>, ApiError> {
    // A non-numeric id can't name a file, so it reads as absent.
    let Path(id) = id.map_err(|_| ApiError::NotFound("File not found".into()))?;

    let file = DataFile::find_owned(&state.db, user.0.id, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("File not found".into()))?;

    Ok(Json(FileDetails {
        filename: file.filename,
        content: file.content,
    }))
}
