//! Placeholder endpoints for features that are not implemented yet. They sit
//! behind the auth gate so the routes reserve their final shape.

use axum::{routing::post, Json, Router};
use tracing::instrument;

use crate::auth::dto::MessageResponse;
use crate::auth::jwt::CurrentUser;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/collaboration/share", post(share_dashboard))
        .route("/analytics/linear_regression", post(linear_regression))
}

#[instrument(skip(user), fields(user_id = user.0.id))]
pub async fn share_dashboard(user: CurrentUser) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Collaboration endpoint - to be implemented".into(),
    })
}

#[instrument(skip(user), fields(user_id = user.0.id))]
pub async fn linear_regression(user: CurrentUser) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Analytics endpoint - to be implemented".into(),
    })
}
