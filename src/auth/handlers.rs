use axum::{
    extract::{FromRef, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, MessageResponse, RegisterRequest, SessionResponse, TokenResponse},
        jwt::{CurrentUser, JwtKeys},
        password::{hash_password, verify_password},
        repo::User,
    },
    error::ApiError,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/session", get(session))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    if payload.username.is_empty() || payload.password.is_empty() {
        return Err(ApiError::InvalidInput(
            "Username and password required".into(),
        ));
    }

    if User::find_by_username(&state.db, &payload.username)
        .await?
        .is_some()
    {
        warn!(username = %payload.username, "username already exists");
        return Err(ApiError::InvalidInput("Username already exists".into()));
    }

    let hash = hash_password(&payload.password)?;

    let user = match User::create(&state.db, &payload.username, &hash).await {
        Ok(u) => u,
        // Concurrent registration can slip past the pre-check; the UNIQUE
        // constraint is the authority.
        Err(e) if e
            .as_database_error()
            .is_some_and(|d| d.is_unique_violation()) =>
        {
            warn!(username = %payload.username, "username already exists");
            return Err(ApiError::InvalidInput("Username already exists".into()));
        }
        Err(e) => return Err(e.into()),
    };

    info!(user_id = user.id, username = %user.username, "user registered");
    Ok(Json(MessageResponse {
        message: "User registered successfully".into(),
    }))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    // Unknown username and wrong password collapse into the same response so
    // usernames cannot be enumerated.
    let user = User::find_by_username(&state.db, &payload.username)
        .await?
        .ok_or_else(|| {
            warn!(username = %payload.username, "login unknown username");
            ApiError::Unauthorized("Invalid username or password".into())
        })?;

    if !verify_password(&payload.password, &user.password_hash)? {
        warn!(user_id = user.id, "login invalid password");
        return Err(ApiError::Unauthorized("Invalid username or password".into()));
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.id)?;

    info!(user_id = user.id, username = %user.username, "user logged in");
    Ok(Json(TokenResponse { token }))
}

/// Tokens are stateless, so logout performs no server-side state change; the
/// client discards its token.
#[instrument]
pub async fn logout() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Logged out".into(),
    })
}

#[instrument(skip(user), fields(user_id = user.id))]
pub async fn session(CurrentUser(user): CurrentUser) -> Json<SessionResponse> {
    Json(SessionResponse {
        username: user.username,
    })
}
