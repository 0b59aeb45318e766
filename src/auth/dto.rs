use serde::{Deserialize, Serialize};

/// Request body for user registration. Fields default to empty so an absent
/// field goes through the handler's own validation instead of a serde
/// rejection.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Generic confirmation message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Response for the session check endpoint.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub username: String,
}
