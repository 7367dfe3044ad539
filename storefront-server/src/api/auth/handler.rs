//! Login handler

use axum::{Json, extract::State};
use shared::error::{AppError, AppResult};
use shared::models::{LoginRequest, LoginResponse};

use crate::api::extract::ApiJson;
use crate::core::ServerState;
use crate::security_log;
use crate::utils::validation::MAX_PASSWORD_LEN;

/// POST /api/auth/login - verify admin credentials, issue a bearer token
pub async fn login(
    State(state): State<ServerState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let username = req.username.trim();
    if username.is_empty() {
        return Err(AppError::required("username"));
    }
    if req.password.is_empty() {
        return Err(AppError::required("password"));
    }

    let accepted = req.password.len() <= MAX_PASSWORD_LEN
        && state.verifier.verify(username, &req.password).await;
    if !accepted {
        security_log!(WARN, "login_failed", username = %username);
        return Err(AppError::invalid_credentials());
    }

    let token = state
        .jwt
        .generate_token(username)
        .map_err(|e| AppError::internal(e.to_string()))?;
    security_log!(INFO, "login_success", username = %username);

    Ok(Json(LoginResponse {
        token,
        token_type: "Bearer".into(),
        expires_in: state.jwt.ttl_seconds(),
    }))
}
