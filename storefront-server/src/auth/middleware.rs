//! Admin authentication middleware

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use shared::error::AppError;

use crate::auth::{JwtError, JwtService};
use crate::core::ServerState;
use crate::security_log;

/// Authenticated admin, inserted into request extensions by [`require_admin`]
#[derive(Debug, Clone)]
pub struct AdminIdentity {
    pub username: String,
}

/// Require a valid `Authorization: Bearer <token>` header
///
/// Applied as a route layer to the admin routes only. CORS preflight
/// requests pass through.
///
/// | failure | code |
/// |---------|------|
/// | missing header | NotAuthenticated |
/// | malformed header / bad token | TokenInvalid |
/// | expired token | TokenExpired |
pub async fn require_admin(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match header {
        Some(header) => JwtService::extract_from_header(header)
            .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
        None => {
            security_log!(WARN, "auth_missing", uri = %req.uri());
            return Err(AppError::not_authenticated());
        }
    };

    match state.jwt.validate_token(token) {
        Ok(claims) => {
            req.extensions_mut().insert(AdminIdentity {
                username: claims.sub,
            });
            Ok(next.run(req).await)
        }
        Err(e) => {
            security_log!(WARN, "auth_failed", error = %e, uri = %req.uri());
            match e {
                JwtError::ExpiredToken => Err(AppError::token_expired()),
                _ => Err(AppError::invalid_token("Invalid token")),
            }
        }
    }
}
