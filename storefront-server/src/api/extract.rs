//! Request extractors with JSON error bodies

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use shared::error::{AppError, ErrorCode};

/// `axum::Json` whose rejection is an [`AppError`] (`InvalidRequest`)
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::with_message(
                ErrorCode::InvalidRequest,
                rejection.body_text(),
            )),
        }
    }
}
