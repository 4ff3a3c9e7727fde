use crate::{feed::UnknownCategory, session::SessionError, store::StoreError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::borrow::Cow;

pub enum AppError {
    InternalServerError(anyhow::Error),
    ResponseStatusError(StatusCode, Cow<'static, str>),
}

pub type AppResult<T> = Result<T, AppError>;

// domain errors carry their own status; anything else is a bug
fn status_of(err: &anyhow::Error) -> Option<StatusCode> {
    if err.is::<StoreError>() {
        return Some(StatusCode::NOT_FOUND);
    }
    if let Some(err) = err.downcast_ref::<SessionError>() {
        return Some(match err {
            SessionError::NotCollegeEmail(_) => StatusCode::BAD_REQUEST,
            SessionError::LoggedOut => StatusCode::UNAUTHORIZED,
        });
    }
    if err.is::<UnknownCategory>() {
        return Some(StatusCode::BAD_REQUEST);
    }
    None
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct AppErrorResponse {
            status: u16,
            message: Cow<'static, str>,
        }

        match self {
            AppError::InternalServerError(err) => match status_of(&err) {
                Some(code) => AppError::from(code, err.to_string()).into_response(),
                None => {
                    tracing::error!(error = ?err, "request failed");
                    AppError::from(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
                        .into_response()
                }
            },
            AppError::ResponseStatusError(code, s) => (
                code,
                Json(AppErrorResponse {
                    status: code.as_u16(),
                    message: s,
                }),
            )
                .into_response(),
        }
    }
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    fn from(e: E) -> AppError {
        AppError::InternalServerError(e.into())
    }
}

impl AppError {
    pub fn from(code: StatusCode, s: impl Into<Cow<'static, str>>) -> AppError {
        AppError::ResponseStatusError(code, s.into())
    }
}
