use crate::{error::AppResult, models::StudentId, session::EmailDomain, SharedStore};
use axum::{routing::post, Extension, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Deserialize)]
struct LoginRequest {
    pub email: String,
    #[allow(dead_code)]
    #[serde(default)]
    pub password: String,
}

// only the email is checked; the rest of the form is accepted as-is
#[derive(Deserialize)]
#[allow(dead_code)]
struct SignupRequest {
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub branch: String,
    #[serde(default)]
    pub year: Option<u8>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoggedInResponse {
    pub user_id: StudentId,
}

async fn enter(store: &SharedStore, domain: &EmailDomain, email: &str) -> AppResult<Json<LoggedInResponse>> {
    let mut store = store.lock().await;
    match store.session.log_in(domain, email) {
        Ok(user_id) => {
            info!(%user_id, "logged in");
            Ok(Json(LoggedInResponse { user_id }))
        }
        Err(err) => {
            warn!(email, "rejected non-college email");
            Err(err.into())
        }
    }
}

async fn login(
    Extension(store): Extension<SharedStore>,
    Extension(domain): Extension<EmailDomain>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoggedInResponse>> {
    enter(&store, &domain, &req.email).await
}

async fn signup(
    Extension(store): Extension<SharedStore>,
    Extension(domain): Extension<EmailDomain>,
    Json(req): Json<SignupRequest>,
) -> AppResult<Json<LoggedInResponse>> {
    enter(&store, &domain, &req.email).await
}

pub fn app() -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/signup", post(signup))
}
