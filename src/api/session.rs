use crate::{
    auth::LoggedIn,
    chat,
    error::AppResult,
    session::{Session, Tab},
    SharedStore,
};
use axum::{
    routing::{get, put},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionResponse {
    #[serde(flatten)]
    session: Session,
    unread_count: u32,
}

#[derive(Deserialize)]
struct TabRequest {
    tab: Tab,
}

async fn info(Extension(store): Extension<SharedStore>) -> AppResult<Json<SessionResponse>> {
    let store = store.lock().await;
    Ok(Json(SessionResponse {
        session: store.session.clone(),
        unread_count: chat::total_unread(store.conversations()),
    }))
}

async fn switch_tab(
    Extension(store): Extension<SharedStore>,
    LoggedIn(_): LoggedIn,
    Json(req): Json<TabRequest>,
) -> AppResult<Json<SessionResponse>> {
    let mut store = store.lock().await;
    store.session.switch_tab(req.tab);
    Ok(Json(SessionResponse {
        session: store.session.clone(),
        unread_count: chat::total_unread(store.conversations()),
    }))
}

pub fn app() -> Router {
    Router::new()
        .route("/", get(info))
        .route("/tab", put(switch_tab))
}
