use crate::{
    auth::LoggedIn,
    error::AppResult,
    models::{Student, StudentId},
    network,
    session::Tab,
    SharedStore,
};
use axum::{extract::Path, routing::{get, post}, Extension, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NetworkResponse {
    connections: Vec<Student>,
    pending_requests: Vec<Student>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NetworkActionResponse {
    changed: bool,
    message: &'static str,
}

async fn overview(
    Extension(store): Extension<SharedStore>,
    LoggedIn(user): LoggedIn,
) -> AppResult<Json<NetworkResponse>> {
    let store = store.lock().await;
    let students = store.students();
    Ok(Json(NetworkResponse {
        connections: network::connections_of(students, &user).into_iter().cloned().collect(),
        pending_requests: network::pending_requests_of(students, &user)
            .into_iter()
            .cloned()
            .collect(),
    }))
}

async fn request(
    Extension(store): Extension<SharedStore>,
    LoggedIn(user): LoggedIn,
    Path(target): Path<String>,
) -> AppResult<Json<NetworkActionResponse>> {
    let changed = store
        .lock()
        .await
        .send_connection_request(&user, &StudentId::from(target))?;
    Ok(Json(NetworkActionResponse {
        changed,
        message: if changed {
            "Connection request sent!"
        } else {
            "No request was sent"
        },
    }))
}

async fn accept(
    Extension(store): Extension<SharedStore>,
    LoggedIn(user): LoggedIn,
    Path(requester): Path<String>,
) -> AppResult<Json<NetworkActionResponse>> {
    let changed = store
        .lock()
        .await
        .accept_connection_request(&user, &StudentId::from(requester))?;
    Ok(Json(NetworkActionResponse {
        changed,
        message: if changed {
            "Connection request accepted"
        } else {
            "No pending request"
        },
    }))
}

async fn reject(
    Extension(store): Extension<SharedStore>,
    LoggedIn(user): LoggedIn,
    Path(requester): Path<String>,
) -> AppResult<Json<NetworkActionResponse>> {
    let changed = store
        .lock()
        .await
        .reject_connection_request(&user, &StudentId::from(requester))?;
    Ok(Json(NetworkActionResponse {
        changed,
        message: if changed {
            "Connection request declined"
        } else {
            "No pending request"
        },
    }))
}

// Messaging someone only opens the chat tab; threads are fixed.
async fn message(
    Extension(store): Extension<SharedStore>,
    LoggedIn(_): LoggedIn,
    Path(student): Path<String>,
) -> AppResult<Json<Tab>> {
    let mut store = store.lock().await;
    store.student(&StudentId::from(student))?;
    store.session.switch_tab(Tab::Chat);
    Ok(Json(store.session.active_tab()))
}

pub fn app() -> Router {
    Router::new()
        .route("/", get(overview))
        .route("/:id/request", post(request))
        .route("/:id/accept", post(accept))
        .route("/:id/reject", post(reject))
        .route("/:id/message", post(message))
}
