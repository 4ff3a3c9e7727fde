use crate::{
    auth::LoggedIn,
    clubs::ClubView,
    error::AppResult,
    models::ClubId,
    SharedStore,
};
use axum::{extract::Path, routing::{get, post}, Extension, Json, Router};
use serde_json::Value;

async fn list(
    Extension(store): Extension<SharedStore>,
    LoggedIn(user): LoggedIn,
) -> AppResult<Json<Vec<Value>>> {
    let store = store.lock().await;
    let students = store.students();
    let clubs = store
        .clubs()
        .iter()
        .map(|club| serde_json::to_value(ClubView::new(club, students, &user)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(clubs))
}

async fn info(
    Extension(store): Extension<SharedStore>,
    LoggedIn(user): LoggedIn,
    Path(club_id): Path<String>,
) -> AppResult<Json<Value>> {
    let store = store.lock().await;
    let club = store.club(&ClubId::from(club_id))?;
    Ok(Json(serde_json::to_value(ClubView::new(club, store.students(), &user))?))
}

async fn join(
    Extension(store): Extension<SharedStore>,
    LoggedIn(user): LoggedIn,
    Path(club_id): Path<String>,
) -> AppResult<Json<Value>> {
    let club_id = ClubId::from(club_id);
    let mut store = store.lock().await;
    store.join_club(&club_id, &user)?;
    let club = store.club(&club_id)?;
    Ok(Json(serde_json::to_value(ClubView::new(club, store.students(), &user))?))
}

async fn leave(
    Extension(store): Extension<SharedStore>,
    LoggedIn(user): LoggedIn,
    Path(club_id): Path<String>,
) -> AppResult<Json<Value>> {
    let club_id = ClubId::from(club_id);
    let mut store = store.lock().await;
    store.leave_club(&club_id, &user)?;
    let club = store.club(&club_id)?;
    Ok(Json(serde_json::to_value(ClubView::new(club, store.students(), &user))?))
}

pub fn app() -> Router {
    Router::new()
        .route("/", get(list))
        .route("/:club_id", get(info))
        .route("/:club_id/join", post(join))
        .route("/:club_id/leave", post(leave))
}
