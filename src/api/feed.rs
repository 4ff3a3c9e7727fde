use crate::{
    auth::LoggedIn,
    error::AppResult,
    feed::{self, FeedFilter, OpportunityView},
    models::{Comment, OpportunityId},
    SharedStore,
};
use axum::{
    extract::{Path, Query},
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Deserialize)]
struct FeedQuery {
    category: Option<String>,
}

#[derive(Deserialize)]
struct CommentRequest {
    content: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ToggleResponse {
    active: bool,
    count: usize,
}

async fn list(
    Extension(store): Extension<SharedStore>,
    LoggedIn(user): LoggedIn,
    Query(query): Query<FeedQuery>,
) -> AppResult<Json<Vec<Value>>> {
    let filter = match query.category {
        Some(category) => category.parse::<FeedFilter>()?,
        None => FeedFilter::All,
    };

    let store = store.lock().await;
    let views = feed::filter_feed(store.opportunities(), filter)
        .into_iter()
        .map(|o| serde_json::to_value(OpportunityView::new(o, &user)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(views))
}

async fn like(
    Extension(store): Extension<SharedStore>,
    LoggedIn(user): LoggedIn,
    Path(id): Path<String>,
) -> AppResult<Json<ToggleResponse>> {
    let id = OpportunityId::from(id);
    let mut store = store.lock().await;
    let active = store.toggle_like(&id, &user)?;
    Ok(Json(ToggleResponse {
        active,
        count: store.opportunity(&id)?.likes.len(),
    }))
}

async fn save(
    Extension(store): Extension<SharedStore>,
    LoggedIn(user): LoggedIn,
    Path(id): Path<String>,
) -> AppResult<Json<ToggleResponse>> {
    let id = OpportunityId::from(id);
    let mut store = store.lock().await;
    let active = store.toggle_save(&id, &user)?;
    Ok(Json(ToggleResponse {
        active,
        count: store.opportunity(&id)?.saved.len(),
    }))
}

async fn comment(
    Extension(store): Extension<SharedStore>,
    LoggedIn(user): LoggedIn,
    Path(id): Path<String>,
    Json(req): Json<CommentRequest>,
) -> AppResult<Json<Vec<Comment>>> {
    let id = OpportunityId::from(id);
    let mut store = store.lock().await;
    store.add_comment(&id, &user, &req.content)?;
    Ok(Json(store.opportunity(&id)?.comments.clone()))
}

pub fn app() -> Router {
    Router::new()
        .route("/", get(list))
        .route("/:id/like", post(like))
        .route("/:id/save", post(save))
        .route("/:id/comments", post(comment))
}
