use crate::{
    auth::LoggedIn,
    error::AppResult,
    models::Student,
    network,
    search::{self, SearchQuery, YEAR_OPTIONS},
    SharedStore,
};
use axum::{extract::Query, routing::get, Extension, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchHit {
    #[serde(flatten)]
    student: Student,
    is_connected: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    count: usize,
    students: Vec<SearchHit>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FiltersResponse {
    branches: Vec<String>,
    years: Vec<&'static str>,
}

async fn find(
    Extension(store): Extension<SharedStore>,
    LoggedIn(user): LoggedIn,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<SearchResponse>> {
    let store = store.lock().await;
    let students = store.students();
    let hits: Vec<SearchHit> = search::search(students, &query)
        .into_iter()
        .map(|student| SearchHit {
            is_connected: network::is_connected(students, &user, &student.id),
            student: student.clone(),
        })
        .collect();

    Ok(Json(SearchResponse {
        count: hits.len(),
        students: hits,
    }))
}

async fn filters(
    Extension(store): Extension<SharedStore>,
    LoggedIn(_): LoggedIn,
) -> AppResult<Json<FiltersResponse>> {
    let store = store.lock().await;
    Ok(Json(FiltersResponse {
        branches: search::branch_options(store.students())
            .into_iter()
            .map(String::from)
            .collect(),
        years: YEAR_OPTIONS.to_vec(),
    }))
}

pub fn app() -> Router {
    Router::new()
        .route("/", get(find))
        .route("/filters", get(filters))
}
