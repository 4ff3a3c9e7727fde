use crate::{
    auth::LoggedIn,
    error::{AppError, AppResult},
    models::{Student, StudentId},
    profile::{self, ProfileUpdate},
    SharedStore,
};
use axum::{
    extract::Path,
    http::StatusCode,
    routing::{delete, get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProfileResponse {
    #[serde(flatten)]
    student: Student,
    is_own_profile: bool,
}

impl From<&Student> for ProfileResponse {
    fn from(student: &Student) -> Self {
        Self {
            is_own_profile: student.id.is_current(),
            student: student.clone(),
        }
    }
}

#[derive(Deserialize)]
struct SkillRequest {
    skill: String,
}

async fn displayed(
    Extension(store): Extension<SharedStore>,
    LoggedIn(_): LoggedIn,
) -> AppResult<Json<ProfileResponse>> {
    let store = store.lock().await;
    let student = profile::displayed_student(store.students(), store.session.viewing_profile())
        .ok_or_else(|| AppError::from(StatusCode::NOT_FOUND, "the current user is missing"))?;
    Ok(Json(student.into()))
}

async fn view(
    Extension(store): Extension<SharedStore>,
    LoggedIn(_): LoggedIn,
    Path(student_id): Path<String>,
) -> AppResult<Json<ProfileResponse>> {
    let student_id = StudentId::from(student_id);
    let mut store = store.lock().await;
    store.student(&student_id)?;
    store.session.view_profile(student_id.clone());
    Ok(Json(store.student(&student_id)?.into()))
}

async fn edit(
    Extension(store): Extension<SharedStore>,
    LoggedIn(user): LoggedIn,
    Json(changes): Json<ProfileUpdate>,
) -> AppResult<Json<ProfileResponse>> {
    let mut store = store.lock().await;
    store.edit_profile(&user, changes)?;
    Ok(Json(store.student(&user)?.into()))
}

async fn add_skill(
    Extension(store): Extension<SharedStore>,
    LoggedIn(user): LoggedIn,
    Json(req): Json<SkillRequest>,
) -> AppResult<Json<Vec<String>>> {
    let mut store = store.lock().await;
    store.add_skill(&user, &req.skill)?;
    Ok(Json(store.student(&user)?.skills.clone()))
}

async fn remove_skill(
    Extension(store): Extension<SharedStore>,
    LoggedIn(user): LoggedIn,
    Path(skill): Path<String>,
) -> AppResult<Json<Vec<String>>> {
    let mut store = store.lock().await;
    store.remove_skill(&user, &skill)?;
    Ok(Json(store.student(&user)?.skills.clone()))
}

pub fn app() -> Router {
    Router::new()
        .route("/", get(displayed).patch(edit))
        .route("/skills", post(add_skill))
        .route("/skills/:skill", delete(remove_skill))
        .route("/view/:student_id", get(view))
}
