use crate::{
    auth::LoggedIn,
    chat,
    error::AppResult,
    models::{ChatConversation, ChatMessage, ConversationId},
    SharedStore,
};
use axum::{extract::Path, routing::get, Extension, Json, Router};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConversationsResponse {
    unread_count: u32,
    conversations: Vec<ChatConversation>,
}

#[derive(Deserialize)]
struct MessageRequest {
    content: String,
}

async fn conversations(
    Extension(store): Extension<SharedStore>,
    LoggedIn(_): LoggedIn,
) -> AppResult<Json<ConversationsResponse>> {
    let store = store.lock().await;
    Ok(Json(ConversationsResponse {
        unread_count: chat::total_unread(store.conversations()),
        conversations: store.conversations().to_vec(),
    }))
}

async fn messages(
    Extension(store): Extension<SharedStore>,
    LoggedIn(_): LoggedIn,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<ChatMessage>>> {
    let store = store.lock().await;
    Ok(Json(store.messages(&ConversationId::from(id))?.to_vec()))
}

async fn send(
    Extension(store): Extension<SharedStore>,
    LoggedIn(user): LoggedIn,
    Path(id): Path<String>,
    Json(req): Json<MessageRequest>,
) -> AppResult<Json<Vec<ChatMessage>>> {
    let id = ConversationId::from(id);
    let mut store = store.lock().await;
    store.send_message(&id, &user, &req.content)?;
    Ok(Json(store.messages(&id)?.to_vec()))
}

pub fn app() -> Router {
    Router::new()
        .route("/", get(conversations))
        .route("/:id/messages", get(messages).post(send))
}
