use axum::Router;

pub mod auth;
pub mod chat;
pub mod club;
pub mod feed;
pub mod network;
pub mod profile;
pub mod search;
pub mod session;

pub fn app() -> Router {
    Router::new()
        .nest("/auth", auth::app())
        .nest("/session", session::app())
        .nest("/feed", feed::app())
        .nest("/search", search::app())
        .nest("/network", network::app())
        .nest("/chat", chat::app())
        .nest("/clubs", club::app())
        .nest("/profile", profile::app())
}
