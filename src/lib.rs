use std::sync::Arc;

use axum::{Extension, Router};
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod auth;
pub mod chat;
pub mod clubs;
pub mod error;
pub mod feed;
pub mod models;
pub mod network;
pub mod profile;
pub mod search;
pub mod seed;
pub mod session;
pub mod store;

use session::EmailDomain;
use store::Store;

pub type SharedStore = Arc<Mutex<Store>>;

pub fn shared_store(store: Store) -> SharedStore {
    Arc::new(Mutex::new(store))
}

pub fn app(store: SharedStore, domain: EmailDomain) -> Router {
    Router::new()
        .nest("/api", api::app())
        .layer(Extension(store))
        .layer(Extension(domain))
        .layer(TraceLayer::new_for_http())
}
