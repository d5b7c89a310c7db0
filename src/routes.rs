// src/routes.rs

use crate::{state::ChatState, websocket::websocket_handler};
use axum::{response::Html, routing::get, Router};
use tower_http::trace::TraceLayer;

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Builds the application router: the chat page at `/` and the websocket at `/ws`.
pub fn app(state: ChatState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/ws", get(websocket_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
