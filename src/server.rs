//! Demo host server - serves the split-pane page (chat, editor, live
//! preview) and the two JSON endpoints behind it.
//!
//! The server is stateless: the page owns the editor source and the chat
//! transcript. Every editor input posts the full source to `/api/preview`,
//! which rebuilds the document and returns a fresh embed; the page swaps
//! the previous frame out wholesale. The server never observes what happens
//! inside a frame.

use crate::chat::{self, Message};
use crate::frame::PreviewFrame;
use anyhow::Result;
use axum::{
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

const INDEX_HTML: &str = include_str!("../assets/index.html");

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub source: String,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub embed: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub content: String,
}

pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/preview", post(preview))
        .route("/api/chat", post(send_message))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Bind and serve until the process is stopped.
pub async fn serve(addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{addr}");
    axum::serve(listener, router()).await?;
    Ok(())
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// One disposable frame per request; the previous one is simply dropped by
/// the page when the new embed replaces it.
async fn preview(Json(request): Json<PreviewRequest>) -> Json<PreviewResponse> {
    let frame = PreviewFrame::new(&request.source);
    Json(PreviewResponse {
        embed: frame.embed_html(),
    })
}

async fn send_message(
    Json(request): Json<ChatRequest>,
) -> Result<Json<Message>, (StatusCode, String)> {
    if request.content.trim().is_empty() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            "Please enter a message".to_string(),
        ));
    }

    // Simulate API delay
    tokio::time::sleep(chat::REPLY_DELAY).await;

    Ok(Json(chat::assistant_reply()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::SANDBOX_PERMISSIONS;

    #[tokio::test]
    async fn test_preview_returns_sandboxed_embed() {
        let response = preview(Json(PreviewRequest {
            source: "const x = 1;".to_string(),
        }))
        .await;
        let expected = format!("sandbox=\"{SANDBOX_PERMISSIONS}\"");
        assert!(response.0.embed.contains(&expected));
        assert!(response.0.embed.starts_with("<iframe srcdoc=\""));
    }

    #[tokio::test]
    async fn test_preview_matches_direct_build() {
        let response = preview(Json(PreviewRequest {
            source: "const x = 1;".to_string(),
        }))
        .await;
        assert_eq!(
            response.0.embed,
            PreviewFrame::new("const x = 1;").embed_html()
        );
    }

    #[tokio::test]
    async fn test_chat_rejects_blank_message() {
        let result = send_message(Json(ChatRequest {
            content: "   ".to_string(),
        }))
        .await;
        let (status, body) = result.err().unwrap();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body, "Please enter a message");
    }

    #[tokio::test]
    async fn test_chat_returns_canned_reply() {
        let result = send_message(Json(ChatRequest {
            content: "build me a counter".to_string(),
        }))
        .await;
        let message = result.unwrap().0;
        assert_eq!(message.content, chat::ASSISTANT_REPLY);
    }
}
