pub mod api;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod content;
pub mod error;
pub mod fallback;
pub mod gemini;
pub mod language;
pub mod normalize;
pub mod prompt;
pub mod tutor;

use std::sync::Arc;

use axum::Router;

pub use chat::{ChatSession, Message, MessageBody, Role};
pub use config::AppConfig;
pub use content::{AiResponse, ContentBlock};
pub use error::{FailureKind, GenerationError, ModelError};
pub use fallback::default_response;
pub use gemini::{GeminiClient, GeminiConfig, GenerativeModel};
pub use language::Language;
pub use normalize::{parse_blocks, strip_fences};
pub use prompt::PromptBuilder;
pub use tutor::{Tutor, TutorConfig};

#[derive(Clone)]
pub struct AppState {
    pub tutor: Tutor,
    pub default_language: Language,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        let client = GeminiClient::new(config.gemini());
        Self {
            tutor: Tutor::new(Arc::new(client), config.tutor()),
            default_language: config.default_language,
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    api::router(state)
}

pub async fn run_server(app: Router, port: u16) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "listening");
    axum::serve(listener, app).await
}
