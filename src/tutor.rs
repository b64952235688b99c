use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, warn};

use crate::content::{AiResponse, ContentBlock, EXPLANATION_QUESTIONS, FOLLOW_UP_QUESTIONS};
use crate::error::GenerationError;
use crate::fallback::default_response;
use crate::gemini::GenerativeModel;
use crate::language::Language;
use crate::normalize::parse_blocks;
use crate::prompt::PromptBuilder;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, Clone)]
pub struct TutorConfig {
    model: String,
    timeout: Duration,
}

impl TutorConfig {
    pub fn new(model: impl Into<String>, timeout_ms: u64) -> Self {
        Self {
            model: model.into(),
            timeout: Duration::from_millis(timeout_ms),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[derive(Clone)]
pub struct Tutor {
    model: Arc<dyn GenerativeModel>,
    config: TutorConfig,
}

impl Tutor {
    pub fn new(model: Arc<dyn GenerativeModel>, config: TutorConfig) -> Self {
        Self { model, config }
    }

    #[instrument(skip(self, cancel))]
    pub async fn try_explain(
        &self,
        technology: &str,
        topic: &str,
        language: Language,
        cancel: &CancellationToken,
    ) -> Result<AiResponse, GenerationError> {
        let prompt = PromptBuilder::new(technology, topic, language).explanation();
        let blocks = self.complete(&prompt, cancel).await?;
        Ok(AiResponse::new(blocks, &EXPLANATION_QUESTIONS))
    }

    #[instrument(skip(self, cancel))]
    pub async fn try_follow_up(
        &self,
        question: &str,
        technology: &str,
        topic: &str,
        language: Language,
        cancel: &CancellationToken,
    ) -> Result<AiResponse, GenerationError> {
        let prompt = PromptBuilder::new(technology, topic, language).follow_up(question);
        let blocks = self.complete(&prompt, cancel).await?;
        Ok(AiResponse::new(blocks, &FOLLOW_UP_QUESTIONS))
    }

    pub async fn explain(
        &self,
        technology: &str,
        topic: &str,
        language: Language,
        cancel: &CancellationToken,
    ) -> AiResponse {
        self.try_explain(technology, topic, language, cancel)
            .await
            .unwrap_or_else(|err| fall_back("explanation", err, language))
    }

    pub async fn follow_up(
        &self,
        question: &str,
        technology: &str,
        topic: &str,
        language: Language,
        cancel: &CancellationToken,
    ) -> AiResponse {
        self.try_follow_up(question, technology, topic, language, cancel)
            .await
            .unwrap_or_else(|err| fall_back("follow-up", err, language))
    }

    async fn complete(
        &self,
        prompt: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<ContentBlock>, GenerationError> {
        debug!(model = self.config.model.as_str(), prompt, "sending prompt");
        let call = timeout(
            self.config.timeout,
            self.model.generate_content(&self.config.model, prompt),
        );

        let text = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(GenerationError::Cancelled),
            outcome = call => outcome.map_err(|_| GenerationError::TimedOut(self.config.timeout))??,
        };

        let text = text.ok_or(GenerationError::EmptyResponse)?;
        debug!(raw = text.as_str(), "raw model output");
        parse_blocks(&text)
    }
}

fn fall_back(path: &str, err: GenerationError, language: Language) -> AiResponse {
    warn!(path, kind = ?err.kind(), error = %err, "generation failed, using fallback response");
    default_response(language)
}
