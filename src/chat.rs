use tokio_util::sync::CancellationToken;
use tracing::debug;
use uuid::Uuid;

use crate::catalog;
use crate::content::{AiResponse, ContentBlock};
use crate::language::Language;
use crate::tutor::Tutor;

const MORE_DETAILS_SUFFIX: &str = " (Please provide more details)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageBody {
    Question(String),
    Answer(Vec<ContentBlock>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: Uuid,
    pub role: Role,
    pub body: MessageBody,
}

impl Message {
    fn question(text: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::User,
            body: MessageBody::Question(text.to_string()),
        }
    }

    fn answer(blocks: Vec<ContentBlock>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::Assistant,
            body: MessageBody::Answer(blocks),
        }
    }
}

pub struct ChatSession {
    tutor: Tutor,
    technology: String,
    topic: String,
    language: Language,
    messages: Vec<Message>,
    suggested_questions: Vec<String>,
}

impl ChatSession {
    pub async fn open(
        tutor: Tutor,
        technology: impl Into<String>,
        topic: impl Into<String>,
        language: Language,
        cancel: &CancellationToken,
    ) -> Self {
        let technology = technology.into();
        let topic = topic.into();
        let response = tutor.explain(&technology, &topic, language, cancel).await;

        let mut session = Self {
            tutor,
            technology,
            topic,
            language,
            messages: Vec::new(),
            suggested_questions: Vec::new(),
        };
        session.push_answer(response);
        session
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn suggested_questions(&self) -> &[String] {
        &self.suggested_questions
    }

    pub fn message(&self, id: Uuid) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub async fn ask(&mut self, question: &str, cancel: &CancellationToken) -> Option<Uuid> {
        if question.trim().is_empty() {
            return None;
        }
        self.messages.push(Message::question(question));

        let response = self
            .tutor
            .follow_up(question, &self.technology, &self.topic, self.language, cancel)
            .await;
        Some(self.push_answer(response))
    }

    /// Regenerates an answer in more detail, replacing it in place.
    ///
    /// Returns the id of the new answer, or `None` when `message_id` is not an
    /// assistant answer directly preceded by a user question.
    pub async fn improve(&mut self, message_id: Uuid, cancel: &CancellationToken) -> Option<Uuid> {
        let question = self.question_before(message_id)?;
        debug!(%message_id, "regenerating answer");

        let response = self
            .tutor
            .follow_up(
                &format!("{question}{MORE_DETAILS_SUFFIX}"),
                &self.technology,
                &self.topic,
                self.language,
                cancel,
            )
            .await;

        let index = self.messages.iter().position(|m| m.id == message_id)?;
        let replacement = Message::answer(response.content);
        let new_id = replacement.id;
        self.messages[index] = replacement;
        self.suggested_questions = response.suggested_questions;
        Some(new_id)
    }

    pub fn copy_text(&self, message_id: Uuid) -> Option<String> {
        let message = self.message(message_id)?;
        Some(match &message.body {
            MessageBody::Question(text) => text.clone(),
            MessageBody::Answer(blocks) => {
                render_markdown(blocks, catalog::code_language(&self.technology))
            }
        })
    }

    fn question_before(&self, message_id: Uuid) -> Option<String> {
        let index = self.messages.iter().position(|m| m.id == message_id)?;
        if self.messages[index].role != Role::Assistant || index == 0 {
            return None;
        }
        match &self.messages[index - 1].body {
            MessageBody::Question(text) => Some(text.clone()),
            MessageBody::Answer(_) => None,
        }
    }

    fn push_answer(&mut self, response: AiResponse) -> Uuid {
        let message = Message::answer(response.content);
        let id = message.id;
        self.messages.push(message);
        self.suggested_questions = response.suggested_questions;
        id
    }
}

fn render_markdown(blocks: &[ContentBlock], code_language: &str) -> String {
    blocks
        .iter()
        .map(|block| match block {
            ContentBlock::Title(title) => format!("## {title}"),
            ContentBlock::Text(text) => text.clone(),
            ContentBlock::Code(code) => format!("```{code_language}\n{code}\n```"),
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{EXPLANATION_QUESTIONS, FOLLOW_UP_QUESTIONS};
    use crate::fallback::default_response;
    use crate::tutor::tests::{tutor_with, Reply, ScriptedModel};

    async fn session(replies: Vec<Reply>) -> (ChatSession, std::sync::Arc<ScriptedModel>) {
        let model = ScriptedModel::new(replies);
        let session = ChatSession::open(
            tutor_with(model.clone()),
            "python",
            "functions",
            Language::En,
            &CancellationToken::new(),
        )
        .await;
        (session, model)
    }

    #[tokio::test]
    async fn open_holds_single_explanation() {
        let (session, _) = session(vec![Reply::Text(r#"[{"title":"Functions"}]"#)]).await;
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, Role::Assistant);
        assert_eq!(session.suggested_questions(), EXPLANATION_QUESTIONS);
    }

    #[tokio::test]
    async fn failed_open_shows_fallback() {
        let (session, _) = session(vec![Reply::Unavailable]).await;
        let fallback = default_response(Language::En);
        assert_eq!(
            session.messages()[0].body,
            MessageBody::Answer(fallback.content)
        );
        assert_eq!(session.suggested_questions(), fallback.suggested_questions);
    }

    #[tokio::test]
    async fn ask_appends_question_and_answer() {
        let (mut session, _) = session(vec![
            Reply::Text(r#"[{"text":"intro"}]"#),
            Reply::Text(r#"[{"text":"answer"}]"#),
        ])
        .await;
        let cancel = CancellationToken::new();

        assert!(session.ask("   ", &cancel).await.is_none());
        let answer_id = session.ask("What is a lambda?", &cancel).await.unwrap();

        let roles: Vec<Role> = session.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, [Role::Assistant, Role::User, Role::Assistant]);
        assert_eq!(session.messages()[2].id, answer_id);
        assert_eq!(session.suggested_questions(), FOLLOW_UP_QUESTIONS);
    }

    #[tokio::test]
    async fn improve_replaces_answer_in_place() {
        let (mut session, model) = session(vec![
            Reply::Text(r#"[{"text":"intro"}]"#),
            Reply::Text(r#"[{"text":"short"}]"#),
            Reply::Text(r#"[{"text":"long"}]"#),
        ])
        .await;
        let cancel = CancellationToken::new();
        let old_id = session.ask("What is *args?", &cancel).await.unwrap();

        let new_id = session.improve(old_id, &cancel).await.unwrap();

        assert_ne!(new_id, old_id);
        assert!(session.message(old_id).is_none());
        assert_eq!(session.messages().len(), 3);
        assert_eq!(session.messages()[2].id, new_id);
        assert_eq!(
            session.messages()[2].body,
            MessageBody::Answer(vec![ContentBlock::Text("long".into())])
        );
        let prompts = model.prompts.lock().unwrap();
        assert!(prompts[2].contains("What is *args? (Please provide more details)"));
    }

    #[tokio::test]
    async fn improve_requires_preceding_question() {
        let (mut session, _) = session(vec![Reply::Text(r#"[{"text":"intro"}]"#)]).await;
        let cancel = CancellationToken::new();
        let intro_id = session.messages()[0].id;

        assert!(session.improve(intro_id, &cancel).await.is_none());
        assert!(session.improve(Uuid::new_v4(), &cancel).await.is_none());
    }

    #[tokio::test]
    async fn copy_fences_code_with_technology_tag() {
        let (session, _) = session(vec![Reply::Text(
            r#"[{"title":"Defining"},{"text":"Use def."},{"code":"def f():\n    pass"}]"#,
        )])
        .await;
        let id = session.messages()[0].id;

        assert_eq!(
            session.copy_text(id).unwrap(),
            "## Defining\n\nUse def.\n\n```python\ndef f():\n    pass\n```"
        );
    }
}
