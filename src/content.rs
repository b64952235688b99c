use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentBlock {
    Title(String),
    Text(String),
    Code(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiResponse {
    pub content: Vec<ContentBlock>,
    pub suggested_questions: Vec<String>,
}

pub const EXPLANATION_QUESTIONS: [&str; 3] = [
    "Can you provide more examples?",
    "What are common mistakes in this topic?",
    "How can I practice this concept?",
];

pub const FOLLOW_UP_QUESTIONS: [&str; 3] = [
    "Can you provide more examples?",
    "Can you give a simpler explanation?",
    "How can I practice this?",
];

impl AiResponse {
    pub fn new(content: Vec<ContentBlock>, questions: &[&str]) -> Self {
        Self {
            content,
            suggested_questions: questions.iter().map(|q| q.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_serialize_as_single_key_objects() {
        let blocks = vec![
            ContentBlock::Title("Intro".into()),
            ContentBlock::Code("let x = 1;".into()),
        ];
        let json = serde_json::to_string(&blocks).unwrap();
        assert_eq!(json, r#"[{"title":"Intro"},{"code":"let x = 1;"}]"#);
    }

    #[test]
    fn response_uses_camel_case_keys() {
        let response = AiResponse::new(vec![ContentBlock::Text("hi".into())], &EXPLANATION_QUESTIONS);
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["suggestedQuestions"].as_array().unwrap().len(), 3);
        assert_eq!(value["content"][0]["text"], "hi");
    }
}
