use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ExplainRequest {
    pub technology: String,
    pub topic: String,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FollowUpRequest {
    pub question: String,
    pub technology: String,
    pub topic: String,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
