use crate::language::Language;

const OUTPUT_CONTRACT: &str = r#"IMPORTANT: Return ONLY a valid JSON array, without any markdown code blocks or additional text.

Each element in the array must be an object with exactly one of these keys:
- For text: {"text": "Your explanation here"}
- For code: {"code": "const example = 'code here';"}
- For section titles: {"title": "Section Title"}

Example response:
[
  {"title": "Introduction"},
  {"text": "This is an explanation"},
  {"code": "const example = 'code';"}
]

Do not write anything outside the JSON array. DO NOT include markdown code blocks (```json or ```) in your response."#;

#[derive(Debug, Clone, Copy)]
pub struct PromptBuilder<'a> {
    technology: &'a str,
    topic: &'a str,
    language: Language,
}

impl<'a> PromptBuilder<'a> {
    pub fn new(technology: &'a str, topic: &'a str, language: Language) -> Self {
        Self {
            technology,
            topic,
            language,
        }
    }

    pub fn explanation(&self) -> String {
        format!(
            "Explain in {language} the topic \"{topic}\" in the programming language \"{technology}\" in a clear and structured way.\n\n{OUTPUT_CONTRACT}",
            language = self.language.english_name(),
            topic = self.topic,
            technology = self.technology,
        )
    }

    pub fn follow_up(&self, question: &str) -> String {
        format!(
            "Based on the topic \"{topic}\" in the programming language \"{technology}\", answer the following question in {language}. Stay within the context of this technology and topic and keep the explanation simple and educational.\n\nQuestion: {question}\n\n{OUTPUT_CONTRACT}",
            language = self.language.english_name(),
            topic = self.topic,
            technology = self.technology,
        )
    }
}
