use crate::content::{AiResponse, ContentBlock};
use crate::language::Language;

struct Localized {
    apology: &'static str,
    questions: [&'static str; 3],
}

const EN: Localized = Localized {
    apology: "I'm sorry, I couldn't fetch the explanation. Please try again later.",
    questions: [
        "What are the basics of this topic?",
        "Can you show me an example?",
        "Where can I learn more about this?",
    ],
};

const ES: Localized = Localized {
    apology: "Lo siento, no pude obtener la explicación. Por favor, inténtalo de nuevo más tarde.",
    questions: [
        "¿Cuáles son los conceptos básicos de este tema?",
        "¿Puedes mostrarme un ejemplo?",
        "¿Dónde puedo aprender más sobre esto?",
    ],
};

const FR: Localized = Localized {
    apology: "Je suis désolé, je n'ai pas pu récupérer l'explication. Veuillez réessayer plus tard.",
    questions: [
        "Quelles sont les bases de ce sujet ?",
        "Pouvez-vous me montrer un exemple ?",
        "Où puis-je en savoir plus à ce sujet ?",
    ],
};

const AR: Localized = Localized {
    apology: "عذرًا، لم أتمكن من جلب الشرح. يرجى المحاولة مرة أخرى لاحقًا.",
    questions: [
        "ما هي أساسيات هذا الموضوع؟",
        "هل يمكنك إعطائي مثالاً؟",
        "أين يمكنني معرفة المزيد عن هذا؟",
    ],
};

pub fn default_response(language: Language) -> AiResponse {
    let localized = match language {
        Language::En => &EN,
        Language::Es => &ES,
        Language::Fr => &FR,
        Language::Ar => &AR,
    };
    AiResponse::new(
        vec![ContentBlock::Text(localized.apology.to_string())],
        &localized.questions,
    )
}
