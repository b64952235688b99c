#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    Ar,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::En, Language::Es, Language::Fr, Language::Ar];

    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "es" => Self::Es,
            "fr" => Self::Fr,
            "ar" => Self::Ar,
            _ => Self::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::Ar => "ar",
        }
    }

    pub fn english_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Spanish",
            Self::Fr => "French",
            Self::Ar => "Arabic",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Language;

    #[test]
    fn known_codes_resolve() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), lang);
        }
        assert_eq!(Language::from_code(" FR "), Language::Fr);
    }

    #[test]
    fn unknown_codes_fall_back_to_english() {
        assert_eq!(Language::from_code("de"), Language::En);
        assert_eq!(Language::from_code(""), Language::En);
    }
}
