use unicode_segmentation::UnicodeSegmentation;
use serde::{Serialize, Deserialize};
use jieba_rs::Jieba;
use once_cell::sync::Lazy;

static JIEBA: Lazy<Jieba> = Lazy::new(Jieba::new);

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Chinese,
    // pick per document
    Auto,
}

#[derive(Debug, Clone)]
pub struct Segmentator {
    lang: Language,
}

impl Segmentator {
    pub fn new(lang: Language) -> Self {
        Segmentator{ lang }
    }

    pub fn get_language(&self) -> Language {
        self.lang
    }

    /// Concrete language for `text`, never `Auto`.
    pub fn resolve(&self, text: &str) -> Language {
        match self.lang {
            Language::Auto => match whatlang::detect_lang(text) {
                Some(whatlang::Lang::Cmn) => Language::Chinese,
                _ => Language::English,
            },
            lang => lang,
        }
    }

    /// Lowercases and turns every non-alphanumeric char into a separator.
    pub fn normalize(&self, text: &str) -> String {
        text.chars()
            .flat_map(char::to_lowercase)
            .map(|c| if c.is_alphanumeric() { c } else { ' ' })
            .collect()
    }

    pub fn parse_tokens<'a>(&self, lang: Language, text: &'a str) -> Vec<&'a str> {
        match lang {
            Language::Chinese => {
                JIEBA.cut(text, false)
                    .into_iter()
                    .filter(|w| w.chars().next().map_or(false, char::is_alphanumeric))
                    .collect()
            },
            _ => text.unicode_words().collect(),
        }
    }
}
