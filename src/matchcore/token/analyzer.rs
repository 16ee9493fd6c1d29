use std::collections::BTreeSet;
use super::tokenizer::{Segmentator, Language};
use super::stopwords::StopWords;
use super::stemmer::StemmerBackend;
use crate::matchcore::config::MatchConfig;
use crate::matchcore::error::{MatchError, Result};

// share of U+FFFD above which a text is treated as mis-decoded
const MAX_REPLACEMENT_RATIO: f64 = 0.1;

/// Normalized form of one text: ordered tokens (duplicates kept) and the distinct terms.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Analyzed {
    pub tokens: Vec<String>,
    pub token_set: BTreeSet<String>,
}

impl Analyzed {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[derive(Debug)]
pub struct Analyzer {
    seg: Segmentator,
    stop_words: StopWords,
    stemmer: StemmerBackend,
    min_token_len: usize,
}

pub struct AnalyzerStats {
    pub backend: &'static str,
    pub lang: String,
    pub stop_words: usize,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::from_config(&MatchConfig::default())
    }

    pub fn from_config(cfg: &MatchConfig) -> Self {
        Analyzer{
            seg: Segmentator::new(cfg.language),
            stop_words: StopWords::build(cfg.stop_words.as_deref(), &cfg.extra_stop_words),
            stemmer: StemmerBackend::probe(cfg.backend),
            min_token_len: cfg.min_token_len,
        }
    }

    pub fn analyze(&self, text: &str) -> Analyzed {
        let lang = self.seg.resolve(text);
        let text_normalized = self.seg.normalize(text);
        let mut tokens = vec![];
        for token in self.seg.parse_tokens(lang, &text_normalized) {
            if self.stop_words.contains(token) {
                continue;
            }
            if lang != Language::Chinese && token.chars().count() < self.min_token_len {
                continue;
            }
            let stemmed = self.stemmer.stem(token);
            // "others" stems to "other"
            if self.stop_words.contains(&stemmed) {
                continue;
            }
            tokens.push(stemmed);
        }
        let token_set = tokens.iter().cloned().collect();
        Analyzed{ tokens, token_set }
    }

    /// Same as `analyze`, but rejects text that was clearly mis-extracted.
    pub fn analyze_checked(&self, id: &str, text: &str) -> Result<Analyzed> {
        if text.contains('\u{0}') {
            return Err(MatchError::normalization(id, "text contains NUL bytes"));
        }
        let total = text.chars().count();
        if total > 0 {
            let replaced = text.chars().filter(|&c| c == char::REPLACEMENT_CHARACTER).count();
            if replaced as f64 / total as f64 > MAX_REPLACEMENT_RATIO {
                return Err(MatchError::normalization(id,
                    &format!("{} of {} characters could not be decoded", replaced, total)));
            }
        }
        Ok(self.analyze(text))
    }

    pub fn stats(&self) -> AnalyzerStats {
        let lang_str = match self.seg.get_language() {
            Language::English => String::from("English"),
            Language::Chinese => String::from("Chinese"),
            Language::Auto => String::from("Auto"),
        };
        AnalyzerStats{
            backend: self.stemmer.name(),
            lang: lang_str,
            stop_words: self.stop_words.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchcore::token::stemmer::BackendPreference;

    fn simple_analyzer() -> Analyzer {
        let mut cfg = MatchConfig::default();
        cfg.backend = BackendPreference::Simple;
        Analyzer::from_config(&cfg)
    }

    #[test]
    fn test_analyzer() {
        let analyzer = simple_analyzer();
        let res = analyzer.analyze("Python developer with Django experience and Python skills");
        assert_eq!(res.tokens, vec!["python", "developer", "django", "experience", "python", "skill"]);
        assert_eq!(res.token_set.len(), 5);
        assert!(res.token_set.contains("python"));
        assert!(!res.token_set.contains("with"));
    }

    #[test]
    fn test_stemmed_stop_words_dropped() {
        for analyzer in [simple_analyzer(), Analyzer::new()] {
            let res = analyzer.analyze("Mentored others and helped ourselves");
            assert_eq!(res.tokens, vec!["mentor", "help"]);
            assert!(!res.token_set.contains("other"));
        }
    }

    #[test]
    fn test_empty_input() {
        let analyzer = Analyzer::new();
        assert!(analyzer.analyze("").is_empty());
        assert!(analyzer.analyze("   !!! ... ").is_empty());
        assert!(analyzer.analyze("the and of").is_empty());
        assert_eq!(analyzer.analyze_checked("x", "").unwrap(), Analyzed::default());
    }

    #[test]
    fn test_short_tokens_dropped() {
        let analyzer = simple_analyzer();
        let res = analyzer.analyze("C Go R Java");
        assert_eq!(res.tokens, vec!["go", "java"]);
    }

    #[test]
    fn test_token_set_matches_sequence() {
        let analyzer = Analyzer::new();
        let res = analyzer.analyze("Senior RUST engineer; rust, Rust and more Rust. Engineers!");
        let distinct: BTreeSet<String> = res.tokens.iter().cloned().collect();
        assert_eq!(res.token_set, distinct);
        for t in &res.tokens {
            assert_eq!(t, &t.to_lowercase());
        }
    }

    #[test]
    fn test_malformed_text() {
        let analyzer = Analyzer::new();
        match analyzer.analyze_checked("bad.txt", "abc\u{0}def") {
            Err(MatchError::DocumentNormalization{ id, .. }) => assert_eq!(id, "bad.txt"),
            other => panic!("unexpected {:?}", other),
        }
        let garbled = "\u{FFFD}\u{FFFD}\u{FFFD}ab";
        assert!(analyzer.analyze_checked("garbled.txt", garbled).is_err());
        assert!(analyzer.analyze_checked("ok.txt", "Résumé of a rust engineer").is_ok());
    }

    #[test]
    fn test_stats() {
        let stats = simple_analyzer().stats();
        assert_eq!(stats.backend, "simple");
        assert_eq!(stats.lang, "English");
        assert!(stats.stop_words > 100);
    }
}
