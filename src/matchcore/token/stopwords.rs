use std::collections::HashSet;
use once_cell::sync::Lazy;

const ENGLISH: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and",
    "any", "are", "as", "at", "be", "because", "been", "before", "being", "below",
    "between", "both", "but", "by", "can", "could", "did", "do", "does", "doing",
    "down", "during", "each", "few", "for", "from", "further", "had", "has", "have",
    "having", "he", "her", "here", "hers", "herself", "him", "himself", "his", "how",
    "i", "if", "in", "into", "is", "it", "its", "itself", "just", "me",
    "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off",
    "on", "once", "only", "or", "other", "our", "ours", "ourselves", "out", "over",
    "own", "same", "she", "should", "so", "some", "such", "than", "that", "the",
    "their", "theirs", "them", "themselves", "then", "there", "these", "they", "this", "those",
    "through", "to", "too", "under", "until", "up", "very", "was", "we", "were",
    "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with",
    "would", "you", "your", "yours", "yourself", "yourselves",
];

static DEFAULT_STOP_WORDS: Lazy<HashSet<String>> = Lazy::new(|| {
    ENGLISH.iter().map(|w| w.to_string()).collect()
});

#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// `replace` swaps out the built-in list entirely, `extra` is added on top.
    /// Entries are lowercased so they match normalized tokens.
    pub fn build(replace: Option<&[String]>, extra: &[String]) -> Self {
        let mut words: HashSet<String> = match replace {
            Some(list) => list.iter().map(|w| w.to_lowercase()).collect(),
            None => DEFAULT_STOP_WORDS.clone(),
        };
        words.extend(extra.iter().map(|w| w.to_lowercase()));
        StopWords{ words }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}
