use std::fmt;
use serde::{Serialize, Deserialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BackendPreference {
    Snowball,
    Simple,
}

/// Reduces a token to its base form. Chosen once by `probe`, then shared read-only.
pub enum StemmerBackend {
    #[cfg(feature = "snowball")]
    Snowball(rust_stemmers::Stemmer),
    Simple,
}

impl fmt::Debug for StemmerBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StemmerBackend({})", self.name())
    }
}

impl StemmerBackend {
    pub fn probe(preference: BackendPreference) -> Self {
        match preference {
            BackendPreference::Snowball => match Self::snowball() {
                Some(backend) => backend,
                None => {
                    log::warn!("snowball stemmer not compiled in, falling back to simple stemmer");
                    StemmerBackend::Simple
                }
            },
            BackendPreference::Simple => StemmerBackend::Simple,
        }
    }

    #[cfg(feature = "snowball")]
    fn snowball() -> Option<Self> {
        Some(StemmerBackend::Snowball(
            rust_stemmers::Stemmer::create(rust_stemmers::Algorithm::English)))
    }

    #[cfg(not(feature = "snowball"))]
    fn snowball() -> Option<Self> {
        None
    }

    pub fn name(&self) -> &'static str {
        match self {
            #[cfg(feature = "snowball")]
            StemmerBackend::Snowball(_) => "snowball",
            StemmerBackend::Simple => "simple",
        }
    }

    pub fn stem(&self, token: &str) -> String {
        // only latin words have a meaningful english stem
        if !token.chars().any(|c| c.is_ascii_alphabetic()) {
            return token.to_string();
        }
        match self {
            #[cfg(feature = "snowball")]
            StemmerBackend::Snowball(stemmer) => stemmer.stem(token).into_owned(),
            StemmerBackend::Simple => simple_stem(token),
        }
    }
}

fn has_vowel(s: &str) -> bool {
    s.chars().any(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y'))
}

fn simple_stem(word: &str) -> String {
    if !word.is_ascii() || word.len() <= 3 {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix("sses") {
        return format!("{}ss", stem);
    }
    if let Some(stem) = word.strip_suffix("ies") {
        return format!("{}y", stem);
    }
    for suffix in ["ingly", "edly", "ing", "ed", "ly"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            if stem.len() >= 3 && has_vowel(stem) {
                return stem.to_string();
            }
        }
    }
    if word.ends_with('s') && !word.ends_with("ss") && !word.ends_with("us") && !word.ends_with("is") {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}
