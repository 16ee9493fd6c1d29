pub mod text;
pub mod dir;
pub mod job;
pub mod jsonlines;

use std::collections::BTreeSet;
use serde::{Serialize, Deserialize};
use crate::matchcore::token::analyzer::Analyzer;
use crate::matchcore::error::Result;

/// Extracted text as handed over by the caller.
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct RawDocument {
    pub id: String,
    pub text: String,
}

impl RawDocument {
    pub fn new(id: &str, text: &str) -> Self {
        RawDocument {
            id: id.to_string(),
            text: text.to_string(),
        }
    }
}

/// A resume as it reaches the engine: text, or the reason extraction failed upstream.
#[derive(PartialEq, Debug, Clone)]
pub enum ResumeSource {
    Text(RawDocument),
    Unreadable { id: String, cause: String },
}

impl ResumeSource {
    pub fn text(id: &str, text: &str) -> Self {
        ResumeSource::Text(RawDocument::new(id, text))
    }

    pub fn id(&self) -> &str {
        match self {
            ResumeSource::Text(raw) => &raw.id,
            ResumeSource::Unreadable { id, .. } => id,
        }
    }
}

/// Historical resume with a known outcome, used by the classifier.
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct LabeledText {
    pub id: String,
    pub text: String,
    pub label: String,
}

/// A normalized document. Built once, never modified.
#[derive(PartialEq, Debug)]
pub struct Document {
    id: String,
    text: String,
    tokens: Vec<String>,
    token_set: BTreeSet<String>,
}

impl Document {
    pub fn normalize(raw: RawDocument, analyzer: &Analyzer) -> Result<Self> {
        let analyzed = analyzer.analyze_checked(&raw.id, &raw.text)?;
        Ok(Document {
            id: raw.id,
            text: raw.text,
            tokens: analyzed.tokens,
            token_set: analyzed.token_set,
        })
    }
    pub fn get_id(&self) -> &str {
        &self.id
    }
    pub fn get_text(&self) -> &str {
        &self.text
    }
    pub fn get_tokens(&self) -> &[String] {
        &self.tokens
    }
    pub fn get_token_set(&self) -> &BTreeSet<String> {
        &self.token_set
    }
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document() {
        let analyzer = Analyzer::new();
        let raw = RawDocument::new("cv.txt", "Rust and Go, rust!");
        let doc = Document::normalize(raw, &analyzer).unwrap();
        assert_eq!(doc.get_id(), "cv.txt");
        assert_eq!(doc.get_text(), "Rust and Go, rust!");
        assert_eq!(doc.get_tokens(), &["rust".to_string(), "go".to_string(), "rust".to_string()]);
        assert_eq!(doc.get_token_set().len(), 2);
        assert!(!doc.is_empty());
    }

    #[test]
    fn test_resume_source_id() {
        assert_eq!(ResumeSource::text("a.txt", "x").id(), "a.txt");
        let bad = ResumeSource::Unreadable { id: "b.pdf".to_string(), cause: "no text layer".to_string() };
        assert_eq!(bad.id(), "b.pdf");
    }
}
