use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("empty corpus ({id}): {cause}")]
    EmptyCorpus { id: String, cause: String },

    #[error("invalid k={k}: must be between 1 and {available} (number of labeled examples)")]
    InvalidK { k: usize, available: usize },

    #[error("cannot normalize {id}: {cause}")]
    DocumentNormalization { id: String, cause: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl MatchError {
    pub fn empty_corpus(id: &str, cause: &str) -> Self {
        MatchError::EmptyCorpus {
            id: id.to_string(),
            cause: cause.to_string(),
        }
    }

    pub fn normalization(id: &str, cause: &str) -> Self {
        MatchError::DocumentNormalization {
            id: id.to_string(),
            cause: cause.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_identifier() {
        let e = MatchError::normalization("alice.txt", "contains NUL bytes");
        assert_eq!(e.to_string(), "cannot normalize alice.txt: contains NUL bytes");
        let e = MatchError::InvalidK { k: 10, available: 3 };
        assert!(e.to_string().contains("k=10"));
        assert!(e.to_string().contains("3"));
        let e = MatchError::empty_corpus("job", "no resumes supplied");
        assert_eq!(e.to_string(), "empty corpus (job): no resumes supplied");
    }
}
