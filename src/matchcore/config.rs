use std::fs;
use std::path::Path;
use serde::{Serialize, Deserialize};
use crate::matchcore::error::{MatchError, Result};
use crate::matchcore::token::stemmer::BackendPreference;
use crate::matchcore::token::tokenizer::Language;

const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Run configuration. Every field has a default so a partial YAML file is enough.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(default)]
pub struct MatchConfig {
    pub cosine_weight: f64,
    pub jaccard_weight: f64,
    pub knn_k: usize,
    // replaces the built-in stop-word list when present
    pub stop_words: Option<Vec<String>>,
    pub extra_stop_words: Vec<String>,
    pub backend: BackendPreference,
    pub language: Language,
    pub min_token_len: usize,
    // 0 means one worker per CPU
    pub workers: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            cosine_weight: 0.7,
            jaccard_weight: 0.3,
            knn_k: 5,
            stop_words: None,
            extra_stop_words: vec![],
            backend: BackendPreference::Snowball,
            language: Language::English,
            min_token_len: 2,
            workers: 0,
        }
    }
}

impl MatchConfig {
    pub fn from_str(cfg_str: &str) -> Result<Self> {
        let cfg: MatchConfig = serde_yaml::from_str(cfg_str)?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let cfg_str = fs::read_to_string(path)?;
        Self::from_str(&cfg_str)
    }

    /// Loads `path` when given, else `.rmatch.yml` in the working directory if it exists,
    /// else the defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        if let Some(p) = path {
            return Self::load(p);
        }
        let local = Path::new(crate::matchcore::CFG_NAME);
        if local.is_file() {
            log::info!("using config {}", local.display());
            return Self::load(local);
        }
        Ok(Self::default())
    }

    pub fn validate(&self) -> Result<()> {
        if self.cosine_weight < 0.0 || self.jaccard_weight < 0.0 {
            return Err(MatchError::Config(format!(
                "weights must be non-negative (cosine {}, jaccard {})",
                self.cosine_weight, self.jaccard_weight)));
        }
        let sum = self.cosine_weight + self.jaccard_weight;
        if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(MatchError::Config(format!(
                "cosine_weight + jaccard_weight must be 1, got {}", sum)));
        }
        Ok(())
    }
}
