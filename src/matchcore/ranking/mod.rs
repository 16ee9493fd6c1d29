pub mod similarity;
pub mod knn;
pub mod ranker;
pub mod summary;
pub mod export;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub label: String,
    pub confidence: f64,
}

/// Scores of one resume against the job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityResult {
    pub resume_id: String,
    pub cosine: f64,
    pub jaccard: f64,
    pub combined: f64,
    // share of job keywords found in the resume, absent when the job has none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<f64>,
    // present only when labeled examples were supplied
    #[serde(flatten)]
    pub classification: Option<Classification>,
}

impl SimilarityResult {
    pub fn confidence(&self) -> Option<f64> {
        self.classification.as_ref().map(|c| c.confidence)
    }
    pub fn label(&self) -> Option<&str> {
        self.classification.as_ref().map(|c| c.label.as_str())
    }
}

/// A resume that could not be scored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailedResume {
    pub resume_id: String,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RankedEntry {
    Scored(SimilarityResult),
    Failed(FailedResume),
}

impl RankedEntry {
    pub fn resume_id(&self) -> &str {
        match self {
            RankedEntry::Scored(r) => &r.resume_id,
            RankedEntry::Failed(f) => &f.resume_id,
        }
    }
    pub fn result(&self) -> Option<&SimilarityResult> {
        match self {
            RankedEntry::Scored(r) => Some(r),
            RankedEntry::Failed(_) => None,
        }
    }
    pub fn error(&self) -> Option<&str> {
        match self {
            RankedEntry::Scored(_) => None,
            RankedEntry::Failed(f) => Some(&f.error),
        }
    }
}

/// Ordered outcome of one matching run. Never filtered or truncated.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct RankedList {
    entries: Vec<RankedEntry>,
}

impl RankedList {
    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn get(&self, resume_id: &str) -> Option<&RankedEntry> {
        self.entries.iter().find(|e| e.resume_id() == resume_id)
    }
    pub fn scored(&self) -> impl Iterator<Item = &SimilarityResult> {
        self.entries.iter().filter_map(RankedEntry::result)
    }
    pub fn failed(&self) -> impl Iterator<Item = &RankedEntry> {
        self.entries.iter().filter(|e| e.error().is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_json_shape() {
        let scored = RankedEntry::Scored(SimilarityResult {
            resume_id: "a.txt".to_string(),
            cosine: 0.5,
            jaccard: 0.25,
            combined: 0.425,
            keyword: Some(0.5),
            classification: Some(Classification { label: "fit".to_string(), confidence: 0.8 }),
        });
        let v = serde_json::to_value(&scored).unwrap();
        assert_eq!(v["resume_id"], "a.txt");
        assert_eq!(v["label"], "fit");
        assert_eq!(v["confidence"], 0.8);
        assert_eq!(v["keyword"], 0.5);
        assert!(v.get("error").is_none());

        let failed = RankedEntry::Failed(FailedResume {
            resume_id: "b.txt".to_string(),
            error: "no usable tokens".to_string(),
        });
        let v = serde_json::to_value(&failed).unwrap();
        assert_eq!(v["error"], "no usable tokens");
        assert!(v.get("combined").is_none());
        assert_eq!(failed.result(), None);

        let plain = SimilarityResult {
            resume_id: "c.txt".to_string(),
            cosine: 0.0,
            jaccard: 0.0,
            combined: 0.0,
            keyword: None,
            classification: None,
        };
        let v = serde_json::to_value(&plain).unwrap();
        assert!(v.get("keyword").is_none());
        assert!(v.get("label").is_none());
    }
}
