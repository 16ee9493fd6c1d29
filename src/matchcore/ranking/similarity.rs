use std::collections::BTreeSet;
use crate::matchcore::config::MatchConfig;
use crate::matchcore::utils::sparse_vector::SparseVectorOp;
use crate::matchcore::vector::FeatureVector;
use super::SimilarityResult;

/// Vectors are L2-normalized, so cosine is a plain dot product.
/// Clamped to absorb rounding just above 1.
pub fn cosine(a: &FeatureVector, b: &FeatureVector) -> f64 {
    a.vec_dot(b).clamp(0.0, 1.0)
}

/// |A ∩ B| / |A ∪ B|, 0 when both sets are empty.
pub fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// Share of keywords present in `tokens`. A keyword is one or more normalized
/// terms and counts only when all of them occur. None without keywords.
pub fn keyword_coverage(keywords: &[Vec<String>], tokens: &BTreeSet<String>) -> Option<f64> {
    if keywords.is_empty() {
        return None;
    }
    let matched = keywords.iter()
        .filter(|terms| terms.iter().all(|t| tokens.contains(t)))
        .count();
    Some(matched as f64 / keywords.len() as f64)
}

/// Blends cosine and Jaccard into one score.
#[derive(Debug, Clone, Copy)]
pub struct Scorer {
    cosine_weight: f64,
    jaccard_weight: f64,
}

impl Scorer {
    pub fn new(cosine_weight: f64, jaccard_weight: f64) -> Self {
        Scorer{ cosine_weight, jaccard_weight }
    }

    pub fn from_config(cfg: &MatchConfig) -> Self {
        Self::new(cfg.cosine_weight, cfg.jaccard_weight)
    }

    pub fn combine(&self, cosine: f64, jaccard: f64) -> f64 {
        (self.cosine_weight * cosine + self.jaccard_weight * jaccard).clamp(0.0, 1.0)
    }

    pub fn score(&self,
        resume_id: &str,
        job_vec: &FeatureVector,
        job_tokens: &BTreeSet<String>,
        resume_vec: &FeatureVector,
        resume_tokens: &BTreeSet<String>,
        ) -> SimilarityResult {
        let cosine = cosine(job_vec, resume_vec);
        let jaccard = jaccard(job_tokens, resume_tokens);
        SimilarityResult{
            resume_id: resume_id.to_string(),
            cosine,
            jaccard,
            combined: self.combine(cosine, jaccard),
            keyword: None,
            classification: None,
        }
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::from_config(&MatchConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use crate::matchcore::utils::sparse_vector::SparseVector;

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_jaccard() {
        let a = set(&["python", "django", "develop"]);
        let b = set(&["python", "django", "senior", "engin"]);
        assert!((jaccard(&a, &b) - 2.0 / 5.0).abs() < 1e-12);
        assert_eq!(jaccard(&a, &a), 1.0);
        assert_eq!(jaccard(&set(&[]), &set(&[])), 0.0);
        assert_eq!(jaccard(&a, &set(&[])), 0.0);
    }

    #[test]
    fn test_keyword_coverage() {
        let tokens = set(&["rust", "async", "tokio", "linux"]);
        let keywords = vec![
            vec!["rust".to_string()],
            vec!["async".to_string(), "io".to_string()],
            vec!["linux".to_string()],
            vec!["kubernet".to_string()],
        ];
        assert_eq!(keyword_coverage(&keywords, &tokens), Some(0.5));
        assert_eq!(keyword_coverage(&[], &tokens), None);
        assert_eq!(keyword_coverage(&keywords, &set(&[])), Some(0.0));
    }

    #[test]
    fn test_cosine_self() {
        let mut v = SparseVector::new();
        v.vec_set(0, 3.0);
        v.vec_set(7, 4.0);
        v.vec_normalize();
        assert!((cosine(&v, &v) - 1.0).abs() < 1e-12);
        assert_eq!(cosine(&v, &SparseVector::new()), 0.0);
    }

    #[test]
    fn test_score() {
        let scorer = Scorer::default();
        let mut v = SparseVector::new();
        v.vec_set(1, 1.0);
        let tokens = set(&["rust"]);
        let res = scorer.score("cv", &v, &tokens, &v, &tokens);
        assert_eq!(res.resume_id, "cv");
        assert_eq!(res.cosine, 1.0);
        assert_eq!(res.jaccard, 1.0);
        assert!((res.combined - 1.0).abs() < 1e-12);
        assert_eq!(res.classification, None);
        assert!((scorer.combine(0.5, 0.5) - 0.5).abs() < 1e-12);
        assert!((scorer.combine(1.0, 0.0) - 0.7).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn jaccard_is_symmetric(a in proptest::collection::btree_set("[a-e]{1,2}", 0..8),
                                b in proptest::collection::btree_set("[a-e]{1,2}", 0..8)) {
            let ab = jaccard(&a, &b);
            prop_assert_eq!(ab, jaccard(&b, &a));
            prop_assert!((0.0..=1.0).contains(&ab));
            if !a.is_empty() {
                prop_assert_eq!(jaccard(&a, &a), 1.0);
            }
        }

        #[test]
        fn combined_is_monotonic(w in 0.01f64..0.99, c1 in 0.0f64..1.0, c2 in 0.0f64..1.0, j in 0.0f64..1.0) {
            let scorer = Scorer::new(w, 1.0 - w);
            let (lo, hi) = if c1 <= c2 { (c1, c2) } else { (c2, c1) };
            prop_assert!(scorer.combine(lo, j) <= scorer.combine(hi, j));
            prop_assert!(scorer.combine(j, lo) <= scorer.combine(j, hi));
            let s = scorer.combine(c1, j);
            prop_assert!((0.0..=1.0).contains(&s));
        }
    }
}
